// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! Content SDK operations
//!
//! [`ContentSdk`] pairs a [`CommandRunner`] with the argument builders in
//! [`options`], giving one method per SDK subcommand.

mod options;

pub use options::*;

use std::path::{Path, PathBuf};

use crate::errors::PackflowError;
use crate::executors::{CommandResult, CommandRunner};

/// Typed front end to the content SDK
pub struct ContentSdk<R> {
    runner: R,
    /// Working directory for every invocation (inherited when `None`)
    working_dir: Option<PathBuf>,
}

impl<R: CommandRunner> ContentSdk<R> {
    /// Create an SDK front end over `runner`
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            working_dir: None,
        }
    }

    /// Run every command inside `dir`
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// The underlying runner
    pub fn runner(&self) -> &R {
        &self.runner
    }

    async fn run(&self, args: Vec<String>) -> Result<CommandResult, PackflowError> {
        self.runner.run(&args, self.working_dir.as_deref()).await
    }

    pub async fn init_pack(&self, opts: &InitPackOptions) -> Result<CommandResult, PackflowError> {
        self.run(opts.args()).await
    }

    pub async fn init_integration(
        &self,
        opts: &InitIntegrationOptions,
    ) -> Result<CommandResult, PackflowError> {
        self.run(opts.args()).await
    }

    pub async fn init_script(
        &self,
        opts: &InitScriptOptions,
    ) -> Result<CommandResult, PackflowError> {
        self.run(opts.args()).await
    }

    pub async fn format(&self, opts: &FormatOptions) -> Result<CommandResult, PackflowError> {
        self.run(opts.args()).await
    }

    pub async fn validate(&self, opts: &ValidateOptions) -> Result<CommandResult, PackflowError> {
        self.run(opts.args()).await
    }

    pub async fn lint(&self, opts: &LintOptions) -> Result<CommandResult, PackflowError> {
        self.run(opts.args()).await
    }

    pub async fn generate_docs(
        &self,
        opts: &GenerateDocsOptions,
    ) -> Result<CommandResult, PackflowError> {
        self.run(opts.args()).await
    }

    pub async fn generate_unit_tests(
        &self,
        opts: &GenerateUnitTestsOptions,
    ) -> Result<CommandResult, PackflowError> {
        self.run(opts.args()).await
    }

    /// Upload content to the configured XSOAR/XSIAM instance
    pub async fn upload(&self, opts: &UploadOptions) -> Result<CommandResult, PackflowError> {
        self.run(opts.args()).await
    }

    /// Working directory commands run in, if any
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }
}
