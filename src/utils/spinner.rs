// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! Progress spinner utilities
//!
//! Shown on stderr while the SDK runs. indicatif hides the spinner when
//! stderr is not a terminal.

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

use crate::errors::PackflowError;
use crate::executors::{CommandResult, CommandRunner};

/// Create a spinner for indeterminate progress
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Wraps a runner and spins while each command is in flight
pub struct SpinnerRunner<R> {
    inner: R,
    program: String,
}

impl<R: CommandRunner> SpinnerRunner<R> {
    pub fn new(inner: R, program: impl Into<String>) -> Self {
        Self {
            inner,
            program: program.into(),
        }
    }
}

#[async_trait]
impl<R: CommandRunner> CommandRunner for SpinnerRunner<R> {
    async fn run(
        &self,
        args: &[String],
        cwd: Option<&Path>,
    ) -> Result<CommandResult, PackflowError> {
        let pb = create_spinner(&format!("{} {}", self.program, args.join(" ")));
        let result = self.inner.run(args, cwd).await;
        pb.finish_and_clear();
        result
    }
}
