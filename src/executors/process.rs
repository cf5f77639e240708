// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! Process runner
//!
//! Spawns the content SDK as a child process and captures its output.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::process::Command;

use super::{CommandResult, CommandRunner};
use crate::errors::PackflowError;

/// Binary invoked when nothing else is configured
pub const DEFAULT_SDK: &str = "demisto-sdk";

/// Runs the content SDK as an external process
#[derive(Debug, Clone)]
pub struct SdkRunner {
    /// Program to execute (bare name or path)
    program: PathBuf,
}

impl SdkRunner {
    /// Create a runner for `program`, resolved by the OS at spawn time
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Create a runner after resolving `program` through `PATH`
    pub fn locate(program: &str) -> Result<Self, PackflowError> {
        let program = which::which(program).map_err(|_| PackflowError::tool_not_found(program))?;
        Ok(Self { program })
    }

    /// Program this runner executes
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn tool_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.program.display().to_string())
    }
}

impl Default for SdkRunner {
    fn default() -> Self {
        Self::new(DEFAULT_SDK)
    }
}

#[async_trait]
impl CommandRunner for SdkRunner {
    async fn run(
        &self,
        args: &[String],
        cwd: Option<&Path>,
    ) -> Result<CommandResult, PackflowError> {
        tracing::debug!(
            program = %self.program.display(),
            args = ?args,
            cwd = ?cwd,
            "spawning sdk"
        );

        let start = Instant::now();

        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .await
            .map_err(|e| PackflowError::ToolExecutionFailed {
                tool: self.tool_name(),
                error: e.to_string(),
                help: Some(format!(
                    "'{}' may not be installed or executable",
                    self.program.display()
                )),
            })?;

        let result = CommandResult::from_output(&output);

        tracing::debug!(
            return_code = result.return_code,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "sdk exited"
        );

        Ok(result)
    }
}
