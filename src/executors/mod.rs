// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! Command execution
//!
//! This module provides the runner trait that every SDK operation goes
//! through, the process-backed implementation, and the normalized result
//! of one external invocation.

mod process;

pub use process::{SdkRunner, DEFAULT_SDK};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Output;

use crate::errors::PackflowError;

/// Result of one external command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    /// Whether the process exited with status 0
    pub success: bool,

    /// Standard output
    pub stdout: String,

    /// Standard error
    pub stderr: String,

    /// Exit code (-1 when the process was killed by a signal)
    pub return_code: i32,
}

impl CommandResult {
    /// Build a result from an exit code and captured streams
    pub fn new(return_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            success: return_code == 0,
            stdout: stdout.into(),
            stderr: stderr.into(),
            return_code,
        }
    }

    /// A command whose process never started
    pub fn not_started(error: &PackflowError) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: error.to_string(),
            return_code: -1,
        }
    }

    /// Normalize a finished process
    pub fn from_output(output: &Output) -> Self {
        let return_code = output.status.code().unwrap_or(-1);

        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            return_code,
        }
    }
}

/// Anything that can run an SDK argument list
///
/// Implementations must report a non-zero exit as `success == false`, not
/// as an `Err`. Errors are reserved for processes that never started.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the SDK with `args`, optionally inside `cwd`, and wait for it
    async fn run(&self, args: &[String], cwd: Option<&Path>)
        -> Result<CommandResult, PackflowError>;
}
