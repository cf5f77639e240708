// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! Error types
//!
//! A failing SDK command is not an error: it is a [`CommandResult`] with
//! `success == false`. The variants here cover everything around that:
//! a missing SDK, a process that could not be spawned, unreadable
//! configuration, and the final "this run failed" status used for the
//! process exit code.
//!
//! [`CommandResult`]: crate::executors::CommandResult

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for packflow operations
pub type PackflowResult<T> = Result<T, PackflowError>;

/// Main error type for packflow
#[derive(Error, Debug, Diagnostic)]
pub enum PackflowError {
    // ─────────────────────────────────────────────────────────────────────────
    // Tool Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Tool '{tool}' not found")]
    #[diagnostic(code(packflow::tool_not_found), help("{suggestion}"))]
    ToolNotFound { tool: String, suggestion: String },

    #[error("Tool '{tool}' execution failed: {error}")]
    #[diagnostic(code(packflow::tool_execution_failed))]
    ToolExecutionFailed {
        tool: String,
        error: String,
        #[help]
        help: Option<String>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Outcome Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Command '{command}' failed with exit code {return_code}")]
    #[diagnostic(
        code(packflow::command_failed),
        help("The captured stdout/stderr of the SDK are included in the printed result")
    )]
    CommandFailed { command: String, return_code: i32 },

    #[error("Pipeline for '{path}' failed")]
    #[diagnostic(code(packflow::pipeline_failed))]
    PipelineFailed {
        path: String,
        failed_steps: Vec<String>,
        #[help]
        help: Option<String>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Failed to read config '{path}': {error}")]
    #[diagnostic(
        code(packflow::config_read_error),
        help("Remove the file or fix its permissions to fall back to defaults")
    )]
    ConfigRead { path: PathBuf, error: String },

    // ─────────────────────────────────────────────────────────────────────────
    // Parsing Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("YAML error: {message}")]
    #[diagnostic(code(packflow::yaml_error))]
    Yaml { message: String },

    #[error("JSON error: {message}")]
    #[diagnostic(code(packflow::json_error))]
    Json { message: String },

    #[error("Glob pattern error: {message}")]
    #[diagnostic(code(packflow::glob_error))]
    GlobPattern { message: String },
}

impl From<serde_yaml::Error> for PackflowError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml { message: e.to_string() }
    }
}

impl From<serde_json::Error> for PackflowError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json { message: e.to_string() }
    }
}

impl From<glob::PatternError> for PackflowError {
    fn from(e: glob::PatternError) -> Self {
        Self::GlobPattern { message: e.to_string() }
    }
}

impl PackflowError {
    /// Create a tool not found error with installation suggestion
    pub fn tool_not_found(tool: &str) -> Self {
        let suggestion = match tool {
            "demisto-sdk" => {
                "Install the SDK with 'pip install demisto-sdk' or pass --sdk <path>".to_string()
            }
            _ => format!("Install {} and ensure it's in your PATH", tool),
        };

        Self::ToolNotFound {
            tool: tool.to_string(),
            suggestion,
        }
    }

    /// Create a pipeline failure listing the steps that did not succeed
    pub fn pipeline_failed(path: &str, failed_steps: Vec<String>) -> Self {
        let help = if failed_steps.is_empty() {
            None
        } else {
            Some(format!("Failed steps: {}", failed_steps.join(", ")))
        };

        Self::PipelineFailed {
            path: path.to_string(),
            failed_steps,
            help,
        }
    }
}
