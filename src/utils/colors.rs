// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! Terminal status lines
//!
//! stdout is reserved for the structured result, so every human-facing
//! line goes to stderr.

use colored::Colorize;

use crate::executors::CommandResult;
use crate::pipeline::StepResults;

/// Print a success check
pub fn print_success(msg: &str) {
    eprintln!("  {} {}", "✓".green(), msg);
}

/// Print an error cross
pub fn print_error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a warning
pub fn print_warning(msg: &str) {
    eprintln!("  {} {}", "⚠".yellow(), msg);
}

/// One status line for a finished step, with stderr when it failed
pub fn print_step(name: &str, result: &CommandResult) {
    if result.success {
        print_success(&name.bold().to_string());
    } else {
        print_error(&format!(
            "{} (exit code {})",
            name.bold(),
            result.return_code
        ));
        if !result.stderr.trim().is_empty() {
            eprintln!("{}", result.stderr.trim_end().dimmed());
        }
    }
}

/// Status lines for every recorded step
pub fn print_steps(steps: &StepResults) {
    for (name, result) in steps.iter() {
        print_step(name, result);
    }
}

/// Print a styled header
pub fn print_header(title: &str) {
    eprintln!("{}", title.bold());
    eprintln!("{}", "═".repeat(title.chars().count().max(40)));
}
