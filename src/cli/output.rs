// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! Structured result output

use serde::Serialize;

use super::OutputFormat;
use crate::errors::PackflowError;

/// Render `value` in the requested format
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, PackflowError> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(text.trim_end().to_string())
}

/// Print `value` to stdout
pub fn emit<T: Serialize>(value: &T, format: OutputFormat) -> Result<(), PackflowError> {
    println!("{}", render(value, format)?);
    Ok(())
}
