// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! Composite workflows
//!
//! Fixed sequences of SDK calls: format-then-validate, and the full
//! format → validate → lint/docs/upload pipeline.

mod descriptors;
mod report;
mod workflow;

pub use descriptors::find_descriptors;
pub use report::{FormatValidateReport, PipelineReport, StepResults};
pub use workflow::{full_pipeline, validate_and_format, PipelineOptions};
