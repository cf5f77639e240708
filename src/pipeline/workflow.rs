// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! Workflow execution
//!
//! Steps run one after another. Only format and validate can stop the
//! pipeline; lint, docs and upload failures are recorded and the run
//! continues.

use std::path::Path;

use super::descriptors::find_descriptors;
use super::report::{FormatValidateReport, PipelineReport};
use crate::errors::PackflowError;
use crate::executors::{CommandResult, CommandRunner};
use crate::sdk::{
    ContentSdk, FormatOptions, GenerateDocsOptions, LintOptions, UploadOptions, ValidateOptions,
};

/// Which optional steps the full pipeline runs, and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Run `lint` after validation
    pub lint: bool,
    /// Generate docs for every descriptor under the target
    pub docs: bool,
    /// Upload after everything else
    pub upload: bool,
    /// Lint inside docker
    pub lint_docker: bool,
    /// Run unit tests while linting
    pub lint_test: bool,
    /// Validate only git-changed files
    pub use_git: bool,
    /// Skip backward compatibility checks during validation
    pub no_backward_comp: bool,
    /// Skip TLS verification on upload
    pub insecure: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            lint: true,
            docs: true,
            upload: false,
            lint_docker: true,
            lint_test: true,
            use_git: false,
            no_backward_comp: false,
            insecure: false,
        }
    }
}

/// Keep a step that could not start in the report as a failed step
fn recorded(step: &str, outcome: Result<CommandResult, PackflowError>) -> CommandResult {
    outcome.unwrap_or_else(|e| {
        tracing::warn!(step, error = %e, "sdk could not be started");
        CommandResult::not_started(&e)
    })
}

/// Format, then validate, regardless of how format went
pub async fn validate_and_format<R: CommandRunner>(
    sdk: &ContentSdk<R>,
    path: &Path,
) -> Result<FormatValidateReport, PackflowError> {
    let format = recorded("format", sdk.format(&FormatOptions::new(path)).await);
    tracing::info!(success = format.success, "format finished");

    let validate = recorded("validate", sdk.validate(&ValidateOptions::new(path)).await);
    tracing::info!(success = validate.success, "validate finished");

    Ok(FormatValidateReport::new(format, validate))
}

/// Format → validate → (lint) → (docs per descriptor) → (upload)
///
/// Returns the partial report as soon as format or validate fails. An SDK
/// that cannot be spawned counts as a failed step, not an error.
pub async fn full_pipeline<R: CommandRunner>(
    sdk: &ContentSdk<R>,
    path: &Path,
    options: &PipelineOptions,
) -> Result<PipelineReport, PackflowError> {
    let mut report = PipelineReport::new(path.to_string_lossy());

    tracing::info!(path = %path.display(), "pipeline started");

    let format = recorded("format", sdk.format(&FormatOptions::new(path)).await);
    let format_ok = format.success;
    report.steps.insert("format", format);
    if !format_ok {
        tracing::info!("format failed, stopping pipeline");
        return Ok(report.abort());
    }

    let validate = ValidateOptions {
        use_git: options.use_git,
        no_backward_comp: options.no_backward_comp,
        ..ValidateOptions::new(path)
    };
    let validate = recorded("validate", sdk.validate(&validate).await);
    let validate_ok = validate.success;
    report.steps.insert("validate", validate);
    if !validate_ok {
        tracing::info!("validate failed, stopping pipeline");
        return Ok(report.abort());
    }

    if options.lint {
        let lint = LintOptions {
            docker: options.lint_docker,
            test: options.lint_test,
            ..LintOptions::new(path)
        };
        let result = recorded("lint", sdk.lint(&lint).await);
        tracing::info!(success = result.success, "lint finished");
        report.steps.insert("lint", result);
    } else {
        tracing::debug!("lint skipped");
    }

    if options.docs {
        let root = match sdk.working_dir() {
            Some(dir) => dir.join(path),
            None => path.to_path_buf(),
        };

        for descriptor in find_descriptors(&root)? {
            let stem = descriptor
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();

            // find_descriptors returns paths under `root`; hand the SDK the
            // same path relative to its working directory
            let input = match sdk.working_dir() {
                Some(dir) => descriptor
                    .strip_prefix(dir)
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|_| descriptor.clone()),
                None => descriptor.clone(),
            };

            let step = format!("docs_{}", stem);
            let result = recorded(&step, sdk.generate_docs(&GenerateDocsOptions::new(input)).await);
            tracing::info!(descriptor = %stem, success = result.success, "docs generated");
            report.steps.insert(step, result);
        }
    } else {
        tracing::debug!("docs skipped");
    }

    if options.upload {
        let upload = UploadOptions {
            insecure: options.insecure,
            ..UploadOptions::new(path)
        };
        let result = recorded("upload", sdk.upload(&upload).await);
        tracing::info!(success = result.success, "upload finished");
        report.steps.insert("upload", result);
    } else {
        tracing::debug!("upload skipped");
    }

    let report = report.finish();
    tracing::info!(success = report.overall_success, "pipeline finished");
    Ok(report)
}
