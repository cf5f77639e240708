// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! Workflow commands - validate-format and pipeline

use miette::Result;
use std::path::PathBuf;

use super::content::warn_missing_upload_env;
use super::{output, Context};
use crate::errors::PackflowError;
use crate::pipeline::{full_pipeline, validate_and_format, PipelineOptions};
use crate::utils::{print_header, print_step, print_steps};

/// Step toggles after applying command-line flags to the config
pub fn pipeline_options(
    ctx: &Context,
    no_lint: bool,
    no_docs: bool,
    upload: bool,
    insecure: bool,
) -> PipelineOptions {
    let mut options = ctx.config.pipeline_options();
    options.lint &= !no_lint;
    options.docs &= !no_docs;
    options.upload |= upload;
    options.insecure = insecure;
    options
}

/// Run validate-format
pub async fn run_validate_format(ctx: &Context, path: PathBuf) -> Result<()> {
    let sdk = ctx.sdk()?;
    let report = validate_and_format(&sdk, &path).await?;

    output::emit(&report, ctx.output)?;

    if ctx.verbose {
        print_header(&format!("validate-format {}", path.display()));
        print_step("format", &report.format);
        print_step("validate", &report.validate);
    }

    if report.overall_success {
        Ok(())
    } else {
        Err(PackflowError::pipeline_failed(&path.to_string_lossy(), report.failed_steps()).into())
    }
}

/// Run the full pipeline
pub async fn run_pipeline(
    ctx: &Context,
    path: PathBuf,
    no_lint: bool,
    no_docs: bool,
    upload: bool,
    insecure: bool,
) -> Result<()> {
    let options = pipeline_options(ctx, no_lint, no_docs, upload, insecure);
    if options.upload {
        warn_missing_upload_env(ctx);
    }

    let sdk = ctx.sdk()?;
    let report = full_pipeline(&sdk, &path, &options).await?;

    output::emit(&report, ctx.output)?;

    if ctx.verbose {
        print_header(&format!("pipeline {}", report.path));
        print_steps(&report.steps);
    }

    if report.overall_success {
        Ok(())
    } else {
        Err(PackflowError::pipeline_failed(&report.path, report.steps.failed()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::config::PackflowConfig;

    fn context(yaml: &str) -> Context {
        Context {
            config: PackflowConfig::from_yaml(yaml).unwrap(),
            sdk_program: "demisto-sdk".into(),
            verbose: false,
            output: OutputFormat::Json,
        }
    }

    #[test]
    fn test_flags_override_defaults() {
        let ctx = context("");

        let options = pipeline_options(&ctx, false, false, false, false);
        assert_eq!(options, PipelineOptions::default());

        let options = pipeline_options(&ctx, true, true, true, true);
        assert!(!options.lint);
        assert!(!options.docs);
        assert!(options.upload);
        assert!(options.insecure);
    }

    #[test]
    fn test_insecure_applies_to_configured_upload() {
        let ctx = context("pipeline:\n  upload: true\n");

        let options = pipeline_options(&ctx, false, false, false, true);
        assert!(options.upload);
        assert!(options.insecure);
    }

    #[test]
    fn test_config_disables_steps_flags_cannot_reenable() {
        let ctx = context("pipeline:\n  lint: false\n  upload: true\n");

        let options = pipeline_options(&ctx, false, false, false, false);
        assert!(!options.lint);
        assert!(options.docs);
        assert!(options.upload);
    }
}
