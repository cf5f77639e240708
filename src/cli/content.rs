// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! Single-step commands - format, validate, lint, docs, tests, upload

use miette::Result;
use std::path::PathBuf;

use super::Context;
use crate::sdk::{
    FormatOptions, GenerateDocsOptions, GenerateUnitTestsOptions, LintOptions, UploadOptions,
    ValidateOptions,
};
use crate::utils::print_warning;

/// Credentials the SDK needs for upload
pub const UPLOAD_ENV: [&str; 2] = ["DEMISTO_BASE_URL", "DEMISTO_API_KEY"];

/// Upload credentials missing from this process's environment
pub fn missing_upload_env() -> Vec<&'static str> {
    UPLOAD_ENV
        .into_iter()
        .filter(|name| std::env::var_os(name).map_or(true, |v| v.is_empty()))
        .collect()
}

/// Warn (verbose only) when upload credentials look unset. The SDK still
/// decides; nothing is forwarded or validated here.
pub fn warn_missing_upload_env(ctx: &Context) {
    if !ctx.verbose {
        return;
    }
    for name in missing_upload_env() {
        print_warning(&format!("{} is not set; upload will likely fail", name));
    }
}

/// Run format
pub async fn run_format(ctx: &Context, path: PathBuf, update_docker: bool) -> Result<()> {
    let opts = FormatOptions {
        update_docker,
        ..FormatOptions::new(path)
    };
    let result = ctx.sdk()?.format(&opts).await?;
    ctx.finish("format", &result)
}

/// Run validate; flags add to the configured defaults
pub async fn run_validate(
    ctx: &Context,
    path: PathBuf,
    git: bool,
    no_backward_comp: bool,
) -> Result<()> {
    let opts = ValidateOptions {
        use_git: git || ctx.config.validate.use_git,
        no_backward_comp: no_backward_comp || ctx.config.validate.no_backward_comp,
        ..ValidateOptions::new(path)
    };
    let result = ctx.sdk()?.validate(&opts).await?;
    ctx.finish("validate", &result)
}

/// Run lint; `--no-*` flags switch off what the config enables
pub async fn run_lint(ctx: &Context, path: PathBuf, no_docker: bool, no_test: bool) -> Result<()> {
    let opts = LintOptions {
        docker: ctx.config.lint.docker && !no_docker,
        test: ctx.config.lint.test && !no_test,
        ..LintOptions::new(path)
    };
    let result = ctx.sdk()?.lint(&opts).await?;
    ctx.finish("lint", &result)
}

/// Run generate-docs
pub async fn run_docs(ctx: &Context, input: PathBuf, output_dir: Option<PathBuf>) -> Result<()> {
    let opts = GenerateDocsOptions {
        output_dir,
        ..GenerateDocsOptions::new(input)
    };
    let result = ctx.sdk()?.generate_docs(&opts).await?;
    ctx.finish("generate-docs", &result)
}

/// Run generate-unit-tests
pub async fn run_tests(ctx: &Context, input: PathBuf, output_dir: Option<PathBuf>) -> Result<()> {
    let opts = GenerateUnitTestsOptions {
        output_dir,
        ..GenerateUnitTestsOptions::new(input)
    };
    let result = ctx.sdk()?.generate_unit_tests(&opts).await?;
    ctx.finish("generate-unit-tests", &result)
}

/// Run upload
pub async fn run_upload(ctx: &Context, path: PathBuf, insecure: bool) -> Result<()> {
    warn_missing_upload_env(ctx);

    let opts = UploadOptions {
        insecure,
        ..UploadOptions::new(path)
    };
    let result = ctx.sdk()?.upload(&opts).await?;
    ctx.finish("upload", &result)
}
