// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! packflow - demisto-sdk workflow wrapper
//!
//! Runs the content SDK and prints what it did as structured output.

use clap::Parser;
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use packflow::cli::{content, init, workflow, Cli, Commands, Context};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout carries the result, so logs go to stderr
    let default_filter = if cli.verbose {
        "packflow=debug"
    } else {
        "packflow=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Change to specified directory if provided
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir).map_err(|e| {
            miette::miette!("Failed to change to directory '{}': {}", dir.display(), e)
        })?;
    }

    let ctx = Context::from_cli(&cli)?;

    // Dispatch to command handlers
    match cli.command {
        Commands::InitPack { name, output_dir } => init::run_pack(&ctx, name, output_dir).await,
        Commands::InitIntegration {
            name,
            pack_path,
            template,
        } => init::run_integration(&ctx, name, pack_path, template).await,
        Commands::InitScript { name, pack_path } => init::run_script(&ctx, name, pack_path).await,
        Commands::Format {
            path,
            update_docker,
        } => content::run_format(&ctx, path, update_docker).await,
        Commands::Validate {
            path,
            git,
            no_backward_comp,
        } => content::run_validate(&ctx, path, git, no_backward_comp).await,
        Commands::Lint {
            path,
            no_docker,
            no_test,
        } => content::run_lint(&ctx, path, no_docker, no_test).await,
        Commands::Docs {
            yml_path,
            output_dir,
        } => content::run_docs(&ctx, yml_path, output_dir).await,
        Commands::Tests {
            yml_path,
            output_dir,
        } => content::run_tests(&ctx, yml_path, output_dir).await,
        Commands::Upload { path, insecure } => content::run_upload(&ctx, path, insecure).await,
        Commands::ValidateFormat { path } => workflow::run_validate_format(&ctx, path).await,
        Commands::Pipeline {
            path,
            no_lint,
            no_docs,
            upload,
            insecure,
        } => workflow::run_pipeline(&ctx, path, no_lint, no_docs, upload, insecure).await,
    }
}
