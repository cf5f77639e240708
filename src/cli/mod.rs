// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! CLI command definitions and handlers
//!
//! Defines the command-line interface for packflow. Each subcommand maps
//! to exactly one handler; clap rejects unknown subcommands and missing
//! arguments before any SDK process is started.

pub mod content;
pub mod init;
pub mod output;
pub mod workflow;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{PackflowConfig, CONFIG_FILE};
use crate::errors::PackflowError;
use crate::executors::{CommandResult, SdkRunner};
use crate::sdk::ContentSdk;
use crate::utils::SpinnerRunner;

/// demisto-sdk workflow wrapper
///
/// Build, validate, document and upload XSOAR/XSIAM content packs.
#[derive(Parser, Debug)]
#[clap(
    name = "packflow",
    version,
    about = "Workflow wrapper around demisto-sdk for content packs",
    long_about = None,
    after_help = "Examples:\n\
        packflow init-pack MyPack                      Create Packs/MyPack\n\
        packflow validate-format Packs/MyPack          Format, then validate\n\
        packflow pipeline Packs/MyPack --no-lint       Format, validate, generate docs\n\
        packflow pipeline Packs/MyPack --upload        ...and upload (needs DEMISTO_BASE_URL, DEMISTO_API_KEY)\n\n\
        See 'packflow <command> --help' for more information on a specific command."
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Change to directory before executing
    #[clap(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// SDK binary to invoke
    #[clap(long, global = true, env = "PACKFLOW_SDK", value_name = "BIN")]
    pub sdk: Option<String>,

    /// Config file
    #[clap(long, global = true, default_value = CONFIG_FILE, value_name = "FILE")]
    pub config: PathBuf,

    /// Result format printed to stdout
    #[clap(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new content pack
    InitPack {
        /// Pack name (PascalCase)
        name: String,

        /// Parent directory (default from config, else Packs)
        output_dir: Option<PathBuf>,
    },

    /// Create a new integration inside a pack
    InitIntegration {
        /// Integration name (PascalCase)
        name: String,

        /// Path to the parent pack
        pack_path: PathBuf,

        /// Template (default from config, else HelloWorld)
        template: Option<String>,
    },

    /// Create a new script inside a pack
    InitScript {
        /// Script name (PascalCase)
        name: String,

        /// Path to the parent pack
        pack_path: PathBuf,
    },

    /// Format content to platform standards
    Format {
        /// Content path
        path: PathBuf,

        /// Update the docker image
        #[clap(long)]
        update_docker: bool,
    },

    /// Validate content structure and schema
    Validate {
        /// Content path
        path: PathBuf,

        /// Validate only files changed in git
        #[clap(short, long)]
        git: bool,

        /// Skip backward compatibility checks
        #[clap(long)]
        no_backward_comp: bool,
    },

    /// Lint and unit-test an integration or script
    Lint {
        /// Content path
        path: PathBuf,

        /// Run outside docker
        #[clap(long)]
        no_docker: bool,

        /// Skip unit tests
        #[clap(long)]
        no_test: bool,
    },

    /// Generate README documentation from a descriptor
    Docs {
        /// Descriptor YAML file
        yml_path: PathBuf,

        /// Output directory
        #[clap(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Generate unit test scaffolding from a descriptor
    Tests {
        /// Descriptor YAML file
        yml_path: PathBuf,

        /// Output directory
        #[clap(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Upload content to an XSOAR/XSIAM instance
    ///
    /// The SDK reads DEMISTO_BASE_URL and DEMISTO_API_KEY from the environment.
    Upload {
        /// Content path
        path: PathBuf,

        /// Skip TLS certificate verification
        #[clap(long)]
        insecure: bool,
    },

    /// Format then validate, reporting both
    ValidateFormat {
        /// Content path
        path: PathBuf,
    },

    /// Format, validate, lint, generate docs and optionally upload
    Pipeline {
        /// Content path
        path: PathBuf,

        /// Skip lint
        #[clap(long)]
        no_lint: bool,

        /// Skip documentation generation
        #[clap(long)]
        no_docs: bool,

        /// Upload after the other steps
        #[clap(long)]
        upload: bool,

        /// Skip TLS certificate verification on upload
        #[clap(long)]
        insecure: bool,
    },
}

/// Structured output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// State shared by every handler
pub struct Context {
    pub config: PackflowConfig,
    /// SDK program after flag/env/config precedence
    pub sdk_program: String,
    pub verbose: bool,
    pub output: OutputFormat,
}

impl Context {
    /// Resolve the SDK program and load configuration
    pub fn from_cli(cli: &Cli) -> Result<Self, PackflowError> {
        let config = PackflowConfig::load(&cli.config)?;
        let sdk_program = cli.sdk.clone().unwrap_or_else(|| config.sdk.clone());

        Ok(Self {
            config,
            sdk_program,
            verbose: cli.verbose,
            output: cli.output,
        })
    }

    /// SDK front end backed by a real process
    ///
    /// Bare program names are looked up on PATH so a missing SDK is
    /// reported with an install hint instead of a spawn error.
    pub fn sdk(&self) -> Result<ContentSdk<SpinnerRunner<SdkRunner>>, PackflowError> {
        let runner = if self.sdk_program.contains(std::path::MAIN_SEPARATOR)
            || self.sdk_program.contains('/')
        {
            SdkRunner::new(&self.sdk_program)
        } else {
            SdkRunner::locate(&self.sdk_program)?
        };

        tracing::debug!(sdk = %runner.program().display(), "using sdk");
        Ok(ContentSdk::new(SpinnerRunner::new(runner, &self.sdk_program)))
    }

    /// Print a single command's result and turn failure into an error
    pub fn finish(&self, command: &str, result: &CommandResult) -> miette::Result<()> {
        output::emit(result, self.output)?;

        if self.verbose {
            crate::utils::print_step(command, result);
        }

        if result.success {
            Ok(())
        } else {
            Err(PackflowError::CommandFailed {
                command: command.to_string(),
                return_code: result.return_code,
            }
            .into())
        }
    }
}
