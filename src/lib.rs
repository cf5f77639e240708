// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! # packflow - Content Pack Workflows
//!
//! `packflow` wraps `demisto-sdk` to scaffold, format, validate, lint,
//! document and upload XSOAR/XSIAM content packs, and chains those steps
//! into fixed workflows.
//!
//! All real work happens in the SDK. packflow builds its argument lists,
//! runs it, captures stdout/stderr and the exit code, and reports the
//! result as JSON (or YAML).
//!
//! ## Quick Start
//!
//! ```bash
//! # Scaffold a pack and an integration
//! packflow init-pack MyPack
//! packflow init-integration MyIntegration Packs/MyPack
//!
//! # Format, then validate
//! packflow validate-format Packs/MyPack
//!
//! # Format, validate, lint, generate docs, upload
//! packflow pipeline Packs/MyPack --upload
//! ```
//!
//! ## Library use
//!
//! ```no_run
//! use std::path::Path;
//! use packflow::executors::SdkRunner;
//! use packflow::pipeline::{full_pipeline, PipelineOptions};
//! use packflow::sdk::ContentSdk;
//!
//! # async fn demo() -> packflow::PackflowResult<()> {
//! let sdk = ContentSdk::new(SdkRunner::default());
//! let report = full_pipeline(&sdk, Path::new("Packs/MyPack"), &PipelineOptions::default()).await?;
//! println!("{}", report.overall_success);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod executors;
pub mod pipeline;
pub mod sdk;
pub mod utils;

// Re-export commonly used types
pub use errors::{PackflowError, PackflowResult};
pub use executors::{CommandResult, CommandRunner};
pub use sdk::ContentSdk;
