// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! init-* commands - scaffold packs, integrations and scripts

use miette::Result;
use std::path::PathBuf;

use super::Context;
use crate::sdk::{InitIntegrationOptions, InitPackOptions, InitScriptOptions};

/// Options for init-pack, falling back to the configured parent directory
pub fn pack_options(ctx: &Context, name: String, output_dir: Option<PathBuf>) -> InitPackOptions {
    InitPackOptions {
        output_dir: output_dir.unwrap_or_else(|| PathBuf::from(&ctx.config.init.output_dir)),
        ..InitPackOptions::new(name)
    }
}

/// Options for init-integration, falling back to the configured template
pub fn integration_options(
    ctx: &Context,
    name: String,
    pack_path: PathBuf,
    template: Option<String>,
) -> InitIntegrationOptions {
    InitIntegrationOptions {
        template: Some(template.unwrap_or_else(|| ctx.config.init.template.clone())),
        ..InitIntegrationOptions::new(name, pack_path)
    }
}

/// Run init-pack
pub async fn run_pack(ctx: &Context, name: String, output_dir: Option<PathBuf>) -> Result<()> {
    let opts = pack_options(ctx, name, output_dir);
    let result = ctx.sdk()?.init_pack(&opts).await?;
    ctx.finish("init-pack", &result)
}

/// Run init-integration
pub async fn run_integration(
    ctx: &Context,
    name: String,
    pack_path: PathBuf,
    template: Option<String>,
) -> Result<()> {
    let opts = integration_options(ctx, name, pack_path, template);
    let result = ctx.sdk()?.init_integration(&opts).await?;
    ctx.finish("init-integration", &result)
}

/// Run init-script
pub async fn run_script(ctx: &Context, name: String, pack_path: PathBuf) -> Result<()> {
    let opts = InitScriptOptions::new(name, pack_path);
    let result = ctx.sdk()?.init_script(&opts).await?;
    ctx.finish("init-script", &result)
}
