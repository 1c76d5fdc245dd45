//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Path => show_path(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    println!();
    println!("[service]");
    ctx.output.kv("base_url", &ctx.config.service.base_url);
    match ctx.config.service.timeout_secs {
        Some(secs) => ctx.output.kv("timeout_secs", &secs.to_string()),
        None => ctx.output.kv("timeout_secs", "(transport default)"),
    }

    println!();
    println!("[display]");
    ctx.output.kv("currency", ctx.config.display.currency.code());
    ctx.output.kv(
        "asset_base_url",
        &ctx.config.asset_base_url(&ctx.config.service),
    );

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.resolve_path("gift.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    match &ctx.config_path {
        Some(path) if ctx.output.is_json() => {
            ctx.output.json(&serde_json::json!({ "path": path }));
        }
        Some(path) => println!("{}", path.display()),
        None if ctx.output.is_json() => {
            ctx.output.json(&serde_json::json!({ "path": null }));
        }
        None => ctx
            .output
            .info("No config file found; using defaults. Run `gift config init` to create one."),
    }
    Ok(())
}
