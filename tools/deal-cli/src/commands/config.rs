//! Configuration management commands.

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, DealsConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.line("");
    ctx.output.line("[engine]");
    ctx.output.kv("latency_ms", &ctx.config.engine.latency_ms.to_string());

    ctx.output.line("");
    ctx.output.line("[catalog]");
    ctx.output.kv(
        "path",
        ctx.config.catalog.path.as_deref().unwrap_or("(built-in)"),
    );

    ctx.output.line("");
    ctx.output.line("[display]");
    ctx.output.kv(
        "description_limit",
        &ctx.config.display.description_limit.to_string(),
    );
    ctx.output.kv("date_format", &ctx.config.display.date_format);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.default_config_path();

    if path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    if path.extension().is_some_and(|ext| ext == "json") {
        DealsConfig::default().save(&path.to_string_lossy())?;
    } else {
        std::fs::write(&path, generate_default_config())
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    }
    ctx.output.success(&format!("Created {}", path.display()));
    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.config.validate()?;

    if let Some(path) = &ctx.config.catalog.path {
        let resolved = ctx.resolve_path(path);
        if !resolved.exists() {
            bail!("Catalog file not found: {}", resolved.display());
        }
    }

    ctx.output.success("Configuration is valid");
    Ok(())
}
