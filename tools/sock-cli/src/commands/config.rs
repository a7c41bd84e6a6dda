//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use sock_commerce::storefront::DEFAULT_BRAND;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force, brand, path } => {
            init_config(force, brand.as_deref().unwrap_or(DEFAULT_BRAND), &path, ctx)
        }
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
        None => ctx.output.kv("file", "(built-in defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("brand", &ctx.config.store.brand);
    ctx.output.kv("premium", &ctx.config.store.premium.to_string());

    ctx.output.info("");
    ctx.output.info("[product]");
    ctx.output.kv("name", &ctx.config.product.name);
    ctx.output.kv("details", &ctx.config.product.details.join(", "));

    for variant in &ctx.config.product.variants {
        ctx.output.info("");
        ctx.output.info("[[product.variants]]");
        ctx.output.kv("id", &variant.id.to_string());
        ctx.output.kv("color", &variant.color);
        ctx.output.kv("image_url", &variant.image_url);
        ctx.output.kv("quantity", &variant.quantity.to_string());
    }

    Ok(())
}

fn init_config(force: bool, brand: &str, path: &str, ctx: &Context) -> Result<()> {
    let config_path = ctx.resolve_path(path);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if config_path.extension().is_some_and(|ext| ext == "json") {
        let mut config = CliConfig::default();
        config.store.brand = brand.to_string();
        config.save(&config_path)?;
    } else {
        fs::write(&config_path, generate_default_config(brand))
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
    }

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    let report = ctx.config.validate();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "valid": report.is_valid(),
            "errors": report.errors,
            "warnings": report.warnings,
        }));
    } else {
        ctx.output.header("Validating configuration");
        for warning in &report.warnings {
            ctx.output.warn(warning);
        }
        for error in &report.errors {
            ctx.output.error(error);
        }
    }

    if !report.is_valid() {
        bail!("Configuration has {} error(s)", report.errors.len());
    }

    ctx.config.storefront()?;

    if !ctx.output.is_json() {
        ctx.output.success("Configuration is valid");
    }

    Ok(())
}
