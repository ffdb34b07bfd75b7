//! Configuration management command.

use std::path::Path;

use anyhow::{bail, Result};

use super::ConfigArgs;
use crate::config::CliConfig;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.init {
        Some(path) => init_config(&path, args.force, ctx),
        None => show_config(ctx),
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

    let config = &ctx.config;
    ctx.output.info("[source]");
    ctx.output.kv("url", &config.paint.source.url);
    ctx.output.kv("format", config.paint.source.format.name());
    ctx.output
        .kv("delimiter", &format!("{:?}", config.paint.source.delimiter));

    ctx.output.info("[columns]");
    ctx.output.kv("key", &config.paint.columns.key);
    ctx.output.kv("name", &config.paint.columns.name);
    ctx.output.kv("category", &config.paint.columns.category);

    ctx.output.info("[cache]");
    ctx.output
        .kv("max_age_secs", &config.paint.cache.max_age_secs.to_string());
    ctx.output.kv(
        "stale_while_revalidate_secs",
        &config.paint.cache.stale_while_revalidate_secs.to_string(),
    );

    ctx.output.info("[http]");
    ctx.output
        .kv("timeout_secs", &config.http.timeout_secs.to_string());
    ctx.output.kv("user_agent", &config.http.user_agent);

    Ok(())
}

fn init_config(path: &str, force: bool, ctx: &Context) -> Result<()> {
    let target = ctx.resolve_path(path);
    if target.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            target.display()
        );
    }

    let target = target.to_string_lossy();
    CliConfig::default().save(&target)?;

    if Path::new(target.as_ref()).extension().is_some_and(|e| e == "json") {
        ctx.output.success(&format!("Wrote JSON config to {}", target));
    } else {
        ctx.output.success(&format!("Wrote TOML config to {}", target));
    }

    Ok(())
}
