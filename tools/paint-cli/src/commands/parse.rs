//! Offline parse command.

use std::fs;

use anyhow::{Context as _, Result};
use paint_api::build_groups;
use paint_core::{parse_delimiter, SourceFormat};
use paint_ingest::adapter_for;

use super::ParseArgs;
use crate::context::Context;

/// Group a local sheet export with the configured column mapping.
pub fn run(args: ParseArgs, ctx: &Context) -> Result<()> {
    let mut source = ctx.config.paint.source.clone();
    if let Some(format) = args.format.as_deref() {
        source.format = format.parse::<SourceFormat>()?;
    } else if args.file.ends_with(".csv") || args.file.ends_with(".tsv") {
        source.format = SourceFormat::Delimited;
    }
    if let Some(delimiter) = args.delimiter.as_deref() {
        source.delimiter = parse_delimiter(delimiter)?;
    } else if args.file.ends_with(".tsv") {
        source.delimiter = '\t';
    }

    let path = ctx.resolve_path(&args.file);
    let body = fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    ctx.output.debug(&format!(
        "Parsing {} as {} ({} bytes)",
        path.display(),
        source.format,
        body.len()
    ));

    let records = adapter_for(&source).records(&body)?;
    let (groups, stats) = build_groups(&records, &ctx.config.paint.columns);

    if ctx.output.is_json() {
        ctx.output.json(&groups);
        return Ok(());
    }

    ctx.output.header("Groups");
    for group in &groups {
        ctx.output.list_item(&format!("#{}", group.key));
        for equivalent in &group.equivalents {
            ctx.output
                .kv(&equivalent.category, &equivalent.name);
        }
    }

    ctx.output.header("Summary");
    ctx.output.kv("rows", &stats.rows.to_string());
    ctx.output.kv("kept", &stats.kept.to_string());
    ctx.output.kv("missing key", &stats.missing_key.to_string());
    ctx.output.kv("missing name", &stats.missing_name.to_string());
    ctx.output.kv("missing category", &stats.missing_category.to_string());
    ctx.output.kv("groups", &stats.groups.to_string());

    if stats.rows == 0 {
        ctx.output.warn("No rows decoded; check --format and --delimiter");
    }

    Ok(())
}
