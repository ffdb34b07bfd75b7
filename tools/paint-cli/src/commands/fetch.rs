//! Live fetch command.

use std::time::Instant;

use anyhow::{bail, Result};
use paint_api::FetchOrchestrator;
use paint_core::RequestId;
use paint_observability::{LogFormat, LogLevel, StructuredLogger};

use super::FetchArgs;
use crate::context::Context;
use crate::transport::ReqwestFetcher;

/// Run the endpoint pipeline against the configured sheet.
pub async fn run(args: FetchArgs, ctx: &Context) -> Result<()> {
    let fetcher = ReqwestFetcher::new(&ctx.config.http)?;
    let orchestrator = FetchOrchestrator::new(fetcher, ctx.config.paint.clone());

    let request_id = RequestId::generate();
    let min_level = if ctx.output.is_verbose() {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    let logger = StructuredLogger::new(request_id.clone())
        .with_workload("paints-cli")
        .with_format(if ctx.output.is_json() {
            LogFormat::Json
        } else {
            LogFormat::Human
        })
        .with_min_level(min_level);

    ctx.output
        .debug(&format!("Fetching {}", ctx.config.paint.source.url));

    let start = Instant::now();
    let response = orchestrator.respond(args.refresh, &logger).await;
    let elapsed = start.elapsed();

    if args.headers && !ctx.output.is_json() {
        ctx.output.header(&format!("HTTP {}", response.status));
        for (key, value) in response.headers(Some(&request_id.to_string())) {
            ctx.output.kv(&key, &value);
        }
        println!();
    }

    ctx.output.json(&response.body);

    if !response.is_success() {
        bail!("Paint data could not be loaded (see log output for the cause)");
    }

    if let Some(groups) = response.groups() {
        let equivalents: usize = groups.iter().map(|g| g.equivalents.len()).sum();
        ctx.output.success(&format!(
            "{} colors, {} equivalents in {:.0?}",
            groups.len(),
            equivalents,
            elapsed
        ));
    }

    Ok(())
}
