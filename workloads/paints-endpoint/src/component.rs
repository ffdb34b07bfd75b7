//! Spin HTTP entry point.

use spin_sdk::http::{IntoResponse, Method as SpinMethod, Request, Response};
use spin_sdk::{http_component, variables};

use paint_api::{FetchOrchestrator, PaintResponse};
use paint_core::{Method, PaintConfig, RequestContext};
use paint_data::SpinFetcher;
use paint_observability::{LogLevel, StructuredLogger};

use crate::WORKLOAD;

/// Main HTTP handler for the paints endpoint.
#[http_component]
async fn handle_paints(req: Request) -> anyhow::Result<impl IntoResponse> {
    let target = format!("{}?{}", req.path(), req.query());
    let ctx = RequestContext::from_path_and_query(&target).with_method(method_of(&req));

    let min_level = variables::get("log_level")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LogLevel::Info);
    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_workload(WORKLOAD)
        .with_route(&ctx.path)
        .with_min_level(min_level);

    let config = match PaintConfig::from_lookup(|key| variables::get(key).ok()) {
        Ok(config) => config,
        Err(e) => {
            logger
                .error_builder("Invalid endpoint configuration")
                .field("error", e.to_string())
                .emit();
            return Ok(into_spin(&PaintResponse::failure().for_method(ctx.method), &ctx));
        }
    };

    let orchestrator = FetchOrchestrator::new(SpinFetcher::new(), config);
    let response = orchestrator.handle(&ctx, &logger).await;

    Ok(into_spin(&response, &ctx))
}

fn method_of(req: &Request) -> Method {
    match req.method() {
        SpinMethod::Get => Method::Get,
        SpinMethod::Head => Method::Head,
        SpinMethod::Post => Method::Post,
        SpinMethod::Put => Method::Put,
        SpinMethod::Delete => Method::Delete,
        SpinMethod::Patch => Method::Patch,
        SpinMethod::Options => Method::Options,
        _ => Method::Other,
    }
}

fn into_spin(response: &PaintResponse, ctx: &RequestContext) -> Response {
    let mut builder = Response::builder();
    builder.status(response.status);
    for (name, value) in response.headers(Some(&ctx.request_id.to_string())) {
        builder.header(name, value);
    }
    builder.body(response.body_bytes()).build()
}
