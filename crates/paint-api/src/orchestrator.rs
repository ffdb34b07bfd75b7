//! Fetch orchestration for the paints endpoint.

use std::time::Instant;

use paint_cache::CacheDirectives;
use paint_core::{PaintConfig, PaintGroup, RequestContext};
use paint_data::{SourceFetcher, SourceRequest};
use paint_ingest::{adapter_for, SourceAdapter};
use paint_observability::StructuredLogger;

use crate::error::PipelineError;
use crate::pipeline::{build_groups, PipelineStats};
use crate::response::PaintResponse;

/// Grouped data from one successful pipeline run.
#[derive(Debug, Clone)]
pub struct LoadedPaints {
    pub groups: Vec<PaintGroup>,
    pub stats: PipelineStats,
}

fn unix_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Runs fetch, decode, normalize and group for each request.
///
/// Holds no per-request state; concurrent requests each perform their own
/// upstream fetch.
pub struct FetchOrchestrator<F> {
    fetcher: F,
    config: PaintConfig,
    adapter: Box<dyn SourceAdapter>,
    clock: fn() -> i64,
}

impl<F: SourceFetcher> FetchOrchestrator<F> {
    /// Create an orchestrator using the adapter selected by `config`.
    pub fn new(fetcher: F, config: PaintConfig) -> Self {
        let adapter = adapter_for(&config.source);
        Self {
            fetcher,
            config,
            adapter,
            clock: unix_millis,
        }
    }

    /// Override the clock used for cache-busting tokens.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// Get the underlying fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Build the upstream request for this invocation.
    pub fn source_request(&self, refresh: bool) -> SourceRequest {
        let request = SourceRequest::new(&self.config.source.url).accept(self.adapter.accept());
        if refresh {
            request.bypass_cache((self.clock)())
        } else {
            request
        }
    }

    /// Fetch and group the upstream data.
    pub async fn load(
        &self,
        refresh: bool,
        logger: &StructuredLogger,
    ) -> Result<LoadedPaints, PipelineError> {
        let request = self.source_request(refresh);
        logger
            .debug_builder("Fetching paint source")
            .field("url", request.url())
            .field_bool("bypass_cache", request.is_cache_bypassed())
            .emit();

        let started = Instant::now();
        let response = self.fetcher.fetch(&request).await?.error_for_status()?;
        let fetch_elapsed = started.elapsed();
        let records = self.adapter.records(response.bytes())?;

        if records.is_empty() {
            logger
                .warn_builder("Paint source contained no rows")
                .field("format", self.config.source.format.name())
                .field_u64("bytes", response.bytes().len() as u64)
                .emit();
        }

        let (groups, stats) = build_groups(&records, &self.config.columns);

        logger
            .debug_builder("Paint pipeline finished")
            .field_u64("rows", stats.rows as u64)
            .field_u64("kept", stats.kept as u64)
            .field_u64("rejected", stats.rejected() as u64)
            .field_u64("groups", stats.groups as u64)
            .duration_ms("fetch_ms", fetch_elapsed)
            .emit();

        Ok(LoadedPaints { groups, stats })
    }

    /// Run the pipeline and shape the endpoint response.
    ///
    /// Failures are logged with their cause and answered with a generic
    /// error body.
    pub async fn respond(&self, refresh: bool, logger: &StructuredLogger) -> PaintResponse {
        logger
            .info_builder("Paint data requested")
            .field_bool("refresh", refresh)
            .emit();

        match self.load(refresh, logger).await {
            Ok(loaded) => PaintResponse::success(
                loaded.groups,
                CacheDirectives::for_request(refresh, &self.config.cache),
            ),
            Err(e) => {
                logger
                    .error_builder("Failed to load paint data")
                    .field("kind", e.kind())
                    .field("error", e.to_string())
                    .emit();
                PaintResponse::failure()
            }
        }
    }

    /// Handle an inbound request context.
    ///
    /// HEAD runs the full pipeline so its status and headers match GET, then
    /// drops the payload. Other methods are rejected without fetching.
    pub async fn handle(&self, ctx: &RequestContext, logger: &StructuredLogger) -> PaintResponse {
        if !ctx.method.is_read() {
            logger
                .warn_builder("Method not allowed")
                .field("method", ctx.method.as_str())
                .emit();
            return PaintResponse::method_not_allowed();
        }

        self.respond(ctx.refresh_requested(), logger)
            .await
            .for_method(ctx.method)
    }
}

#[cfg(test)]
mod tests {
    use paint_core::{RequestId, SourceFormat};
    use paint_data::FixtureFetcher;
    use paint_observability::LogLevel;

    use super::*;

    const ROWS: &str = r##"[
        {"hex": "#ABC123", "name": "Red X", "range": "Set A"},
        {"hex": "abc123", "name": "Red Y", "range": "Set B"},
        {"hex": "", "name": "Ignore", "range": "Set C"}
    ]"##;

    fn logger() -> StructuredLogger {
        StructuredLogger::captured(RequestId::from_string("test")).with_min_level(LogLevel::Debug)
    }

    fn fixed_clock() -> i64 {
        1_700_000_000_000
    }

    #[test]
    fn test_source_request_plain() {
        let orchestrator = FetchOrchestrator::new(FixtureFetcher::ok("[]"), PaintConfig::default());
        let request = orchestrator.source_request(false);
        assert_eq!(request.url(), PaintConfig::default().source.url);
        assert!(!request.is_cache_bypassed());
    }

    #[test]
    fn test_source_request_refresh_uses_clock() {
        let mut config = PaintConfig::default();
        config.source.url = "https://example.com/export?format=csv".to_string();
        config.source.format = SourceFormat::Delimited;

        let orchestrator =
            FetchOrchestrator::new(FixtureFetcher::ok(""), config).with_clock(fixed_clock);
        let request = orchestrator.source_request(true);
        assert_eq!(
            request.url(),
            "https://example.com/export?format=csv&_t=1700000000000"
        );
        assert!(request.headers().iter().any(|(k, v)| k == "Accept" && v == "text/csv"));
    }

    #[tokio::test]
    async fn test_load_groups_rows() {
        let orchestrator = FetchOrchestrator::new(FixtureFetcher::ok(ROWS), PaintConfig::default());
        let loaded = orchestrator.load(false, &logger()).await.unwrap();

        assert_eq!(loaded.groups.len(), 1);
        assert_eq!(loaded.groups[0].key, "abc123");
        assert_eq!(loaded.stats.rows, 3);
        assert_eq!(loaded.stats.rejected(), 1);
    }

    #[tokio::test]
    async fn test_load_logs_stats_with_fetch_time() {
        let logger = logger();
        let orchestrator = FetchOrchestrator::new(FixtureFetcher::ok(ROWS), PaintConfig::default());
        orchestrator.load(false, &logger).await.unwrap();

        let entries = logger.entries();
        let finished = entries
            .iter()
            .find(|e| e.message == "Paint pipeline finished")
            .expect("stats entry");
        assert_eq!(finished.field("groups"), Some(&serde_json::json!(1)));
        assert!(finished.field("fetch_ms").is_some_and(|v| v.is_u64()));
    }

    #[tokio::test]
    async fn test_load_status_error() {
        let orchestrator = FetchOrchestrator::new(FixtureFetcher::status(503), PaintConfig::default());
        let err = orchestrator.load(false, &logger()).await.unwrap_err();
        assert_eq!(err.kind(), "upstream_status");
        assert!(err.to_string().contains("Service Unavailable"));
    }

    #[tokio::test]
    async fn test_load_decode_error() {
        let orchestrator =
            FetchOrchestrator::new(FixtureFetcher::ok("<html>"), PaintConfig::default());
        let err = orchestrator.load(false, &logger()).await.unwrap_err();
        assert_eq!(err.kind(), "decode");
    }

    #[tokio::test]
    async fn test_respond_logs_cause_but_hides_it() {
        let logger = logger();
        let orchestrator = FetchOrchestrator::new(
            FixtureFetcher::unreachable("dns lookup failed"),
            PaintConfig::default(),
        );

        let response = orchestrator.respond(false, &logger).await;
        assert_eq!(response.status, 500);
        assert!(!String::from_utf8_lossy(&response.body_bytes()).contains("dns"));

        let entries = logger.entries();
        let failure = entries
            .iter()
            .find(|e| e.level == LogLevel::Error)
            .expect("error entry");
        assert_eq!(failure.field("kind"), Some(&serde_json::json!("upstream_transport")));
        assert!(failure
            .field("error")
            .and_then(|v| v.as_str())
            .is_some_and(|s| s.contains("dns lookup failed")));
    }

    #[tokio::test]
    async fn test_empty_source_warns() {
        let logger = logger();
        let orchestrator =
            FetchOrchestrator::new(FixtureFetcher::ok(r#"{"rows": []}"#), PaintConfig::default());

        let response = orchestrator.respond(false, &logger).await;
        assert_eq!(response.status, 200);
        assert_eq!(response.groups().map(|g| g.len()), Some(0));
        assert!(logger.entries().iter().any(|e| e.level == LogLevel::Warn));
    }
}
