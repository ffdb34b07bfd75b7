//! End-to-end behavior of the paints endpoint over in-memory upstreams.

use paint_api::{is_uncached, FetchOrchestrator, PaintResponse};
use paint_core::{
    Equivalent, Method, PaintConfig, PaintGroup, RequestContext, RequestId, SourceFormat,
};
use paint_data::{FixtureFetcher, Response};
use paint_observability::StructuredLogger;

fn logger() -> StructuredLogger {
    StructuredLogger::captured(RequestId::from_string("endpoint-test"))
}

fn csv_config() -> PaintConfig {
    let mut config = PaintConfig::default();
    config.source.url = "https://docs.example.com/sheet/export?format=csv".to_string();
    config.source.format = SourceFormat::Delimited;
    config
}

async fn get(fetcher: FixtureFetcher, config: PaintConfig, target: &str) -> PaintResponse {
    let ctx = RequestContext::from_path_and_query(target);
    FetchOrchestrator::new(fetcher, config)
        .handle(&ctx, &logger())
        .await
}

fn equivalent(name: &str, range: &str) -> Equivalent {
    Equivalent {
        name: name.to_string(),
        category: range.to_string(),
    }
}

#[tokio::test]
async fn worked_example_from_rows() {
    let body = r##"[
        {"hex": "#ABC123", "name": "Red X", "range": "Set A"},
        {"hex": "abc123", "name": "Red Y", "range": "Set B"},
        {"hex": "", "name": "Ignore", "range": "Set C"}
    ]"##;

    let response = get(FixtureFetcher::ok(body), PaintConfig::default(), "/api/paints").await;

    assert_eq!(response.status, 200);
    assert_eq!(
        response.groups().unwrap(),
        &[PaintGroup {
            key: "abc123".to_string(),
            equivalents: vec![equivalent("Red X", "Set A"), equivalent("Red Y", "Set B")],
        }]
    );

    let json: serde_json::Value = serde_json::from_slice(&response.body_bytes()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "hex": "abc123",
            "equivalents": [
                { "name": "Red X", "range": "Set A" },
                { "name": "Red Y", "range": "Set B" }
            ]
        }])
    );
}

#[tokio::test]
async fn worked_example_from_delimited_text() {
    let body = "hex,name,range\r\n\"#ABC123\",Red X,Set A\r\nabc123,\"Red Y\",Set B\r\n,Ignore,Set C\r\n";

    let response = get(FixtureFetcher::ok(body), csv_config(), "/api/paints").await;

    let groups = response.groups().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].key, "abc123");
    assert_eq!(
        groups[0].equivalents,
        vec![equivalent("Red X", "Set A"), equivalent("Red Y", "Set B")]
    );
}

#[tokio::test]
async fn one_group_per_distinct_key_in_first_seen_order() {
    let body = "hex,name,range\n\
                #FF0000,Red 1,A\n\
                #00FF00,Green 1,A\n\
                ff0000,Red 2,B\n\
                #0000ff,Blue 1,C\n\
                00ff00,Green 2,B\n\
                #Ff0000,Red 3,C\n";

    let response = get(FixtureFetcher::ok(body), csv_config(), "/api/paints").await;
    let groups = response.groups().unwrap();

    let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["ff0000", "00ff00", "0000ff"]);

    let reds: Vec<&str> = groups[0].equivalents.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(reds, vec!["Red 1", "Red 2", "Red 3"]);

    let total: usize = groups.iter().map(|g| g.equivalents.len()).sum();
    assert_eq!(total, 6);
}

#[tokio::test]
async fn incomplete_rows_never_create_groups() {
    let body = "hex,name,range\n#,Only Hash,A\n123456,,A\n654321,Name,\n  ,Blank,A\n";

    let response = get(FixtureFetcher::ok(body), csv_config(), "/api/paints").await;
    assert_eq!(response.status, 200);
    assert_eq!(response.groups().unwrap().len(), 0);
    assert_eq!(response.body_bytes(), b"[]");
}

#[tokio::test]
async fn default_request_is_publicly_cacheable() {
    for target in ["/api/paints", "/api/paints?refresh=false", "/api/paints?refresh=1"] {
        let response = get(FixtureFetcher::ok("[]"), PaintConfig::default(), target).await;

        let cache_control = response.header("Cache-Control").unwrap();
        assert!(cache_control.contains("max-age=86400"), "{target}");
        assert!(cache_control.contains("stale-while-revalidate=3600"), "{target}");
        assert_eq!(response.header("Pragma"), None, "{target}");
        assert_eq!(response.header("Expires"), None, "{target}");
    }
}

#[tokio::test]
async fn refresh_disables_caching_and_busts_upstream() {
    let ctx = RequestContext::from_path_and_query("/api/paints?refresh=true");
    let orchestrator = FetchOrchestrator::new(FixtureFetcher::ok("[]"), PaintConfig::default())
        .with_clock(|| 42);

    let response = orchestrator.handle(&ctx, &logger()).await;

    let headers = response.headers(Some(&ctx.request_id.to_string()));
    assert!(is_uncached(&headers));
    assert_eq!(response.header("Pragma").as_deref(), Some("no-cache"));
    assert_eq!(response.header("Expires").as_deref(), Some("0"));

    let sent = orchestrator.fetcher().requests();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].url().ends_with("?_t=42"));
    assert!(sent[0].is_cache_bypassed());
}

#[tokio::test]
async fn upstream_status_failure_becomes_error_body() {
    let response = get(FixtureFetcher::status(502), PaintConfig::default(), "/api/paints").await;

    assert_eq!(response.status, 500);
    let json: serde_json::Value = serde_json::from_slice(&response.body_bytes()).unwrap();
    assert_eq!(json, serde_json::json!({ "error": "Failed to load paint data" }));
    assert_eq!(response.cache_control(), "no-store");
}

#[tokio::test]
async fn upstream_failure_with_refresh_is_not_cached() {
    let response = get(
        FixtureFetcher::unreachable("connection reset"),
        PaintConfig::default(),
        "/api/paints?refresh=true",
    )
    .await;

    assert_eq!(response.status, 500);
    assert!(!response.cache_control().contains("max-age"));
}

#[tokio::test]
async fn upstream_error_page_with_success_status_fails_cleanly() {
    let reply = Response::ok("<!doctype html><title>Quota exceeded</title>");
    let response = get(FixtureFetcher::reply(reply), PaintConfig::default(), "/api/paints").await;

    assert_eq!(response.status, 500);
    assert!(response.groups().is_none());
}

#[tokio::test]
async fn unsupported_method_is_rejected_without_fetching() {
    for method in [Method::Post, Method::Put, Method::Delete, Method::Other] {
        let ctx = RequestContext::from_path_and_query("/api/paints").with_method(method);
        let orchestrator = FetchOrchestrator::new(FixtureFetcher::ok("[]"), PaintConfig::default());

        let response = orchestrator.handle(&ctx, &logger()).await;

        assert_eq!(response.status, 405, "{method}");
        assert_eq!(response.header("Allow").as_deref(), Some("GET, HEAD"), "{method}");
        assert_eq!(response.cache_control(), "no-store");
        assert!(orchestrator.fetcher().requests().is_empty(), "{method}");
    }
}

#[tokio::test]
async fn head_matches_get_without_body() {
    let body = r##"[{"hex": "#ABC123", "name": "Red X", "range": "Set A"}]"##;
    for target in ["/api/paints", "/api/paints?refresh=true"] {
        let get_ctx = RequestContext::from_path_and_query(target);
        let head_ctx = RequestContext::from_path_and_query(target).with_method(Method::Head);

        let get = FetchOrchestrator::new(FixtureFetcher::ok(body), PaintConfig::default())
            .handle(&get_ctx, &logger())
            .await;
        let head = FetchOrchestrator::new(FixtureFetcher::ok(body), PaintConfig::default())
            .handle(&head_ctx, &logger())
            .await;

        assert_eq!(head.status, get.status, "{target}");
        assert_eq!(head.headers(Some("id")), get.headers(Some("id")), "{target}");
        assert!(head.body_bytes().is_empty(), "{target}");
        assert!(!get.body_bytes().is_empty(), "{target}");
    }
}

#[tokio::test]
async fn percent_encoded_refresh_is_honored() {
    let response = get(
        FixtureFetcher::ok("[]"),
        PaintConfig::default(),
        "/api/paints?refresh=tru%65",
    )
    .await;

    assert!(is_uncached(&response.headers(None)));
    assert_eq!(response.header("Pragma").as_deref(), Some("no-cache"));
}
