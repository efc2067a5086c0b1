use crate::{app, AppState};
use analysis_orchestrator::{AnalysisOrchestrator, OrchestratorConfig};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app(name: &str) -> Router {
    let cache_dir = std::env::temp_dir().join(format!(
        "ventureiq-api-{}-{}",
        std::process::id(),
        name
    ));
    let _ = std::fs::remove_dir_all(&cache_dir);

    let orchestrator = AnalysisOrchestrator::new(
        OrchestratorConfig {
            brainstorm_ttl: chrono::Duration::hours(24),
            competitor_ttl: chrono::Duration::days(7),
            competitor_cache_dir: cache_dir,
            provider_timeout: std::time::Duration::from_millis(200),
        },
        Vec::new(),
        Vec::new(),
    )
    .unwrap();

    app(AppState {
        orchestrator: Arc::new(orchestrator),
    })
}

async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn sample_body() -> Value {
    json!({
        "industry": "Fintech",
        "location": "USA",
        "audience": "Founders"
    })
}

#[tokio::test]
async fn missing_required_field_is_a_400() {
    let router = test_app("missing-field");

    let (status, body) = post_json(
        &router,
        "/api/risk",
        json!({"industry": "Fintech", "location": "USA"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("audience"));
}

#[tokio::test]
async fn blank_field_fails_validation_like_missing() {
    let router = test_app("blank-field");

    let (status, _) = post_json(
        &router,
        "/api/risk",
        json!({"industry": "Fintech", "location": "   ", "audience": "Founders"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn risk_is_cached_between_calls() {
    let router = test_app("risk-cache");

    let (status, first) = post_json(&router, "/api/risk", sample_body()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["data"]["source"], json!("live"));

    let (_, second) = post_json(&router, "/api/risk", sample_body()).await;
    assert_eq!(second["data"]["source"], json!("cached"));
    assert_eq!(second["data"]["data"], first["data"]["data"]);
    assert_eq!(second["data"]["cache_key"], first["data"]["cache_key"]);
}

#[tokio::test]
async fn force_fresh_recomputes_identically() {
    let router = test_app("force-fresh");

    let (_, first) = post_json(&router, "/api/risk", sample_body()).await;

    let mut forced_body = sample_body();
    forced_body["forceFresh"] = json!(true);
    let (_, forced) = post_json(&router, "/api/risk", forced_body).await;

    assert_eq!(forced["data"]["source"], json!("live"));
    // Deterministic regeneration: same payload, refreshed entry
    assert_eq!(forced["data"]["data"], first["data"]["data"]);
}

#[tokio::test]
async fn risk_payload_has_expected_shape() {
    let router = test_app("risk-shape");

    let (_, body) = post_json(&router, "/api/risk", sample_body()).await;
    let data = &body["data"]["data"];

    assert!(data["legal_risk"].is_u64());
    assert!(data["technical_risk"].is_u64());
    assert!(data["market_risk"].is_u64());
    assert!(data["overall_risk_score"].is_u64());
    assert!(matches!(
        data["overall_risk_level"].as_str(),
        Some("Low" | "Medium" | "High")
    ));
    assert!(data["recommendations"].is_array());
}

#[tokio::test]
async fn competitor_analysis_needs_only_industry_and_location() {
    let router = test_app("competitor-min");

    let (status, body) = post_json(
        &router,
        "/api/competitor-analysis",
        json!({"industry": "Fintech", "location": "USA"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"]["data"];
    assert!(data["competitors"].is_array());
    assert!(data["analysis"].is_object());
}

#[tokio::test]
async fn brainstorm_health_reports_cache_and_apis() {
    let router = test_app("health");

    // Warm two namespaces first
    let _ = post_json(&router, "/api/risk", sample_body()).await;
    let _ = post_json(&router, "/api/swot", sample_body()).await;

    let (status, body) = get_json(&router, "/api/brainstorm").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["cacheSize"], json!(2));
    assert!(body["availableAPIs"].is_object());
}

#[tokio::test]
async fn liveness_probe_responds() {
    let router = test_app("liveness");

    let (status, body) = get_json(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("healthy"));
}

#[tokio::test]
async fn request_id_is_propagated() {
    let router = test_app("request-id");

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "req-1234")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        &"req-1234"
    );
}
