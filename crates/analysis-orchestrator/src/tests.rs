use crate::{AnalysisOrchestrator, FallbackChain, OrchestratorConfig};
use analysis_core::{AnalysisError, AnalysisKind, AnalysisProvider, IdeaProfile, ResultSource};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use synthetic_analysis::SyntheticAnalysisEngine;

fn sample_idea() -> IdeaProfile {
    IdeaProfile {
        industry: "Fintech".to_string(),
        location: "USA".to_string(),
        audience: "Founders".to_string(),
        description: String::new(),
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "ventureiq-orch-{}-{}",
        std::process::id(),
        name
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn test_config(name: &str) -> OrchestratorConfig {
    OrchestratorConfig {
        brainstorm_ttl: chrono::Duration::hours(24),
        competitor_ttl: chrono::Duration::days(7),
        competitor_cache_dir: scratch_dir(name),
        provider_timeout: Duration::from_millis(200),
    }
}

struct FailingProvider;

#[async_trait]
impl AnalysisProvider for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }
    fn is_available(&self) -> bool {
        true
    }
    async fn fetch(&self, _idea: &IdeaProfile) -> Result<Value, AnalysisError> {
        Err(AnalysisError::Provider("boom".into()))
    }
}

struct StaticProvider {
    name: &'static str,
    payload: Value,
}

#[async_trait]
impl AnalysisProvider for StaticProvider {
    fn name(&self) -> &'static str {
        self.name
    }
    fn is_available(&self) -> bool {
        true
    }
    async fn fetch(&self, _idea: &IdeaProfile) -> Result<Value, AnalysisError> {
        Ok(self.payload.clone())
    }
}

struct SlowProvider;

#[async_trait]
impl AnalysisProvider for SlowProvider {
    fn name(&self) -> &'static str {
        "slow"
    }
    fn is_available(&self) -> bool {
        true
    }
    async fn fetch(&self, _idea: &IdeaProfile) -> Result<Value, AnalysisError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(json!({"late": true}))
    }
}

#[tokio::test]
async fn chain_terminates_on_all_failures() {
    let chain = FallbackChain::new(
        vec![Arc::new(FailingProvider), Arc::new(FailingProvider)],
        Duration::from_millis(200),
    );
    let idea = sample_idea();
    let engine = SyntheticAnalysisEngine::new();

    let resolution = chain
        .resolve(&idea, || engine.generate(AnalysisKind::Risk, "1a2b3c", &idea))
        .await;

    assert_eq!(resolution.provider, None);
    // The chain's fallback result equals the engine's direct output
    assert_eq!(
        resolution.payload,
        engine.generate(AnalysisKind::Risk, "1a2b3c", &idea)
    );
}

#[tokio::test]
async fn first_usable_provider_short_circuits() {
    let chain = FallbackChain::new(
        vec![
            Arc::new(FailingProvider),
            Arc::new(StaticProvider {
                name: "first_ok",
                payload: json!({"from": "first_ok"}),
            }),
            Arc::new(StaticProvider {
                name: "never_reached",
                payload: json!({"from": "never_reached"}),
            }),
        ],
        Duration::from_millis(200),
    );
    let idea = sample_idea();

    let resolution = chain.resolve(&idea, || json!({"from": "engine"})).await;

    assert_eq!(resolution.provider, Some("first_ok"));
    assert_eq!(resolution.payload, json!({"from": "first_ok"}));
}

#[tokio::test]
async fn empty_results_mean_try_next() {
    let chain = FallbackChain::new(
        vec![
            Arc::new(StaticProvider {
                name: "empty_object",
                payload: json!({}),
            }),
            Arc::new(StaticProvider {
                name: "empty_array",
                payload: json!([]),
            }),
            Arc::new(StaticProvider {
                name: "null",
                payload: Value::Null,
            }),
        ],
        Duration::from_millis(200),
    );
    let idea = sample_idea();

    let resolution = chain.resolve(&idea, || json!({"from": "engine"})).await;

    assert_eq!(resolution.provider, None);
    assert_eq!(resolution.payload, json!({"from": "engine"}));
}

#[tokio::test]
async fn slow_provider_times_out_and_falls_through() {
    let chain = FallbackChain::new(vec![Arc::new(SlowProvider)], Duration::from_millis(50));
    let idea = sample_idea();

    let resolution = chain.resolve(&idea, || json!({"from": "engine"})).await;

    assert_eq!(resolution.provider, None);
    assert_eq!(resolution.payload, json!({"from": "engine"}));
}

#[tokio::test]
async fn second_request_is_served_from_cache() {
    let orch =
        AnalysisOrchestrator::new(test_config("cache-hit"), Vec::new(), Vec::new()).unwrap();
    let idea = sample_idea();

    let first = orch.analyze_risk(&idea, false).await;
    let second = orch.analyze_risk(&idea, false).await;

    assert_eq!(first.source, ResultSource::Live);
    assert_eq!(second.source, ResultSource::Cached);
    assert_eq!(first.data, second.data);
    assert_eq!(first.cache_key, second.cache_key);
}

#[tokio::test]
async fn force_fresh_bypasses_read_but_still_writes() {
    let orch =
        AnalysisOrchestrator::new(test_config("force-fresh"), Vec::new(), Vec::new()).unwrap();
    let idea = sample_idea();

    let first = orch.brainstorm(&idea, false).await;
    let forced = orch.brainstorm(&idea, true).await;
    let after = orch.brainstorm(&idea, false).await;

    assert_eq!(forced.source, ResultSource::Live);
    // No entropy anywhere: the recomputed payload is identical
    assert_eq!(first.data, forced.data);
    // The forced write refreshed the entry, so the next read hits
    assert_eq!(after.source, ResultSource::Cached);
}

#[tokio::test]
async fn namespaces_do_not_collide() {
    let orch =
        AnalysisOrchestrator::new(test_config("namespaces"), Vec::new(), Vec::new()).unwrap();
    let idea = sample_idea();

    let risk = orch.analyze_risk(&idea, false).await;
    let swot = orch.analyze_swot(&idea, false).await;

    assert_ne!(risk.cache_key, swot.cache_key);
    assert_ne!(risk.data, swot.data);

    // Both still cached independently
    assert_eq!(orch.analyze_risk(&idea, false).await.data, risk.data);
    assert_eq!(orch.analyze_swot(&idea, false).await.data, swot.data);
}

#[tokio::test]
async fn competitor_key_ignores_pitch_wording() {
    let orch =
        AnalysisOrchestrator::new(test_config("comp-key"), Vec::new(), Vec::new()).unwrap();

    let mut a = sample_idea();
    let mut b = sample_idea();
    a.audience = "Founders".to_string();
    b.audience = "Enterprises".to_string();
    b.description = "completely different pitch".to_string();

    let comp_a = orch.analyze_competitors(&a).await;
    let comp_b = orch.analyze_competitors(&b).await;
    assert_eq!(comp_a.cache_key, comp_b.cache_key);
    assert_eq!(comp_b.source, ResultSource::Cached);

    // Full-context analyses do key on audience
    let brain_a = orch.brainstorm(&a, false).await;
    let brain_b = orch.brainstorm(&b, false).await;
    assert_ne!(brain_a.cache_key, brain_b.cache_key);
}

#[tokio::test]
async fn provider_result_is_cached_for_next_call() {
    let provider: Arc<dyn AnalysisProvider> = Arc::new(StaticProvider {
        name: "directory",
        payload: json!({"competitors": [{"name": "Acme"}]}),
    });
    let orch = AnalysisOrchestrator::new(
        test_config("provider-cached"),
        vec![provider],
        Vec::new(),
    )
    .unwrap();
    let idea = sample_idea();

    let first = orch.analyze_competitors(&idea).await;
    let second = orch.analyze_competitors(&idea).await;

    assert_eq!(first.source, ResultSource::Live);
    assert_eq!(first.data, json!({"competitors": [{"name": "Acme"}]}));
    assert_eq!(second.source, ResultSource::Cached);
    assert_eq!(second.data, first.data);
}

#[tokio::test]
async fn available_apis_reports_configured_state() {
    let orch = AnalysisOrchestrator::new(
        test_config("apis"),
        vec![Arc::new(StaticProvider {
            name: "competitor_directory",
            payload: json!({}),
        })],
        vec![Arc::new(FailingProvider)],
    )
    .unwrap();

    let apis = orch.available_apis();
    assert_eq!(apis.get("competitor_directory"), Some(&true));
    assert_eq!(apis.get("failing"), Some(&true));
}
