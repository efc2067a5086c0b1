use analysis_cache::{derive_key, namespaced_key, CachePolicy, CacheStore, FileCache, MemoryCache};
use analysis_core::{
    AnalysisError, AnalysisKind, AnalysisProvider, AnalysisReport, IdeaProfile, ResultSource,
};
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use synthetic_analysis::SyntheticAnalysisEngine;
use tracing::{debug, warn};

pub mod fallback;
pub use fallback::{FallbackChain, Resolution};

#[cfg(test)]
mod tests;

/// Orchestrator configuration, read from the environment by the server.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// TTL for brainstorm results (in-memory cache).
    pub brainstorm_ttl: chrono::Duration,
    /// TTL for competitor landscapes (file cache). Competitors change
    /// slowly; full idea context changes market analysis — the two
    /// policies stay distinct on purpose.
    pub competitor_ttl: chrono::Duration,
    /// Directory for the shared on-disk competitor cache.
    pub competitor_cache_dir: PathBuf,
    /// Bound on each external provider attempt.
    pub provider_timeout: std::time::Duration,
}

/// Per-namespace entry counts, for the health endpoint.
#[derive(Debug, Serialize)]
pub struct CacheSizes {
    pub risk: usize,
    pub competitor: usize,
    pub brainstorm: usize,
    pub swot: usize,
}

impl CacheSizes {
    pub fn total(&self) -> usize {
        self.risk + self.competitor + self.brainstorm + self.swot
    }
}

/// Composes key derivation, caching, the provider fallback chain and the
/// deterministic engine for every analysis type.
///
/// Constructed once at process start and shared via `AppState`. Concurrent
/// same-key misses may both compute and both write; last-write-wins is
/// correct because the engine is pure and idempotent.
pub struct AnalysisOrchestrator {
    engine: SyntheticAnalysisEngine,
    risk_cache: MemoryCache,
    swot_cache: MemoryCache,
    brainstorm_cache: MemoryCache,
    competitor_cache: FileCache,
    competitor_chain: FallbackChain,
    brainstorm_chain: FallbackChain,
    risk_chain: FallbackChain,
    swot_chain: FallbackChain,
}

impl AnalysisOrchestrator {
    pub fn new(
        config: OrchestratorConfig,
        competitor_providers: Vec<Arc<dyn AnalysisProvider>>,
        brainstorm_providers: Vec<Arc<dyn AnalysisProvider>>,
    ) -> Result<Self, AnalysisError> {
        let competitor_cache = FileCache::new(
            &config.competitor_cache_dir,
            CachePolicy::with_ttl(config.competitor_ttl),
        )?;

        Ok(Self {
            engine: SyntheticAnalysisEngine::new(),
            // Risk and SWOT results persist until explicitly refreshed.
            risk_cache: MemoryCache::new(CachePolicy::persistent()),
            swot_cache: MemoryCache::new(CachePolicy::persistent()),
            brainstorm_cache: MemoryCache::new(CachePolicy::with_ttl(config.brainstorm_ttl)),
            competitor_cache,
            competitor_chain: FallbackChain::new(competitor_providers, config.provider_timeout),
            brainstorm_chain: FallbackChain::new(brainstorm_providers, config.provider_timeout),
            // No external source models legal/technical risk or SWOT well;
            // these chains resolve straight to the engine.
            risk_chain: FallbackChain::new(Vec::new(), config.provider_timeout),
            swot_chain: FallbackChain::new(Vec::new(), config.provider_timeout),
        })
    }

    pub async fn analyze_risk(&self, idea: &IdeaProfile, force_fresh: bool) -> AnalysisReport {
        let fields = idea.key_fields();
        self.run(
            AnalysisKind::Risk,
            &self.risk_cache,
            &self.risk_chain,
            &fields,
            idea,
            force_fresh,
        )
        .await
    }

    /// Competitor landscapes are keyed by (industry, location) only: the
    /// pitch wording doesn't change who is already in the market.
    pub async fn analyze_competitors(&self, idea: &IdeaProfile) -> AnalysisReport {
        let fields = idea.competitor_key_fields();
        self.run(
            AnalysisKind::Competitor,
            &self.competitor_cache,
            &self.competitor_chain,
            &fields,
            idea,
            false,
        )
        .await
    }

    pub async fn brainstorm(&self, idea: &IdeaProfile, force_fresh: bool) -> AnalysisReport {
        let fields = idea.key_fields();
        self.run(
            AnalysisKind::Brainstorm,
            &self.brainstorm_cache,
            &self.brainstorm_chain,
            &fields,
            idea,
            force_fresh,
        )
        .await
    }

    pub async fn analyze_swot(&self, idea: &IdeaProfile, force_fresh: bool) -> AnalysisReport {
        let fields = idea.key_fields();
        self.run(
            AnalysisKind::Swot,
            &self.swot_cache,
            &self.swot_chain,
            &fields,
            idea,
            force_fresh,
        )
        .await
    }

    /// The shared request path: key -> cache -> chain -> engine -> cache.
    /// `force_fresh` bypasses the read but the result is still written
    /// back, refreshing the entry's creation time.
    async fn run(
        &self,
        kind: AnalysisKind,
        cache: &dyn CacheStore,
        chain: &FallbackChain,
        fields: &[&str],
        idea: &IdeaProfile,
        force_fresh: bool,
    ) -> AnalysisReport {
        let cache_key = namespaced_key(kind, fields);

        if !force_fresh {
            if let Some(payload) = cache.get(&cache_key).await {
                debug!(kind = kind.as_str(), key = %cache_key, "cache hit");
                return AnalysisReport {
                    source: ResultSource::Cached,
                    generated_at: Utc::now(),
                    cache_key,
                    data: payload,
                };
            }
            debug!(kind = kind.as_str(), key = %cache_key, "cache miss");
        }

        let seed = derive_key(fields);
        let resolution = chain
            .resolve(idea, || self.engine.generate(kind, &seed, idea))
            .await;

        if let Err(e) = cache.set(&cache_key, resolution.payload.clone()).await {
            // A failed write only costs the next request a recompute.
            warn!(kind = kind.as_str(), "failed to store analysis result: {}", e);
        }

        AnalysisReport {
            source: ResultSource::Live,
            generated_at: Utc::now(),
            cache_key,
            data: resolution.payload,
        }
    }

    pub async fn cache_sizes(&self) -> CacheSizes {
        CacheSizes {
            risk: self.risk_cache.size().await,
            competitor: self.competitor_cache.size().await,
            brainstorm: self.brainstorm_cache.size().await,
            swot: self.swot_cache.size().await,
        }
    }

    /// Configured/unconfigured state of every known provider, for the
    /// health endpoint.
    pub fn available_apis(&self) -> BTreeMap<&'static str, bool> {
        let mut apis = BTreeMap::new();
        for chain in [
            &self.competitor_chain,
            &self.brainstorm_chain,
            &self.risk_chain,
            &self.swot_chain,
        ] {
            for provider in chain.providers() {
                apis.insert(provider.name(), provider.is_available());
            }
        }
        apis
    }
}
