use analysis_core::{AnalysisProvider, IdeaProfile};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Outcome of a chain resolution: the payload plus which provider (if any)
/// produced it. `provider: None` means the deterministic fallback ran.
pub struct Resolution {
    pub payload: Value,
    pub provider: Option<&'static str>,
}

/// Ordered sequence of data-source attempts ending in a guaranteed-success
/// deterministic generator.
///
/// Provider errors, timeouts and empty results all mean "try the next
/// one" and are never propagated. The chain holds no cache state — caching
/// is layered on top by the orchestrator.
pub struct FallbackChain {
    providers: Vec<Arc<dyn AnalysisProvider>>,
    provider_timeout: Duration,
}

impl FallbackChain {
    pub fn new(providers: Vec<Arc<dyn AnalysisProvider>>, provider_timeout: Duration) -> Self {
        Self {
            providers,
            provider_timeout,
        }
    }

    pub fn providers(&self) -> &[Arc<dyn AnalysisProvider>] {
        &self.providers
    }

    /// A result is usable iff well-formed and non-empty.
    fn is_usable(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Object(map) => !map.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        }
    }

    /// Try providers strictly in order; the first usable result wins. If
    /// every provider fails, `fallback` supplies the result — it is pure
    /// and cannot fail, so resolution always terminates with a payload.
    pub async fn resolve<F>(&self, idea: &IdeaProfile, fallback: F) -> Resolution
    where
        F: FnOnce() -> Value,
    {
        for provider in &self.providers {
            let name = provider.name();
            if !provider.is_available() {
                debug!(provider = name, "skipping unconfigured provider");
                continue;
            }

            match tokio::time::timeout(self.provider_timeout, provider.fetch(idea)).await {
                Ok(Ok(payload)) if Self::is_usable(&payload) => {
                    info!(provider = name, "provider returned a usable result");
                    return Resolution {
                        payload,
                        provider: Some(name),
                    };
                }
                Ok(Ok(_)) => warn!(provider = name, "provider returned an empty result"),
                Ok(Err(e)) => warn!(provider = name, "provider failed: {}", e),
                Err(_) => warn!(
                    provider = name,
                    timeout_secs = self.provider_timeout.as_secs(),
                    "provider timed out"
                ),
            }
        }

        debug!("all providers exhausted, using deterministic fallback");
        Resolution {
            payload: fallback(),
            provider: None,
        }
    }
}
