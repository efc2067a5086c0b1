use crate::{AnalysisError, IdeaProfile};
use async_trait::async_trait;

/// Trait for external data providers tried by the fallback chain.
///
/// A provider either returns a usable JSON payload for the idea or fails;
/// failures are caught by the chain and mean "try the next provider".
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Short name used in logs and the health endpoint.
    fn name(&self) -> &'static str;

    /// Whether the provider is configured (credentials/URL present).
    fn is_available(&self) -> bool;

    async fn fetch(&self, idea: &IdeaProfile) -> Result<serde_json::Value, AnalysisError>;
}
