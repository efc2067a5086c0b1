use analysis_core::AnalysisError;
use async_trait::async_trait;
use serde_json::Value;

/// Common contract for cache backends.
///
/// Backends must be externally indistinguishable: same get/set/delete and
/// TTL semantics whether entries live in memory or on disk. Payloads are
/// JSON values; entries are replaced on refresh, never mutated in place.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the payload, or `None` if absent or expired. Expired
    /// entries are deleted on detection (lazy eviction).
    async fn get(&self, key: &str) -> Option<Value>;

    /// Upserts the entry with `created_at = now`.
    async fn set(&self, key: &str, value: Value) -> Result<(), AnalysisError>;

    async fn delete(&self, key: &str) -> Result<(), AnalysisError>;

    /// Entry count, diagnostic only.
    async fn size(&self) -> usize;
}
