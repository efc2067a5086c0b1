use crate::{CachePolicy, CacheStore};
use analysis_core::AnalysisError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde_json::Value;
use tracing::debug;

struct StoredEntry {
    value: Value,
    created_at: DateTime<Utc>,
}

/// In-process cache backend on a concurrent map.
///
/// Constructed once at startup and injected; there is no module-scope
/// state. Concurrent writers for the same key race last-write-wins, which
/// is acceptable because recomputation is deterministic.
pub struct MemoryCache {
    entries: DashMap<String, StoredEntry>,
    policy: CachePolicy,
}

impl MemoryCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            entries: DashMap::new(),
            policy,
        }
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Option<Value> {
        match self.entries.get(key) {
            Some(entry) => {
                if !self.policy.is_expired(entry.created_at) {
                    return Some(entry.value.clone());
                }
            }
            None => return None,
        }

        // Expired: the read guard is out of scope here, safe to remove.
        self.entries.remove(key);
        debug!(key, "evicted expired cache entry");
        None
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), AnalysisError> {
        self.entries.insert(
            key.to_string(),
            StoredEntry {
                value,
                created_at: Utc::now(),
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), AnalysisError> {
        self.entries.remove(key);
        Ok(())
    }

    async fn size(&self) -> usize {
        self.entries.len()
    }
}
