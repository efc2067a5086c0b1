use chrono::{DateTime, Duration, Utc};

/// Expiry policy for a cache instance.
///
/// TTLs differ per analysis type and are configuration, not cache
/// internals: brainstorm results live 24 hours, competitor landscapes 7
/// days, and risk/SWOT entries persist until explicitly refreshed.
#[derive(Debug, Clone, Copy)]
pub struct CachePolicy {
    ttl: Option<Duration>,
}

impl CachePolicy {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { ttl: Some(ttl) }
    }

    /// No automatic expiry — entries are replaced only by a forced refresh.
    pub fn persistent() -> Self {
        Self { ttl: None }
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// True once `now - created_at` exceeds the TTL.
    pub fn is_expired(&self, created_at: DateTime<Utc>) -> bool {
        match self.ttl {
            Some(ttl) => Utc::now() - created_at > ttl,
            None => false,
        }
    }
}
