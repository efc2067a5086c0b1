//! HTTP clients for the external market-data collaborators.
//!
//! Both providers are optional: without credentials/URLs configured they
//! report unavailable and the fallback chain proceeds straight to the
//! deterministic engine.

pub mod competitor_directory;
pub mod market_research;

pub use competitor_directory::CompetitorDirectoryClient;
pub use market_research::MarketResearchClient;

use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Sliding-window rate limiter: at most `max_requests` per `window`.
/// Free tiers of company-data APIs are tightly limited.
#[derive(Clone)]
pub(crate) struct RateLimiter {
    timestamps: Arc<Mutex<VecDeque<Instant>>>,
    max_requests: usize,
    window: std::time::Duration,
}

impl RateLimiter {
    pub(crate) fn new(max_requests: usize, window: std::time::Duration) -> Self {
        Self {
            timestamps: Arc::new(Mutex::new(VecDeque::new())),
            max_requests,
            window,
        }
    }

    pub(crate) async fn acquire(&self) {
        loop {
            let mut ts = self.timestamps.lock().await;
            let now = Instant::now();

            while let Some(&front) = ts.front() {
                if now.duration_since(front) >= self.window {
                    ts.pop_front();
                } else {
                    break;
                }
            }

            if ts.len() < self.max_requests {
                ts.push_back(now);
                return;
            }

            let oldest = *ts.front().expect("non-empty after len check");
            let wait = self.window.saturating_sub(now.duration_since(oldest))
                + std::time::Duration::from_millis(50);
            drop(ts);
            tracing::debug!("rate limiter: waiting {:.1}s for API slot", wait.as_secs_f64());
            tokio::time::sleep(wait).await;
        }
    }
}
