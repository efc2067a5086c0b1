use analysis_orchestrator::OrchestratorConfig;
use std::path::PathBuf;
use std::time::Duration;

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Server configuration, read once at startup. TTLs are deliberately
/// configuration rather than cache internals.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub competitor_cache_dir: PathBuf,
    pub brainstorm_ttl_hours: i64,
    pub competitor_ttl_days: i64,
    pub provider_timeout_secs: u64,
    pub competitor_api_url: String,
    pub competitor_api_key: Option<String>,
    pub market_research_url: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            port: env_parse("PORT", 8080),
            competitor_cache_dir: std::env::var("CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("cache")),
            brainstorm_ttl_hours: env_parse("BRAINSTORM_CACHE_TTL_HOURS", 24),
            competitor_ttl_days: env_parse("COMPETITOR_CACHE_TTL_DAYS", 7),
            provider_timeout_secs: env_parse("PROVIDER_TIMEOUT_SECS", 8),
            competitor_api_url: std::env::var("COMPETITOR_API_URL")
                .unwrap_or_else(|_| "https://api.competitordirectory.io".to_string()),
            competitor_api_key: std::env::var("COMPETITOR_API_KEY").ok(),
            market_research_url: std::env::var("MARKET_RESEARCH_URL").ok(),
        }
    }

    pub fn orchestrator_config(&self) -> OrchestratorConfig {
        OrchestratorConfig {
            brainstorm_ttl: chrono::Duration::hours(self.brainstorm_ttl_hours),
            competitor_ttl: chrono::Duration::days(self.competitor_ttl_days),
            competitor_cache_dir: self.competitor_cache_dir.clone(),
            provider_timeout: Duration::from_secs(self.provider_timeout_secs),
        }
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }
}
