use crate::RateLimiter;
use analysis_core::{
    AnalysisError, AnalysisProvider, Competitor, CompetitorAnalysis, CompetitorSummary,
    IdeaProfile,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Company record as returned by the directory search API.
#[derive(Debug, Deserialize)]
struct DirectoryCompany {
    name: String,
    founded_year: Option<i32>,
    funding_stage: Option<String>,
    market_share_pct: Option<u32>,
    highlight: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DirectorySearchResponse {
    #[serde(default)]
    companies: Vec<DirectoryCompany>,
}

/// Crunchbase-style company search, queried by industry and location.
#[derive(Clone)]
pub struct CompetitorDirectoryClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    rate_limiter: RateLimiter,
}

impl CompetitorDirectoryClient {
    pub fn new(base_url: String, api_key: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        // Directory free tiers commonly allow ~30 searches a minute.
        let rate_limit: usize = std::env::var("COMPETITOR_API_RATE_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            client,
            base_url,
            api_key,
            rate_limiter: RateLimiter::new(rate_limit, Duration::from_secs(60)),
        }
    }

    async fn search(&self, idea: &IdeaProfile) -> Result<Vec<DirectoryCompany>, AnalysisError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| AnalysisError::Provider("competitor directory not configured".into()))?;

        self.rate_limiter.acquire().await;

        let url = format!("{}/v1/companies/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("industry", idea.industry.trim()),
                ("location", idea.location.trim()),
                ("api_key", api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AnalysisError::Provider(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AnalysisError::Provider(format!(
                "directory HTTP {}",
                response.status()
            )));
        }

        let parsed: DirectorySearchResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Provider(format!("directory parse: {}", e)))?;

        Ok(parsed.companies)
    }

    /// Summarize a live roster with simple banding rules.
    fn summarize(companies: &[Competitor]) -> CompetitorSummary {
        let total = companies.len();
        let saturation = match total {
            0..=2 => "low",
            3..=5 => "moderate",
            _ => "high",
        };
        let funded_incumbents = companies
            .iter()
            .filter(|c| matches!(c.funding_stage.as_str(), "Series B" | "Series C" | "Growth"))
            .count();
        let entry_difficulty = if funded_incumbents >= 2 {
            "high"
        } else if funded_incumbents == 1 {
            "moderate"
        } else {
            "low"
        };

        CompetitorSummary {
            total_competitors: total as u32,
            market_saturation: saturation.to_string(),
            entry_difficulty: entry_difficulty.to_string(),
            suggested_positioning: if funded_incumbents > 0 {
                "Avoid a feature race with funded incumbents; win a niche they underserve"
                    .to_string()
            } else {
                "Move fast to define the category before funded entrants arrive".to_string()
            },
        }
    }
}

#[async_trait]
impl AnalysisProvider for CompetitorDirectoryClient {
    fn name(&self) -> &'static str {
        "competitor_directory"
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn fetch(&self, idea: &IdeaProfile) -> Result<serde_json::Value, AnalysisError> {
        let companies = self.search(idea).await?;
        if companies.is_empty() {
            return Err(AnalysisError::Provider("no companies matched".into()));
        }

        let competitors: Vec<Competitor> = companies
            .into_iter()
            .map(|c| Competitor {
                name: c.name,
                founded_year: c.founded_year.unwrap_or(0),
                funding_stage: c.funding_stage.unwrap_or_else(|| "Unknown".to_string()),
                estimated_market_share: c.market_share_pct.unwrap_or(0),
                strength: c.highlight.unwrap_or_default(),
            })
            .collect();

        let analysis = Self::summarize(&competitors);
        serde_json::to_value(CompetitorAnalysis {
            competitors,
            analysis,
        })
        .map_err(|e| AnalysisError::Serialization(e.to_string()))
    }
}
