use analysis_core::{AnalysisError, AnalysisProvider, IdeaProfile};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ResearchRequest<'a> {
    industry: &'a str,
    location: &'a str,
    audience: &'a str,
    description: &'a str,
}

/// Client for an external market-research service that, given an idea,
/// returns a full brainstorm analysis as JSON. Optional: when no URL is
/// configured the brainstorm chain goes straight to the engine.
#[derive(Clone)]
pub struct MarketResearchClient {
    client: Client,
    base_url: Option<String>,
}

impl MarketResearchClient {
    pub fn new(base_url: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, base_url }
    }
}

#[async_trait]
impl AnalysisProvider for MarketResearchClient {
    fn name(&self) -> &'static str {
        "market_research"
    }

    fn is_available(&self) -> bool {
        self.base_url.is_some()
    }

    async fn fetch(&self, idea: &IdeaProfile) -> Result<serde_json::Value, AnalysisError> {
        let base_url = self
            .base_url
            .as_ref()
            .ok_or_else(|| AnalysisError::Provider("market research not configured".into()))?;

        let request = ResearchRequest {
            industry: &idea.industry,
            location: &idea.location,
            audience: &idea.audience,
            description: &idea.description,
        };

        let response = self
            .client
            .post(format!("{}/v1/research", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::Provider(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AnalysisError::Provider(format!(
                "research HTTP {}",
                response.status()
            )));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| AnalysisError::Provider(format!("research parse: {}", e)))
    }
}
