use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A startup idea as submitted for validation.
///
/// `audience` and `description` default to empty strings when the client
/// omits them — downstream key derivation treats missing and empty the same.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaProfile {
    pub industry: String,
    pub location: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub description: String,
}

impl IdeaProfile {
    /// Fields in the fixed order used for full-context cache keys.
    /// The order is part of the caching contract — never reorder.
    pub fn key_fields(&self) -> [&str; 4] {
        [
            &self.industry,
            &self.location,
            &self.audience,
            &self.description,
        ]
    }

    /// Fields for the competitor cache key. Competitor landscapes change
    /// with industry and geography, not with the pitch wording, so audience
    /// and description are intentionally excluded.
    pub fn competitor_key_fields(&self) -> [&str; 2] {
        [&self.industry, &self.location]
    }
}

/// The analysis families served by the API. Each gets its own cache
/// namespace so identical idea fields never collide across families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    Risk,
    Competitor,
    Brainstorm,
    Swot,
}

impl AnalysisKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Risk => "risk",
            AnalysisKind::Competitor => "competitor",
            AnalysisKind::Brainstorm => "brainstorm",
            AnalysisKind::Swot => "swot",
        }
    }
}

/// Risk banding for a 0-100 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Band a 0-100 score: below 40 is Low, below 70 Medium, else High.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s < 40 => RiskLevel::Low,
            s if s < 70 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }

    pub fn to_label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Market direction for an industry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Growing,
    Stable,
    Declining,
}

/// Coarse market mood for an industry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketSentiment {
    Positive,
    Neutral,
    Negative,
}

/// Risk assessment payload for an idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub legal_risk: u32,
    pub technical_risk: u32,
    pub market_risk: u32,
    pub overall_risk_score: u32,
    pub overall_risk_level: RiskLevel,
    pub recommendations: Vec<String>,
}

/// A single competitor in the landscape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub founded_year: i32,
    pub funding_stage: String,
    pub estimated_market_share: u32,
    pub strength: String,
}

/// Summary view over the competitor list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorSummary {
    pub total_competitors: u32,
    pub market_saturation: String,
    pub entry_difficulty: String,
    pub suggested_positioning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorAnalysis {
    pub competitors: Vec<Competitor>,
    pub analysis: CompetitorSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwotAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

/// Industry-level view used by the brainstorm endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryAnalysis {
    pub market_size: String,
    pub growth_rate_pct: u32,
    pub trend: TrendDirection,
    pub sentiment: MarketSentiment,
    pub key_players: Vec<String>,
}

/// Business-strategy half of the brainstorm payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyAnalysis {
    pub go_to_market: String,
    pub monetization: String,
    pub differentiators: Vec<String>,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrainstormAnalysis {
    pub industry: IndustryAnalysis,
    pub strategy: StrategyAnalysis,
}

/// Where a served payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    Cached,
    Live,
}

/// Envelope returned by every analysis endpoint: the payload plus
/// traceability metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub source: ResultSource,
    pub generated_at: DateTime<Utc>,
    pub cache_key: String,
    pub data: serde_json::Value,
}
