use crate::catalog::{
    COMPANY_PREFIXES, DIFFERENTIATORS, GO_TO_MARKET, MARKET_SIZES, MONETIZATION, NEXT_STEPS,
};
use crate::seed::{pick, score_in_range, SeededRng};
use analysis_core::{
    BrainstormAnalysis, IdeaProfile, IndustryAnalysis, MarketSentiment, StrategyAnalysis,
    TrendDirection,
};

const TRENDS: &[TrendDirection] = &[
    TrendDirection::Growing,
    TrendDirection::Stable,
    TrendDirection::Declining,
];

const SENTIMENTS: &[MarketSentiment] = &[
    MarketSentiment::Positive,
    MarketSentiment::Neutral,
    MarketSentiment::Negative,
];

fn industry_analysis(seed: &str, idea: &IdeaProfile) -> IndustryAnalysis {
    let trend = *pick(seed, "trend", TRENDS);

    // Growth rate tracks the trend so the object reads coherently.
    let growth_rate_pct = match trend {
        TrendDirection::Growing => score_in_range(seed, "growth_rate", 8, 35),
        TrendDirection::Stable => score_in_range(seed, "growth_rate", 2, 8),
        TrendDirection::Declining => score_in_range(seed, "growth_rate", 0, 2),
    };

    let industry = idea.industry.trim();
    let label = if industry.is_empty() { "the sector" } else { industry };
    let key_players = SeededRng::for_domain(seed, "key_players")
        .sample(COMPANY_PREFIXES, 3)
        .into_iter()
        .map(|prefix| format!("{} {}", prefix, label))
        .collect();

    IndustryAnalysis {
        market_size: pick(seed, "market_size", MARKET_SIZES).to_string(),
        growth_rate_pct,
        trend,
        sentiment: *pick(seed, "sentiment", SENTIMENTS),
        key_players,
    }
}

fn strategy_analysis(seed: &str) -> StrategyAnalysis {
    let mut diff_rng = SeededRng::for_domain(seed, "differentiators");
    let mut steps_rng = SeededRng::for_domain(seed, "next_steps");

    StrategyAnalysis {
        go_to_market: pick(seed, "go_to_market", GO_TO_MARKET).to_string(),
        monetization: pick(seed, "monetization", MONETIZATION).to_string(),
        differentiators: diff_rng
            .sample(DIFFERENTIATORS, 3)
            .into_iter()
            .map(|s| s.to_string())
            .collect(),
        next_steps: steps_rng
            .sample(NEXT_STEPS, 4)
            .into_iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

pub fn generate(seed: &str, idea: &IdeaProfile) -> BrainstormAnalysis {
    BrainstormAnalysis {
        industry: industry_analysis(seed, idea),
        strategy: strategy_analysis(seed),
    }
}
