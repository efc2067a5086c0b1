use crate::catalog::RISK_RECOMMENDATIONS;
use crate::seed::{score_in_range, SeededRng};
use analysis_core::{IdeaProfile, RiskAssessment, RiskLevel};

/// Fabricate a risk assessment for an idea.
///
/// Each axis gets its own domain name so the three scores move
/// independently of each other for a given seed.
pub fn generate(seed: &str, _idea: &IdeaProfile) -> RiskAssessment {
    let legal_risk = score_in_range(seed, "legal_risk", 15, 90);
    let technical_risk = score_in_range(seed, "technical_risk", 15, 90);
    let market_risk = score_in_range(seed, "market_risk", 15, 90);

    let overall_risk_score = (legal_risk + technical_risk + market_risk) / 3;
    let overall_risk_level = RiskLevel::from_score(overall_risk_score);

    // Higher overall risk earns a longer recommendation list.
    let count = match overall_risk_level {
        RiskLevel::Low => 3,
        RiskLevel::Medium => 4,
        RiskLevel::High => 5,
    };
    let mut rng = SeededRng::for_domain(seed, "recommendations");
    let recommendations = rng
        .sample(RISK_RECOMMENDATIONS, count)
        .into_iter()
        .map(|r| r.to_string())
        .collect();

    RiskAssessment {
        legal_risk,
        technical_risk,
        market_risk,
        overall_risk_score,
        overall_risk_level,
        recommendations,
    }
}
