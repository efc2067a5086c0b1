use crate::catalog::{SWOT_OPPORTUNITIES, SWOT_STRENGTHS, SWOT_THREATS, SWOT_WEAKNESSES};
use crate::seed::SeededRng;
use analysis_core::{IdeaProfile, SwotAnalysis};

fn quadrant(seed: &str, domain: &str, pool: &[&str], count: usize) -> Vec<String> {
    SeededRng::for_domain(seed, domain)
        .sample(pool, count)
        .into_iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn generate(seed: &str, idea: &IdeaProfile) -> SwotAnalysis {
    let mut swot = SwotAnalysis {
        strengths: quadrant(seed, "swot_strengths", SWOT_STRENGTHS, 3),
        weaknesses: quadrant(seed, "swot_weaknesses", SWOT_WEAKNESSES, 3),
        opportunities: quadrant(seed, "swot_opportunities", SWOT_OPPORTUNITIES, 3),
        threats: quadrant(seed, "swot_threats", SWOT_THREATS, 3),
    };

    // Anchor one entry to the idea itself so the quadrant reads specific,
    // not generic. Still deterministic: pure string interpolation.
    let industry = idea.industry.trim();
    if !industry.is_empty() {
        swot.opportunities.insert(
            0,
            format!("Growing demand for {} offerings", industry.to_lowercase()),
        );
    }
    let location = idea.location.trim();
    if !location.is_empty() {
        swot.strengths
            .insert(0, format!("Early-mover position in {}", location));
    }

    swot
}
