use crate::catalog::{
    COMPANY_PREFIXES, COMPANY_SUFFIXES, COMPETITOR_STRENGTHS, ENTRY_DIFFICULTY, FUNDING_STAGES,
    MARKET_SATURATION, POSITIONING,
};
use crate::seed::{pick, score_in_range, SeededRng};
use analysis_core::{Competitor, CompetitorAnalysis, CompetitorSummary, IdeaProfile};

/// Title-case the first word of the industry for use in company names.
fn industry_word(idea: &IdeaProfile) -> String {
    let word = idea
        .industry
        .split_whitespace()
        .next()
        .unwrap_or("Venture");
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => "Venture".to_string(),
    }
}

pub fn generate(seed: &str, idea: &IdeaProfile) -> CompetitorAnalysis {
    let count = score_in_range(seed, "competitor_count", 3, 7) as usize;
    let industry = industry_word(idea);

    let mut rng = SeededRng::for_domain(seed, "competitor_roster");
    let mut competitors: Vec<Competitor> = Vec::with_capacity(count);
    let mut remaining_share = 70u32;

    while competitors.len() < count {
        let name = if rng.next_index(2) == 0 {
            format!("{} {}", COMPANY_PREFIXES[rng.next_index(COMPANY_PREFIXES.len())], industry)
        } else {
            format!("{}{}", industry, COMPANY_SUFFIXES[rng.next_index(COMPANY_SUFFIXES.len())])
        };
        if competitors.iter().any(|c| c.name == name) {
            continue;
        }

        // Earlier entries in the roster are the bigger incumbents.
        let share = (remaining_share / 2).max(2).min(remaining_share.max(1));
        remaining_share = remaining_share.saturating_sub(share);

        competitors.push(Competitor {
            name,
            founded_year: 2008 + rng.next_index(15) as i32,
            funding_stage: FUNDING_STAGES[rng.next_index(FUNDING_STAGES.len())].to_string(),
            estimated_market_share: share,
            strength: COMPETITOR_STRENGTHS[rng.next_index(COMPETITOR_STRENGTHS.len())].to_string(),
        });
    }

    let analysis = CompetitorSummary {
        total_competitors: count as u32,
        market_saturation: pick(seed, "market_saturation", MARKET_SATURATION).to_string(),
        entry_difficulty: pick(seed, "entry_difficulty", ENTRY_DIFFICULTY).to_string(),
        suggested_positioning: pick(seed, "positioning", POSITIONING).to_string(),
    };

    CompetitorAnalysis {
        competitors,
        analysis,
    }
}
