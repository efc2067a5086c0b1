//! Deterministic analysis fabrication.
//!
//! When no external data source is available the platform still has to
//! answer, and repeated requests for the same idea must get the same
//! answer. Every value produced here is a pure function of the caller's
//! seed hash — no clock, no entropy — so the cached and freshly
//! regenerated paths always agree, across processes and restarts.

pub mod brainstorm;
pub mod catalog;
pub mod competitors;
pub mod risk;
pub mod seed;
pub mod swot;


pub use seed::SeededRng;

use analysis_core::{AnalysisKind, IdeaProfile};
use serde_json::{json, Value};

/// Engine producing reproducible analysis payloads from a seed hash.
///
/// Each payload field is derived under its own domain name so fields are
/// decorrelated from each other while the whole object stays stable for a
/// given seed.
#[derive(Default)]
pub struct SyntheticAnalysisEngine;

impl SyntheticAnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn risk_assessment(&self, seed: &str, idea: &IdeaProfile) -> analysis_core::RiskAssessment {
        risk::generate(seed, idea)
    }

    pub fn competitor_analysis(
        &self,
        seed: &str,
        idea: &IdeaProfile,
    ) -> analysis_core::CompetitorAnalysis {
        competitors::generate(seed, idea)
    }

    pub fn swot_analysis(&self, seed: &str, idea: &IdeaProfile) -> analysis_core::SwotAnalysis {
        swot::generate(seed, idea)
    }

    pub fn brainstorm(&self, seed: &str, idea: &IdeaProfile) -> analysis_core::BrainstormAnalysis {
        brainstorm::generate(seed, idea)
    }

    /// Dispatch by analysis kind, returning the payload as JSON. This is
    /// the terminal fallback of every chain and cannot fail.
    pub fn generate(&self, kind: AnalysisKind, seed: &str, idea: &IdeaProfile) -> Value {
        let payload = match kind {
            AnalysisKind::Risk => serde_json::to_value(self.risk_assessment(seed, idea)),
            AnalysisKind::Competitor => serde_json::to_value(self.competitor_analysis(seed, idea)),
            AnalysisKind::Brainstorm => serde_json::to_value(self.brainstorm(seed, idea)),
            AnalysisKind::Swot => serde_json::to_value(self.swot_analysis(seed, idea)),
        };
        payload.unwrap_or_else(|_| json!({}))
    }
}
