use axum::{extract::State, routing::post, Json, Router};
use analysis_core::AnalysisReport;

use crate::{AnalysisRequest, ApiResponse, AppError, AppState};

pub fn risk_routes() -> Router<AppState> {
    Router::new().route("/api/risk", post(assess_risk))
}

/// Deterministic risk assessment for an idea. Results persist until the
/// caller forces a refresh.
async fn assess_risk(
    State(state): State<AppState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<ApiResponse<AnalysisReport>>, AppError> {
    req.require(&["industry", "location", "audience"])?;

    let force_fresh = req.force_fresh;
    let idea = req.into_idea();
    let report = state.orchestrator.analyze_risk(&idea, force_fresh).await;

    Ok(Json(ApiResponse::success(report)))
}
