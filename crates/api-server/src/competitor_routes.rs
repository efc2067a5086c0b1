use axum::{extract::State, routing::post, Json, Router};
use analysis_core::AnalysisReport;

use crate::{AnalysisRequest, ApiResponse, AppError, AppState};

pub fn competitor_routes() -> Router<AppState> {
    Router::new().route("/api/competitor-analysis", post(analyze_competitors))
}

/// Competitor landscape for (industry, location). Served from the shared
/// on-disk cache for a week before a fresh lookup; audience and
/// description don't participate in the key.
async fn analyze_competitors(
    State(state): State<AppState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<ApiResponse<AnalysisReport>>, AppError> {
    req.require(&["industry", "location"])?;

    let idea = req.into_idea();
    let report = state.orchestrator.analyze_competitors(&idea).await;

    Ok(Json(ApiResponse::success(report)))
}
