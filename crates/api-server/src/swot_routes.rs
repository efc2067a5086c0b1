use axum::{extract::State, routing::post, Json, Router};
use analysis_core::AnalysisReport;

use crate::{AnalysisRequest, ApiResponse, AppError, AppState};

pub fn swot_routes() -> Router<AppState> {
    Router::new().route("/api/swot", post(analyze_swot))
}

async fn analyze_swot(
    State(state): State<AppState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<ApiResponse<AnalysisReport>>, AppError> {
    req.require(&["industry", "location", "audience"])?;

    let force_fresh = req.force_fresh;
    let idea = req.into_idea();
    let report = state.orchestrator.analyze_swot(&idea, force_fresh).await;

    Ok(Json(ApiResponse::success(report)))
}
