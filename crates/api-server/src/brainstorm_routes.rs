use axum::{extract::State, routing::post, Json, Router};
use analysis_core::AnalysisReport;

use crate::{AnalysisRequest, ApiResponse, AppError, AppState};

pub fn brainstorm_routes() -> Router<AppState> {
    Router::new().route("/api/brainstorm", post(brainstorm).get(brainstorm_health))
}

/// Combined industry + business-strategy analysis, cached in memory for
/// 24 hours. `forceFresh` bypasses the read but the recomputed result is
/// written back, refreshing the entry.
async fn brainstorm(
    State(state): State<AppState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<ApiResponse<AnalysisReport>>, AppError> {
    req.require(&["industry", "location", "audience"])?;

    let force_fresh = req.force_fresh;
    let idea = req.into_idea();
    let report = state.orchestrator.brainstorm(&idea, force_fresh).await;

    Ok(Json(ApiResponse::success(report)))
}

/// Health/diagnostics: cache occupancy and which external APIs are
/// configured.
async fn brainstorm_health(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let sizes = state.orchestrator.cache_sizes().await;
    let available_apis = state.orchestrator.available_apis();

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "cacheSize": sizes.total(),
        "caches": sizes,
        "availableAPIs": available_apis,
    })))
}
