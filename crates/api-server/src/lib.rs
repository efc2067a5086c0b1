use analysis_core::{AnalysisError, AnalysisProvider, IdeaProfile};
use analysis_orchestrator::AnalysisOrchestrator;
use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

mod brainstorm_routes;
mod competitor_routes;
mod config;
mod request_id;
mod risk_routes;
mod swot_routes;

#[cfg(test)]
mod routes_tests;

pub use config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<AnalysisOrchestrator>,
}

/// Standard response envelope for every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Request body shared by the analysis endpoints. All fields default so a
/// missing field becomes an empty string and fails our validation with a
/// 400 instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "forceFresh")]
    pub force_fresh: bool,
}

impl AnalysisRequest {
    /// Fail fast on missing required fields — before any hashing or cache
    /// interaction happens.
    pub fn require(&self, fields: &[&str]) -> Result<(), AppError> {
        for &name in fields {
            let value = match name {
                "industry" => &self.industry,
                "location" => &self.location,
                "audience" => &self.audience,
                "description" => &self.description,
                _ => continue,
            };
            if value.trim().is_empty() {
                return Err(AnalysisError::MissingField(name.to_string()).into());
            }
        }
        Ok(())
    }

    pub fn into_idea(self) -> IdeaProfile {
        IdeaProfile {
            industry: self.industry,
            location: self.location,
            audience: self.audience,
            description: self.description,
        }
    }
}

/// Neutral analysis served with a 500 so the UI never renders a bare
/// error. Unexpected failures should not happen — the generator is pure —
/// but if one does, the client still gets something it can display.
fn fallback_analysis() -> serde_json::Value {
    serde_json::json!({
        "overall_risk_level": "Medium",
        "overall_risk_score": 50,
        "recommendations": [
            "Analysis is temporarily unavailable; retry shortly",
            "Validate demand with customer interviews in the meantime"
        ],
        "degraded": true
    })
}

/// Error wrapper for handlers. Validation errors map to 400; everything
/// else is a 500 carrying a structured fallback payload.
pub struct AppError(anyhow::Error);

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(AnalysisError::MissingField(field)) = self.0.downcast_ref::<AnalysisError>() {
            let body = ApiResponse::<serde_json::Value>::error(format!(
                "Missing required field: {}",
                field
            ));
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }

        tracing::error!("unexpected failure serving analysis: {:#}", self.0);
        let body = serde_json::json!({
            "success": false,
            "error": "internal error",
            "fallback": fallback_analysis(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Assemble the router for the given state. Split out from `run_server`
/// so tests can drive the full stack in-process.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(risk_routes::risk_routes())
        .merge(competitor_routes::competitor_routes())
        .merge(brainstorm_routes::brainstorm_routes())
        .merge(swot_routes::swot_routes())
        .route("/health", get(health_handler))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Build the orchestrator with the configured external providers.
pub fn build_orchestrator(config: &ServerConfig) -> anyhow::Result<AnalysisOrchestrator> {
    let competitor_providers: Vec<Arc<dyn AnalysisProvider>> =
        vec![Arc::new(market_intel::CompetitorDirectoryClient::new(
            config.competitor_api_url.clone(),
            config.competitor_api_key.clone(),
            config.provider_timeout(),
        ))];
    let brainstorm_providers: Vec<Arc<dyn AnalysisProvider>> =
        vec![Arc::new(market_intel::MarketResearchClient::new(
            config.market_research_url.clone(),
            config.provider_timeout(),
        ))];

    let orchestrator = AnalysisOrchestrator::new(
        config.orchestrator_config(),
        competitor_providers,
        brainstorm_providers,
    )?;
    Ok(orchestrator)
}

pub async fn run_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let orchestrator = build_orchestrator(&config)?;
    let state = AppState {
        orchestrator: Arc::new(orchestrator),
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("analysis server listening on {}", addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
