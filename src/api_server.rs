// Axum API Server Module
//
// Purpose: thin HTTP adapter over the soil assessment engine.
// The engine is pure and cheap, so handlers call it inline.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::engine::{evaluate, SoilAssessment};
use crate::formatters::MarkdownFormatter;
use crate::validation::{SampleInput, ValidationReport};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/soil/analyze", post(analyze_soil))
        .route("/api/soil/report", post(soil_report))
        // Middleware (applied in reverse order)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let now = Utc::now();
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": now.to_rfc3339(),
        "uptime_seconds": (now - state.started_at).num_seconds(),
    }))
}

/// Assess a soil form, JSON in / JSON out
async fn analyze_soil(Json(payload): Json<SampleInput>) -> Result<Json<SoilAssessment>, AppError> {
    let assessment = evaluate(&payload)?;
    tracing::info!(
        quality = %assessment.quality,
        score = assessment.overall_score,
        "Soil sample analyzed"
    );
    Ok(Json(assessment))
}

/// Assess a soil form and return the markdown report
async fn soil_report(Json(payload): Json<SampleInput>) -> Result<impl IntoResponse, AppError> {
    let assessment = evaluate(&payload)?;
    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        MarkdownFormatter::format(&assessment),
    ))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Invalid(ValidationReport),
}

impl From<ValidationReport> for AppError {
    fn from(report: ValidationReport) -> Self {
        AppError::Invalid(report)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::Invalid(report) => {
                tracing::debug!(invalid_fields = report.len(), "Rejected soil sample");
                let body = Json(serde_json::json!({
                    "error": "validation failed",
                    "errors": report,
                }));
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
        }
    }
}
