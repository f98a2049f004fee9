use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;
use validator::Validate;

use crate::food::error::FoodError;
use crate::food::models::{AnalysisReport, AnalysisRequest};
use crate::food::FoodAnalyzer;

/// Largest accepted request body. Leaves room for JSON framing around a
/// maximum-size image payload.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;
/// In-flight requests across all routes.
const MAX_CONCURRENT_REQUESTS: usize = 64;

const GENERIC_FAILURE: &str = "영양 분석 중 오류가 발생했습니다.";

#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<FoodAnalyzer>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[validate(length(max = 15000000))]
    image: Option<String>,
    #[validate(length(max = 100))]
    food_name: Option<String>,
}

impl From<AnalyzeRequest> for AnalysisRequest {
    fn from(request: AnalyzeRequest) -> Self {
        AnalysisRequest {
            image: request.image,
            food_name: request.food_name,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<FoodError> for ApiError {
    fn from(err: FoodError) -> Self {
        match err {
            FoodError::InvalidInput(message) => ApiError::BadRequest(message),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(detail) => {
                error!(error = %detail, "Nutrition analysis failed");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Create and configure the API router
pub fn create_api(analyzer: Arc<FoodAnalyzer>) -> Router {
    build_router(analyzer, MAX_CONCURRENT_REQUESTS)
}

fn build_router(analyzer: Arc<FoodAnalyzer>, max_concurrent: usize) -> Router {
    let state = AppState { analyzer };

    // Fully permissive CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .route("/api/foods", get(foods_handler))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        // One semaphore shared by every route
        .layer(GlobalConcurrencyLimitLayer::new(max_concurrent))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let request_id = Uuid::new_v4();
    let span = info_span!("analyze", %request_id);
    async move {
        let request = AnalysisRequest::from(request);
        info!(
            has_image = request.image().is_some(),
            food_name = request.food_name().unwrap_or(""),
            "Analyzing food"
        );
        let report = state.analyzer.analyze(&request).await?;
        info!(food = %report.food, source = ?report.source, "Analysis complete");
        Ok::<_, ApiError>(Json(report))
    }
    .instrument(span)
    .await
}

async fn foods_handler(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.analyzer.food_names())
}

async fn health_check() -> Response {
    Json(json!({ "status": "ok" })).into_response()
}
