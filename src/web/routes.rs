//! REST API routes for the web server
//!
//! Provides the detect-text upload endpoint and a health check.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::detect::{assemble_text, DetectError, SymbolDetector};
use crate::pipeline::{self, CleanError};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<dyn SymbolDetector>,
    pub version: String,
}

impl AppState {
    pub fn new(detector: Arc<dyn SymbolDetector>) -> Self {
        Self {
            detector,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Build the API router
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/detect-text", post(detect_text))
        .route("/health", get(health_check))
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub detector_ready: bool,
}

/// Health check endpoint
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        detector_ready: state.detector.is_ready(),
    })
}

/// Detect-text response
#[derive(Debug, Serialize)]
pub struct DetectTextResponse {
    pub detected_text: String,
}

/// Accept an uploaded image, clean it, run detection and return the
/// symbol labels concatenated left to right.
async fn detect_text(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<DetectTextResponse>, AppError> {
    let mut file_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("malformed multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("failed to read upload: {}", e)))?;
            file_data = Some(data.to_vec());
        }
    }

    let bytes = file_data.ok_or_else(|| AppError::BadRequest("no file uploaded".to_string()))?;
    info!(size = bytes.len(), "received detect-text upload");

    let cleaned = pipeline::clean_bytes(&bytes)?;
    let detections = state.detector.detect(&cleaned)?;
    let detected_text = assemble_text(&detections);

    info!(
        detections = detections.len(),
        text = %detected_text,
        "detection complete"
    );

    Ok(Json(DetectTextResponse { detected_text }))
}

/// API error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unavailable(String),
    Internal(String),
}

impl From<CleanError> for AppError {
    fn from(err: CleanError) -> Self {
        match err {
            CleanError::EmptyInput
            | CleanError::Decode(_)
            | CleanError::DegenerateInput { .. }
            | CleanError::Conversion(_) => AppError::BadRequest(err.to_string()),
        }
    }
}

impl From<DetectError> for AppError {
    fn from(err: DetectError) -> Self {
        match err {
            DetectError::Unavailable => AppError::Unavailable(err.to_string()),
            DetectError::Inference(_) => AppError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
