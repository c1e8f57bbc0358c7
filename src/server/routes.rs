//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::classify::Classification;
use crate::coord::Coordinates;
use crate::constants::files::AUDIO_CONTENT_TYPE;
use crate::error::Error;
use crate::server::state::AppState;
use crate::tracker::{InertStatus, LandmarkStatus, MarkOutcome, Recognition};

use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    let public_dir = state.config.server.public_dir.clone();
    let static_dir = state.config.server.static_dir.clone();
    let upload_limit = DefaultBodyLimit::max(state.config.server.max_upload_bytes);

    Router::new()
        .route("/send-location", post(send_location_handler))
        .route("/audio/:filename", get(audio_handler))
        .route("/current-label", get(current_label_handler))
        .route(
            "/classify-image",
            post(classify_image_handler).layer(upload_limit),
        )
        .route("/api/landmarks", get(landmarks_handler))
        .route("/api/status", get(status_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>, code: &str) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::InvalidFileName(_) => "INVALID_FILE_NAME",
            Error::Synthesis(_) => "SYNTHESIS_ERROR",
            Error::Classification(_) => "CLASSIFICATION_ERROR",
            Error::MalformedOutput(_) => "MALFORMED_OUTPUT",
            Error::Upload(_) => "UPLOAD_SAVE_ERROR",
            Error::Config(_) => "CONFIG_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError::new(err.to_string(), code)
    }
}

/// Location request body
#[derive(Debug, Deserialize)]
pub struct LocationRequest {
    pub latitude: f64,
    pub longitude: f64,
}

/// Location response
#[derive(Debug, Serialize, Deserialize)]
pub struct LocationResponse {
    /// Spoken guidance text
    pub message: String,
    /// Where to fetch the spoken message; absent if synthesis failed
    #[serde(rename = "audioUrl", default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

/// Announce the nearest unvisited landmarks
///
/// POST /send-location
async fn send_location_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LocationRequest>,
) -> Result<Json<LocationResponse>, ApiError> {
    let current = Coordinates::new(req.latitude, req.longitude);
    current.validate().map_err(ApiError::from)?;

    info!("Received location: {}, {}", req.latitude, req.longitude);

    let ranking = state.rank(current).await;

    // Fall back to the text message when synthesis fails
    let audio_url = match state.synthesizer().speak(&ranking.message).await {
        Ok(clip) => {
            let url = clip.url();
            info!("Audio generated: {}", url);
            Some(url)
        }
        Err(e) => {
            error!("Speech synthesis via {} failed: {}", state.synthesizer().name(), e);
            None
        }
    };

    Ok(Json(LocationResponse {
        message: ranking.message,
        audio_url,
    }))
}

/// Serve a generated audio clip once, then delete it
///
/// GET /audio/:filename
async fn audio_handler(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, Json<ApiError>)> {
    match state.audio().take(&filename).await {
        Ok(bytes) => Ok(([(header::CONTENT_TYPE, AUDIO_CONTENT_TYPE)], bytes)),
        Err(e @ Error::InvalidFileName(_)) => {
            Err((StatusCode::BAD_REQUEST, Json(ApiError::from(e))))
        }
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Err((
            StatusCode::NOT_FOUND,
            Json(ApiError::new(format!("Audio file not found: {}", filename), "NOT_FOUND")),
        )),
        Err(e) => {
            error!("Error sending audio file {}: {}", filename, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("Failed to send audio", "INTERNAL_ERROR")),
            ))
        }
    }
}

/// Current recognition for the display client
///
/// GET /current-label
async fn current_label_handler(State(state): State<Arc<AppState>>) -> Json<Recognition> {
    Json(state.current_recognition().await)
}

/// Classify an uploaded image and update guide state
///
/// POST /classify-image (multipart field `image`)
async fn classify_image_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<Classification>, (StatusCode, Json<ApiError>)> {
    let mut image = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        (StatusCode::BAD_REQUEST, Json(ApiError::new(e.to_string(), "INVALID_UPLOAD")))
    })? {
        if field.name() == Some("image") {
            let bytes = field.bytes().await.map_err(|e| {
                (StatusCode::BAD_REQUEST, Json(ApiError::new(e.to_string(), "INVALID_UPLOAD")))
            })?;
            image = Some(bytes);
            break;
        }
    }

    let image = image.ok_or_else(|| {
        (StatusCode::BAD_REQUEST, Json(ApiError::new("No image uploaded", "NO_IMAGE")))
    })?;

    let classification = match state.classifier().classify(&image).await {
        Ok(classification) => classification,
        Err(Error::MalformedOutput(details)) => {
            error!("Failed to parse classifier output: {}", details);
            let mut err = ApiError::new(
                "Invalid response from classification script",
                "MALFORMED_OUTPUT",
            );
            err.details = Some(details);
            return Err((StatusCode::INTERNAL_SERVER_ERROR, Json(err)));
        }
        Err(e @ Error::Upload(_)) => {
            error!("{}", e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("Failed to save uploaded image", "UPLOAD_SAVE_ERROR")),
            ));
        }
        Err(e) => {
            error!("Classifier {} failed: {}", state.classifier().name(), e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("Image classification failed", "CLASSIFICATION_ERROR")),
            ));
        }
    };

    if let Some(outcome) = state.record_classification(&classification).await {
        let label = classification.label().unwrap_or_default();
        info!("Display update: {}", label);
        match outcome {
            MarkOutcome::Visited => info!("Landmark visited: {}", label),
            MarkOutcome::Unknown => warn!("Recognized label is not a landmark: {}", label),
            MarkOutcome::AlreadyVisited | MarkOutcome::Inert => {}
        }
    }

    Ok(Json(classification))
}

/// Landmarks list response
#[derive(Debug, Serialize)]
pub struct LandmarksResponse {
    pub landmarks: Vec<LandmarkStatus>,
    pub count: usize,
    pub visited: usize,
    /// Tracked keys that are never announced
    pub extra_tracked: Vec<InertStatus>,
}

/// List landmarks with their visited flags
///
/// GET /api/landmarks
async fn landmarks_handler(State(state): State<Arc<AppState>>) -> Json<LandmarksResponse> {
    let (landmarks, visited) = state.landmark_statuses().await;
    Json(LandmarksResponse {
        count: landmarks.len(),
        landmarks,
        visited,
        extra_tracked: state.inert_statuses().await,
    })
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Number of landmarks in the gazetteer
    pub landmarks: usize,
    /// Number of visited landmarks
    pub visited: usize,
    /// Most recently recognized label (empty if none yet)
    pub current_label: String,
    /// When the server started
    pub started_at: DateTime<Utc>,
    /// Uptime in seconds
    pub uptime_secs: u64,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (landmarks, visited) = state.landmark_statuses().await;
    let recognition = state.current_recognition().await;
    let started_at = state.started_at();
    let uptime_secs = (Utc::now() - started_at).num_seconds().max(0) as u64;

    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        landmarks: landmarks.len(),
        visited,
        current_label: recognition.label,
        started_at,
        uptime_secs,
    })
}
