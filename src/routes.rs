use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::handlers::{handle_detect, handle_speak};
use crate::state::AppState;
use crate::types::{DetectResponse, SpeakResponse};

const SPEAK_FAILURE: &str = "Translation or detection failed";
const DETECT_FAILURE: &str = "Language detection failed";

pub fn create_routes(state: &AppState) -> Router<AppState> {
    let system_config = &state.config.system_config;

    Router::new()
        // Health check
        .route("/api/health", get(health_check))

        // Speech API
        .route("/speak", post(speak))
        .route("/detect", post(detect))

        // Front-end entry page and assets
        .route_service("/", ServeFile::new(system_config.index_path()))
        .fallback_service(ServeDir::new(system_config.static_path()))
}

/// Full application with middleware and state attached
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes(&state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn speak(State(state): State<AppState>, body: Bytes) -> Result<Json<SpeakResponse>, ApiError> {
    handle_speak(&state, &body)
        .await
        .map(Json)
        .map_err(|e| e.into_api_error(SPEAK_FAILURE))
}

async fn detect(State(state): State<AppState>, body: Bytes) -> Result<Json<DetectResponse>, ApiError> {
    handle_detect(&state, &body)
        .await
        .map(Json)
        .map_err(|e| e.into_api_error(DETECT_FAILURE))
}
