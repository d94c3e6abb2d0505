use super::state::AppState;
use crate::logic::CheckResponse;
use crate::models::{Recommendation, WalkReport};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// Request body for a walk check
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LocationData {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Recommendation plus display metrics, or `{"error": ...}` when the
/// weather fetch fails.
pub async fn check_weather(
    State(state): State<AppState>,
    Json(location): Json<LocationData>,
) -> Json<CheckResponse<WalkReport>> {
    let result = state
        .walk_check
        .check_weather(location.lat, location.lon)
        .await;
    Json(CheckResponse::from_result(result))
}

pub async fn check_weather_summary(
    State(state): State<AppState>,
    Json(location): Json<LocationData>,
) -> Json<CheckResponse<Recommendation>> {
    let result = state
        .walk_check
        .check_weather_summary(location.lat, location.lon)
        .await;
    Json(CheckResponse::from_result(result))
}
