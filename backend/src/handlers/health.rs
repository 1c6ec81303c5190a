//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;
use shared::{all_facilities, WASTE_TYPES};

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub waste_types: usize,
    pub pathways: usize,
    pub facilities: usize,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        waste_types: WASTE_TYPES.len(),
        pathways: state.engine.pathways().len(),
        facilities: all_facilities().len(),
    })
}
