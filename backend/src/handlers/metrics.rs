//! Pathway metrics handlers

use axum::Json;

use crate::error::AppError;
use crate::services::metrics::{PathwayMetricsRequest, PathwayMetricsResponse};
use crate::services::MetricsService;

/// Calculate biogas, compost and briquette metrics for a waste quantity
pub async fn calculate_metrics(
    Json(body): Json<PathwayMetricsRequest>,
) -> Result<Json<PathwayMetricsResponse>, AppError> {
    let response = MetricsService::new().calculate(body)?;
    Ok(Json(response))
}
