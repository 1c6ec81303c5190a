//! Recommendation handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::services::recommendation::{RecommendationReport, RecommendationRequest};
use crate::services::RecommendationService;
use crate::AppState;

#[derive(Deserialize)]
pub struct RecommendationQuery {
    pub limit: Option<usize>,
}

/// Rank every conversion pathway for a waste stream
pub async fn create_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
    Json(body): Json<RecommendationRequest>,
) -> Result<Json<RecommendationReport>, AppError> {
    let service =
        RecommendationService::new(state.engine.clone(), state.config.scoring.max_results);
    let report = service.recommend(body, query.limit)?;
    Ok(Json(report))
}
