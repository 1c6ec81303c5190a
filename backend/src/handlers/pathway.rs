//! Conversion pathway catalog handlers

use axum::{
    extract::{Path, State},
    Json,
};
use shared::ConversionPathway;

use crate::error::AppError;
use crate::services::CatalogService;
use crate::AppState;

/// List all conversion pathways
pub async fn list_pathways(State(state): State<AppState>) -> Json<Vec<ConversionPathway>> {
    let service = CatalogService::new(state.engine.clone());
    Json(service.list_pathways().to_vec())
}

/// Get a conversion pathway by id
pub async fn get_pathway(
    State(state): State<AppState>,
    Path(pathway_id): Path<String>,
) -> Result<Json<ConversionPathway>, AppError> {
    let service = CatalogService::new(state.engine.clone());
    let pathway = service.get_pathway(&pathway_id)?;
    Ok(Json(pathway))
}
