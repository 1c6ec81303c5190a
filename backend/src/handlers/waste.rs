//! Waste type catalog handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use shared::WasteType;

use crate::error::AppError;
use crate::services::catalog::{WasteCategoryGroup, WasteTypeDetail};
use crate::services::CatalogService;
use crate::AppState;

#[derive(Deserialize)]
pub struct ListWasteTypesQuery {
    pub category: Option<String>,
}

/// List waste types, optionally filtered by category
pub async fn list_waste_types(
    State(state): State<AppState>,
    Query(query): Query<ListWasteTypesQuery>,
) -> Result<Json<Vec<&'static WasteType>>, AppError> {
    let service = CatalogService::new(state.engine.clone());
    let wastes = service.list_waste_types(query.category.as_deref())?;
    Ok(Json(wastes))
}

/// List waste types grouped by category
pub async fn list_waste_categories(State(state): State<AppState>) -> Json<Vec<WasteCategoryGroup>> {
    let service = CatalogService::new(state.engine.clone());
    Json(service.grouped_waste_types())
}

/// Get a waste type with its stream profile
pub async fn get_waste_type(
    State(state): State<AppState>,
    Path(waste_type_id): Path<String>,
) -> Result<Json<WasteTypeDetail>, AppError> {
    let service = CatalogService::new(state.engine.clone());
    let detail = service.get_waste_type(&waste_type_id)?;
    Ok(Json(detail))
}
