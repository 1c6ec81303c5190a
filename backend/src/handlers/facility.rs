//! Facility directory handlers

use axum::{
    extract::{Path, Query},
    Json,
};
use shared::{Facility, FacilityDistance};

use crate::error::AppError;
use crate::services::facility::{FacilitySearch, NearestQuery};
use crate::services::FacilityService;

/// Search facilities by location, pathway or accepted waste
pub async fn list_facilities(
    Query(query): Query<FacilitySearch>,
) -> Result<Json<Vec<&'static Facility>>, AppError> {
    let facilities = FacilityService::new().search(&query)?;
    Ok(Json(facilities))
}

/// Get a facility by id
pub async fn get_facility(
    Path(facility_id): Path<String>,
) -> Result<Json<&'static Facility>, AppError> {
    let facility = FacilityService::new().get(&facility_id)?;
    Ok(Json(facility))
}

/// Find the facility closest to a point
pub async fn nearest_facility(
    Query(query): Query<NearestQuery>,
) -> Result<Json<FacilityDistance>, AppError> {
    let nearest = FacilityService::new().nearest(&query)?;
    Ok(Json(nearest))
}
