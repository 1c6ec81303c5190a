//! Facility directory lookups

use serde::Deserialize;
use shared::{
    all_facilities, facilities_by_location, facilities_by_pathway, facilities_by_waste_type,
    facility, nearest_facility, CoreError, Facility, FacilityDistance,
};

use crate::error::{AppError, AppResult};

/// Query filters for facility search. Filters combine with AND.
#[derive(Debug, Default, Deserialize)]
pub struct FacilitySearch {
    pub state: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub pathway: Option<String>,
    pub waste_type: Option<String>,
}

/// Query for the nearest facility
#[derive(Debug, Deserialize)]
pub struct NearestQuery {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lon")]
    pub longitude: f64,
    pub exclude_district: Option<String>,
}

#[derive(Clone, Default)]
pub struct FacilityService;

impl FacilityService {
    pub fn new() -> Self {
        Self
    }

    /// Search the directory
    pub fn search(&self, query: &FacilitySearch) -> AppResult<Vec<&'static Facility>> {
        let mut results: Vec<&'static Facility> = match (&query.state, &query.district) {
            (Some(state), Some(district)) => {
                facilities_by_location(state, district, query.city.as_deref())
            }
            (None, None) if query.city.is_none() => all_facilities().iter().collect(),
            _ => {
                return Err(AppError::Validation {
                    field: "district".to_string(),
                    message: "State and district must be given together".to_string(),
                })
            }
        };

        if let Some(pathway) = &query.pathway {
            let matching = facilities_by_pathway(pathway);
            results.retain(|f| matching.iter().any(|m| m.id == f.id));
        }
        if let Some(waste) = &query.waste_type {
            let matching = facilities_by_waste_type(waste);
            results.retain(|f| matching.iter().any(|m| m.id == f.id));
        }

        tracing::debug!("Facility search {:?} matched {}", query, results.len());
        Ok(results)
    }

    /// Get a facility by id
    pub fn get(&self, id: &str) -> AppResult<&'static Facility> {
        facility(id).ok_or_else(|| AppError::NotFound(format!("Facility {}", id)))
    }

    /// Nearest facility to a point
    pub fn nearest(&self, query: &NearestQuery) -> AppResult<FacilityDistance> {
        if !(-90.0..=90.0).contains(&query.latitude) {
            return Err(CoreError::validation("latitude", "Latitude must be between -90 and 90").into());
        }
        if !(-180.0..=180.0).contains(&query.longitude) {
            return Err(
                CoreError::validation("longitude", "Longitude must be between -180 and 180").into(),
            );
        }

        nearest_facility(
            query.latitude,
            query.longitude,
            query.exclude_district.as_deref(),
        )
        .ok_or_else(|| AppError::NotFound("Facility near the given point".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_search_returns_directory() {
        let all = FacilityService::new()
            .search(&FacilitySearch::default())
            .unwrap();
        assert_eq!(all.len(), all_facilities().len());
    }

    #[test]
    fn state_without_district_is_rejected() {
        let query = FacilitySearch {
            state: Some("Tamil Nadu".to_string()),
            ..Default::default()
        };
        assert!(FacilityService::new().search(&query).is_err());
    }

    #[test]
    fn pathway_filter_narrows_results() {
        let query = FacilitySearch {
            pathway: Some("composting".to_string()),
            ..Default::default()
        };
        let results = FacilityService::new().search(&query).unwrap();
        assert!(!results.is_empty());
        assert!(results.iter().all(|f| f
            .pathways_supported
            .iter()
            .any(|p| p.eq_ignore_ascii_case("composting"))));
    }

    #[test]
    fn nearest_rejects_bad_latitude() {
        let query = NearestQuery {
            latitude: 123.0,
            longitude: 77.0,
            exclude_district: None,
        };
        assert!(FacilityService::new().nearest(&query).is_err());
    }

    #[test]
    fn nearest_to_coimbatore_is_local() {
        let query = NearestQuery {
            latitude: 11.0086,
            longitude: 76.9960,
            exclude_district: None,
        };
        let found = FacilityService::new().nearest(&query).unwrap();
        assert_eq!(found.facility.id, "f1");
        assert!(found.distance_km < 1.0);
    }
}
