//! Read-only access to the waste property table and pathway catalog

use std::sync::Arc;

use serde::Serialize;
use shared::{
    all_categories, waste_stream_profile, waste_type, wastes_by_category, ConversionPathway,
    CoreError, PathwayId, RecommendationEngine, WasteCategory, WasteStreamProfile, WasteType,
    WASTE_TYPES,
};

use crate::error::{AppError, AppResult};

/// Catalog service over the engine's loaded pathways and static waste tables
#[derive(Clone)]
pub struct CatalogService {
    engine: Arc<RecommendationEngine>,
}

/// Waste type with its waste-stream profile, when one is known
#[derive(Debug, Serialize)]
pub struct WasteTypeDetail {
    #[serde(flatten)]
    pub waste: &'static WasteType,
    pub stream_profile: Option<&'static WasteStreamProfile>,
}

/// Categories and the waste types in each
#[derive(Debug, Serialize)]
pub struct WasteCategoryGroup {
    pub category: WasteCategory,
    pub waste_types: Vec<&'static WasteType>,
}

impl CatalogService {
    /// Create a new CatalogService instance
    pub fn new(engine: Arc<RecommendationEngine>) -> Self {
        Self { engine }
    }

    /// List waste types, optionally for one category
    pub fn list_waste_types(&self, category: Option<&str>) -> AppResult<Vec<&'static WasteType>> {
        match category {
            None => Ok(WASTE_TYPES.iter().collect()),
            Some(raw) => {
                let category = WasteCategory::parse(raw).ok_or_else(|| AppError::Validation {
                    field: "category".to_string(),
                    message: format!("Unknown waste category '{}'", raw),
                })?;
                Ok(wastes_by_category(category))
            }
        }
    }

    /// Waste types grouped by crop category
    pub fn grouped_waste_types(&self) -> Vec<WasteCategoryGroup> {
        all_categories()
            .into_iter()
            .map(|category| WasteCategoryGroup {
                category,
                waste_types: wastes_by_category(category),
            })
            .collect()
    }

    /// Get a waste type by id
    pub fn get_waste_type(&self, id: &str) -> AppResult<WasteTypeDetail> {
        let waste = waste_type(id).ok_or_else(|| CoreError::WasteTypeNotFound(id.to_string()))?;
        Ok(WasteTypeDetail {
            waste,
            stream_profile: waste_stream_profile(id),
        })
    }

    /// List all cataloged pathways
    pub fn list_pathways(&self) -> &[ConversionPathway] {
        self.engine.pathways()
    }

    /// Get a pathway by its wire id
    pub fn get_pathway(&self, id: &str) -> AppResult<ConversionPathway> {
        PathwayId::parse(id)
            .and_then(|pid| self.engine.pathway(pid))
            .cloned()
            .ok_or_else(|| CoreError::UnknownPathway(id.to_string()).into())
    }
}
