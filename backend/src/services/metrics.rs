//! Pathway metrics service

use serde::{Deserialize, Serialize};
use shared::{
    calculate_pathway_metrics, parse_quantity_unit, pathway_scores, validate_quantity, CoreError,
    PathwayCalculation, PathwayFamily, PathwayScores,
};
use validator::Validate;

use crate::error::AppResult;

/// Input for a pathway metrics calculation
#[derive(Debug, Deserialize, Validate)]
pub struct PathwayMetricsRequest {
    #[validate(length(min = 1, message = "Waste type is required"))]
    pub waste_type_id: String,

    #[validate(range(min = 0.0, message = "Quantity cannot be negative"))]
    pub quantity: f64,

    pub unit: String,
}

/// Calculated metrics with their return-on-investment scores
#[derive(Debug, Serialize)]
pub struct PathwayMetricsResponse {
    pub calculation: PathwayCalculation,
    pub scores: PathwayScores,
    pub best_pathway: PathwayFamily,
}

#[derive(Clone, Default)]
pub struct MetricsService;

impl MetricsService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the request and calculate metrics for all families
    pub fn calculate(&self, input: PathwayMetricsRequest) -> AppResult<PathwayMetricsResponse> {
        input.validate()?;
        validate_quantity(input.quantity).map_err(|m| CoreError::validation("quantity", m))?;
        let unit = parse_quantity_unit(&input.unit)?;

        let calculation = calculate_pathway_metrics(&input.waste_type_id, input.quantity, unit)?;
        let scores = pathway_scores(&calculation);
        let best_pathway = scores.best();

        tracing::debug!(
            "Calculated metrics for {} at {:.2} kg/day, best family {}",
            calculation.waste_type_id,
            calculation.daily_quantity_kg,
            best_pathway
        );

        Ok(PathwayMetricsResponse {
            calculation,
            scores,
            best_pathway,
        })
    }
}
