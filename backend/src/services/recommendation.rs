//! Recommendation service wrapping the multi-criteria engine

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{
    resolve_weights, validate_waste_characteristics, waste_type, FacilityContext,
    FeasibilityStatus, RecommendationEngine, RecommendationScore, ScoringWeights,
    WasteCharacteristics, WeightOverrides,
};
use uuid::Uuid;

use crate::error::AppResult;

/// Recommendation service
#[derive(Clone)]
pub struct RecommendationService {
    engine: Arc<RecommendationEngine>,
    max_results: usize,
}

/// Input for a recommendation request
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub waste_characteristics: WasteCharacteristics,
    #[serde(default)]
    pub facility_context: FacilityContext,
    #[serde(default)]
    pub weights: Option<WeightOverrides>,
}

/// Ranked recommendations for one assessment
#[derive(Debug, Serialize)]
pub struct RecommendationReport {
    pub assessment_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub waste_type: String,
    /// Display name, absent for waste types outside the property table
    pub waste_type_name: Option<String>,
    pub weights: ScoringWeights,
    pub total_pathways: usize,
    pub recommended_count: usize,
    pub recommendations: Vec<RecommendationScore>,
}

impl RecommendationService {
    /// Create a new RecommendationService instance
    pub fn new(engine: Arc<RecommendationEngine>, max_results: usize) -> Self {
        Self {
            engine,
            max_results,
        }
    }

    /// Validate the request, rank every pathway and build the report
    pub fn recommend(
        &self,
        input: RecommendationRequest,
        limit: Option<usize>,
    ) -> AppResult<RecommendationReport> {
        validate_waste_characteristics(&input.waste_characteristics)?;
        let weights = resolve_weights(&self.engine.weights(), input.weights.as_ref())?;

        let waste = &input.waste_characteristics;
        let mut recommendations =
            self.engine
                .recommend_with(waste, &input.facility_context, &weights);

        let total_pathways = recommendations.len();
        let recommended_count = recommendations
            .iter()
            .filter(|r| r.feasibility_status == FeasibilityStatus::Recommended)
            .count();

        if let Some(top) = recommendations.first() {
            tracing::debug!(
                "Scored {} pathways for {} ({} recommended), top {} at {}%",
                total_pathways,
                waste.waste_type,
                recommended_count,
                top.pathway.id,
                top.match_percentage
            );
        }

        let cap = limit.unwrap_or(self.max_results).min(self.max_results);
        recommendations.truncate(cap);

        Ok(RecommendationReport {
            assessment_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            waste_type: waste.waste_type.clone(),
            waste_type_name: waste_type(&waste.waste_type).map(|w| w.name.to_string()),
            weights,
            total_pathways,
            recommended_count,
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use shared::Level;

    fn request(waste_type: &str, moisture: f64) -> RecommendationRequest {
        RecommendationRequest {
            waste_characteristics: WasteCharacteristics::new(waste_type, 15000.0, 50.0, moisture),
            facility_context: FacilityContext {
                facility_type: "rice_mill".to_string(),
                labor_availability: Some(Level::Medium),
                market_access: Some(Level::High),
                financial_capacity: Some(Level::Medium),
                ..Default::default()
            },
            weights: None,
        }
    }

    fn service(max_results: usize) -> RecommendationService {
        RecommendationService::new(Arc::new(RecommendationEngine::new()), max_results)
    }

    #[test]
    fn report_is_capped_by_limit_and_config() {
        let report = service(5).recommend(request("rice_husk", 12.0), Some(3)).unwrap();
        assert_eq!(report.recommendations.len(), 3);
        assert_eq!(report.total_pathways, 8);
        assert_eq!(report.waste_type_name.as_deref(), Some("Rice Husk"));

        let report = service(5).recommend(request("rice_husk", 12.0), Some(50)).unwrap();
        assert_eq!(report.recommendations.len(), 5);
    }

    #[test]
    fn unknown_waste_type_still_ranks() {
        let report = service(20).recommend(request("mango_seed", 30.0), None).unwrap();
        assert_eq!(report.recommendations.len(), 8);
        assert!(report.waste_type_name.is_none());
    }

    #[test]
    fn out_of_range_moisture_is_rejected() {
        let err = service(20)
            .recommend(request("rice_husk", 120.0), None)
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn reported_weights_are_the_applied_weights() {
        let mut input = request("rice_husk", 12.0);
        input.weights = Some(WeightOverrides {
            technical: Some(1.0),
            economic: Some(0.0),
            environmental: Some(0.0),
            scalability: Some(0.0),
        });
        let report = service(20).recommend(input, None).unwrap();
        assert_eq!(report.weights.technical, 1.0);
        assert_eq!(report.weights.total(), 1.0);
        for r in &report.recommendations {
            assert_eq!(r.overall_score, r.criteria.technical);
        }
    }

    #[test]
    fn negative_weight_is_rejected() {
        let mut input = request("rice_husk", 12.0);
        input.weights = Some(WeightOverrides {
            economic: Some(-0.3),
            ..Default::default()
        });
        assert!(service(20).recommend(input, None).is_err());
    }
}
