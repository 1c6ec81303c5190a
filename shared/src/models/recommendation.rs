//! Recommendation request and result models

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::pathway::ConversionPathway;
use crate::types::Level;

/// Characteristics of the waste stream being assessed
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct WasteCharacteristics {
    /// Waste type id from the property table
    #[validate(length(min = 1, message = "Waste type is required"))]
    pub waste_type: String,
    #[validate(range(min = 0.0, message = "Quantity per year cannot be negative"))]
    pub quantity_per_year: f64,
    /// Tonnes per day, on the same scale as pathway reference capacities
    #[validate(range(min = 0.0, message = "Quantity per day cannot be negative"))]
    pub quantity_per_day: f64,
    /// Measured moisture, %
    #[validate(range(min = 0.0, max = 100.0, message = "Moisture content must be between 0 and 100%"))]
    pub moisture_content: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub bulk_density: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub volatile_content: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub ash_content: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub calorific_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WasteCharacteristics {
    pub fn new(
        waste_type: impl Into<String>,
        quantity_per_year: f64,
        quantity_per_day: f64,
        moisture_content: f64,
    ) -> Self {
        Self {
            waste_type: waste_type.into(),
            quantity_per_year,
            quantity_per_day,
            moisture_content,
            bulk_density: None,
            volatile_content: None,
            ash_content: None,
            calorific_value: None,
            notes: None,
        }
    }
}

/// Facility the waste would be processed at.
///
/// Absent ratings are neutral and leave scores unmultiplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FacilityContext {
    pub facility_type: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub existing_infrastructure: Vec<String>,
    #[serde(default)]
    pub labor_availability: Option<Level>,
    #[serde(default)]
    pub market_access: Option<Level>,
    #[serde(default)]
    pub financial_capacity: Option<Level>,
}

/// Criterion weights for the composite score.
///
/// The sum is not forced to 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoringWeights {
    pub technical: f64,
    pub economic: f64,
    pub environmental: f64,
    pub scalability: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            technical: 0.25,
            economic: 0.30,
            environmental: 0.25,
            scalability: 0.20,
        }
    }
}

impl ScoringWeights {
    /// Apply per-request overrides on top of these weights
    pub fn merge(&self, overrides: &WeightOverrides) -> Self {
        Self {
            technical: overrides.technical.unwrap_or(self.technical),
            economic: overrides.economic.unwrap_or(self.economic),
            environmental: overrides.environmental.unwrap_or(self.environmental),
            scalability: overrides.scalability.unwrap_or(self.scalability),
        }
    }

    pub fn total(&self) -> f64 {
        self.technical + self.economic + self.environmental + self.scalability
    }
}

/// Partial weight override supplied with a request
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct WeightOverrides {
    #[validate(range(min = 0.0, message = "Weights cannot be negative"))]
    pub technical: Option<f64>,
    #[validate(range(min = 0.0, message = "Weights cannot be negative"))]
    pub economic: Option<f64>,
    #[validate(range(min = 0.0, message = "Weights cannot be negative"))]
    pub environmental: Option<f64>,
    #[validate(range(min = 0.0, message = "Weights cannot be negative"))]
    pub scalability: Option<f64>,
}

/// Clamped criterion scores in [0, 1]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CriteriaScores {
    pub technical: f64,
    pub economic: f64,
    pub environmental: f64,
    pub scalability: f64,
}

impl CriteriaScores {
    /// Weighted composite
    pub fn weighted(&self, weights: &ScoringWeights) -> f64 {
        self.technical * weights.technical
            + self.economic * weights.economic
            + self.environmental * weights.environmental
            + self.scalability * weights.scalability
    }

    /// Mean of technical, economic and environmental
    pub fn core_average(&self) -> f64 {
        (self.technical + self.economic + self.environmental) / 3.0
    }
}

/// Categorical feasibility verdict
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeasibilityStatus {
    Recommended,
    Feasible,
    Challenging,
    NotFeasible,
}

impl std::fmt::Display for FeasibilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeasibilityStatus::Recommended => write!(f, "RECOMMENDED"),
            FeasibilityStatus::Feasible => write!(f, "FEASIBLE"),
            FeasibilityStatus::Challenging => write!(f, "CHALLENGING"),
            FeasibilityStatus::NotFeasible => write!(f, "NOT_FEASIBLE"),
        }
    }
}

/// Classify feasibility from clamped criterion scores.
///
/// Checked in order: RECOMMENDED, FEASIBLE, CHALLENGING, NOT_FEASIBLE.
pub fn classify_feasibility(scores: &CriteriaScores) -> FeasibilityStatus {
    let average = scores.core_average();
    if scores.technical >= 0.85 && scores.economic >= 0.80 && average >= 0.82 {
        FeasibilityStatus::Recommended
    } else if average >= 0.70 {
        FeasibilityStatus::Feasible
    } else if average >= 0.50 {
        FeasibilityStatus::Challenging
    } else {
        FeasibilityStatus::NotFeasible
    }
}

/// Implementation priority, 1 is highest
pub fn implementation_priority(overall_score: f64, status: FeasibilityStatus) -> u8 {
    match status {
        FeasibilityStatus::Recommended if overall_score >= 0.80 => 1,
        FeasibilityStatus::Recommended => 2,
        FeasibilityStatus::Feasible if overall_score >= 0.70 => 2,
        _ => 3,
    }
}

/// A scored, explained pathway for one request
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationScore {
    pub pathway: ConversionPathway,
    pub overall_score: f64,
    /// Percentages
    pub technical_score: u32,
    pub economic_score: u32,
    pub environmental_score: u32,
    pub scalability_score: u32,
    pub criteria: CriteriaScores,
    pub feasibility_status: FeasibilityStatus,
    pub match_percentage: u32,
    pub rationale: Vec<String>,
    pub risks: Vec<String>,
    pub opportunities: Vec<String>,
    pub implementation_priority: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(technical: f64, economic: f64, environmental: f64) -> CriteriaScores {
        CriteriaScores {
            technical,
            economic,
            environmental,
            scalability: 0.5,
        }
    }

    #[test]
    fn recommended_requires_strong_technical_and_economic() {
        assert_eq!(
            classify_feasibility(&scores(0.90, 0.85, 0.90)),
            FeasibilityStatus::Recommended
        );
        // High average but technical below the bar
        assert_eq!(
            classify_feasibility(&scores(0.84, 0.95, 0.95)),
            FeasibilityStatus::Feasible
        );
    }

    #[test]
    fn lower_bands() {
        assert_eq!(
            classify_feasibility(&scores(0.72, 0.70, 0.70)),
            FeasibilityStatus::Feasible
        );
        assert_eq!(
            classify_feasibility(&scores(0.50, 0.50, 0.50)),
            FeasibilityStatus::Challenging
        );
        assert_eq!(
            classify_feasibility(&scores(0.40, 0.50, 0.50)),
            FeasibilityStatus::NotFeasible
        );
    }

    #[test]
    fn priority_bands() {
        assert_eq!(implementation_priority(0.85, FeasibilityStatus::Recommended), 1);
        assert_eq!(implementation_priority(0.75, FeasibilityStatus::Recommended), 2);
        assert_eq!(implementation_priority(0.72, FeasibilityStatus::Feasible), 2);
        assert_eq!(implementation_priority(0.65, FeasibilityStatus::Feasible), 3);
        assert_eq!(implementation_priority(0.95, FeasibilityStatus::Challenging), 3);
    }

    #[test]
    fn weight_overrides_merge_over_defaults() {
        let merged = ScoringWeights::default().merge(&WeightOverrides {
            economic: Some(0.5),
            ..Default::default()
        });
        assert_eq!(merged.economic, 0.5);
        assert_eq!(merged.technical, 0.25);
        assert_eq!(merged.scalability, 0.20);
    }

    #[test]
    fn status_wire_format() {
        let json = serde_json::to_string(&FeasibilityStatus::NotFeasible).unwrap();
        assert_eq!(json, "\"NOT_FEASIBLE\"");
    }
}
