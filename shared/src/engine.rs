//! Multi-criteria recommendation engine
//!
//! Every cataloged pathway is scored on four criteria (technical, economic,
//! environmental, scalability), classified, ranked by the weighted composite,
//! and annotated with rationale, risks and opportunities.

use rust_decimal::Decimal;

use crate::models::{
    classify_feasibility, implementation_priority, pathway_catalog, waste_stream_profile,
    waste_type, ConversionPathway, CriteriaScores, FacilityContext, PathwayId, PollutionRisk,
    RecommendationScore, ScoringWeights, WasteCharacteristics, WeightOverrides,
};
use crate::types::Level;

/// Seasonal variation above which supply is treated as unstable
const SEASONAL_VARIATION_LIMIT: f64 = 0.20;
/// Capital cost above which access to capital is flagged, rupees
const HIGH_CAPEX_THRESHOLD: i64 = 5_000_000;
/// Capital cost above which low financial capacity is flagged, rupees
const FINANCING_THRESHOLD: i64 = 3_000_000;
const HIGH_WATER_USAGE_PER_TONNE: f64 = 2.0;

/// Scores conversion pathways against a waste stream and facility
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    pathways: Vec<ConversionPathway>,
    weights: ScoringWeights,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Engine over the full catalog with the default weights
    pub fn new() -> Self {
        Self::with_weights(ScoringWeights::default())
    }

    /// Engine over the full catalog with custom base weights
    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self {
            pathways: pathway_catalog(),
            weights,
        }
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    pub fn pathways(&self) -> &[ConversionPathway] {
        &self.pathways
    }

    pub fn pathway(&self, id: PathwayId) -> Option<&ConversionPathway> {
        self.pathways.iter().find(|p| p.id == id)
    }

    /// Score and rank every pathway, best first.
    ///
    /// Nothing is filtered out. Ties keep catalog order.
    pub fn recommend(
        &self,
        waste: &WasteCharacteristics,
        facility: &FacilityContext,
        overrides: Option<&WeightOverrides>,
    ) -> Vec<RecommendationScore> {
        let weights = match overrides {
            Some(o) => self.weights.merge(o),
            None => self.weights,
        };
        self.recommend_with(waste, facility, &weights)
    }

    /// Score and rank every pathway with already-resolved weights
    pub fn recommend_with(
        &self,
        waste: &WasteCharacteristics,
        facility: &FacilityContext,
        weights: &ScoringWeights,
    ) -> Vec<RecommendationScore> {
        let mut scored: Vec<RecommendationScore> = self
            .pathways
            .iter()
            .map(|pathway| score_pathway(pathway, waste, facility, weights))
            .collect();

        scored.sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score));
        scored
    }
}

/// Score a single pathway
pub fn score_pathway(
    pathway: &ConversionPathway,
    waste: &WasteCharacteristics,
    facility: &FacilityContext,
    weights: &ScoringWeights,
) -> RecommendationScore {
    let criteria = CriteriaScores {
        technical: technical_score(pathway, waste),
        economic: economic_score(pathway, facility),
        environmental: environmental_score(pathway),
        scalability: scalability_score(pathway, waste, facility),
    };

    let overall_score = criteria.weighted(weights);
    let feasibility_status = classify_feasibility(&criteria);

    RecommendationScore {
        pathway: pathway.clone(),
        overall_score,
        technical_score: percent(criteria.technical),
        economic_score: percent(criteria.economic),
        environmental_score: percent(criteria.environmental),
        scalability_score: percent(criteria.scalability),
        criteria,
        feasibility_status,
        match_percentage: percent(overall_score),
        rationale: rationale(pathway, waste, &criteria),
        risks: risks(pathway, waste, facility),
        opportunities: opportunities(pathway, waste, facility),
        implementation_priority: implementation_priority(overall_score, feasibility_status),
    }
}

fn percent(fraction: f64) -> u32 {
    (fraction * 100.0).round().max(0.0) as u32
}

fn technical_score(pathway: &ConversionPathway, waste: &WasteCharacteristics) -> f64 {
    let capacity_match =
        (waste.quantity_per_day / pathway.required_capacity_tonnes_per_day).min(1.0);
    let mut score = pathway.technical_feasibility * (0.5 + 0.5 * capacity_match);

    // Unknown streams get no moisture adjustment
    if let Some(profile) = waste_stream_profile(&waste.waste_type) {
        let moisture_match =
            1.0 - (waste.moisture_content - profile.typical_moisture).abs() / 100.0;
        score *= 0.7 + 0.3 * moisture_match;
    }

    score.clamp(0.0, 1.0)
}

fn economic_score(pathway: &ConversionPathway, facility: &FacilityContext) -> f64 {
    let financial = match facility.financial_capacity {
        Some(Level::High) => 1.1,
        Some(Level::Low) => 0.8,
        _ => 1.0,
    };
    let market = match facility.market_access {
        Some(Level::High) => 1.05,
        Some(Level::Low) => 0.85,
        _ => 1.0,
    };
    (pathway.economic_viability * financial * market).clamp(0.0, 1.0)
}

fn environmental_score(pathway: &ConversionPathway) -> f64 {
    let impact = &pathway.environmental_impact;
    let mut score = pathway.environmental_benefit
        * match impact.pollution_risk {
            PollutionRisk::High => 0.7,
            PollutionRisk::Medium => 0.9,
            PollutionRisk::Low => 1.0,
        };
    if impact.landfill_diversion_percentage >= 100.0 {
        score += 0.05;
    }
    score.clamp(0.0, 1.0)
}

fn scalability_score(
    pathway: &ConversionPathway,
    waste: &WasteCharacteristics,
    facility: &FacilityContext,
) -> f64 {
    let mut score = pathway.scalability_score
        * match facility.labor_availability {
            Some(Level::High) => 1.05,
            Some(Level::Low) => 0.85,
            _ => 1.0,
        };
    if has_seasonal_supply(waste) {
        score *= 0.85;
    }
    score.clamp(0.0, 1.0)
}

fn has_seasonal_supply(waste: &WasteCharacteristics) -> bool {
    waste_stream_profile(&waste.waste_type)
        .is_some_and(|p| p.seasonal_variation > SEASONAL_VARIATION_LIMIT)
}

fn waste_label(waste: &WasteCharacteristics) -> &str {
    waste_type(&waste.waste_type)
        .map(|w| w.name)
        .unwrap_or(waste.waste_type.as_str())
}

fn rationale(
    pathway: &ConversionPathway,
    waste: &WasteCharacteristics,
    scores: &CriteriaScores,
) -> Vec<String> {
    let mut lines = Vec::new();

    if scores.technical >= 0.85 {
        lines.push(format!(
            "Strong technical feasibility - {} is well-established for {}",
            pathway.name,
            waste_label(waste)
        ));
    }
    if scores.economic >= 0.80 {
        lines.push(format!(
            "Good economic potential - Estimated annual revenue of ₹{:.1}L with {:.1}-year payback",
            pathway.annual_revenue_lakhs(),
            pathway.payback_period
        ));
    }
    if scores.environmental >= 0.90 {
        lines.push(format!(
            "Excellent environmental benefits - {:.0} tonnes CO₂ equivalent reduction annually",
            pathway.environmental_impact.co2_reduction_per_tonne * waste.quantity_per_year
        ));
    }
    if pathway.estimated_yield >= 35.0 {
        lines.push(format!(
            "High resource efficiency - {}% yield rate minimizes waste",
            pathway.estimated_yield
        ));
    }
    if pathway.market_demand_score >= 0.85 {
        lines.push(
            "Strong market demand - End product has established supply chains and end-use markets"
                .to_string(),
        );
    }

    lines
}

fn risks(
    pathway: &ConversionPathway,
    waste: &WasteCharacteristics,
    facility: &FacilityContext,
) -> Vec<String> {
    let impact = &pathway.environmental_impact;
    let mut risks = Vec::new();

    if pathway.estimated_investment > Decimal::from(HIGH_CAPEX_THRESHOLD) {
        risks.push(
            "High capital investment required - May limit accessibility for small facilities"
                .to_string(),
        );
    }
    if impact.pollution_risk == PollutionRisk::High {
        risks.push(
            "Environmental compliance required - Stringent pollution control measures needed"
                .to_string(),
        );
    }
    if impact
        .water_usage_per_tonne
        .is_some_and(|w| w > HIGH_WATER_USAGE_PER_TONNE)
    {
        risks.push(
            "High water consumption - Water availability and management must be assessed"
                .to_string(),
        );
    }
    if facility.market_access == Some(Level::Low) {
        risks.push(
            "Market access challenges - Need to develop supply chains and customer networks"
                .to_string(),
        );
    }
    if facility.financial_capacity == Some(Level::Low)
        && pathway.estimated_investment > Decimal::from(FINANCING_THRESHOLD)
    {
        risks.push(
            "Financial accessibility - Explore subsidies, loans, and group approaches".to_string(),
        );
    }
    if has_seasonal_supply(waste) {
        risks.push(
            "Seasonal variation in waste supply - Year-round feedstock availability should be verified"
                .to_string(),
        );
    }

    risks
}

fn opportunities(
    pathway: &ConversionPathway,
    waste: &WasteCharacteristics,
    facility: &FacilityContext,
) -> Vec<String> {
    let carbon_credits =
        pathway.environmental_impact.co2_reduction_per_tonne * waste.quantity_per_year * 1000.0;
    let mut opportunities = vec![
        format!(
            "Carbon credit potential - Generate ₹{:.0} in carbon credits annually",
            carbon_credits
        ),
        "Supply chain development - Create partnerships with end-product processors and distributors"
            .to_string(),
    ];

    if pathway.estimated_yield >= 40.0 {
        opportunities.push(
            "By-product potential - Utilize processing by-products for additional revenue streams"
                .to_string(),
        );
    }
    if pathway.payback_period <= 2.5 {
        opportunities.push(format!(
            "Rapid ROI - Recover investment in {} years with sustainable operations",
            pathway.payback_period
        ));
    }
    if facility.labor_availability == Some(Level::High) {
        opportunities.push(
            "Employment generation - Create skilled and unskilled jobs in facility operations"
                .to_string(),
        );
    }
    opportunities.push(
        "Technology upgrade potential - Improve efficiency through automation and IoT monitoring"
            .to_string(),
    );

    opportunities
}
