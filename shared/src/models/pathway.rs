//! Conversion pathway catalog

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a cataloged conversion pathway
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PathwayId {
    RiceHuskAsh,
    RiceHuskBioenergy,
    RiceHuskActivatedCarbon,
    CoconutFiberTextiles,
    CoconutFiberComposites,
    BananaPeelAnimalFeed,
    BananaPeelCompost,
    BananaStemBiogas,
}

impl PathwayId {
    pub const ALL: [PathwayId; 8] = [
        PathwayId::RiceHuskAsh,
        PathwayId::RiceHuskBioenergy,
        PathwayId::RiceHuskActivatedCarbon,
        PathwayId::CoconutFiberTextiles,
        PathwayId::CoconutFiberComposites,
        PathwayId::BananaPeelAnimalFeed,
        PathwayId::BananaPeelCompost,
        PathwayId::BananaStemBiogas,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PathwayId::RiceHuskAsh => "rice_husk_ash",
            PathwayId::RiceHuskBioenergy => "rice_husk_bioenergy",
            PathwayId::RiceHuskActivatedCarbon => "rice_husk_activated_carbon",
            PathwayId::CoconutFiberTextiles => "coconut_fiber_textiles",
            PathwayId::CoconutFiberComposites => "coconut_fiber_composites",
            PathwayId::BananaPeelAnimalFeed => "banana_peel_animal_feed",
            PathwayId::BananaPeelCompost => "banana_peel_compost",
            PathwayId::BananaStemBiogas => "banana_stem_biogas",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == id)
    }

    /// Catalog definition of this pathway
    pub fn definition(self) -> ConversionPathway {
        match self {
            PathwayId::RiceHuskAsh => ConversionPathway {
                id: self,
                name: "Husk Ash Production",
                end_product: "Silica Ash / Pozzolanic Material",
                description: "Thermal conversion of rice husk to produce high-quality silica ash used in construction, concrete, and refractory applications",
                technical_feasibility: 0.92,
                economic_viability: 0.85,
                environmental_benefit: 0.95,
                scalability_score: 0.88,
                market_demand_score: 0.85,
                infrastructure_requirements: &[
                    "Calcination kiln (500-800°C)",
                    "Air classification system",
                    "Quality testing lab",
                ],
                estimated_yield: 20.0,
                estimated_investment: Decimal::from(45_000_000),
                annual_revenue: Decimal::from(20_000_000),
                payback_period: 2.5,
                required_capacity_tonnes_per_day: 50.0,
                environmental_impact: EnvironmentalImpact {
                    co2_reduction_per_tonne: 0.85,
                    landfill_diversion_percentage: 100.0,
                    water_usage_per_tonne: Some(0.5),
                    pollution_risk: PollutionRisk::Low,
                },
            },
            PathwayId::RiceHuskBioenergy => ConversionPathway {
                id: self,
                name: "Husk-based Bioenergy",
                end_product: "Briquettes / Charcoal",
                description: "Conversion of rice husk to energy-dense briquettes or charcoal for industrial and domestic use",
                technical_feasibility: 0.88,
                economic_viability: 0.82,
                environmental_benefit: 0.90,
                scalability_score: 0.92,
                market_demand_score: 0.88,
                infrastructure_requirements: &[
                    "Carbonization unit",
                    "Briquetting machine",
                    "Drying facility",
                ],
                estimated_yield: 35.0,
                estimated_investment: Decimal::from(32_000_000),
                annual_revenue: Decimal::from(18_000_000),
                payback_period: 2.2,
                required_capacity_tonnes_per_day: 50.0,
                environmental_impact: EnvironmentalImpact {
                    co2_reduction_per_tonne: 1.2,
                    landfill_diversion_percentage: 100.0,
                    water_usage_per_tonne: Some(0.3),
                    pollution_risk: PollutionRisk::Low,
                },
            },
            PathwayId::RiceHuskActivatedCarbon => ConversionPathway {
                id: self,
                name: "Activated Carbon Production",
                end_product: "Activated Carbon",
                description: "Chemical or thermal activation of carbonized rice husk to produce activated carbon for water purification and air filtration",
                technical_feasibility: 0.75,
                economic_viability: 0.80,
                environmental_benefit: 0.85,
                scalability_score: 0.65,
                market_demand_score: 0.82,
                infrastructure_requirements: &[
                    "Activation reactor",
                    "Chemical handling infrastructure",
                    "Filtration system",
                    "Quality control",
                ],
                estimated_yield: 12.0,
                estimated_investment: Decimal::from(75_000_000),
                annual_revenue: Decimal::from(25_000_000),
                payback_period: 3.5,
                required_capacity_tonnes_per_day: 80.0,
                environmental_impact: EnvironmentalImpact {
                    co2_reduction_per_tonne: 0.95,
                    landfill_diversion_percentage: 100.0,
                    water_usage_per_tonne: Some(2.5),
                    pollution_risk: PollutionRisk::Medium,
                },
            },
            PathwayId::CoconutFiberTextiles => ConversionPathway {
                id: self,
                name: "Coir Fiber Extraction & Textiles",
                end_product: "Coir Textiles / Cordage",
                description: "Extraction and processing of coconut fiber for use in textiles, ropes, mats, and composite materials",
                technical_feasibility: 0.90,
                economic_viability: 0.88,
                environmental_benefit: 0.92,
                scalability_score: 0.85,
                market_demand_score: 0.90,
                infrastructure_requirements: &[
                    "Retting facility",
                    "Beating equipment",
                    "Spinning/weaving unit",
                ],
                estimated_yield: 40.0,
                estimated_investment: Decimal::from(50_000_000),
                annual_revenue: Decimal::from(22_000_000),
                payback_period: 2.8,
                required_capacity_tonnes_per_day: 60.0,
                environmental_impact: EnvironmentalImpact {
                    co2_reduction_per_tonne: 0.75,
                    landfill_diversion_percentage: 100.0,
                    water_usage_per_tonne: Some(5.0),
                    pollution_risk: PollutionRisk::Medium,
                },
            },
            PathwayId::CoconutFiberComposites => ConversionPathway {
                id: self,
                name: "Coconut Fiber Composite Boards",
                end_product: "Composite Panels / Building Materials",
                description: "Production of fiber-reinforced composite boards for construction, furniture, and packaging applications",
                technical_feasibility: 0.85,
                economic_viability: 0.84,
                environmental_benefit: 0.88,
                scalability_score: 0.82,
                market_demand_score: 0.80,
                infrastructure_requirements: &[
                    "Mat forming machine",
                    "Binder application system",
                    "Hot press unit",
                ],
                estimated_yield: 38.0,
                estimated_investment: Decimal::from(42_000_000),
                annual_revenue: Decimal::from(19_500_000),
                payback_period: 2.6,
                required_capacity_tonnes_per_day: 55.0,
                environmental_impact: EnvironmentalImpact {
                    co2_reduction_per_tonne: 0.80,
                    landfill_diversion_percentage: 100.0,
                    water_usage_per_tonne: Some(1.5),
                    pollution_risk: PollutionRisk::Low,
                },
            },
            PathwayId::BananaPeelAnimalFeed => ConversionPathway {
                id: self,
                name: "Animal Feed Pellet Production",
                end_product: "Cattle/Poultry Feed Pellets",
                description: "Processing of banana peels into nutritious feed supplements for livestock and poultry",
                technical_feasibility: 0.88,
                economic_viability: 0.85,
                environmental_benefit: 0.90,
                scalability_score: 0.90,
                market_demand_score: 0.92,
                infrastructure_requirements: &[
                    "Drying facility",
                    "Grinding mill",
                    "Pelletizing machine",
                ],
                estimated_yield: 25.0,
                estimated_investment: Decimal::from(28_000_000),
                annual_revenue: Decimal::from(15_000_000),
                payback_period: 2.1,
                required_capacity_tonnes_per_day: 40.0,
                environmental_impact: EnvironmentalImpact {
                    co2_reduction_per_tonne: 0.65,
                    landfill_diversion_percentage: 100.0,
                    water_usage_per_tonne: Some(0.2),
                    pollution_risk: PollutionRisk::Low,
                },
            },
            PathwayId::BananaPeelCompost => ConversionPathway {
                id: self,
                name: "Organic Compost Production",
                end_product: "Nutrient-rich Compost",
                description: "Aerobic composting of banana peels to produce high-quality organic compost for agriculture",
                technical_feasibility: 0.82,
                economic_viability: 0.70,
                environmental_benefit: 0.96,
                scalability_score: 0.88,
                market_demand_score: 0.75,
                infrastructure_requirements: &[
                    "Composting beds",
                    "Aeration system",
                    "Curing facility",
                ],
                estimated_yield: 50.0,
                estimated_investment: Decimal::from(12_000_000),
                annual_revenue: Decimal::from(7_000_000),
                payback_period: 1.8,
                required_capacity_tonnes_per_day: 30.0,
                environmental_impact: EnvironmentalImpact {
                    co2_reduction_per_tonne: 1.5,
                    landfill_diversion_percentage: 100.0,
                    water_usage_per_tonne: Some(0.1),
                    pollution_risk: PollutionRisk::Low,
                },
            },
            PathwayId::BananaStemBiogas => ConversionPathway {
                id: self,
                name: "Anaerobic Digestion for Biogas",
                end_product: "Biogas / Digestate",
                description: "Anaerobic digestion of banana waste for biogas production and organic fertilizer",
                technical_feasibility: 0.80,
                economic_viability: 0.75,
                environmental_benefit: 0.93,
                scalability_score: 0.78,
                market_demand_score: 0.70,
                infrastructure_requirements: &[
                    "Anaerobic digester",
                    "Gas handling system",
                    "Biogas upgrading unit",
                ],
                // m³ of biogas per tonne rather than a percentage
                estimated_yield: 180.0,
                estimated_investment: Decimal::from(55_000_000),
                annual_revenue: Decimal::from(12_000_000),
                payback_period: 4.5,
                required_capacity_tonnes_per_day: 50.0,
                environmental_impact: EnvironmentalImpact {
                    co2_reduction_per_tonne: 2.1,
                    landfill_diversion_percentage: 100.0,
                    water_usage_per_tonne: Some(0.5),
                    pollution_risk: PollutionRisk::Low,
                },
            },
        }
    }
}

impl std::fmt::Display for PathwayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pollution risk of running a pathway
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PollutionRisk {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnvironmentalImpact {
    /// Tonnes CO₂e avoided per tonne of feedstock
    pub co2_reduction_per_tonne: f64,
    pub landfill_diversion_percentage: f64,
    /// m³ water per tonne of feedstock
    pub water_usage_per_tonne: Option<f64>,
    pub pollution_risk: PollutionRisk,
}

/// A waste-to-value conversion process and its baseline profile
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConversionPathway {
    pub id: PathwayId,
    pub name: &'static str,
    pub end_product: &'static str,
    pub description: &'static str,
    pub technical_feasibility: f64,
    pub economic_viability: f64,
    pub environmental_benefit: f64,
    pub scalability_score: f64,
    pub market_demand_score: f64,
    pub infrastructure_requirements: &'static [&'static str],
    /// Yield, %
    pub estimated_yield: f64,
    /// Capital cost in rupees
    pub estimated_investment: Decimal,
    /// Annual revenue in rupees at the reference capacity
    pub annual_revenue: Decimal,
    /// Years
    pub payback_period: f64,
    pub required_capacity_tonnes_per_day: f64,
    pub environmental_impact: EnvironmentalImpact,
}

impl ConversionPathway {
    /// Annual revenue expressed in lakhs
    pub fn annual_revenue_lakhs(&self) -> Decimal {
        (self.annual_revenue / Decimal::from(100_000)).round_dp(1)
    }
}

/// The full catalog in declaration order
pub fn pathway_catalog() -> Vec<ConversionPathway> {
    PathwayId::ALL.into_iter().map(PathwayId::definition).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_back() {
        for id in PathwayId::ALL {
            assert_eq!(PathwayId::parse(id.as_str()), Some(id));
            assert_eq!(id.definition().id, id);
        }
        assert_eq!(PathwayId::parse("plasma_gasification"), None);
    }

    #[test]
    fn base_coefficients_are_fractions() {
        for p in pathway_catalog() {
            for v in [
                p.technical_feasibility,
                p.economic_viability,
                p.environmental_benefit,
                p.scalability_score,
                p.market_demand_score,
            ] {
                assert!((0.0..=1.0).contains(&v), "{} has {}", p.id, v);
            }
            assert!(p.required_capacity_tonnes_per_day > 0.0);
        }
    }

    #[test]
    fn revenue_in_lakhs() {
        let ash = PathwayId::RiceHuskAsh.definition();
        assert_eq!(ash.annual_revenue_lakhs(), Decimal::from(200));
    }
}
