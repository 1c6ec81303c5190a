//! Pathway metrics models

use serde::{Deserialize, Serialize};

use super::waste::MoistureClass;
use crate::types::QuantityUnit;

/// Physical and financial outputs for one waste stream
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathwayCalculation {
    pub waste_type_id: String,
    pub quantity: f64,
    pub quantity_unit: QuantityUnit,
    /// Normalised input, kg/day
    pub daily_quantity_kg: f64,
    pub bio_content: f64,
    pub carbon_content: f64,
    pub moisture: MoistureClass,
    pub anaerobic_digestion: AnaerobicDigestionMetrics,
    pub composting: CompostingMetrics,
    pub biomass_energy: BiomassEnergyMetrics,
    pub environmental: EnvironmentalMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnaerobicDigestionMetrics {
    pub biogas_daily_kg: f64,
    pub methane_daily_kg: f64,
    pub electricity_daily_kwh: f64,
    pub electricity_annual_kwh: f64,
    /// Rupees
    pub electricity_annual_revenue: f64,
    pub fertilizer_daily_kg: f64,
    /// Rupees
    pub fertilizer_annual_revenue: f64,
    pub investment_lakhs: f64,
    pub annual_revenue_lakhs: f64,
    pub payback_years: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompostingMetrics {
    pub compost_daily_kg: f64,
    pub compost_annual_tonnes: f64,
    pub annual_revenue_lakhs: f64,
    pub investment_lakhs: f64,
    pub payback_years: f64,
    pub landfill_diversion_tonnes: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BiomassEnergyMetrics {
    pub briquette_daily_kg: f64,
    pub energy_daily_mj: f64,
    pub energy_annual_gj: f64,
    pub annual_revenue_lakhs: f64,
    pub investment_lakhs: f64,
    pub payback_years: f64,
}

/// Annual environmental aggregate across all families
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnvironmentalMetrics {
    pub co2_avoided_tonnes: f64,
    pub landfill_waste_diverted_tonnes: f64,
    pub energy_offset_kwh: f64,
}

/// Calculator pathway families
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PathwayFamily {
    AnaerobicDigestion,
    Composting,
    BiomassEnergy,
}

impl PathwayFamily {
    pub const ALL: [PathwayFamily; 3] = [
        PathwayFamily::AnaerobicDigestion,
        PathwayFamily::Composting,
        PathwayFamily::BiomassEnergy,
    ];
}

impl std::fmt::Display for PathwayFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathwayFamily::AnaerobicDigestion => write!(f, "Anaerobic Digestion"),
            PathwayFamily::Composting => write!(f, "Composting"),
            PathwayFamily::BiomassEnergy => write!(f, "Biomass Energy"),
        }
    }
}

/// Return-on-investment scores per family, 0-100
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathwayScores {
    pub anaerobic: u32,
    pub compost: u32,
    pub biomass: u32,
}

impl PathwayScores {
    pub fn get(&self, family: PathwayFamily) -> u32 {
        match family {
            PathwayFamily::AnaerobicDigestion => self.anaerobic,
            PathwayFamily::Composting => self.compost,
            PathwayFamily::BiomassEnergy => self.biomass,
        }
    }

    /// Highest-scoring family; earlier families win ties
    pub fn best(&self) -> PathwayFamily {
        let mut best = PathwayFamily::AnaerobicDigestion;
        for family in PathwayFamily::ALL {
            if self.get(family) > self.get(best) {
                best = family;
            }
        }
        best
    }
}
