//! Quantity-driven pathway metrics
//!
//! Derives biogas, compost and briquette outputs with their financials from a
//! daily waste flow. Currency figures are rupees unless suffixed `_lakhs`.

use crate::error::{CoreError, CoreResult};
use crate::models::{
    waste_type, AnaerobicDigestionMetrics, BiomassEnergyMetrics, CompostingMetrics,
    EnvironmentalMetrics, MoistureClass, PathwayCalculation, PathwayScores,
};
use crate::types::{normalize_quantity, round_to, QuantityUnit};

const LAKH: f64 = 100_000.0;
const DAYS_PER_YEAR: f64 = 365.0;

// Anaerobic digestion
const BIOGAS_YIELD_PER_KG: f64 = 0.25;
const METHANE_FRACTION: f64 = 0.65;
const KWH_PER_KG_BIOGAS: f64 = 2.0;
const ELECTRICITY_PRICE_PER_KWH: f64 = 8.0;
const DIGESTATE_YIELD: f64 = 0.30;
const DIGESTATE_PRICE_PER_TONNE: f64 = 5_000.0;
const AD_INVESTMENT_BASE: f64 = 5_000_000.0;
const AD_INVESTMENT_PER_KG_DAY: f64 = 1_000.0;

// Composting
const COMPOST_YIELD: f64 = 0.35;
const COMPOST_PRICE_PER_TONNE: f64 = 8_000.0;
const COMPOST_INVESTMENT_BASE: f64 = 800_000.0;
const COMPOST_INVESTMENT_PER_KG_DAY: f64 = 500.0;
const LANDFILL_DIVERSION_FRACTION: f64 = 0.95;

// Biomass energy
const BRIQUETTE_YIELD: f64 = 0.85;
const BRIQUETTE_MJ_PER_KG: f64 = 18.0;
const BRIQUETTE_PRICE_PER_TONNE: f64 = 12_000.0;
const BIOMASS_INVESTMENT_BASE: f64 = 2_000_000.0;
const BIOMASS_INVESTMENT_PER_KG_DAY: f64 = 800.0;

// Environmental offsets
const GRID_CO2_KG_PER_KWH: f64 = 0.82;
const DIGESTATE_CO2_OFFSET: f64 = 0.5;
const COMPOST_SEQUESTRATION: f64 = 0.8;
const BIOMASS_CO2_PER_GJ: f64 = 2.5;
const KWH_PER_GJ: f64 = 277.8;

/// Revenue floor for payback division, lakhs
const MIN_REVENUE_LAKHS: f64 = 0.1;

fn moisture_factor(class: MoistureClass) -> f64 {
    match class {
        MoistureClass::Wet => 1.2,
        MoistureClass::Mixed => 1.0,
        MoistureClass::Dry => 0.8,
    }
}

/// Combustion efficiency; dry feedstock burns best
fn biomass_efficiency(class: MoistureClass) -> f64 {
    match class {
        MoistureClass::Dry => 1.2,
        MoistureClass::Mixed => 1.0,
        MoistureClass::Wet => 0.6,
    }
}

fn payback_years(investment_lakhs: f64, annual_revenue_lakhs: f64) -> f64 {
    investment_lakhs / annual_revenue_lakhs.max(MIN_REVENUE_LAKHS)
}

/// Calculate metrics for every calculator pathway family.
///
/// Fails with [`CoreError::WasteTypeNotFound`] for ids missing from the
/// waste property table.
pub fn calculate_pathway_metrics(
    waste_type_id: &str,
    quantity: f64,
    unit: QuantityUnit,
) -> CoreResult<PathwayCalculation> {
    let waste = waste_type(waste_type_id)
        .ok_or_else(|| CoreError::WasteTypeNotFound(waste_type_id.to_string()))?;

    let daily_kg = normalize_quantity(quantity, unit);
    let annual_tonnes = daily_kg * DAYS_PER_YEAR / 1000.0;

    let bio_factor = waste.bio_content / 100.0;
    let carbon_factor = waste.carbon_content / 100.0;
    let moisture = moisture_factor(waste.moisture_content);

    // Anaerobic digestion
    let biogas_daily_kg = daily_kg * BIOGAS_YIELD_PER_KG * bio_factor * moisture;
    let methane_daily_kg = biogas_daily_kg * METHANE_FRACTION;
    let electricity_daily_kwh = biogas_daily_kg * KWH_PER_KG_BIOGAS;
    let electricity_annual_kwh = electricity_daily_kwh * DAYS_PER_YEAR;
    let electricity_annual_revenue = electricity_annual_kwh * ELECTRICITY_PRICE_PER_KWH;
    let fertilizer_daily_kg = daily_kg * DIGESTATE_YIELD * bio_factor;
    let fertilizer_annual_tonnes = fertilizer_daily_kg * DAYS_PER_YEAR / 1000.0;
    let fertilizer_annual_revenue = fertilizer_annual_tonnes * DIGESTATE_PRICE_PER_TONNE;
    let ad_investment_lakhs = (AD_INVESTMENT_BASE + daily_kg * AD_INVESTMENT_PER_KG_DAY) / LAKH;
    let ad_revenue_lakhs = (electricity_annual_revenue + fertilizer_annual_revenue) / LAKH;

    // Composting
    let compost_daily_kg = daily_kg * COMPOST_YIELD * bio_factor;
    let compost_annual_tonnes = compost_daily_kg * DAYS_PER_YEAR / 1000.0;
    let compost_revenue_lakhs = compost_annual_tonnes * COMPOST_PRICE_PER_TONNE / LAKH;
    let compost_investment_lakhs =
        (COMPOST_INVESTMENT_BASE + daily_kg * COMPOST_INVESTMENT_PER_KG_DAY) / LAKH;
    let landfill_diversion_tonnes = annual_tonnes * LANDFILL_DIVERSION_FRACTION;

    // Biomass energy
    let briquette_daily_kg =
        daily_kg * BRIQUETTE_YIELD * carbon_factor * biomass_efficiency(waste.moisture_content);
    let energy_daily_mj = briquette_daily_kg * BRIQUETTE_MJ_PER_KG;
    let energy_annual_gj = energy_daily_mj * DAYS_PER_YEAR / 1000.0;
    let briquette_revenue_lakhs =
        briquette_daily_kg * DAYS_PER_YEAR / 1000.0 * BRIQUETTE_PRICE_PER_TONNE / LAKH;
    let biomass_investment_lakhs =
        (BIOMASS_INVESTMENT_BASE + daily_kg * BIOMASS_INVESTMENT_PER_KG_DAY) / LAKH;

    // The offsets are summed in mixed units and scaled once
    let co2_from_electricity = electricity_annual_kwh * GRID_CO2_KG_PER_KWH / 1000.0;
    let co2_from_fertilizer = fertilizer_annual_tonnes * DIGESTATE_CO2_OFFSET;
    let co2_from_compost = compost_annual_tonnes * COMPOST_SEQUESTRATION;
    let co2_from_biomass = energy_annual_gj * BIOMASS_CO2_PER_GJ;
    let co2_avoided_tonnes =
        (co2_from_electricity + co2_from_fertilizer + co2_from_compost + co2_from_biomass) / 1000.0;
    let energy_offset_kwh = electricity_annual_kwh + energy_annual_gj * KWH_PER_GJ;

    Ok(PathwayCalculation {
        waste_type_id: waste.id.to_string(),
        quantity,
        quantity_unit: unit,
        daily_quantity_kg: round_to(daily_kg, 2),
        bio_content: waste.bio_content,
        carbon_content: waste.carbon_content,
        moisture: waste.moisture_content,
        anaerobic_digestion: AnaerobicDigestionMetrics {
            biogas_daily_kg: round_to(biogas_daily_kg, 2),
            methane_daily_kg: round_to(methane_daily_kg, 2),
            electricity_daily_kwh: round_to(electricity_daily_kwh, 2),
            electricity_annual_kwh: electricity_annual_kwh.round(),
            electricity_annual_revenue: electricity_annual_revenue.round(),
            fertilizer_daily_kg: round_to(fertilizer_daily_kg, 2),
            fertilizer_annual_revenue: fertilizer_annual_revenue.round(),
            investment_lakhs: round_to(ad_investment_lakhs, 1),
            annual_revenue_lakhs: round_to(ad_revenue_lakhs, 1),
            payback_years: round_to(payback_years(ad_investment_lakhs, ad_revenue_lakhs), 1),
        },
        composting: CompostingMetrics {
            compost_daily_kg: round_to(compost_daily_kg, 2),
            compost_annual_tonnes: round_to(compost_annual_tonnes, 2),
            annual_revenue_lakhs: round_to(compost_revenue_lakhs, 1),
            investment_lakhs: round_to(compost_investment_lakhs, 1),
            payback_years: round_to(
                payback_years(compost_investment_lakhs, compost_revenue_lakhs),
                1,
            ),
            landfill_diversion_tonnes: round_to(landfill_diversion_tonnes, 2),
        },
        biomass_energy: BiomassEnergyMetrics {
            briquette_daily_kg: round_to(briquette_daily_kg, 2),
            energy_daily_mj: round_to(energy_daily_mj, 2),
            energy_annual_gj: round_to(energy_annual_gj, 1),
            annual_revenue_lakhs: round_to(briquette_revenue_lakhs, 1),
            investment_lakhs: round_to(biomass_investment_lakhs, 1),
            payback_years: round_to(
                payback_years(biomass_investment_lakhs, briquette_revenue_lakhs),
                1,
            ),
        },
        environmental: EnvironmentalMetrics {
            co2_avoided_tonnes: round_to(co2_avoided_tonnes, 2),
            landfill_waste_diverted_tonnes: round_to(landfill_diversion_tonnes, 2),
            energy_offset_kwh: energy_offset_kwh.round(),
        },
    })
}

fn family_score(annual_revenue_lakhs: f64, investment_lakhs: f64, payback_years: f64) -> u32 {
    let score = (annual_revenue_lakhs / investment_lakhs) * 50.0
        + (payback_years.min(10.0) / 10.0) * 50.0;
    score.min(100.0).round() as u32
}

/// Score each calculator family on revenue-to-investment and payback, capped at 100
pub fn pathway_scores(calculation: &PathwayCalculation) -> PathwayScores {
    let ad = &calculation.anaerobic_digestion;
    let compost = &calculation.composting;
    let biomass = &calculation.biomass_energy;
    PathwayScores {
        anaerobic: family_score(ad.annual_revenue_lakhs, ad.investment_lakhs, ad.payback_years),
        compost: family_score(
            compost.annual_revenue_lakhs,
            compost.investment_lakhs,
            compost.payback_years,
        ),
        biomass: family_score(
            biomass.annual_revenue_lakhs,
            biomass.investment_lakhs,
            biomass.payback_years,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payback_uses_revenue_floor() {
        assert_eq!(payback_years(5.0, 0.0), 50.0);
        assert_eq!(payback_years(5.0, 2.0), 2.5);
    }

    #[test]
    fn moisture_factors_by_class() {
        assert_eq!(moisture_factor(MoistureClass::Wet), 1.2);
        assert_eq!(moisture_factor(MoistureClass::Dry), 0.8);
        assert_eq!(biomass_efficiency(MoistureClass::Wet), 0.6);
        assert_eq!(biomass_efficiency(MoistureClass::Dry), 1.2);
    }

    #[test]
    fn zero_quantity_yields_base_investments() {
        let calc = calculate_pathway_metrics("bagasse", 0.0, QuantityUnit::KgPerDay).unwrap();
        assert_eq!(calc.anaerobic_digestion.biogas_daily_kg, 0.0);
        assert_eq!(calc.anaerobic_digestion.investment_lakhs, 50.0);
        assert_eq!(calc.composting.investment_lakhs, 8.0);
        assert_eq!(calc.biomass_energy.investment_lakhs, 20.0);
        // Revenue floor kicks in
        assert_eq!(calc.composting.payback_years, 80.0);
    }

    #[test]
    fn score_is_capped() {
        assert_eq!(family_score(10.0, 1.0, 20.0), 100);
        assert_eq!(family_score(1.0, 2.0, 5.0), 50);
    }
}
