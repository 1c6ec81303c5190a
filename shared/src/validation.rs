//! Boundary validation for assessment inputs
//!
//! The calculator and engine assume sane numbers. These checks run before
//! either is invoked so negative masses never reach the payback arithmetic.

use validator::Validate;

use crate::error::{CoreError, CoreResult};
use crate::models::{ScoringWeights, WasteCharacteristics, WeightOverrides};
use crate::types::QuantityUnit;

/// Validate a waste quantity is finite and non-negative
pub fn validate_quantity(quantity: f64) -> Result<(), &'static str> {
    if !quantity.is_finite() {
        return Err("Quantity must be a finite number");
    }
    if quantity < 0.0 {
        return Err("Quantity cannot be negative");
    }
    Ok(())
}

/// Validate a moisture percentage
pub fn validate_moisture_percent(moisture: f64) -> Result<(), &'static str> {
    if !moisture.is_finite() || !(0.0..=100.0).contains(&moisture) {
        return Err("Moisture content must be between 0 and 100%");
    }
    Ok(())
}

/// Parse a quantity unit, rejecting anything outside the supported set
pub fn parse_quantity_unit(unit: &str) -> CoreResult<QuantityUnit> {
    QuantityUnit::parse(unit).ok_or_else(|| {
        CoreError::validation(
            "unit",
            format!(
                "Unsupported unit '{}', expected one of kg/day, tonnes/month, tonnes/year",
                unit
            ),
        )
    })
}

/// Validate a full set of waste characteristics
pub fn validate_waste_characteristics(waste: &WasteCharacteristics) -> CoreResult<()> {
    if let Err(errors) = waste.validate() {
        let field = errors
            .field_errors()
            .keys()
            .min()
            .map(|f| f.to_string())
            .unwrap_or_else(|| "waste_characteristics".to_string());
        return Err(CoreError::validation(field, errors.to_string()));
    }
    validate_quantity(waste.quantity_per_day)
        .map_err(|m| CoreError::validation("quantity_per_day", m))?;
    validate_quantity(waste.quantity_per_year)
        .map_err(|m| CoreError::validation("quantity_per_year", m))?;
    validate_moisture_percent(waste.moisture_content)
        .map_err(|m| CoreError::validation("moisture_content", m))?;
    Ok(())
}

/// Validate weights after merging overrides.
///
/// The sum is not required to be 1, but it must be positive.
pub fn validate_weights(weights: &ScoringWeights) -> CoreResult<()> {
    let all = [
        ("technical", weights.technical),
        ("economic", weights.economic),
        ("environmental", weights.environmental),
        ("scalability", weights.scalability),
    ];
    for (field, value) in all {
        if !value.is_finite() || value < 0.0 {
            return Err(CoreError::validation(
                field,
                "Weights must be finite and non-negative",
            ));
        }
    }
    if weights.total() <= 0.0 {
        return Err(CoreError::validation("weights", "Weights must not all be zero"));
    }
    Ok(())
}

/// Merge and validate per-request weight overrides
pub fn resolve_weights(
    base: &ScoringWeights,
    overrides: Option<&WeightOverrides>,
) -> CoreResult<ScoringWeights> {
    let weights = match overrides {
        Some(o) => {
            o.validate().map_err(|errors| {
                let field = errors
                    .field_errors()
                    .keys()
                    .min()
                    .map(|f| f.to_string())
                    .unwrap_or_else(|| "weights".to_string());
                CoreError::validation(field, errors.to_string())
            })?;
            base.merge(o)
        }
        None => *base,
    };
    validate_weights(&weights)?;
    Ok(weights)
}
