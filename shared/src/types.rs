//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Units accepted for a waste quantity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum QuantityUnit {
    #[serde(rename = "kg/day")]
    KgPerDay,
    #[serde(rename = "tonnes/month")]
    TonnesPerMonth,
    #[serde(rename = "tonnes/year")]
    TonnesPerYear,
}

impl QuantityUnit {
    pub const ALL: [QuantityUnit; 3] = [
        QuantityUnit::KgPerDay,
        QuantityUnit::TonnesPerMonth,
        QuantityUnit::TonnesPerYear,
    ];

    /// Parse the wire representation (`kg/day`, `tonnes/month`, `tonnes/year`)
    pub fn parse(unit: &str) -> Option<Self> {
        match unit {
            "kg/day" => Some(QuantityUnit::KgPerDay),
            "tonnes/month" => Some(QuantityUnit::TonnesPerMonth),
            "tonnes/year" => Some(QuantityUnit::TonnesPerYear),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityUnit::KgPerDay => "kg/day",
            QuantityUnit::TonnesPerMonth => "tonnes/month",
            QuantityUnit::TonnesPerYear => "tonnes/year",
        }
    }
}

impl std::fmt::Display for QuantityUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a quantity to kilograms per day
pub fn normalize_quantity(quantity: f64, unit: QuantityUnit) -> f64 {
    match unit {
        QuantityUnit::KgPerDay => quantity,
        QuantityUnit::TonnesPerMonth => quantity * 1000.0 / 30.0,
        QuantityUnit::TonnesPerYear => quantity * 1000.0 / 365.0,
    }
}

/// String form of [`normalize_quantity`].
///
/// Unrecognised units pass the quantity through unchanged. Callers that need
/// strictness should go through [`QuantityUnit::parse`] first.
pub fn normalize_quantity_str(quantity: f64, unit: &str) -> f64 {
    match QuantityUnit::parse(unit) {
        Some(unit) => normalize_quantity(quantity, unit),
        None => quantity,
    }
}

/// Qualitative rating used for facility resources
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::High => write!(f, "high"),
            Level::Medium => write!(f, "medium"),
            Level::Low => write!(f, "low"),
        }
    }
}

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
