//! Crop waste reference data

use serde::{Deserialize, Serialize};

/// Crop the waste stream originates from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WasteCategory {
    Rice,
    Coconut,
    Banana,
    Sugarcane,
    Cotton,
    Groundnut,
    Maize,
}

impl WasteCategory {
    pub fn parse(category: &str) -> Option<Self> {
        match category.to_ascii_lowercase().as_str() {
            "rice" => Some(WasteCategory::Rice),
            "coconut" => Some(WasteCategory::Coconut),
            "banana" => Some(WasteCategory::Banana),
            "sugarcane" => Some(WasteCategory::Sugarcane),
            "cotton" => Some(WasteCategory::Cotton),
            "groundnut" => Some(WasteCategory::Groundnut),
            "maize" => Some(WasteCategory::Maize),
            _ => None,
        }
    }
}

impl std::fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WasteCategory::Rice => write!(f, "Rice"),
            WasteCategory::Coconut => write!(f, "Coconut"),
            WasteCategory::Banana => write!(f, "Banana"),
            WasteCategory::Sugarcane => write!(f, "Sugarcane"),
            WasteCategory::Cotton => write!(f, "Cotton"),
            WasteCategory::Groundnut => write!(f, "Groundnut"),
            WasteCategory::Maize => write!(f, "Maize"),
        }
    }
}

/// Static moisture class of a waste type.
///
/// Drives the metrics calculator only. The engine's technical score uses the
/// measured moisture percentage on [`crate::WasteCharacteristics`] instead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MoistureClass {
    Dry,
    Wet,
    Mixed,
}

/// Composition attributes of a crop waste
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WasteType {
    pub id: &'static str,
    pub name: &'static str,
    pub category: WasteCategory,
    pub moisture_content: MoistureClass,
    pub description: &'static str,
    /// % biodegradable organic matter
    pub bio_content: f64,
    /// % carbon by mass
    pub carbon_content: f64,
}

const fn waste(
    id: &'static str,
    name: &'static str,
    category: WasteCategory,
    moisture_content: MoistureClass,
    description: &'static str,
    bio_content: f64,
    carbon_content: f64,
) -> WasteType {
    WasteType {
        id,
        name,
        category,
        moisture_content,
        description,
        bio_content,
        carbon_content,
    }
}

use MoistureClass::{Dry, Mixed, Wet};
use WasteCategory::*;

pub const WASTE_TYPES: &[WasteType] = &[
    // Rice
    waste("rice_husk", "Rice Husk", Rice, Dry, "Outer covering of rice grain", 95.0, 48.0),
    waste("rice_bran", "Rice Bran", Rice, Dry, "Inner layer removed during milling", 98.0, 42.0),
    waste("rice_straw", "Rice Straw", Rice, Mixed, "Stems and leaves after grain harvest", 92.0, 45.0),
    // Coconut
    waste("coconut_fiber", "Coconut Fiber (Coir)", Coconut, Dry, "Fiber from coconut husk", 90.0, 46.0),
    waste("coconut_shell", "Coconut Shell", Coconut, Dry, "Hard outer shell of coconut", 88.0, 49.0),
    waste("coconut_pith", "Coconut Pith (Coir Dust)", Coconut, Mixed, "Fine residue from coir processing", 85.0, 44.0),
    // Banana
    waste("banana_peel", "Banana Peel", Banana, Wet, "Outer skin of banana fruit", 99.0, 35.0),
    waste("banana_stem", "Banana Stem", Banana, Wet, "Pseudo-stem of banana plant", 96.0, 38.0),
    waste("banana_leaf", "Banana Leaf", Banana, Mixed, "Leaves from banana plants", 94.0, 40.0),
    // Sugarcane
    waste("bagasse", "Bagasse", Sugarcane, Mixed, "Fibrous residue after sugar extraction", 93.0, 47.0),
    waste("sugarcane_trash", "Sugarcane Trash", Sugarcane, Dry, "Leaves and tops from sugarcane", 91.0, 44.0),
    // Cotton
    waste("cotton_stalk", "Cotton Stalk", Cotton, Dry, "Stem and woody parts of cotton plant", 89.0, 48.0),
    waste("cotton_seed_hull", "Cotton Seed Hull", Cotton, Dry, "Shell of cotton seeds", 87.0, 46.0),
    // Groundnut
    waste("groundnut_shell", "Groundnut Shell", Groundnut, Dry, "Shell from groundnut pods", 86.0, 45.0),
    waste("groundnut_haulm", "Groundnut Haulm", Groundnut, Dry, "Leafy and stem material from groundnut", 88.0, 43.0),
    // Maize
    waste("corn_stover", "Corn Stover", Maize, Mixed, "Stalks, leaves, and cobs from maize", 90.0, 46.0),
    waste("corn_cob", "Corn Cob", Maize, Dry, "Core of the corn/maize ear", 89.0, 47.0),
];

/// Look up a waste type by id
pub fn waste_type(id: &str) -> Option<&'static WasteType> {
    WASTE_TYPES.iter().find(|w| w.id == id)
}

/// All waste types belonging to a crop category
pub fn wastes_by_category(category: WasteCategory) -> Vec<&'static WasteType> {
    WASTE_TYPES.iter().filter(|w| w.category == category).collect()
}

/// Distinct categories in table order
pub fn all_categories() -> Vec<WasteCategory> {
    let mut categories = Vec::new();
    for w in WASTE_TYPES {
        if !categories.contains(&w.category) {
            categories.push(w.category);
        }
    }
    categories
}

/// Processing characteristics of a waste stream
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WasteStreamProfile {
    pub waste_type: &'static str,
    /// Mass fractions by constituent
    pub composition: &'static [(&'static str, f64)],
    /// Typical moisture, %
    pub typical_moisture: f64,
    pub bulk_density: f64,
    /// kcal/kg
    pub calorific_value: Option<f64>,
    /// Coefficient of seasonal supply variation
    pub seasonal_variation: f64,
    pub primary_pathways: &'static [&'static str],
}

pub const WASTE_STREAM_PROFILES: &[WasteStreamProfile] = &[
    WasteStreamProfile {
        waste_type: "rice_husk",
        composition: &[
            ("cellulose", 0.35),
            ("lignin", 0.20),
            ("silica", 0.17),
            ("ash", 0.28),
            ("moisture", 0.12),
        ],
        typical_moisture: 12.0,
        bulk_density: 0.12,
        calorific_value: Some(3500.0),
        seasonal_variation: 0.15,
        primary_pathways: &["ash_production", "bioenergy", "activated_carbon"],
    },
    WasteStreamProfile {
        waste_type: "coconut_fiber",
        composition: &[
            ("cellulose", 0.43),
            ("lignin", 0.30),
            ("tannins", 0.06),
            ("moisture", 0.12),
            ("ash", 0.09),
        ],
        typical_moisture: 12.0,
        bulk_density: 0.08,
        calorific_value: Some(4200.0),
        seasonal_variation: 0.10,
        primary_pathways: &["textile_fiber", "composites", "composting"],
    },
    WasteStreamProfile {
        waste_type: "banana_peel",
        composition: &[
            ("carbohydrates", 0.20),
            ("cellulose", 0.15),
            ("moisture", 0.70),
            ("protein", 0.03),
            ("minerals", 0.05),
            ("others", 0.02),
        ],
        typical_moisture: 70.0,
        bulk_density: 0.20,
        calorific_value: None,
        seasonal_variation: 0.20,
        primary_pathways: &["animal_feed", "compost", "bioplastics"],
    },
    WasteStreamProfile {
        waste_type: "rice_bran",
        composition: &[
            ("oil", 0.18),
            ("protein", 0.12),
            ("carbohydrates", 0.50),
            ("fiber", 0.08),
            ("ash", 0.08),
            ("moisture", 0.12),
        ],
        typical_moisture: 12.0,
        bulk_density: 0.32,
        calorific_value: Some(4100.0),
        seasonal_variation: 0.05,
        primary_pathways: &["oil_extraction", "animal_feed", "biofuel"],
    },
    WasteStreamProfile {
        waste_type: "coconut_shell",
        composition: &[
            ("cellulose", 0.40),
            ("lignin", 0.35),
            ("ash", 0.05),
            ("moisture", 0.10),
            ("others", 0.10),
        ],
        typical_moisture: 10.0,
        bulk_density: 0.32,
        calorific_value: Some(5000.0),
        seasonal_variation: 0.08,
        primary_pathways: &["charcoal_production", "activated_carbon", "bioenergy"],
    },
    WasteStreamProfile {
        waste_type: "banana_stem",
        composition: &[
            ("cellulose", 0.30),
            ("hemicellulose", 0.20),
            ("lignin", 0.15),
            ("moisture", 0.28),
            ("ash", 0.07),
        ],
        typical_moisture: 80.0,
        bulk_density: 0.15,
        calorific_value: None,
        seasonal_variation: 0.15,
        primary_pathways: &["fiber_extraction", "composting", "biogas"],
    },
];

/// Look up the waste-stream profile for a waste type
pub fn waste_stream_profile(waste_type: &str) -> Option<&'static WasteStreamProfile> {
    WASTE_STREAM_PROFILES
        .iter()
        .find(|p| p.waste_type == waste_type)
}
