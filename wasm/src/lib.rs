//! WebAssembly module for the Agri Waste Valorisation Platform
//!
//! Provides client-side computation for:
//! - Quantity normalisation
//! - Pathway metrics and family scores
//! - Pathway recommendations
//! - Feasibility classification

use serde::Deserialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::{calculate_pathway_metrics, pathway_scores, RecommendationEngine};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("agri-waste-wasm loaded"));
}

/// Convert a quantity to kg/day. Unknown units pass through unchanged.
#[wasm_bindgen]
pub fn normalize_daily_quantity(quantity: f64, unit: &str) -> f64 {
    normalize_quantity_str(quantity, unit)
}

/// Calculate pathway metrics as JSON
#[wasm_bindgen]
pub fn calculate_metrics(waste_type_id: &str, quantity: f64, unit: &str) -> Result<String, JsValue> {
    metrics_json(waste_type_id, quantity, unit).map_err(report)
}

/// Calculate family return-on-investment scores as JSON
#[wasm_bindgen]
pub fn calculate_pathway_scores(
    waste_type_id: &str,
    quantity: f64,
    unit: &str,
) -> Result<String, JsValue> {
    scores_json(waste_type_id, quantity, unit).map_err(report)
}

/// Rank every pathway for the given request JSON
#[wasm_bindgen]
pub fn recommend_pathways(request_json: &str) -> Result<String, JsValue> {
    recommend_json(request_json).map_err(report)
}

/// Classify feasibility from criterion scores in [0, 1]
#[wasm_bindgen]
pub fn classify_pathway_feasibility(technical: f64, economic: f64, environmental: f64) -> String {
    let scores = CriteriaScores {
        technical,
        economic,
        environmental,
        scalability: 0.0,
    };
    classify_feasibility(&scores).to_string()
}

/// All waste type ids in the property table
#[wasm_bindgen]
pub fn list_waste_type_ids() -> js_sys::Array {
    WASTE_TYPES
        .iter()
        .map(|w| JsValue::from_str(w.id))
        .collect()
}

fn report(message: String) -> JsValue {
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

fn calculation(waste_type_id: &str, quantity: f64, unit: &str) -> Result<PathwayCalculation, String> {
    validate_quantity(quantity).map_err(str::to_string)?;
    let unit = parse_quantity_unit(unit).map_err(|e| e.to_string())?;
    calculate_pathway_metrics(waste_type_id, quantity, unit).map_err(|e| e.to_string())
}

fn metrics_json(waste_type_id: &str, quantity: f64, unit: &str) -> Result<String, String> {
    let calc = calculation(waste_type_id, quantity, unit)?;
    serde_json::to_string(&calc).map_err(|e| e.to_string())
}

fn scores_json(waste_type_id: &str, quantity: f64, unit: &str) -> Result<String, String> {
    let calc = calculation(waste_type_id, quantity, unit)?;
    serde_json::to_string(&pathway_scores(&calc)).map_err(|e| e.to_string())
}

#[derive(Deserialize)]
struct RecommendRequest {
    waste_characteristics: WasteCharacteristics,
    #[serde(default)]
    facility_context: FacilityContext,
    #[serde(default)]
    weights: Option<WeightOverrides>,
}

fn recommend_json(request_json: &str) -> Result<String, String> {
    let request: RecommendRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("Invalid request JSON: {}", e))?;
    validate_waste_characteristics(&request.waste_characteristics).map_err(|e| e.to_string())?;

    let engine = RecommendationEngine::new();
    resolve_weights(&engine.weights(), request.weights.as_ref()).map_err(|e| e.to_string())?;

    let ranked = engine.recommend(
        &request.waste_characteristics,
        &request.facility_context,
        request.weights.as_ref(),
    );
    serde_json::to_string(&ranked).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_daily_quantity() {
        assert!((normalize_daily_quantity(30.0, "tonnes/month") - 1000.0).abs() < 1e-9);
        assert_eq!(normalize_daily_quantity(7.0, "sacks"), 7.0);
    }

    #[test]
    fn test_classify_pathway_feasibility() {
        assert_eq!(classify_pathway_feasibility(0.9, 0.85, 0.9), "RECOMMENDED");
        assert_eq!(classify_pathway_feasibility(0.75, 0.7, 0.75), "FEASIBLE");
        assert_eq!(classify_pathway_feasibility(0.6, 0.5, 0.6), "CHALLENGING");
        assert_eq!(classify_pathway_feasibility(0.2, 0.3, 0.4), "NOT_FEASIBLE");
    }

    #[test]
    fn test_metrics_json() {
        let json = metrics_json("rice_husk", 1000.0, "kg/day").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["daily_quantity_kg"], 1000.0);

        assert!(metrics_json("rice_husk", 1000.0, "lbs").is_err());
        assert!(metrics_json("mango_seed", 1000.0, "kg/day").is_err());
        assert!(metrics_json("rice_husk", -1.0, "kg/day").is_err());
    }

    #[test]
    fn test_scores_json() {
        let json = scores_json("banana_peel", 5.0, "tonnes/month").unwrap();
        let scores: PathwayScores = serde_json::from_str(&json).unwrap();
        assert!(scores.anaerobic <= 100 && scores.compost <= 100 && scores.biomass <= 100);
    }

    #[test]
    fn test_recommend_json() {
        let request = r#"{
            "waste_characteristics": {
                "waste_type": "coconut_fiber",
                "quantity_per_year": 3000,
                "quantity_per_day": 10,
                "moisture_content": 15
            }
        }"#;
        let json = recommend_json(request).unwrap();
        let ranked: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(ranked.as_array().map(|a| a.len()), Some(8));

        assert!(recommend_json("{}").is_err());
    }
}
