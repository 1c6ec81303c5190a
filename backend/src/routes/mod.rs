//! Route definitions for the Agri Waste Valorisation API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/waste-types", waste_routes())
        .nest("/pathways", pathway_routes())
        .route("/recommendations", post(handlers::create_recommendations))
        .route("/pathway-metrics", post(handlers::calculate_metrics))
        .nest("/facilities", facility_routes())
}

/// Waste property table routes
fn waste_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_waste_types))
        .route("/categories", get(handlers::list_waste_categories))
        .route("/:waste_type_id", get(handlers::get_waste_type))
}

/// Pathway catalog routes
fn pathway_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_pathways))
        .route("/:pathway_id", get(handlers::get_pathway))
}

/// Facility directory routes
fn facility_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_facilities))
        .route("/nearest", get(handlers::nearest_facility))
        .route("/:facility_id", get(handlers::get_facility))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .nest("/api/v1", api_routes())
            .with_state(AppState::new(Config::default()))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_catalog_sizes() {
        let (status, body) = send(get_request("/api/v1/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["pathways"], 8);
        assert_eq!(body["waste_types"], 17);
    }

    #[tokio::test]
    async fn waste_type_lookup() {
        let (status, body) = send(get_request("/api/v1/waste-types/rice_husk")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Rice Husk");

        let (status, body) = send(get_request("/api/v1/waste-types/mango_seed")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn unknown_category_is_bad_request() {
        let (status, body) = send(get_request("/api/v1/waste-types?category=nuts")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "category");
    }

    #[tokio::test]
    async fn pathway_lookup() {
        let (status, body) = send(get_request("/api/v1/pathways")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(|a| a.len()), Some(8));

        let (status, body) = send(get_request("/api/v1/pathways/banana_stem_biogas")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "banana_stem_biogas");

        let (status, _) = send(get_request("/api/v1/pathways/plasma_arc")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn recommendations_are_ranked() {
        let request = json!({
            "waste_characteristics": {
                "waste_type": "rice_husk",
                "quantity_per_year": 15000.0,
                "quantity_per_day": 50.0,
                "moisture_content": 12.0
            },
            "facility_context": {
                "facility_type": "rice_mill",
                "labor_availability": "medium",
                "market_access": "high",
                "financial_capacity": "medium"
            }
        });
        let (status, body) = send(post_json("/api/v1/recommendations?limit=3", request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_pathways"], 8);

        let recommendations = body["recommendations"].as_array().unwrap();
        assert_eq!(recommendations.len(), 3);
        let scores: Vec<f64> = recommendations
            .iter()
            .map(|r| r["overall_score"].as_f64().unwrap())
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn invalid_moisture_is_rejected() {
        let request = json!({
            "waste_characteristics": {
                "waste_type": "rice_husk",
                "quantity_per_year": 15000.0,
                "quantity_per_day": 50.0,
                "moisture_content": 140.0
            }
        });
        let (status, body) = send(post_json("/api/v1/recommendations", request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "moisture_content");
    }

    #[tokio::test]
    async fn pathway_metrics_for_monthly_input() {
        let request = json!({
            "waste_type_id": "rice_husk",
            "quantity": 30.0,
            "unit": "tonnes/month"
        });
        let (status, body) = send(post_json("/api/v1/pathway-metrics", request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["calculation"]["daily_quantity_kg"], 1000.0);
        assert!(body["scores"]["anaerobic"].as_u64().unwrap() <= 100);
    }

    #[tokio::test]
    async fn pathway_metrics_reject_unknown_unit() {
        let request = json!({
            "waste_type_id": "rice_husk",
            "quantity": 30.0,
            "unit": "bushels"
        });
        let (status, body) = send(post_json("/api/v1/pathway-metrics", request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "unit");
    }

    #[tokio::test]
    async fn nearest_facility_lookup() {
        let (status, body) = send(get_request(
            "/api/v1/facilities/nearest?latitude=11.0086&longitude=76.996",
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["facility"]["id"], "f1");

        let (status, _) = send(get_request("/api/v1/facilities/f99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
