//! Agri Waste Valorisation Platform - Backend Server
//!
//! Ranks conversion pathways for agricultural waste streams and estimates
//! biogas, compost and briquette economics for a given waste quantity.

use axum::{routing::get, Router};
use shared::{validate_weights, RecommendationEngine};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod routes;
mod services;

pub use config::Config;
use error::AppError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommendationEngine>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let engine = RecommendationEngine::with_weights(config.scoring.weights());
        Self {
            engine: Arc::new(engine),
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agri_waste_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Agri Waste Valorisation Server");
    tracing::info!("Environment: {}", config.environment);

    let weights = config.scoring.weights();
    validate_weights(&weights)
        .map_err(|e| AppError::Configuration(format!("scoring weights: {}", e)))?;
    if config.scoring.max_results == 0 {
        return Err(AppError::Configuration("scoring.max_results must be positive".into()).into());
    }
    tracing::info!(
        "Scoring weights: technical {:.2}, economic {:.2}, environmental {:.2}, scalability {:.2}",
        weights.technical,
        weights.economic,
        weights.environmental,
        weights.scalability
    );

    // Create application state
    let state = AppState::new(config.clone());
    tracing::info!(
        "Loaded {} conversion pathways",
        state.engine.pathways().len()
    );

    // Build application
    let app = create_app(state);

    // Start server
    let host: std::net::IpAddr = config
        .server
        .host
        .parse()
        .map_err(|e| AppError::Configuration(format!("server.host: {}", e)))?;
    let addr = SocketAddr::from((host, config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Agri Waste Valorisation Platform API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
