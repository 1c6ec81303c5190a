//! Configuration management for the Agri Waste Valorisation server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRI_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::ScoringWeights;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Recommendation scoring configuration
    pub scoring: ScoringConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScoringConfig {
    /// Base weight of the technical criterion
    pub technical: f64,

    /// Base weight of the economic criterion
    pub economic: f64,

    /// Base weight of the environmental criterion
    pub environmental: f64,

    /// Base weight of the scalability criterion
    pub scalability: f64,

    /// Upper bound on recommendations returned per request
    pub max_results: usize,
}

impl ScoringConfig {
    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights {
            technical: self.technical,
            economic: self.economic,
            environmental: self.environmental,
            scalability: self.scalability,
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let defaults = ScoringWeights::default();

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("scoring.technical", defaults.technical)?
            .set_default("scoring.economic", defaults.economic)?
            .set_default("scoring.environmental", defaults.environmental)?
            .set_default("scoring.scalability", defaults.scalability)?
            .set_default("scoring.max_results", 20)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI_ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let weights = ScoringWeights::default();
        Self {
            technical: weights.technical,
            economic: weights.economic,
            environmental: weights.environmental,
            scalability: weights.scalability,
            max_results: 20,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            scoring: ScoringConfig::default(),
        }
    }
}
