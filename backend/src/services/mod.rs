//! Business logic services for the Agri Waste Valorisation server

pub mod catalog;
pub mod facility;
pub mod metrics;
pub mod recommendation;

pub use catalog::CatalogService;
pub use facility::FacilityService;
pub use metrics::MetricsService;
pub use recommendation::RecommendationService;
