//! HTTP handlers for the Agri Waste Valorisation API

pub mod facility;
pub mod health;
pub mod metrics;
pub mod pathway;
pub mod recommendation;
pub mod waste;

pub use facility::*;
pub use health::*;
pub use metrics::*;
pub use pathway::*;
pub use recommendation::*;
pub use waste::*;
