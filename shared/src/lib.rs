//! Shared domain for the agricultural waste valorisation platform
//!
//! Holds the reference tables, the pathway metrics calculator and the
//! recommendation engine. Used by the backend and, via WASM, the browser.

pub mod calculator;
pub mod engine;
pub mod error;
pub mod models;
pub mod types;
pub mod validation;

pub use calculator::*;
pub use engine::*;
pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
