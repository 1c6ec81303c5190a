//! Domain models for the agricultural waste valorisation platform

mod calculation;
mod facility;
mod pathway;
mod recommendation;
mod waste;

pub use calculation::*;
pub use facility::*;
pub use pathway::*;
pub use recommendation::*;
pub use waste::*;
