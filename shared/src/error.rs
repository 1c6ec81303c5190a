//! Errors raised by the scoring core

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Waste type {0} not found")]
    WasteTypeNotFound(String),

    #[error("Conversion pathway {0} not found")]
    UnknownPathway(String),

    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },
}

impl CoreError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
