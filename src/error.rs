//! Error types for the outer surfaces (CLI, HTTP, config)
//!
//! The engine itself only ever fails validation; that case is carried by
//! `ValidationReport`. `SoilError` wraps it together with the failures that
//! can happen around the engine.

use crate::validation::ValidationReport;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SoilError {
    #[error(transparent)]
    Invalid(#[from] ValidationReport),

    #[error("invalid arguments: {0}")]
    Usage(String),

    #[error("invalid configuration for {key}: {reason}")]
    Config { key: String, reason: String },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SoilError {
    pub fn usage(msg: impl Into<String>) -> Self {
        SoilError::Usage(msg.into())
    }

    pub fn config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        SoilError::Config {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Validation report, if this is an input error
    pub fn validation(&self) -> Option<&ValidationReport> {
        match self {
            SoilError::Invalid(report) => Some(report),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SoilError>;
