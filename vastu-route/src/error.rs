//! Error types for VastuRoute

use thiserror::Error;

use crate::config::ConfigError;

/// VastuRoute error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid feature #{index}: {reason}")]
    InvalidFeature { index: usize, reason: String },

    #[error("Unknown point: {0}")]
    UnknownPoint(String),
}

pub type Result<T> = std::result::Result<T, Error>;
