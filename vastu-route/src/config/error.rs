//! Configuration loading errors.

use thiserror::Error;

/// Config load or validation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(String),

    /// YAML parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Values parsed but violate a constraint
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
