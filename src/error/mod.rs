//! Error handling for population generation.

use thiserror::Error;

/// Specialized error type for population generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PopulationError {
    /// Integer bounds passed to the random source are inverted
    #[error("Invalid range: lower bound {lower} is greater than upper bound {upper}")]
    InvalidRange {
        /// Lower bound, inclusive
        lower: i64,
        /// Upper bound, inclusive
        upper: i64,
    },
    /// Character bounds passed to the random source are inverted
    #[error("Invalid character range: '{lower}' is greater than '{upper}'")]
    InvalidCharRange {
        /// Lower bound, inclusive
        lower: char,
        /// Upper bound, inclusive
        upper: char,
    },
    /// Population configuration rejected by validation
    #[error("Configuration error: {0}")]
    InvalidConfig(String),
}

impl PopulationError {
    /// Create a configuration error from a message
    #[must_use]
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Result type for population operations
pub type Result<T> = std::result::Result<T, PopulationError>;
