//! Error types for ROI estimation.
//!
//! The library surfaces a single [`Error`] enum. Command handlers and the
//! binaries wrap it in `anyhow::Result` so that context can be attached at the
//! edges without losing the structured variant underneath.
//!
//! # Example
//!
//! ```rust
//! use roi_estimator::errors::Error;
//!
//! let err = Error::invalid_input("Solo Consultant", "current_revenue", "must be greater than zero");
//! assert!(err.is_invalid_input());
//! assert_eq!(
//!     err.to_string(),
//!     "Invalid input for scenario 'Solo Consultant': current_revenue must be greater than zero"
//! );
//! ```

use thiserror::Error;

/// Main error type for roi-estimator operations
#[derive(Debug, Error)]
pub enum Error {
    /// A scenario carries a value the estimator cannot evaluate
    #[error("Invalid input for scenario '{scenario}': {field} {reason}")]
    InvalidInput {
        scenario: String,
        field: &'static str,
        reason: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create an invalid input error for a named scenario field
    pub fn invalid_input(
        scenario: impl Into<String>,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            scenario: scenario.into(),
            field,
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Result type alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;
