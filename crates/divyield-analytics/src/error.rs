//! Error types for yield analytics.

use divyield_core::CoreError;
use thiserror::Error;

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur while configuring, computing or rendering a series.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// A configuration value is out of range or could not be parsed.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// The requested calculation exists as an option but is not built.
    #[error("Not implemented: {feature}")]
    NotImplemented {
        /// The unavailable feature.
        feature: String,
    },

    /// A rendering sink failed.
    #[error("Sink error: {reason}")]
    Sink {
        /// The reason the sink failed.
        reason: String,
    },

    /// CSV output failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised by a core type.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AnalyticsError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a not implemented error.
    #[must_use]
    pub fn not_implemented(feature: impl Into<String>) -> Self {
        Self::NotImplemented {
            feature: feature.into(),
        }
    }

    /// Create a sink error.
    #[must_use]
    pub fn sink(reason: impl Into<String>) -> Self {
        Self::Sink {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_config(err.to_string())
    }
}
