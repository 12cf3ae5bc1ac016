//! Error types for the portfolio model.

use divyield_core::CoreError;
use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur while assembling the portfolio model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// A transaction unit failed validation.
    #[error("Invalid unit: {reason}")]
    InvalidUnit {
        /// The reason the unit is invalid.
        reason: String,
    },

    /// A unit or transaction used a currency other than the expected one.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch {
        /// The expected currency code.
        expected: String,
        /// The actual currency code.
        got: String,
    },

    /// A transaction already carries a unit of a kind that may occur once.
    #[error("Duplicate {kind} unit on transaction")]
    DuplicateUnit {
        /// The unit kind.
        kind: String,
    },

    /// Error raised by a core type.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PortfolioError {
    /// Create an invalid unit error.
    #[must_use]
    pub fn invalid_unit(reason: impl Into<String>) -> Self {
        Self::InvalidUnit {
            reason: reason.into(),
        }
    }

    /// Create a currency mismatch error.
    #[must_use]
    pub fn currency_mismatch(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            expected: expected.into(),
            got: got.into(),
        }
    }
}
