//! Error types for the Divyield core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Two monetary amounts in different currencies were combined.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch {
        /// The expected currency code.
        expected: String,
        /// The actual currency code.
        got: String,
    },

    /// A value scale with a non-positive factor.
    #[error("Invalid value scale: {reason}")]
    InvalidScale {
        /// Description of what's invalid.
        reason: String,
    },

    /// A sort attribute was requested that the entity does not expose.
    #[error("Unknown attribute '{attribute}' for {entity}")]
    UnknownAttribute {
        /// The entity the lookup was made against.
        entity: String,
        /// The attribute name that failed to resolve.
        attribute: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a currency mismatch error.
    #[must_use]
    pub fn currency_mismatch(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            expected: expected.into(),
            got: got.into(),
        }
    }

    /// Creates an invalid scale error.
    #[must_use]
    pub fn invalid_scale(reason: impl Into<String>) -> Self {
        Self::InvalidScale {
            reason: reason.into(),
        }
    }

    /// Creates an unknown attribute error.
    #[must_use]
    pub fn unknown_attribute(entity: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            entity: entity.into(),
            attribute: attribute.into(),
        }
    }
}
