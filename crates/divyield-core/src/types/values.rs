//! Fixed-point scaling factors.
//!
//! Money, share counts and quotes are stored as integers, each with its own
//! number of implied decimal places:
//!
//! ```text
//! money   12.34 EUR   -> 1_234          (factor 10^2)
//! shares  1.5         -> 150_000_000    (factor 10^8)
//! quote   101.25      -> 10_125_000_000 (factor 10^8)
//! ```
//!
//! [`ValueScale`] carries the three factors so that conversions between the
//! representations are explicit at every call site.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Fixed-point factors for money, share and quote values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueScale {
    /// Units per currency unit for monetary amounts.
    pub money_factor: i64,
    /// Units per share for share counts.
    pub share_factor: i64,
    /// Units per currency unit for quotes.
    pub quote_factor: i64,
}

impl Default for ValueScale {
    fn default() -> Self {
        Self {
            money_factor: 100,
            share_factor: 100_000_000,
            quote_factor: 100_000_000,
        }
    }
}

impl ValueScale {
    /// Creates a scale from explicit factors.
    #[must_use]
    pub fn new(money_factor: i64, share_factor: i64, quote_factor: i64) -> Self {
        Self {
            money_factor,
            share_factor,
            quote_factor,
        }
    }

    /// Divider turning money units into currency units.
    #[must_use]
    pub fn money_divider(&self) -> f64 {
        self.money_factor as f64
    }

    /// Divider turning share units into shares.
    #[must_use]
    pub fn share_divider(&self) -> f64 {
        self.share_factor as f64
    }

    /// Divider turning quote units into currency units.
    #[must_use]
    pub fn quote_divider(&self) -> f64 {
        self.quote_factor as f64
    }

    /// Multiplier taking a money amount onto the quote scale.
    #[must_use]
    pub fn quote_factor_to_money(&self) -> f64 {
        self.quote_factor as f64 / self.money_factor as f64
    }

    /// Checks that every factor is positive.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, factor) in [
            ("money_factor", self.money_factor),
            ("share_factor", self.share_factor),
            ("quote_factor", self.quote_factor),
        ] {
            if factor <= 0 {
                return Err(CoreError::invalid_scale(format!(
                    "{name} must be positive, got {factor}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let scale = ValueScale::default();
        assert_relative_eq!(scale.money_divider(), 100.0);
        assert_relative_eq!(scale.share_divider(), 1e8);
        assert_relative_eq!(scale.quote_divider(), 1e8);
        assert_relative_eq!(scale.quote_factor_to_money(), 1e6);
        assert!(scale.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero() {
        let scale = ValueScale::new(100, 0, 10_000);
        let err = scale.validate().unwrap_err();
        assert!(err.to_string().contains("share_factor"));
    }
}
