//! Monetary amounts and quotes in fixed-point representation.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::{Currency, ValueScale};
use crate::error::{CoreError, CoreResult};

/// An amount in currency minor units (money scale).
///
/// Every currency shares the same money factor, so a yen amount on the
/// default scale still carries two decimals.
///
/// # Example
///
/// ```rust
/// use divyield_core::types::{Currency, Money};
///
/// let gross = Money::new(1_000, Currency::USD);
/// let fee = Money::new(150, Currency::USD);
/// assert_eq!(gross.checked_add(&fee).unwrap().amount(), 1_150);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    /// Creates a monetary amount.
    #[must_use]
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Returns the amount in minor units.
    #[must_use]
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Adds two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::CurrencyMismatch` if the currencies differ.
    pub fn checked_add(&self, other: &Money) -> CoreResult<Money> {
        if self.currency != other.currency {
            return Err(CoreError::currency_mismatch(
                self.currency.code(),
                other.currency.code(),
            ));
        }
        Ok(Money::new(self.amount + other.amount, self.currency))
    }

    /// Converts to a floating point amount in currency units.
    #[must_use]
    pub fn to_f64(&self, scale: &ValueScale) -> f64 {
        self.amount as f64 / scale.money_divider()
    }

    /// Formats the amount with as many decimals as the money factor of
    /// `scale` has zeros, e.g. `JPY 1250` for a factor of 1.
    ///
    /// The factor is expected to be a power of ten.
    #[must_use]
    pub fn format(&self, scale: &ValueScale) -> String {
        let factor = scale.money_factor.unsigned_abs().max(1);
        let decimals = factor.ilog10() as usize;
        let sign = if self.amount < 0 { "-" } else { "" };
        let abs = self.amount.unsigned_abs();

        if decimals == 0 {
            format!("{} {sign}{}", self.currency, abs / factor)
        } else {
            format!(
                "{} {sign}{}.{:0decimals$}",
                self.currency,
                abs / factor,
                abs % factor
            )
        }
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    /// Orders by currency code first, then by amount.
    fn cmp(&self, other: &Self) -> Ordering {
        self.currency
            .code()
            .cmp(other.currency.code())
            .then(self.amount.cmp(&other.amount))
    }
}

/// Formats on the default scale; see [`Money::format`] for other scales.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&ValueScale::default()))
    }
}

/// A price scaled by the quote factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quote(i64);

impl Quote {
    /// Creates a quote from its raw scaled value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Quote(value)
    }

    /// Creates a quote from a currency amount, rounding to the quote scale.
    #[must_use]
    pub fn from_f64(value: f64, scale: &ValueScale) -> Self {
        Quote((value * scale.quote_divider()).round() as i64)
    }

    /// Returns the raw scaled value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Converts to a floating point price in currency units.
    #[must_use]
    pub fn to_f64(&self, scale: &ValueScale) -> f64 {
        self.0 as f64 / scale.quote_divider()
    }
}

impl From<i64> for Quote {
    fn from(value: i64) -> Self {
        Quote(value)
    }
}
