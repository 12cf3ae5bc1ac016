//! Currency type with ISO 4217 codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 4217 currency codes.
///
/// Covers the currencies securities are commonly quoted and paid in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum Currency {
    /// Euro
    #[default]
    EUR,
    /// United States Dollar
    USD,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
    /// Swiss Franc
    CHF,
    /// Canadian Dollar
    CAD,
    /// Australian Dollar
    AUD,
    /// Swedish Krona
    SEK,
    /// Norwegian Krone
    NOK,
    /// Danish Krone
    DKK,
    /// Hong Kong Dollar
    HKD,
}

impl Currency {
    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::SEK => "SEK",
            Currency::NOK => "NOK",
            Currency::DKK => "DKK",
            Currency::HKD => "HKD",
        }
    }

    /// Returns the currency symbol.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EUR => "€",
            Currency::USD => "$",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::CHF => "CHF",
            Currency::CAD => "C$",
            Currency::AUD => "A$",
            Currency::SEK | Currency::NOK | Currency::DKK => "kr",
            Currency::HKD => "HK$",
        }
    }

    /// Parses a currency from a string code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "EUR" => Some(Currency::EUR),
            "USD" => Some(Currency::USD),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CHF" => Some(Currency::CHF),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            "SEK" => Some(Currency::SEK),
            "NOK" => Some(Currency::NOK),
            "DKK" => Some(Currency::DKK),
            "HKD" => Some(Currency::HKD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::USD.code(), "USD");
        assert_eq!(Currency::EUR.code(), "EUR");
        assert_eq!(Currency::GBP.symbol(), "£");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("CHF"), Some(Currency::CHF));
        assert_eq!(Currency::from_code("XXX"), None);
        assert_eq!(Currency::from_code(""), None);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Currency::DKK).unwrap();
        assert_eq!(json, "\"DKK\"");
        let parsed: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Currency::DKK);
    }
}
