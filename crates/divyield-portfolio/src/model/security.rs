//! Securities and their price history.

use divyield_core::types::{Currency, Date};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a security.
///
/// Transactions refer to their security by id; two securities with the
/// same name are still distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityId(Uuid);

impl SecurityId {
    /// Generates a fresh random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SecurityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SecurityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Historical closing price of a security.
///
/// `value` is scaled by the quote factor of the active
/// [`ValueScale`](divyield_core::ValueScale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecurityPrice {
    date: Date,
    value: i64,
}

impl SecurityPrice {
    /// Creates a price point.
    #[must_use]
    pub fn new(date: Date, value: i64) -> Self {
        Self { date, value }
    }

    /// Date of the price.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Scaled price value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }
}

/// Most recent live quote of a security.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestSecurityPrice {
    date: Date,
    value: i64,
    high: Option<i64>,
    low: Option<i64>,
    volume: Option<i64>,
}

impl LatestSecurityPrice {
    /// Creates a latest quote with only the last traded value.
    #[must_use]
    pub fn new(date: Date, value: i64) -> Self {
        Self {
            date,
            value,
            high: None,
            low: None,
            volume: None,
        }
    }

    /// Sets the day's high and low.
    #[must_use]
    pub fn with_range(mut self, high: i64, low: i64) -> Self {
        self.high = Some(high);
        self.low = Some(low);
        self
    }

    /// Sets the traded volume.
    #[must_use]
    pub fn with_volume(mut self, volume: i64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Date of the quote.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Scaled last value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Scaled day high, if reported.
    #[must_use]
    pub fn high(&self) -> Option<i64> {
        self.high
    }

    /// Scaled day low, if reported.
    #[must_use]
    pub fn low(&self) -> Option<i64> {
        self.low
    }

    /// Traded volume, if reported.
    #[must_use]
    pub fn volume(&self) -> Option<i64> {
        self.volume
    }

    /// The quote as a price point.
    #[must_use]
    pub fn as_price(&self) -> SecurityPrice {
        SecurityPrice::new(self.date, self.value)
    }
}

/// A tradable instrument with a price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Security {
    id: SecurityId,
    name: String,
    currency: Currency,
    isin: Option<String>,
    ticker: Option<String>,
    prices: Vec<SecurityPrice>,
    latest: Option<LatestSecurityPrice>,
}

impl Security {
    /// Creates a security without prices.
    #[must_use]
    pub fn new(name: impl Into<String>, currency: Currency) -> Self {
        Self {
            id: SecurityId::new(),
            name: name.into(),
            currency,
            isin: None,
            ticker: None,
            prices: Vec::new(),
            latest: None,
        }
    }

    /// Sets the ISIN.
    #[must_use]
    pub fn with_isin(mut self, isin: impl Into<String>) -> Self {
        self.isin = Some(isin.into());
        self
    }

    /// Sets the ticker symbol.
    #[must_use]
    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// Adds prices, see [`add_price`](Self::add_price).
    #[must_use]
    pub fn with_prices(mut self, prices: impl IntoIterator<Item = SecurityPrice>) -> Self {
        for price in prices {
            self.add_price(price);
        }
        self
    }

    /// Sets the latest quote.
    #[must_use]
    pub fn with_latest(mut self, latest: LatestSecurityPrice) -> Self {
        self.latest = Some(latest);
        self
    }

    /// Identity of the security.
    #[must_use]
    pub fn id(&self) -> SecurityId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Currency the security is quoted in.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// ISIN, if known.
    #[must_use]
    pub fn isin(&self) -> Option<&str> {
        self.isin.as_deref()
    }

    /// Ticker symbol, if known.
    #[must_use]
    pub fn ticker(&self) -> Option<&str> {
        self.ticker.as_deref()
    }

    /// Historical prices in ascending date order.
    #[must_use]
    pub fn prices(&self) -> &[SecurityPrice] {
        &self.prices
    }

    /// The latest live quote, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&LatestSecurityPrice> {
        self.latest.as_ref()
    }

    /// Inserts a price keeping dates ascending.
    ///
    /// A price on a date that already has one replaces it; returns `true`
    /// in that case.
    pub fn add_price(&mut self, price: SecurityPrice) -> bool {
        match self.prices.binary_search_by_key(&price.date, SecurityPrice::date) {
            Ok(index) => {
                tracing::debug!(security = %self.name, date = %price.date, "Replacing price");
                self.prices[index] = price;
                true
            }
            Err(index) => {
                self.prices.insert(index, price);
                false
            }
        }
    }

    /// Historical prices with the latest quote merged in.
    ///
    /// The latest quote replaces a historical price on the same date or is
    /// inserted at its date position otherwise.
    #[must_use]
    pub fn prices_including_latest(&self) -> Vec<SecurityPrice> {
        let mut prices = self.prices.clone();

        if let Some(latest) = self.latest {
            let price = latest.as_price();
            match prices.binary_search_by_key(&price.date, SecurityPrice::date) {
                Ok(index) => prices[index] = price,
                Err(index) => prices.insert(index, price),
            }
        }

        prices
    }
}
