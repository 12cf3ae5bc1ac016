//! # Divyield Analytics
//!
//! Trailing-twelve-month dividend yield series for a security.
//!
//! For every price of the security, the dividends paid per share in the
//! preceding year are summed and expressed as a percentage of that price.
//!
//! ## Features
//!
//! - **Yield series**: [`DividendYield`] and [`calculate_dividend_yield`]
//! - **Normalization**: per-share dividend amounts across fixed-point scales
//! - **Intervals**: [`ChartInterval`] and [`ChartRange`] presets
//! - **Sinks**: [`MemorySink`] and [`CsvSink`]
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use divyield_analytics::prelude::*;
//! use divyield_core::types::{Currency, Date, Money};
//! use divyield_portfolio::prelude::*;
//!
//! let security = Security::new("Acme", Currency::EUR).with_prices([
//!     SecurityPrice::new(Date::from_ymd(2023, 6, 1).unwrap(), 5_000_000_000),
//! ]);
//!
//! // 2.00 EUR for 1 share
//! let paid = NaiveDate::from_ymd_opt(2023, 3, 15).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let dividend = AccountTransaction::new(
//!     AccountTransactionType::Dividends,
//!     paid,
//!     Money::new(200, Currency::EUR),
//! )
//! .with_security(security.id())
//! .with_shares(100_000_000);
//! let account = Account::new("Broker", Currency::EUR)
//!     .with_transactions([dividend])
//!     .unwrap();
//! let client = Client::new().with_account(account);
//!
//! let dy = DividendYield::new(&client, Some(&security), ChartInterval::unbounded());
//! assert_eq!(dy.series().values(), [4.0]);
//!
//! let mut sink = CsvSink::new(Vec::new());
//! dy.render_to(&mut sink).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]

pub mod config;
pub mod dividends;
pub mod error;
pub mod interval;
pub mod series;
pub mod sink;
pub mod sources;
pub mod yield_series;

pub use config::{YieldBasis, YieldConfig, ZeroPricePolicy};
pub use error::{AnalyticsError, AnalyticsResult};
pub use interval::{ChartInterval, ChartRange};
pub use series::{ChartSeries, YieldPoint, YieldSeries};
pub use sink::{CsvSink, MemorySink, SeriesSink};
pub use sources::{PriceSource, TransactionSource};
pub use yield_series::{calculate_dividend_yield, DividendYield};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{YieldBasis, YieldConfig, ZeroPricePolicy};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::interval::{ChartInterval, ChartRange};
    pub use crate::series::{ChartSeries, YieldPoint, YieldSeries};
    pub use crate::sink::{CsvSink, MemorySink, SeriesSink};
    pub use crate::sources::{PriceSource, TransactionSource};
    pub use crate::yield_series::{calculate_dividend_yield, DividendYield};
}
