//! # Divyield Portfolio
//!
//! The portfolio model consumed by the dividend yield analytics.
//!
//! ## Features
//!
//! - **Securities**: price history kept in date order, merged with the
//!   latest live quote on demand
//! - **Transactions**: dividend, trade and cash bookings with tax, fee and
//!   forex gross-value units
//! - **Accounts and clients**: ownership of transactions and securities
//! - **Sorting**: attribute tables for [`divyield_core::sorting`]
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use divyield_core::types::{Currency, Date, Money};
//! use divyield_portfolio::prelude::*;
//!
//! let security = Security::new("Acme Corp", Currency::EUR)
//!     .with_prices([SecurityPrice::new(Date::from_ymd(2024, 3, 1).unwrap(), 4_200_000_000)]);
//!
//! let paid = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let dividend = AccountTransaction::new(
//!     AccountTransactionType::Dividends,
//!     paid,
//!     Money::new(1_200, Currency::EUR),
//! )
//! .with_security(security.id())
//! .with_shares(10 * 100_000_000);
//!
//! let account = Account::new("Broker", Currency::EUR)
//!     .with_transactions([dividend])
//!     .unwrap();
//! let client = Client::new().with_security(security).with_account(account);
//! assert_eq!(client.transactions().count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod model;
pub mod sorting;

pub use error::{PortfolioError, PortfolioResult};

pub use model::{
    Account, AccountTransaction, AccountTransactionType, Client, LatestSecurityPrice, Security,
    SecurityId, SecurityPrice, Unit, UnitType,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::model::{
        Account, AccountTransaction, AccountTransactionType, Client, LatestSecurityPrice,
        Security, SecurityId, SecurityPrice, Unit, UnitType,
    };
}
