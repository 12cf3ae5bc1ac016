//! Portfolio model types.
//!
//! - [`Security`] with [`SecurityPrice`] history and a [`LatestSecurityPrice`]
//! - [`AccountTransaction`] with [`Unit`]s
//! - [`Account`] and [`Client`]

mod account;
mod security;
mod transaction;

pub use account::{Account, Client};
pub use security::{LatestSecurityPrice, Security, SecurityId, SecurityPrice};
pub use transaction::{AccountTransaction, AccountTransactionType, Unit, UnitType};
