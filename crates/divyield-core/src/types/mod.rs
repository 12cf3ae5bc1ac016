//! Domain types for dividend analytics.
//!
//! - [`Date`]: Calendar date with year arithmetic for rolling windows
//! - [`Currency`]: ISO currency codes
//! - [`Money`]: Amount in currency minor units
//! - [`Quote`]: Price scaled by the quote factor
//! - [`ValueScale`]: Fixed-point factors for money, shares and quotes

mod currency;
mod date;
mod money;
mod values;

pub use currency::Currency;
pub use date::Date;
pub use money::{Money, Quote};
pub use values::ValueScale;
