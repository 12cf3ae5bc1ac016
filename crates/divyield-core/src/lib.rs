//! # Divyield Core
//!
//! Core types and utilities shared by the Divyield crates.
//!
//! This crate provides the foundational building blocks:
//!
//! - **Types**: `Date`, `Currency`, `Money` and the fixed-point [`ValueScale`]
//!   that reconciles money, share and quote precisions
//! - **Sorting**: comparator chains driven by an explicit [`SortingContext`]
//!   and per-entity attribute tables
//!
//! ## Example
//!
//! ```rust
//! use divyield_core::prelude::*;
//!
//! let scale = ValueScale::default();
//! let price = Quote::from_f64(42.5, &scale);
//! assert_eq!(price.to_f64(&scale), 42.5);
//!
//! let paid = Money::new(1_250, Currency::EUR);
//! assert_eq!(paid.to_string(), "EUR 12.50");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod sorting;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::sorting::{
        AttributeTable, ColumnSorter, SortComparator, SortDirection, SortValue, Sortable,
        SortingContext,
    };
    pub use crate::types::{Currency, Date, Money, Quote, ValueScale};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Currency, Date, Money, Quote, ValueScale};
