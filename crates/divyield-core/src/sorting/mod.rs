//! Column sorting for tabular views of model entities.
//!
//! Comparators never read ambient state. Every comparison receives a
//! [`SortingContext`] carrying the requested direction and the column
//! option, and entity fields are reached through an [`AttributeTable`]
//! registered per entity type and resolved once when the sorter is built.
//!
//! ```rust
//! use divyield_core::sorting::{AttributeTable, ColumnSorter, SortDirection, SortValue, Sortable};
//!
//! struct Row {
//!     name: &'static str,
//!     weight: f64,
//! }
//!
//! impl Sortable for Row {
//!     fn attribute_table() -> AttributeTable<Self> {
//!         AttributeTable::<Self>::new("Row")
//!             .with("name", |r| Some(SortValue::text(r.name)))
//!             .with("weight", |r| Some(SortValue::Float(r.weight)))
//!     }
//! }
//!
//! let mut rows = vec![
//!     Row { name: "b", weight: 2.0 },
//!     Row { name: "a", weight: 2.0 },
//!     Row { name: "c", weight: 1.0 },
//! ];
//!
//! let sorter = ColumnSorter::by_attributes(&Row::attribute_table(), &["weight", "name"])
//!     .unwrap()
//!     .with_direction(SortDirection::Up);
//! sorter.sort(&mut rows);
//!
//! let names: Vec<_> = rows.iter().map(|r| r.name).collect();
//! assert_eq!(names, ["c", "a", "b"]);
//! ```

mod attributes;
mod comparator;
mod context;
mod value;

pub use attributes::{Accessor, AttributeTable, Sortable};
pub use comparator::{
    AttributeComparator, BoxedComparator, ChainedComparator, ColumnSorter, IgnoreCaseComparator,
    SortComparator, ValueProviderComparator,
};
pub use context::{SortDirection, SortingContext};
pub use value::{compare_text, SortValue};
