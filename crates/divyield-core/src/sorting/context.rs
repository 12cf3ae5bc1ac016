//! Sort direction and the per-comparison context.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Direction of a column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Ascending.
    Up,
    /// Descending.
    #[default]
    Down,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Applies the direction to an ascending ordering.
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Up => ordering,
            Self::Down => ordering.reverse(),
        }
    }
}

/// State visible to comparators for the duration of one comparison.
///
/// Comparators use the direction to keep rows at a stable position
/// regardless of the requested order (a totals row that always sorts last,
/// for example) and the option to pick what a configurable column shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortingContext {
    direction: SortDirection,
    option: Option<String>,
}

impl SortingContext {
    /// Creates a context.
    #[must_use]
    pub fn new(direction: SortDirection, option: Option<String>) -> Self {
        Self { direction, option }
    }

    /// The direction the column is being sorted in.
    #[must_use]
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// The option currently selected on the column, if any.
    #[must_use]
    pub fn column_option(&self) -> Option<&str> {
        self.option.as_deref()
    }
}
