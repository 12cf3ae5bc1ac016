//! Typed attribute values and their ordering.

use std::cmp::Ordering;
use std::fmt;

use crate::types::{Date, Money, Quote};

/// A value read from an entity attribute for sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// Text, compared case-insensitively.
    Text(String),
    /// Integer.
    Integer(i64),
    /// Floating point, compared by total order.
    Float(f64),
    /// Calendar date.
    Date(Date),
    /// Boolean, `false` before `true`.
    Bool(bool),
    /// Monetary amount, by currency code then amount.
    Money(Money),
    /// Scaled quote.
    Quote(Quote),
}

impl SortValue {
    /// Convenience constructor for text values.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Compares two values.
    ///
    /// Values of the same kind use their natural ordering. Mixed kinds fall
    /// back to comparing their display text.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => compare_text(a, b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Money(a), Self::Money(b)) => a.cmp(b),
            (Self::Quote(a), Self::Quote(b)) => a.cmp(b),
            _ => compare_text(&self.to_string(), &other.to_string()),
        }
    }
}

impl fmt::Display for SortValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Date(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Money(v) => write!(f, "{v}"),
            Self::Quote(v) => write!(f, "{}", v.value()),
        }
    }
}

/// Case-insensitive text comparison with a case-sensitive tie break.
#[must_use]
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}
