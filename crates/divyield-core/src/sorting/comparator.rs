//! Comparators and the column sorter that drives them.

use std::cmp::Ordering;

use super::{compare_text, Accessor, AttributeTable, SortDirection, SortValue, SortingContext};
use crate::error::CoreResult;

/// Compares two entities in ascending order under a sorting context.
pub trait SortComparator<T>: Send + Sync {
    /// Compares `a` with `b`.
    fn compare(&self, ctx: &SortingContext, a: &T, b: &T) -> Ordering;
}

impl<T, F> SortComparator<T> for F
where
    F: Fn(&SortingContext, &T, &T) -> Ordering + Send + Sync,
{
    fn compare(&self, ctx: &SortingContext, a: &T, b: &T) -> Ordering {
        self(ctx, a, b)
    }
}

/// Type-erased comparator.
pub type BoxedComparator<T> = Box<dyn SortComparator<T>>;

/// Unset values sort before set values.
fn compare_optional<V>(a: Option<V>, b: Option<V>, cmp: impl FnOnce(&V, &V) -> Ordering) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => cmp(&a, &b),
    }
}

/// Compares a single registered attribute.
pub struct AttributeComparator<T> {
    accessor: Accessor<T>,
}

impl<T> AttributeComparator<T> {
    /// Creates a comparator for a resolved accessor.
    #[must_use]
    pub fn new(accessor: Accessor<T>) -> Self {
        Self { accessor }
    }
}

impl<T> SortComparator<T> for AttributeComparator<T> {
    fn compare(&self, _ctx: &SortingContext, a: &T, b: &T) -> Ordering {
        compare_optional((self.accessor)(a), (self.accessor)(b), SortValue::compare)
    }
}

/// Applies comparators in turn until one distinguishes the entities.
pub struct ChainedComparator<T> {
    comparators: Vec<BoxedComparator<T>>,
}

impl<T> ChainedComparator<T> {
    /// Creates a chain from comparators in priority order.
    #[must_use]
    pub fn new(comparators: Vec<BoxedComparator<T>>) -> Self {
        Self { comparators }
    }
}

impl<T> SortComparator<T> for ChainedComparator<T> {
    fn compare(&self, ctx: &SortingContext, a: &T, b: &T) -> Ordering {
        self.comparators
            .iter()
            .map(|c| c.compare(ctx, a, b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// Compares values produced by a closure.
pub struct ValueProviderComparator<F> {
    provider: F,
}

impl<F> ValueProviderComparator<F> {
    /// Creates a comparator over `provider`'s output.
    #[must_use]
    pub fn new(provider: F) -> Self {
        Self { provider }
    }
}

impl<T, K, F> SortComparator<T> for ValueProviderComparator<F>
where
    K: Ord,
    F: Fn(&T) -> Option<K> + Send + Sync,
{
    fn compare(&self, _ctx: &SortingContext, a: &T, b: &T) -> Ordering {
        compare_optional((self.provider)(a), (self.provider)(b), K::cmp)
    }
}

/// Compares text produced by a closure, ignoring case.
pub struct IgnoreCaseComparator<F> {
    provider: F,
}

impl<F> IgnoreCaseComparator<F> {
    /// Creates a comparator over `provider`'s output.
    #[must_use]
    pub fn new(provider: F) -> Self {
        Self { provider }
    }
}

impl<T, F> SortComparator<T> for IgnoreCaseComparator<F>
where
    F: Fn(&T) -> Option<String> + Send + Sync,
{
    fn compare(&self, _ctx: &SortingContext, a: &T, b: &T) -> Ordering {
        compare_optional((self.provider)(a), (self.provider)(b), |a, b| {
            compare_text(a, b)
        })
    }
}

/// Sorts rows of a column by a comparator and a direction.
///
/// The sorter starts out descending. [`toggle`](Self::toggle) flips the
/// direction the way a repeated click on a column header does.
pub struct ColumnSorter<T> {
    comparator: BoxedComparator<T>,
    direction: SortDirection,
    option: Option<String>,
}

impl<T: 'static> ColumnSorter<T> {
    /// Creates a sorter from any comparator.
    #[must_use]
    pub fn from_comparator(comparator: impl SortComparator<T> + 'static) -> Self {
        Self {
            comparator: Box::new(comparator),
            direction: SortDirection::default(),
            option: None,
        }
    }

    /// Creates a sorter over named attributes, chained in the given order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownAttribute` for the first name the table
    /// does not register.
    pub fn by_attributes(table: &AttributeTable<T>, attributes: &[&str]) -> CoreResult<Self> {
        let mut comparators = attributes
            .iter()
            .map(|name| {
                table
                    .resolve(name)
                    .map(|a| Box::new(AttributeComparator::new(a)) as BoxedComparator<T>)
            })
            .collect::<CoreResult<Vec<_>>>()?;

        let sorter = if comparators.len() == 1 {
            Self {
                comparator: comparators.remove(0),
                direction: SortDirection::default(),
                option: None,
            }
        } else {
            Self::from_comparator(ChainedComparator::new(comparators))
        };
        Ok(sorter)
    }

    /// Creates a sorter over an ordered key.
    #[must_use]
    pub fn by_value<K, F>(provider: F) -> Self
    where
        K: Ord + 'static,
        F: Fn(&T) -> Option<K> + Send + Sync + 'static,
    {
        Self::from_comparator(ValueProviderComparator::new(provider))
    }

    /// Creates a sorter over text, ignoring case.
    #[must_use]
    pub fn by_text_ignore_case<F>(provider: F) -> Self
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        Self::from_comparator(IgnoreCaseComparator::new(provider))
    }

    /// Replaces the comparator with one derived from it.
    #[must_use]
    pub fn wrap(mut self, wrapper: impl FnOnce(BoxedComparator<T>) -> BoxedComparator<T>) -> Self {
        self.comparator = wrapper(self.comparator);
        self
    }

    /// Sets the direction.
    #[must_use]
    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the column option passed to comparators.
    #[must_use]
    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.option = Some(option.into());
        self
    }

    /// Flips the direction.
    pub fn toggle(&mut self) {
        self.direction = self.direction.toggled();
    }

    /// Current direction.
    #[must_use]
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Builds the context handed to comparators.
    #[must_use]
    pub fn context(&self) -> SortingContext {
        SortingContext::new(self.direction, self.option.clone())
    }

    /// Compares two rows in the sorter's direction.
    #[must_use]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        let ctx = self.context();
        self.direction.apply(self.comparator.compare(&ctx, a, b))
    }

    /// Sorts rows in place. The sort is stable.
    pub fn sort(&self, rows: &mut [T]) {
        let ctx = self.context();
        rows.sort_by(|a, b| self.direction.apply(self.comparator.compare(&ctx, a, b)));
    }
}
