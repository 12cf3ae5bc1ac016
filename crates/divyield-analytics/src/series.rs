//! Yield series and their chart representation.

use chrono::{DateTime, Utc};
use divyield_core::sorting::{AttributeTable, SortValue, Sortable};
use divyield_core::types::Date;
use serde::{Deserialize, Serialize};

/// A trailing dividend yield series.
///
/// `dates` and `values` are index-aligned; values are percentages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YieldSeries {
    dates: Vec<Date>,
    values: Vec<f64>,
}

impl YieldSeries {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            dates: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, date: Date, value: f64) {
        self.dates.push(date);
        self.values.push(value);
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Dates in ascending order.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Yield percentages.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates `(date, yield)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = YieldPoint> + '_ {
        self.dates
            .iter()
            .zip(&self.values)
            .map(|(&date, &value)| YieldPoint { date, value })
    }

    /// The yield on `date`, if the series has a point there.
    ///
    /// Dates are searched in series order, so the first point wins when a
    /// price source repeats a date.
    #[must_use]
    pub fn value_at(&self, date: Date) -> Option<f64> {
        self.dates
            .iter()
            .position(|&d| d == date)
            .map(|index| self.values[index])
    }

    /// The last point.
    #[must_use]
    pub fn last(&self) -> Option<YieldPoint> {
        self.iter().last()
    }

    /// Converts to the chart representation.
    #[must_use]
    pub fn to_chart_series(&self) -> ChartSeries {
        ChartSeries {
            dates: self.dates.iter().map(Date::to_timeline).collect(),
            values: self.values.clone(),
        }
    }
}

/// One point of a yield series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldPoint {
    /// Price date.
    pub date: Date,
    /// Trailing yield in percent.
    pub value: f64,
}

impl Sortable for YieldPoint {
    fn attribute_table() -> AttributeTable<Self> {
        AttributeTable::<Self>::new("YieldPoint")
            .with("date", |p| Some(SortValue::Date(p.date)))
            .with("yield", |p| Some(SortValue::Float(p.value)))
    }
}

/// Series in the form a chart consumes: timeline instants and values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Instants at midnight UTC of each price date.
    pub dates: Vec<DateTime<Utc>>,
    /// Yield percentages.
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use divyield_core::sorting::{ColumnSorter, SortDirection};

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn sample() -> YieldSeries {
        let mut series = YieldSeries::with_capacity(3);
        series.push(d(2023, 1, 2), 2.5);
        series.push(d(2023, 1, 3), 2.4);
        series.push(d(2023, 1, 4), 2.6);
        series
    }

    #[test]
    fn test_accessors() {
        let series = sample();
        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
        assert_eq!(series.value_at(d(2023, 1, 3)), Some(2.4));
        assert_eq!(series.value_at(d(2023, 1, 5)), None);
        assert_eq!(series.last().map(|p| p.date), Some(d(2023, 1, 4)));
    }

    #[test]
    fn test_value_at_without_date_order() {
        let mut series = YieldSeries::with_capacity(3);
        series.push(d(2023, 1, 4), 2.6);
        series.push(d(2023, 1, 2), 2.5);
        series.push(d(2023, 1, 4), 9.9);
        assert_eq!(series.value_at(d(2023, 1, 2)), Some(2.5));
        assert_eq!(series.value_at(d(2023, 1, 4)), Some(2.6));
    }

    #[test]
    fn test_chart_series_aligned() {
        let chart = sample().to_chart_series();
        assert_eq!(chart.len(), 3);
        assert_eq!(chart.dates[0], d(2023, 1, 2).to_timeline());
        assert_eq!(chart.values, [2.5, 2.4, 2.6]);
    }

    #[test]
    fn test_sort_points_by_yield() {
        let mut points: Vec<_> = sample().iter().collect();
        let sorter = ColumnSorter::by_attributes(&YieldPoint::attribute_table(), &["yield"])
            .unwrap()
            .with_direction(SortDirection::Down);
        sorter.sort(&mut points);
        assert_eq!(points[0].date, d(2023, 1, 4));
        assert_eq!(points[2].date, d(2023, 1, 3));
    }
}
