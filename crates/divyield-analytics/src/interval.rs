//! Chart intervals and range presets.

use divyield_core::types::Date;
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsResult;

/// The date range a chart shows.
///
/// Only the lower bound takes part in filtering: a date is inside the
/// interval when it is strictly after `start`, and every date is inside
/// when `start` is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartInterval {
    start: Option<Date>,
}

impl ChartInterval {
    /// An interval starting after `start`.
    #[must_use]
    pub fn starting_after(start: Date) -> Self {
        Self { start: Some(start) }
    }

    /// An interval without lower bound.
    #[must_use]
    pub fn unbounded() -> Self {
        Self { start: None }
    }

    /// The exclusive lower bound.
    #[must_use]
    pub fn start(&self) -> Option<Date> {
        self.start
    }

    /// Returns true if `date` lies in the interval.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start.map_or(true, |start| start < date)
    }
}

/// Range presets offered by the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartRange {
    /// Last month.
    OneMonth,
    /// Last two months.
    TwoMonths,
    /// Last six months.
    SixMonths,
    /// Last year.
    OneYear,
    /// Last two years.
    TwoYears,
    /// Last three years.
    ThreeYears,
    /// Last five years.
    FiveYears,
    /// Last ten years.
    TenYears,
    /// Since the start of the current year.
    YearToDate,
    /// The full history.
    All,
}

impl ChartRange {
    /// Resolves the preset against `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if the start date falls outside the supported
    /// calendar range.
    pub fn interval(self, today: Date) -> AnalyticsResult<ChartInterval> {
        let months = match self {
            Self::OneMonth => 1,
            Self::TwoMonths => 2,
            Self::SixMonths => 6,
            Self::OneYear => 12,
            Self::TwoYears => 24,
            Self::ThreeYears => 36,
            Self::FiveYears => 60,
            Self::TenYears => 120,
            // the day before Jan 1 so that Jan 1 is inside
            Self::YearToDate => {
                return Ok(ChartInterval::starting_after(today.start_of_year() - 1))
            }
            Self::All => return Ok(ChartInterval::unbounded()),
        };
        Ok(ChartInterval::starting_after(today.add_months(-months)?))
    }
}
