//! Date type for dividend and price calculations.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{CoreError, CoreResult};

/// A calendar date.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing the
/// year arithmetic used by trailing windows and the timeline conversion
/// used by chart sinks.
///
/// # Example
///
/// ```rust
/// use divyield_core::types::Date;
///
/// let date = Date::from_ymd(2024, 2, 29).unwrap();
/// let year_ago = date.add_years(-1).unwrap();
/// assert_eq!(year_ago, Date::from_ymd(2023, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Truncates a date-time to its calendar date.
    #[must_use]
    pub fn from_date_time(date_time: NaiveDateTime) -> Self {
        Date(date_time.date())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let new_day = self.day().min(days_in_month(new_year, new_month));

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Adds a number of years to the date.
    ///
    /// Feb 29 rolls back to Feb 28 when the target year is not a leap year.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_years(&self, years: i32) -> CoreResult<Self> {
        let new_year = self.year() + years;
        let new_day = self.day().min(days_in_month(new_year, self.month()));

        Self::from_ymd(new_year, self.month(), new_day)
    }

    /// Calculates the number of calendar days between two dates.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the first day of the year.
    #[must_use]
    pub fn start_of_year(&self) -> Self {
        Date(self.0.with_ordinal(1).unwrap_or(self.0))
    }

    /// Converts the date to a timeline instant at midnight UTC.
    #[must_use]
    pub fn to_timeline(&self) -> DateTime<Utc> {
        self.0.and_time(chrono::NaiveTime::MIN).and_utc()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_add_months() {
        let date = Date::from_ymd(2025, 1, 31).unwrap();
        let result = date.add_months(1).unwrap();
        assert_eq!(result, Date::from_ymd(2025, 2, 28).unwrap());

        let back = Date::from_ymd(2025, 1, 15).unwrap().add_months(-6).unwrap();
        assert_eq!(back, Date::from_ymd(2024, 7, 15).unwrap());
    }

    #[test]
    fn test_add_years_leap_day() {
        let leap = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(leap.add_years(-1).unwrap(), Date::from_ymd(2023, 2, 28).unwrap());
        assert_eq!(leap.add_years(4).unwrap(), Date::from_ymd(2028, 2, 29).unwrap());
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2025, 1, 1).unwrap();
        let d2 = Date::from_ymd(2025, 1, 31).unwrap();
        assert_eq!(d1.days_between(&d2), 30);
        assert_eq!(d2 - d1, 30);
        assert_eq!(d1 + 30, d2);
        assert_eq!(d2 - 30, d1);
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2025-06-15").unwrap();
        assert_eq!(date, Date::from_ymd(2025, 6, 15).unwrap());
        assert!(Date::parse("15/06/2025").is_err());
    }

    #[test]
    fn test_from_date_time_truncates() {
        let dt = NaiveDate::from_ymd_opt(2023, 3, 14)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(Date::from_date_time(dt), Date::from_ymd(2023, 3, 14).unwrap());
    }

    #[test]
    fn test_to_timeline_is_midnight_utc() {
        let instant = Date::from_ymd(2023, 6, 1).unwrap().to_timeline();
        assert_eq!(instant.hour(), 0);
        assert_eq!(instant.minute(), 0);
        assert_eq!(instant.date_naive(), NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
    }

    #[test]
    fn test_start_of_year() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.start_of_year(), Date::from_ymd(2025, 1, 1).unwrap());
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2025, 6, 5).unwrap();
        assert_eq!(format!("{}", date), "2025-06-05");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
