//! Calendar dates and the year fraction used by the valuers.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `year_fraction`: ACT/365 fixed year fraction between two dates
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{year_fraction, Date};
//!
//! let valuation = Date::from_ymd(2024, 1, 1).unwrap();
//! let expiry = Date::from_ymd(2024, 7, 1).unwrap();
//!
//! // 182 days / 365
//! let t = year_fraction(valuation, expiry);
//! assert!((t - 0.4986).abs() < 1e-3);
//! ```

use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Days per year used by [`year_fraction`].
pub const DAYS_IN_YEAR: f64 = 365.0;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Serialises as an ISO 8601 string (`YYYY-MM-DD`) when the `serde`
/// feature is enabled.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let later = date.add_days(10);
/// assert_eq!(later - date, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` when the components do not form a
    /// calendar date (e.g. February 30th).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from an ISO 8601 string (`YYYY-MM-DD`).
    ///
    /// # Errors
    /// Returns `DateError::ParseError` if the string is not a valid date.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Returns the date shifted by a signed number of calendar days.
    ///
    /// Saturates at the chrono range limits.
    pub fn add_days(self, days: i64) -> Self {
        self.0
            .checked_add_signed(Duration::days(days))
            .map(Date)
            .unwrap_or(self)
    }

    /// Returns the underlying NaiveDate.
    #[inline]
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the signed number of days from `other` to `self`.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Year fraction between two dates under ACT/365 fixed.
///
/// Negative when `end` precedes `start`; callers decide whether that is
/// an error.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::{year_fraction, Date};
///
/// let a = Date::from_ymd(2023, 1, 1).unwrap();
/// let b = Date::from_ymd(2024, 1, 1).unwrap();
/// assert_eq!(year_fraction(a, b), 1.0);
/// assert_eq!(year_fraction(b, a), -1.0);
/// ```
pub fn year_fraction(start: Date, end: Date) -> f64 {
    (end - start) as f64 / DAYS_IN_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_ymd_valid() {
        let date = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 29);
    }

    #[test]
    fn test_from_ymd_invalid() {
        let err = Date::from_ymd(2023, 2, 29).unwrap_err();
        assert_eq!(
            err,
            DateError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            }
        );
    }

    #[test]
    fn test_parse_and_display_agree() {
        let date: Date = "2025-03-07".parse().unwrap();
        assert_eq!(date.to_string(), "2025-03-07");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = Date::parse("07/03/2025").unwrap_err();
        assert!(matches!(err, DateError::ParseError(_)));
        assert!(err.to_string().contains("07/03/2025"));
    }

    #[test]
    fn test_sub_is_signed() {
        let a = Date::from_ymd(2024, 1, 1).unwrap();
        let b = Date::from_ymd(2024, 1, 11).unwrap();
        assert_eq!(b - a, 10);
        assert_eq!(a - b, -10);
    }

    #[test]
    fn test_add_days() {
        let a = Date::from_ymd(2024, 12, 31).unwrap();
        assert_eq!(a.add_days(1), Date::from_ymd(2025, 1, 1).unwrap());
        assert_eq!(a.add_days(-366), Date::from_ymd(2023, 12, 31).unwrap());
    }

    #[test]
    fn test_year_fraction_act365() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2024, 7, 1).unwrap();
        assert_relative_eq!(year_fraction(start, end), 182.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_year_fraction_leap_year() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();
        assert_relative_eq!(year_fraction(start, end), 366.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_year_fraction_same_day_is_zero() {
        let d = Date::from_ymd(2024, 5, 5).unwrap();
        assert_eq!(year_fraction(d, d), 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_iso_string() {
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-06-15\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
