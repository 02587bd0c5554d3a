//! Period types for fiscal years and VAT months.
//!
//! The fiscal year is the calendar year. VAT reporting periods are
//! calendar months, addressed as `YYYY-MM` strings on the wire.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a `YYYY-MM` period string fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid period '{0}', expected YYYY-MM")]
pub struct ParseYearMonthError(pub String);

/// A calendar month within a year, e.g. `2024-03`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a new `YearMonth`, returning `None` for an invalid month.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Returns the year component.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Returns the first day of the month.
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| unreachable!("month validated on construction"))
    }

    /// Returns the last day of the month.
    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        let next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next.unwrap_or_else(|| unreachable!("month validated on construction"))
            .pred_opt()
            .unwrap_or_else(|| unreachable!("first of month always has a predecessor"))
    }

    /// Returns true if the given date falls within this month.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Returns the month containing the given date.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for YearMonth {
    type Err = ParseYearMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseYearMonthError(s.to_string());
        let (y, m) = s.split_once('-').ok_or_else(err)?;
        if y.len() != 4 || m.len() != 2 {
            return Err(err());
        }
        let year: i32 = y.parse().map_err(|_| err())?;
        let month: u32 = m.parse().map_err(|_| err())?;
        Self::new(year, month).ok_or_else(err)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = ParseYearMonthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

/// Returns the fiscal year containing the given date.
///
/// Kontera uses calendar-year fiscal years.
#[must_use]
pub fn fiscal_year_of(date: NaiveDate) -> i32 {
    date.year()
}

/// Returns the first and last day of the given fiscal year.
#[must_use]
pub fn fiscal_year_bounds(year: i32) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .unwrap_or_else(|| unreachable!("Jan 1 exists for every year"));
    let end = NaiveDate::from_ymd_opt(year, 12, 31)
        .unwrap_or_else(|| unreachable!("Dec 31 exists for every year"));
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2024-01", 2024, 1)]
    #[case("2024-12", 2024, 12)]
    #[case("1999-06", 1999, 6)]
    fn test_parse_valid(#[case] input: &str, #[case] year: i32, #[case] month: u32) {
        let ym: YearMonth = input.parse().unwrap();
        assert_eq!(ym.year(), year);
        assert_eq!(ym.month(), month);
        assert_eq!(ym.to_string(), input);
    }

    #[rstest]
    #[case("2024")]
    #[case("2024-13")]
    #[case("2024-00")]
    #[case("24-01")]
    #[case("2024-1")]
    #[case("garbage")]
    fn test_parse_invalid(#[case] input: &str) {
        assert!(input.parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_month_bounds() {
        let ym: YearMonth = "2024-02".parse().unwrap();
        assert_eq!(ym.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        // 2024 is a leap year
        assert_eq!(ym.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let dec: YearMonth = "2023-12".parse().unwrap();
        assert_eq!(dec.last_day(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn test_contains() {
        let ym: YearMonth = "2024-03".parse().unwrap();
        assert!(ym.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(ym.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
        assert!(!ym.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
        assert!(!ym.contains(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()));
    }

    #[test]
    fn test_of_date() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 19).unwrap();
        assert_eq!(YearMonth::of(date), "2024-07".parse().unwrap());
    }

    #[test]
    fn test_fiscal_year_bounds() {
        let (start, end) = fiscal_year_bounds(2024);
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(fiscal_year_of(start), 2024);
        assert_eq!(fiscal_year_of(end), 2024);
    }
}
