//! Calendar month representation
//!
//! A `Month` is the bucket key for category totals, the rolling monthly series
//! and the daily series. `MonthMatching` decides whether an entry's year takes
//! part in the match.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// How an entry date is matched against a month bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MonthMatching {
    /// Match on (year, month)
    #[default]
    CalendarMonth,
    /// Match on the month number only, so January 2023 and January 2024
    /// land in the same bucket
    MonthOfYear,
}

/// A calendar month, e.g. "2024-01"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    first: NaiveDate,
}

impl Month {
    /// Create a month, returning `None` for an invalid month number
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Month number, 1-12
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Exact number of days in this month, leap-year aware
    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            4 | 6 | 9 | 11 => 30,
            2 => {
                if NaiveDate::from_ymd_opt(self.year(), 2, 29).is_some() {
                    29
                } else {
                    28
                }
            }
            _ => 31,
        }
    }

    /// The month `count` months before this one
    pub fn minus(&self, count: u32) -> Option<Self> {
        self.first
            .checked_sub_months(Months::new(count))
            .map(|first| Self { first })
    }

    /// Short English label used as the series bucket name ("Jan")
    pub fn label(&self) -> &'static str {
        MONTH_LABELS[self.first.month0() as usize]
    }

    /// Check whether `date` falls in this month under the given matching rule
    pub fn matches(&self, date: NaiveDate, matching: MonthMatching) -> bool {
        match matching {
            MonthMatching::CalendarMonth => {
                date.year() == self.year() && date.month() == self.month()
            }
            MonthMatching::MonthOfYear => date.month() == self.month(),
        }
    }

    /// Parse a month string in "YYYY-MM" form
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }

        Self::new(year, month).ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Month {
    type Error = MonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.to_string()
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(Month::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(Month::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(Month::new(1900, 2).unwrap().days_in_month(), 28);
        assert_eq!(Month::new(2000, 2).unwrap().days_in_month(), 29);
        assert_eq!(Month::new(2024, 4).unwrap().days_in_month(), 30);
        assert_eq!(Month::new(2024, 12).unwrap().days_in_month(), 31);
    }

    #[test]
    fn test_navigation_across_year() {
        let jan = Month::new(2025, 1).unwrap();
        assert_eq!(jan.minus(1), Month::new(2024, 12));
        assert_eq!(jan.minus(5), Month::new(2024, 8));
        assert_eq!(jan.minus(0), Some(jan));
    }

    #[test]
    fn test_matching_rules() {
        let jan = Month::new(2024, 1).unwrap();
        assert!(jan.matches(date(2024, 1, 31), MonthMatching::CalendarMonth));
        assert!(!jan.matches(date(2023, 1, 15), MonthMatching::CalendarMonth));
        assert!(jan.matches(date(2023, 1, 15), MonthMatching::MonthOfYear));
        assert!(!jan.matches(date(2024, 2, 1), MonthMatching::MonthOfYear));
    }

    #[test]
    fn test_parse_and_display() {
        let month: Month = "2024-03".parse().unwrap();
        assert_eq!(month, Month::new(2024, 3).unwrap());
        assert_eq!(month.to_string(), "2024-03");
        assert_eq!(month.label(), "Mar");
        assert_eq!(Month::parse("2024-13"), Err(MonthParseError::InvalidMonth(13)));
        assert!(Month::parse("March").is_err());
    }

    #[test]
    fn test_from_date() {
        let month = Month::from_date(date(2024, 2, 17));
        assert_eq!(month, Month::new(2024, 2).unwrap());
        assert_eq!(month.days_in_month(), 29);
    }

    #[test]
    fn test_serialization() {
        let month = Month::new(2024, 1).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "\"2024-01\"");
        let deserialized: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, deserialized);
    }
}
