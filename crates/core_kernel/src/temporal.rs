//! Evaluation clock and calendar periods
//!
//! Rules that depend on "today" (such as the age of an insured customer)
//! never read the wall clock directly. They receive an evaluation date,
//! which callers obtain from a [`Clock`]:
//! - [`SystemClock`]: the current date in a configured timezone
//! - [`FixedClock`]: a pinned date, for tests and replaying past evaluations

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
    },
}

/// Timezone wrapper for the evaluation clock
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for Timezone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s.trim())
            .map(Timezone)
            .map_err(|_| TemporalError::InvalidTimezone(s.to_string()))
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Returns the current calendar date in this timezone
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.0).date_naive()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.name())
    }
}

/// Source of the evaluation date
///
/// Implementations must be cheap to call; a discount evaluation reads the
/// clock exactly once.
pub trait Clock: Send + Sync {
    /// Returns the date rules are evaluated against
    fn today(&self) -> NaiveDate;
}

/// Clock reading the current date in a timezone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock {
    timezone: Timezone,
}

impl SystemClock {
    /// Creates a clock for the given timezone
    pub fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }

    /// Returns the timezone of this clock
    pub fn timezone(&self) -> Timezone {
        self.timezone
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        self.timezone.today()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`)
pub fn parse_date(value: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| TemporalError::InvalidDate {
        value: value.to_string(),
    })
}

/// Number of whole years in the calendar period from `start` to `end`
///
/// The period is measured in months first; a month only counts once the
/// day of month of `start` has been reached. The month total is then
/// truncated to whole years. The result is negative when `end` precedes
/// `start`.
///
/// ```rust
/// use chrono::NaiveDate;
/// use core_kernel::temporal::whole_years_between;
///
/// let start = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
/// let day_before = NaiveDate::from_ymd_opt(2021, 6, 14).unwrap();
/// let anniversary = NaiveDate::from_ymd_opt(2021, 6, 15).unwrap();
///
/// assert_eq!(whole_years_between(start, day_before), 20);
/// assert_eq!(whole_years_between(start, anniversary), 21);
/// ```
pub fn whole_years_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut total_months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    let days = end.day() as i32 - start.day() as i32;

    if total_months > 0 && days < 0 {
        total_months -= 1;
    } else if total_months < 0 && days > 0 {
        total_months += 1;
    }

    total_months / 12
}
