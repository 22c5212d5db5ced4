//! Comprehensive unit tests for the Temporal module
//!
//! Tests cover whole-year period arithmetic, the evaluation clocks,
//! Timezone parsing, and serialization.

use chrono::NaiveDate;
use core_kernel::temporal::{parse_date, whole_years_between, TemporalError};
use core_kernel::{Clock, FixedClock, SystemClock, Timezone};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod whole_years {
    use super::*;

    /// Same day and month counts the full year
    #[test]
    fn test_counts_year_on_anniversary() {
        assert_eq!(whole_years_between(date(1990, 8, 1), date(2011, 8, 1)), 21);
    }

    /// One day short of the anniversary does not count the year
    #[test]
    fn test_day_before_anniversary() {
        assert_eq!(whole_years_between(date(1990, 8, 1), date(2011, 7, 31)), 20);
    }

    /// Same date yields zero
    #[test]
    fn test_same_date_is_zero() {
        assert_eq!(whole_years_between(date(2024, 1, 1), date(2024, 1, 1)), 0);
    }

    /// Partial years are truncated, not rounded
    #[test]
    fn test_partial_years_truncate() {
        assert_eq!(whole_years_between(date(2000, 1, 1), date(2020, 12, 31)), 20);
    }

    /// Month-end start dates only count once the end month reaches that day
    #[test]
    fn test_month_end_start() {
        assert_eq!(whole_years_between(date(2000, 1, 31), date(2001, 1, 30)), 0);
        assert_eq!(whole_years_between(date(2000, 1, 31), date(2001, 1, 31)), 1);
    }

    /// Reversed dates give a negative count
    #[test]
    fn test_reversed_dates_are_negative() {
        assert_eq!(whole_years_between(date(2022, 1, 1), date(2000, 1, 1)), -22);
        assert_eq!(whole_years_between(date(2001, 1, 1), date(2000, 6, 1)), 0);
    }
}

mod clocks {
    use super::*;

    /// Fixed clock always returns its pinned date
    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock::new(date(2024, 10, 19));

        assert_eq!(clock.today(), date(2024, 10, 19));
        assert_eq!(clock.today(), clock.today());
    }

    /// System clock defaults to UTC
    #[test]
    fn test_system_clock_default_timezone() {
        let clock = SystemClock::default();
        assert_eq!(clock.timezone(), Timezone::default());
    }

    /// Timezones on both sides of the date line are at most one day apart
    #[test]
    fn test_system_clock_timezones_differ_by_at_most_a_day() {
        let kiritimati = SystemClock::new(Timezone::new(chrono_tz::Pacific::Kiritimati)).today();
        let pago_pago = SystemClock::new(Timezone::new(chrono_tz::Pacific::Pago_Pago)).today();

        let gap = (kiritimati - pago_pago).num_days();
        assert!((0..=2).contains(&gap));
    }

    /// Clocks can be used behind a trait object
    #[test]
    fn test_clock_trait_object() {
        let clock: Box<dyn Clock> = Box::new(FixedClock::new(date(2020, 2, 29)));
        assert_eq!(clock.today(), date(2020, 2, 29));
    }
}

mod timezone {
    use super::*;

    #[test]
    fn test_default_is_utc() {
        let tz = Timezone::default();
        assert_eq!(tz.0, chrono_tz::UTC);
    }

    #[test]
    fn test_new_creates_timezone() {
        let tz = Timezone::new(chrono_tz::America::New_York);
        assert_eq!(tz.0, chrono_tz::America::New_York);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let tz: Timezone = " Europe/Amsterdam ".parse().unwrap();
        assert_eq!(tz.0, chrono_tz::Europe::Amsterdam);
    }

    #[test]
    fn test_parse_rejects_unknown_zone() {
        let result = "Nowhere/Special".parse::<Timezone>();
        assert_eq!(
            result,
            Err(TemporalError::InvalidTimezone("Nowhere/Special".to_string()))
        );
    }
}

mod dates {
    use super::*;

    #[test]
    fn test_parse_date_accepts_iso() {
        assert_eq!(parse_date("2022-01-01").unwrap(), date(2022, 1, 1));
    }

    #[test]
    fn test_parse_date_rejects_impossible_date() {
        assert!(matches!(
            parse_date("2023-02-29"),
            Err(TemporalError::InvalidDate { .. })
        ));
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_timezone_serializes_as_name() {
        let tz = Timezone::new(chrono_tz::Europe::Amsterdam);
        let json = serde_json::to_string(&tz).unwrap();

        assert_eq!(json, "\"Europe/Amsterdam\"");
    }

    #[test]
    fn test_timezone_deserialize_invalid() {
        let result: Result<Timezone, _> = serde_json::from_str("\"Not/AZone\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_fixed_clock_json_roundtrip() {
        let clock = FixedClock::new(date(2024, 3, 1));

        let json = serde_json::to_string(&clock).unwrap();
        let deserialized: FixedClock = serde_json::from_str(&json).unwrap();

        assert_eq!(clock, deserialized);
    }
}
