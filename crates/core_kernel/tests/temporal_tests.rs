//! Comprehensive unit tests for the temporal module
//!
//! Tests cover StayDates parsing, the nightly floor rule, and
//! serialization.

use chrono::NaiveDate;
use core_kernel::temporal::{StayDates, TemporalError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod parsing {
    use super::*;

    #[test]
    fn test_parse_iso_pair() {
        let stay = StayDates::parse("2025-01-10", "2025-01-13").unwrap();
        assert_eq!(stay.check_in, date(2025, 1, 10));
        assert_eq!(stay.check_out, date(2025, 1, 13));
    }

    #[test]
    fn test_parse_reports_offending_value() {
        let result = StayDates::parse("2025-01-10", "13-01-2025");
        assert_eq!(
            result,
            Err(TemporalError::InvalidDateRange {
                value: "13-01-2025".to_string()
            })
        );
    }

    #[test]
    fn test_parse_rejects_empty_strings() {
        assert!(StayDates::parse("", "2025-01-13").is_err());
        assert!(StayDates::parse("2025-01-10", "").is_err());
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(StayDates::parse("2025-02-30", "2025-03-01").is_err());
        assert!(StayDates::parse("2025-13-01", "2025-13-02").is_err());
    }

    #[test]
    fn test_new_accepts_any_ordering() {
        // ordering problems surface as the one-night floor, not an error
        let stay = StayDates::new(date(2025, 1, 13), date(2025, 1, 10));
        assert_eq!(stay.nights(), 1);
    }
}

mod nights {
    use super::*;

    #[test]
    fn test_three_night_stay() {
        let stay = StayDates::new(date(2025, 1, 10), date(2025, 1, 13));
        assert_eq!(stay.nights(), 3);
    }

    #[test]
    fn test_single_night_stay() {
        let stay = StayDates::new(date(2025, 1, 10), date(2025, 1, 11));
        assert_eq!(stay.nights(), 1);
    }

    #[test]
    fn test_same_day_checkout_bills_one_night() {
        let stay = StayDates::new(date(2025, 1, 10), date(2025, 1, 10));
        assert_eq!(stay.nights(), 1);
    }

    #[test]
    fn test_month_boundary() {
        let stay = StayDates::new(date(2025, 1, 30), date(2025, 2, 2));
        assert_eq!(stay.nights(), 3);
    }

    #[test]
    fn test_leap_day() {
        let stay = StayDates::new(date(2024, 2, 28), date(2024, 3, 1));
        assert_eq!(stay.nights(), 2);
    }

    #[test]
    fn test_long_stay() {
        let stay = StayDates::new(date(2025, 1, 1), date(2025, 12, 31));
        assert_eq!(stay.nights(), 364);
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_stay_dates_json_roundtrip() {
        let stay = StayDates::new(date(2025, 6, 1), date(2025, 6, 5));
        let json = serde_json::to_string(&stay).unwrap();
        let back: StayDates = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stay);
    }

    #[test]
    fn test_dates_serialize_as_iso_strings() {
        let stay = StayDates::new(date(2025, 6, 1), date(2025, 6, 5));
        let json = serde_json::to_string(&stay).unwrap();
        assert!(json.contains("2025-06-01"));
        assert!(json.contains("2025-06-05"));
    }
}
