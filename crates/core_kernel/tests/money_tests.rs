//! Comprehensive unit tests for the Money module
//!
//! Tests cover minor-unit creation, exact arithmetic, percentage
//! rounding, comparison, currency handling, and edge cases.

use core_kernel::{Currency, Money, MoneyError};
use rust_decimal_macros::dec;
use std::cmp::Ordering;

mod creation {
    use super::*;

    #[test]
    fn test_from_minor_stores_exact_units() {
        let m = Money::from_minor(150000, Currency::INR);
        assert_eq!(m.minor_units(), 150000);
        assert_eq!(m.currency(), Currency::INR);
    }

    #[test]
    fn test_from_minor_decimal_view() {
        let m = Money::from_minor(10050, Currency::INR);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_from_major_scales_by_currency() {
        assert_eq!(Money::from_major(1500, Currency::INR).minor_units(), 150000);
        assert_eq!(Money::from_major(1500, Currency::JPY).minor_units(), 1500);
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::INR);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::INR);
    }

    #[test]
    fn test_negative_amount_creation() {
        let m = Money::from_minor(-10000, Currency::INR);
        assert!(m.is_negative());
        assert_eq!(m.amount(), dec!(-100.00));
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_zero_true_for_zero_amount() {
        assert!(Money::zero(Currency::INR).is_zero());
    }

    #[test]
    fn test_is_zero_false_for_one_paisa() {
        assert!(!Money::from_minor(1, Currency::INR).is_zero());
    }

    #[test]
    fn test_is_positive_false_for_zero() {
        assert!(!Money::zero(Currency::INR).is_positive());
    }

    #[test]
    fn test_is_positive_false_for_negative() {
        assert!(!Money::from_minor(-10000, Currency::INR).is_positive());
    }

    #[test]
    fn test_is_negative_true_for_negative_amount() {
        assert!(Money::from_minor(-1, Currency::INR).is_negative());
    }

    #[test]
    fn test_abs_negative() {
        let m = Money::from_minor(-72500, Currency::INR);
        assert_eq!(m.abs().minor_units(), 72500);
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::from_minor(400000, Currency::INR);
        let b = Money::from_minor(27500, Currency::INR);
        let result = a.checked_add(&b).unwrap();
        assert_eq!(result.minor_units(), 427500);
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let a = Money::from_minor(10000, Currency::INR);
        let b = Money::from_minor(5000, Currency::USD);
        let result = a.checked_add(&b);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_checked_sub_can_go_negative() {
        let a = Money::from_minor(427500, Currency::INR);
        let b = Money::from_minor(500000, Currency::INR);
        let result = a.checked_sub(&b).unwrap();
        assert_eq!(result.minor_units(), -72500);
    }

    #[test]
    fn test_checked_add_overflow() {
        let a = Money::from_minor(i64::MAX, Currency::INR);
        let b = Money::from_minor(1, Currency::INR);
        assert_eq!(a.checked_add(&b), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_checked_sub_overflow() {
        let a = Money::from_minor(i64::MIN, Currency::INR);
        let b = Money::from_minor(1, Currency::INR);
        assert_eq!(a.checked_sub(&b), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_checked_mul_by_quantity() {
        let nightly = Money::from_minor(150000, Currency::INR);
        let result = nightly.checked_mul(3).unwrap();
        assert_eq!(result.minor_units(), 450000);
    }

    #[test]
    fn test_checked_mul_overflow() {
        let m = Money::from_minor(i64::MAX / 2, Currency::INR);
        assert_eq!(m.checked_mul(3), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_add_operator_same_currency() {
        let a = Money::from_minor(20000, Currency::INR);
        let b = Money::from_minor(5000, Currency::INR);
        assert_eq!((a + b).minor_units(), 25000);
    }

    #[test]
    fn test_sub_operator_same_currency() {
        let a = Money::from_minor(475000, Currency::INR);
        let b = Money::from_minor(47500, Currency::INR);
        assert_eq!((a - b).minor_units(), 427500);
    }

    #[test]
    fn test_negation() {
        let m = Money::from_minor(10000, Currency::INR);
        assert_eq!((-m).minor_units(), -10000);
        assert_eq!((-(-m)).minor_units(), 10000);
    }

    #[test]
    fn test_mul_operator_by_quantity() {
        let m = Money::from_minor(2000, Currency::INR);
        assert_eq!((m * 4).minor_units(), 8000);
    }
}

mod percentage {
    use super::*;

    #[test]
    fn test_ten_percent_of_even_amount() {
        let subtotal = Money::from_minor(475000, Currency::INR);
        assert_eq!(subtotal.percentage(10).minor_units(), 47500);
    }

    #[test]
    fn test_zero_percent_is_zero() {
        let m = Money::from_minor(475000, Currency::INR);
        assert!(m.percentage(0).is_zero());
    }

    #[test]
    fn test_hundred_percent_is_identity() {
        let m = Money::from_minor(475001, Currency::INR);
        assert_eq!(m.percentage(100), m);
    }

    #[test]
    fn test_half_minor_unit_rounds_up() {
        // 15% of 10 paise = 1.5 paise, rounds to 2
        let m = Money::from_minor(10, Currency::INR);
        assert_eq!(m.percentage(15).minor_units(), 2);
    }

    #[test]
    fn test_below_half_rounds_down() {
        // 14% of 10 paise = 1.4 paise, rounds to 1
        let m = Money::from_minor(10, Currency::INR);
        assert_eq!(m.percentage(14).minor_units(), 1);
    }

    #[test]
    fn test_negative_base_rounds_away_from_zero() {
        let m = Money::from_minor(-10, Currency::INR);
        assert_eq!(m.percentage(15).minor_units(), -2);
    }

    #[test]
    fn test_percent_above_hundred_clamps() {
        let m = Money::from_minor(1000, Currency::INR);
        assert_eq!(m.percentage(200), m);
    }
}

mod comparison {
    use super::*;

    #[test]
    fn test_compare_same_currency() {
        let a = Money::from_minor(100, Currency::INR);
        let b = Money::from_minor(200, Currency::INR);

        assert_eq!(a.compare(&b), Ok(Ordering::Less));
        assert_eq!(b.compare(&a), Ok(Ordering::Greater));
        assert_eq!(a.compare(&a), Ok(Ordering::Equal));
    }

    #[test]
    fn test_compare_currency_mismatch() {
        let a = Money::from_minor(100, Currency::INR);
        let b = Money::from_minor(100, Currency::EUR);
        assert!(matches!(a.compare(&b), Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_partial_ord_same_currency() {
        let a = Money::from_minor(100, Currency::INR);
        let b = Money::from_minor(200, Currency::INR);

        assert!(a < b);
        assert!(b >= a);
    }

    #[test]
    fn test_partial_ord_mixed_currency_is_none() {
        let a = Money::from_minor(100, Currency::INR);
        let b = Money::from_minor(100, Currency::USD);

        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a < b));
        assert!(!(a >= b));
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_all_currencies_have_symbols() {
        let currencies = [
            Currency::INR,
            Currency::USD,
            Currency::EUR,
            Currency::GBP,
            Currency::JPY,
        ];

        for currency in currencies {
            assert!(!currency.symbol().is_empty());
            assert!(!currency.code().is_empty());
        }
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!(Currency::INR.code(), "INR");
        assert_eq!(Currency::USD.code(), "USD");
        assert_eq!(Currency::JPY.code(), "JPY");
    }

    #[test]
    fn test_currency_decimal_places() {
        assert_eq!(Currency::INR.decimal_places(), 2);
        assert_eq!(Currency::JPY.decimal_places(), 0);
    }

    #[test]
    fn test_minor_per_major() {
        assert_eq!(Currency::INR.minor_per_major(), 100);
        assert_eq!(Currency::JPY.minor_per_major(), 1);
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(format!("{}", Currency::INR), "INR");
        assert_eq!(format!("{}", Currency::GBP), "GBP");
    }
}

mod display {
    use super::*;

    #[test]
    fn test_money_display_inr() {
        let m = Money::from_minor(123456, Currency::INR);
        assert_eq!(format!("{}", m), "₹ 1234.56");
    }

    #[test]
    fn test_money_display_negative() {
        let m = Money::from_minor(-72500, Currency::INR);
        assert_eq!(format!("{}", m), "₹ -725.00");
    }

    #[test]
    fn test_money_display_jpy_no_decimals() {
        let m = Money::from_minor(12345, Currency::JPY);
        assert_eq!(format!("{}", m), "¥ 12345");
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_money_json_roundtrip() {
        let m = Money::from_minor(427500, Currency::INR);
        let json = serde_json::to_string(&m).unwrap();
        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }

    #[test]
    fn test_currency_json_roundtrip() {
        let c = Currency::INR;
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"INR\"");
        let deserialized: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(c, deserialized);
    }
}

mod equality {
    use super::*;

    #[test]
    fn test_money_equality_same_values() {
        let a = Money::from_minor(10000, Currency::INR);
        let b = Money::from_major(100, Currency::INR);
        assert_eq!(a, b);
    }

    #[test]
    fn test_money_inequality_different_amounts() {
        let a = Money::from_minor(10000, Currency::INR);
        let b = Money::from_minor(10001, Currency::INR);
        assert_ne!(a, b);
    }

    #[test]
    fn test_money_inequality_different_currencies() {
        let a = Money::from_minor(10000, Currency::INR);
        let b = Money::from_minor(10000, Currency::USD);
        assert_ne!(a, b);
    }

    #[test]
    fn test_money_hash_equality() {
        use std::collections::HashSet;

        let a = Money::from_minor(10000, Currency::INR);
        let b = Money::from_minor(10000, Currency::INR);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }
}
