//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_folio::{Folio, FolioStatement};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Asserts that two Money values are exactly equal
///
/// # Panics
///
/// Panics if the currencies differ or the minor-unit amounts differ,
/// reporting both sides in minor units.
pub fn assert_money_eq(actual: &Money, expected: &Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    assert_eq!(
        actual.minor_units(),
        expected.minor_units(),
        "Money amounts differ: actual={} ({} minor), expected={} ({} minor)",
        actual,
        actual.minor_units(),
        expected,
        expected.minor_units()
    );
}

/// Asserts that a Money value reports the given decimal amount
pub fn assert_amount_eq(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Money amount differs: actual={}, expected={}",
        actual.amount(),
        expected
    );
}

/// Asserts that a Money value is positive
pub fn assert_money_positive(money: &Money) {
    assert!(money.is_positive(), "Expected positive money, got {}", money);
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(money.is_zero(), "Expected zero money, got {}", money);
}

/// Asserts that a Money value is negative
pub fn assert_money_negative(money: &Money) {
    assert!(money.is_negative(), "Expected negative money, got {}", money);
}

/// Asserts that money values sum to a total
///
/// # Arguments
///
/// * `parts` - The money values that should sum to total
/// * `total` - The expected total
///
/// # Panics
///
/// Panics if the sum doesn't equal the total
pub fn assert_money_sum_equals(parts: &[Money], total: &Money) {
    let sum = parts.iter().fold(Money::zero(total.currency()), |acc, m| {
        acc.checked_add(m).expect("Currency mismatch in sum")
    });

    assert_eq!(
        sum.minor_units(),
        total.minor_units(),
        "Sum of parts ({}) doesn't equal total ({})",
        sum,
        total
    );
}

/// Asserts that the folio ledger identities hold
///
/// Discount plus grand total must reproduce the subtotal exactly, and
/// the balance must be the grand total less payments.
pub fn assert_folio_balanced(folio: &Folio) {
    let reassembled = folio.discount_amount() + folio.grand_total();
    assert_eq!(
        reassembled.minor_units(),
        folio.subtotal().minor_units(),
        "Discount ({}) plus grand total ({}) doesn't reproduce subtotal ({})",
        folio.discount_amount(),
        folio.grand_total(),
        folio.subtotal()
    );

    let expected_balance = folio.grand_total() - folio.total_paid();
    assert_eq!(
        folio.balance_due().minor_units(),
        expected_balance.minor_units(),
        "Balance due ({}) doesn't equal grand total less payments ({})",
        folio.balance_due(),
        expected_balance
    );
}

/// Asserts that a statement mirrors its folio's figures
pub fn assert_statement_matches(statement: &FolioStatement, folio: &Folio) {
    assert_eq!(
        statement.lines.len(),
        folio.lines().len(),
        "Statement line count differs from folio"
    );
    assert_eq!(
        statement.payments.len(),
        folio.payments().len(),
        "Statement payment count differs from folio"
    );

    assert_money_eq(&statement.subtotal, &folio.subtotal());
    assert_money_eq(&statement.discount_amount, &folio.discount_amount());
    assert_money_eq(&statement.grand_total, &folio.grand_total());
    assert_money_eq(&statement.total_paid, &folio.total_paid());
    assert_money_eq(&statement.balance_due, &folio.balance_due());
    assert_eq!(statement.discount_percent, folio.discount_percent());
    assert_eq!(statement.is_frozen, folio.is_frozen());
}

/// Asserts that a value survives a JSON round trip unchanged
pub fn assert_serde_round_trip<T>(value: &T)
where
    T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let json = serde_json::to_string(value).expect("Serialization failed");
    let back: T = serde_json::from_str(&json).expect("Deserialization failed");
    assert_eq!(&back, value, "Value changed across JSON round trip: {}", json);
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!(
                "Expected Err matching {}, got Ok({:?})",
                stringify!($pattern),
                value
            ),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}
