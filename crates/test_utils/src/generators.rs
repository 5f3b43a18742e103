//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Duration, NaiveDate};
use core_kernel::{BookingId, Currency, Money, StayDates};
use domain_desk::RoomType;
use domain_folio::{ChargeCategory, ChargeLine, Payment, PaymentMethod};
use proptest::prelude::*;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::INR),
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::JPY),
    ]
}

/// Strategy for generating valid positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for generating amounts in minor units, negative included
pub fn amount_minor_strategy() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

/// Strategy for generating Money in any supported currency
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (amount_minor_strategy(), currency_strategy())
        .prop_map(|(minor, currency)| Money::from_minor(minor, currency))
}

/// Strategy for generating positive Money in any supported currency
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (positive_amount_minor_strategy(), currency_strategy())
        .prop_map(|(minor, currency)| Money::from_minor(minor, currency))
}

/// Strategy for generating positive INR Money
pub fn inr_money_strategy() -> impl Strategy<Value = Money> {
    positive_amount_minor_strategy().prop_map(|minor| Money::from_minor(minor, Currency::INR))
}

/// Strategy for generating whole-percent discounts (0 to 100)
pub fn discount_percent_strategy() -> impl Strategy<Value = u8> {
    0u8..=100u8
}

/// Strategy for generating charge quantities (1 to 9)
pub fn quantity_strategy() -> impl Strategy<Value = u32> {
    1u32..10u32
}

/// Strategy for generating charge categories
pub fn charge_category_strategy() -> impl Strategy<Value = ChargeCategory> {
    prop_oneof![
        Just(ChargeCategory::Room),
        Just(ChargeCategory::ExtraBed),
        Just(ChargeCategory::Food),
        Just(ChargeCategory::Beverage),
        Just(ChargeCategory::Laundry),
        Just(ChargeCategory::Service),
        Just(ChargeCategory::Damage),
        Just(ChargeCategory::Custom),
    ]
}

/// Strategy for generating payment methods
pub fn payment_method_strategy() -> impl Strategy<Value = PaymentMethod> {
    prop_oneof![
        Just(PaymentMethod::Cash),
        Just(PaymentMethod::Card),
        Just(PaymentMethod::Upi),
        Just(PaymentMethod::BankTransfer),
    ]
}

/// Strategy for generating charge descriptions
pub fn description_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,23}".prop_map(|s| s)
}

/// Strategy for generating valid INR charge lines with positive amounts
pub fn charge_line_strategy() -> impl Strategy<Value = ChargeLine> {
    (
        description_strategy(),
        100i64..10_000_000i64,
        quantity_strategy(),
        charge_category_strategy(),
    )
        .prop_map(|(description, minor, quantity, category)| {
            ChargeLine::new(
                description,
                Money::from_minor(minor, Currency::INR),
                quantity,
                category,
            )
            .expect("Generated invalid charge line")
        })
}

/// Strategy for generating INR payments a folio will accept
pub fn payment_strategy() -> impl Strategy<Value = Payment> {
    (1i64..10_000_000i64, payment_method_strategy())
        .prop_map(|(minor, method)| Payment::new(Money::from_minor(minor, Currency::INR), method))
}

/// Strategy for generating stays of one to thirty nights during 2025
pub fn stay_dates_strategy() -> impl Strategy<Value = StayDates> {
    (0i64..365i64, 1i64..31i64).prop_map(|(offset, nights)| {
        let check_in = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(offset);
        StayDates::new(check_in, check_in + Duration::days(nights))
    })
}

/// Strategy for generating room types
pub fn room_type_strategy() -> impl Strategy<Value = RoomType> {
    prop_oneof![
        Just(RoomType::Standard),
        Just(RoomType::Deluxe),
        Just(RoomType::Suite),
        Just(RoomType::Premium),
    ]
}

/// Strategy for generating room numbers (floor digit plus door number)
pub fn room_no_strategy() -> impl Strategy<Value = String> {
    (1u32..10u32, 1u32..21u32).prop_map(|(floor, door)| format!("{}{:02}", floor, door))
}

/// Strategy for generating BookingId
pub fn booking_id_strategy() -> impl Strategy<Value = BookingId> {
    any::<[u8; 16]>().prop_map(|bytes| BookingId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating ten-digit mobile numbers
pub fn mobile_no_strategy() -> impl Strategy<Value = String> {
    "[6-9][0-9]{9}".prop_map(|s| s)
}

/// Strategy for generating guest names
pub fn guest_name_strategy() -> impl Strategy<Value = String> {
    ("[A-Z][a-z]{2,8}", "[A-Z][a-z]{2,8}")
        .prop_map(|(first, last)| format!("{} {}", first, last))
}

/// Strategy for generating feedback ratings (1 to 5 stars)
pub fn rating_strategy() -> impl Strategy<Value = u8> {
    1u8..=5u8
}
