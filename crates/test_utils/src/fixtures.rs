//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the front
//! desk system. These fixtures are designed to be consistent and
//! predictable for unit tests.

use chrono::{NaiveDate, NaiveTime};
use core_kernel::{BookingId, Currency, FolioId, Money, PaymentId, StayDates};
use domain_desk::{GuestFeedback, GuestProfile, IdProof, Occupancy};
use uuid::Uuid;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard nightly room rate (₹1500)
    pub fn standard_night() -> Money {
        Money::from_major(1500, Currency::INR)
    }

    /// Deluxe nightly room rate (₹2500)
    pub fn deluxe_night() -> Money {
        Money::from_major(2500, Currency::INR)
    }

    /// Room charges for the standard three-night stay (₹4500)
    pub fn three_standard_nights() -> Money {
        Money::from_major(4500, Currency::INR)
    }

    /// A breakfast at the house price (₹200)
    pub fn breakfast() -> Money {
        Money::from_major(200, Currency::INR)
    }

    /// A tea at the house price (₹20)
    pub fn tea() -> Money {
        Money::from_major(20, Currency::INR)
    }

    /// A typical advance payment (₹4000)
    pub fn advance_payment() -> Money {
        Money::from_major(4000, Currency::INR)
    }

    /// Zero rupees
    pub fn inr_zero() -> Money {
        Money::zero(Currency::INR)
    }

    /// A USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Money::from_major(100, Currency::USD)
    }

    /// A negative amount for reversal scenarios
    pub fn inr_refund() -> Money {
        Money::from_minor(-5000, Currency::INR)
    }
}

/// Fixture for stay date test data
pub struct StayFixtures;

impl StayFixtures {
    /// Standard arrival date (Mar 10, 2025)
    pub fn arrival() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    /// Standard departure date, three nights later (Mar 13, 2025)
    pub fn departure() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 13).unwrap()
    }

    /// The standard three-night stay
    pub fn three_nights() -> StayDates {
        StayDates::new(Self::arrival(), Self::departure())
    }

    /// A single-night stay
    pub fn one_night() -> StayDates {
        StayDates::new(
            Self::arrival(),
            NaiveDate::from_ymd_opt(2025, 3, 11).unwrap(),
        )
    }

    /// A same-day stay, which still bills one night
    pub fn same_day() -> StayDates {
        StayDates::new(Self::arrival(), Self::arrival())
    }

    /// A week-long stay
    pub fn one_week() -> StayDates {
        StayDates::new(
            Self::arrival(),
            NaiveDate::from_ymd_opt(2025, 3, 17).unwrap(),
        )
    }

    /// Standard arrival time (2 PM)
    pub fn arrival_time() -> NaiveTime {
        NaiveTime::from_hms_opt(14, 0, 0).unwrap()
    }

    /// Standard departure time (11 AM)
    pub fn departure_time() -> NaiveTime {
        NaiveTime::from_hms_opt(11, 0, 0).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic booking ID for testing
    pub fn booking_id() -> BookingId {
        BookingId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a deterministic folio ID for testing
    pub fn folio_id() -> FolioId {
        FolioId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }

    /// Creates a deterministic payment ID for testing
    pub fn payment_id() -> PaymentId {
        PaymentId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap())
    }
}

/// Fixture for guest test data
pub struct GuestFixtures;

impl GuestFixtures {
    /// The standard test guest, name and mobile only
    pub fn standard() -> GuestProfile {
        GuestProfile::new(Self::name(), Self::mobile_no())
    }

    /// A fully detailed guest profile
    pub fn business_traveller() -> GuestProfile {
        GuestProfile::new("Priya Patel", "9812345678")
            .with_email("priya.patel@example.com")
            .with_address("42 MG Road, Bengaluru")
            .with_arrived_from("Mumbai")
            .with_purpose("Business")
            .with_id_proof(IdProof::new("Aadhaar", "1234-5678-9012"))
    }

    /// Standard guest name
    pub fn name() -> &'static str {
        "Rahul Sharma"
    }

    /// Standard guest mobile number
    pub fn mobile_no() -> &'static str {
        "9876543210"
    }

    /// Standard guest email address
    pub fn email() -> &'static str {
        "rahul.sharma@example.com"
    }

    /// A single guest
    pub fn single() -> Occupancy {
        Occupancy::new(1, 0)
    }

    /// A couple with one child
    pub fn family() -> Occupancy {
        Occupancy::new(2, 1)
    }

    /// A delighted checkout review
    pub fn five_star_feedback() -> GuestFeedback {
        GuestFeedback::new(5).with_comment("Excellent stay")
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// Standard room number
    pub fn room_no() -> &'static str {
        "101"
    }

    /// A second room for multi-room tests
    pub fn other_room_no() -> &'static str {
        "202"
    }

    /// Booking source used by walk-in tests
    pub fn booking_source() -> &'static str {
        "Walk-in"
    }

    /// A custom charge description
    pub fn charge_description() -> &'static str {
        "Extra towels"
    }
}
