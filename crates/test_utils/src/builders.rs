//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::{Currency, Money, StayDates};
use domain_desk::{GuestProfile, Occupancy, RoomType};
use domain_folio::ChargeCategory;

use crate::fixtures::{GuestFixtures, MoneyFixtures, StayFixtures, StringFixtures};

/// Builder for constructing test booking data
pub struct TestBookingDataBuilder {
    guest: GuestProfile,
    occupancy: Occupancy,
    room_no: String,
    room_type: RoomType,
    stay: StayDates,
    currency: Currency,
    source: Option<String>,
    nightly_rate: Money,
}

impl Default for TestBookingDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBookingDataBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            guest: GuestFixtures::standard(),
            occupancy: GuestFixtures::single(),
            room_no: StringFixtures::room_no().to_string(),
            room_type: RoomType::Standard,
            stay: StayFixtures::three_nights(),
            currency: Currency::INR,
            source: None,
            nightly_rate: MoneyFixtures::standard_night(),
        }
    }

    /// A walk-in booking for the standard guest
    pub fn walk_in() -> Self {
        Self::new().with_source(StringFixtures::booking_source())
    }

    /// A deluxe room booking
    pub fn deluxe() -> Self {
        Self::new()
            .with_room_no(StringFixtures::other_room_no())
            .with_room_type(RoomType::Deluxe)
            .with_nightly_rate(MoneyFixtures::deluxe_night())
    }

    /// A suite booking for a family
    pub fn suite() -> Self {
        Self::new()
            .with_room_no("301")
            .with_room_type(RoomType::Suite)
            .with_nightly_rate(RoomType::Suite.standard_rate(Currency::INR))
            .with_occupancy(GuestFixtures::family())
    }

    /// Sets the guest profile
    pub fn with_guest(mut self, guest: GuestProfile) -> Self {
        self.guest = guest;
        self
    }

    /// Sets the occupancy
    pub fn with_occupancy(mut self, occupancy: Occupancy) -> Self {
        self.occupancy = occupancy;
        self
    }

    /// Sets the room number
    pub fn with_room_no(mut self, room_no: impl Into<String>) -> Self {
        self.room_no = room_no.into();
        self
    }

    /// Sets the room type
    pub fn with_room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = room_type;
        self
    }

    /// Sets the stay dates
    pub fn with_stay(mut self, stay: StayDates) -> Self {
        self.stay = stay;
        self
    }

    /// Sets the stay length in nights from the current arrival date
    pub fn with_nights(mut self, nights: u32) -> Self {
        let departure = self.stay.check_in + chrono::Duration::days(i64::from(nights));
        self.stay = StayDates::new(self.stay.check_in, departure);
        self
    }

    /// Sets the folio currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the booking source
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the nightly rate
    pub fn with_nightly_rate(mut self, rate: Money) -> Self {
        self.nightly_rate = rate;
        self
    }

    /// Builds the test booking data
    pub fn build(self) -> TestBookingData {
        TestBookingData {
            guest: self.guest,
            occupancy: self.occupancy,
            room_no: self.room_no,
            room_type: self.room_type,
            stay: self.stay,
            currency: self.currency,
            source: self.source,
            nightly_rate: self.nightly_rate,
        }
    }
}

/// Test booking data structure
#[derive(Debug, Clone)]
pub struct TestBookingData {
    pub guest: GuestProfile,
    pub occupancy: Occupancy,
    pub room_no: String,
    pub room_type: RoomType,
    pub stay: StayDates,
    pub currency: Currency,
    pub source: Option<String>,
    pub nightly_rate: Money,
}

/// Builder for constructing test room data
pub struct TestRoomDataBuilder {
    room_no: String,
    room_type: RoomType,
    nightly_rate: Money,
    currency: Currency,
}

impl Default for TestRoomDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRoomDataBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            room_no: StringFixtures::room_no().to_string(),
            room_type: RoomType::Standard,
            nightly_rate: MoneyFixtures::standard_night(),
            currency: Currency::INR,
        }
    }

    /// A standard room at the rack rate
    pub fn standard() -> Self {
        Self::new()
    }

    /// A deluxe room at the rack rate
    pub fn deluxe() -> Self {
        Self::new()
            .with_room_no(StringFixtures::other_room_no())
            .with_room_type(RoomType::Deluxe)
            .with_nightly_rate(RoomType::Deluxe.standard_rate(Currency::INR))
    }

    /// A suite at the rack rate
    pub fn suite() -> Self {
        Self::new()
            .with_room_no("301")
            .with_room_type(RoomType::Suite)
            .with_nightly_rate(RoomType::Suite.standard_rate(Currency::INR))
    }

    /// A premium room at the rack rate
    pub fn premium() -> Self {
        Self::new()
            .with_room_no("401")
            .with_room_type(RoomType::Premium)
            .with_nightly_rate(RoomType::Premium.standard_rate(Currency::INR))
    }

    /// Sets the room number
    pub fn with_room_no(mut self, room_no: impl Into<String>) -> Self {
        self.room_no = room_no.into();
        self
    }

    /// Sets the room type
    pub fn with_room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = room_type;
        self
    }

    /// Sets the nightly rate
    pub fn with_nightly_rate(mut self, rate: Money) -> Self {
        self.nightly_rate = rate;
        self
    }

    /// Sets the currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Builds the test room data
    pub fn build(self) -> TestRoomData {
        TestRoomData {
            room_no: self.room_no,
            room_type: self.room_type,
            nightly_rate: self.nightly_rate,
            currency: self.currency,
        }
    }
}

/// Test room data structure
#[derive(Debug, Clone)]
pub struct TestRoomData {
    pub room_no: String,
    pub room_type: RoomType,
    pub nightly_rate: Money,
    pub currency: Currency,
}

/// Builder for constructing test charge data
pub struct TestChargeDataBuilder {
    description: String,
    unit_amount: Money,
    quantity: u32,
    category: ChargeCategory,
}

impl Default for TestChargeDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestChargeDataBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            description: StringFixtures::charge_description().to_string(),
            unit_amount: Money::from_major(50, Currency::INR),
            quantity: 1,
            category: ChargeCategory::Service,
        }
    }

    /// A breakfast at the house price
    pub fn breakfast() -> Self {
        Self::new()
            .with_description("Breakfast")
            .with_unit_amount(MoneyFixtures::breakfast())
            .with_category(ChargeCategory::Food)
    }

    /// A tea at the house price
    pub fn tea() -> Self {
        Self::new()
            .with_description("Tea")
            .with_unit_amount(MoneyFixtures::tea())
            .with_category(ChargeCategory::Beverage)
    }

    /// A shirt sent to the laundry
    pub fn laundry() -> Self {
        Self::new()
            .with_description("Shirt")
            .with_unit_amount(Money::from_major(40, Currency::INR))
            .with_category(ChargeCategory::Laundry)
    }

    /// Damaged linen billed to the guest
    pub fn damage() -> Self {
        Self::new()
            .with_description("Damaged linen")
            .with_unit_amount(Money::from_major(500, Currency::INR))
            .with_category(ChargeCategory::Damage)
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the per-unit amount
    pub fn with_unit_amount(mut self, amount: Money) -> Self {
        self.unit_amount = amount;
        self
    }

    /// Sets the quantity
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the category
    pub fn with_category(mut self, category: ChargeCategory) -> Self {
        self.category = category;
        self
    }

    /// Builds the test charge data
    pub fn build(self) -> TestChargeData {
        TestChargeData {
            description: self.description,
            unit_amount: self.unit_amount,
            quantity: self.quantity,
            category: self.category,
        }
    }
}

/// Test charge data structure
#[derive(Debug, Clone)]
pub struct TestChargeData {
    pub description: String,
    pub unit_amount: Money,
    pub quantity: u32,
    pub category: ChargeCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_builder_defaults() {
        let booking = TestBookingDataBuilder::new().build();
        assert_eq!(booking.room_no, "101");
        assert_eq!(booking.stay.nights(), 3);
        assert_eq!(booking.currency, Currency::INR);
        assert!(booking.source.is_none());
    }

    #[test]
    fn test_booking_builder_customization() {
        let booking = TestBookingDataBuilder::deluxe().with_nights(5).build();

        assert_eq!(booking.room_type, RoomType::Deluxe);
        assert_eq!(booking.stay.nights(), 5);
        assert_eq!(booking.nightly_rate, MoneyFixtures::deluxe_night());
    }

    #[test]
    fn test_walk_in_booking_carries_a_source() {
        let booking = TestBookingDataBuilder::walk_in().build();
        assert_eq!(booking.source.as_deref(), Some("Walk-in"));
    }

    #[test]
    fn test_room_builder_types() {
        let standard = TestRoomDataBuilder::standard().build();
        let deluxe = TestRoomDataBuilder::deluxe().build();
        let suite = TestRoomDataBuilder::suite().build();
        let premium = TestRoomDataBuilder::premium().build();

        assert_eq!(standard.nightly_rate, Money::from_major(1500, Currency::INR));
        assert_eq!(deluxe.room_type, RoomType::Deluxe);
        assert_eq!(suite.nightly_rate, Money::from_major(4000, Currency::INR));
        assert_eq!(premium.room_no, "401");
    }

    #[test]
    fn test_charge_builder_presets() {
        let breakfast = TestChargeDataBuilder::breakfast().build();
        assert_eq!(breakfast.description, "Breakfast");
        assert_eq!(breakfast.category, ChargeCategory::Food);

        let tea = TestChargeDataBuilder::tea().with_quantity(3).build();
        assert_eq!(tea.quantity, 3);
        assert_eq!(tea.unit_amount, MoneyFixtures::tea());
    }
}
