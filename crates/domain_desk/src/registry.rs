//! In-memory desk registry
//!
//! The registry is the single store behind the front desk: rooms keyed
//! by room number and bookings in arrival order. It is built for one
//! house currency and refuses rooms or bookings priced in any other, so
//! every figure it aggregates can be summed without conversion.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{BookingId, Currency, Money, MoneyError};

use crate::booking::{Booking, BookingStatus};
use crate::error::DeskError;
use crate::room::Room;

/// Dashboard figures for one business date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeskSummary {
    /// Total rooms registered
    pub total_rooms: usize,
    /// Rooms ready to take a booking
    pub available_rooms: usize,
    /// Rooms with a guest in them
    pub occupied_rooms: usize,
    /// Occupied share of all rooms, rounded to whole percent
    pub occupancy_percent: u8,
    /// Reservations arriving on the date
    pub arrivals: usize,
    /// In-house guests leaving on the date
    pub departures: usize,
    /// Money received across all folios
    pub collected: Money,
    /// Positive balances still owed across all folios
    pub outstanding: Money,
    /// Number of bookings with money still owed
    pub pending_payment_count: usize,
}

/// The front desk's store of rooms and bookings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskRegistry {
    /// House currency every folio bills in
    currency: Currency,
    /// Rooms by room number
    rooms: BTreeMap<String, Room>,
    /// Bookings in arrival order
    bookings: Vec<Booking>,
}

impl DeskRegistry {
    /// Creates an empty registry for the given house currency
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            rooms: BTreeMap::new(),
            bookings: Vec::new(),
        }
    }

    /// Returns the house currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Registers a room
    ///
    /// # Errors
    ///
    /// Returns error if a room with the same number exists or the room
    /// is priced in a foreign currency
    pub fn add_room(&mut self, room: Room) -> Result<(), DeskError> {
        if room.nightly_rate.currency() != self.currency {
            return Err(currency_mismatch(self.currency, room.nightly_rate.currency()));
        }
        if self.rooms.contains_key(&room.room_no) {
            return Err(DeskError::DuplicateRoom(room.room_no));
        }
        self.rooms.insert(room.room_no.clone(), room);
        Ok(())
    }

    /// Removes a room from the registry
    ///
    /// # Errors
    ///
    /// Returns error if the room does not exist or a guest is checked in
    pub fn remove_room(&mut self, room_no: &str) -> Result<Room, DeskError> {
        let room = self
            .rooms
            .remove(room_no)
            .ok_or_else(|| DeskError::RoomNotFound(room_no.to_string()))?;
        if room.is_occupied() {
            self.rooms.insert(room.room_no.clone(), room);
            return Err(DeskError::RoomOccupied(room_no.to_string()));
        }
        Ok(room)
    }

    /// Looks up a room by number
    pub fn room(&self, room_no: &str) -> Option<&Room> {
        self.rooms.get(room_no)
    }

    /// Looks up a room by number for mutation
    pub fn room_mut(&mut self, room_no: &str) -> Option<&mut Room> {
        self.rooms.get_mut(room_no)
    }

    /// Returns all rooms ordered by room number
    pub fn rooms(&self) -> Vec<&Room> {
        self.rooms.values().collect()
    }

    /// Returns rooms ready to take a booking
    pub fn available_rooms(&self) -> Vec<&Room> {
        self.rooms.values().filter(|r| r.is_available()).collect()
    }

    /// Admits a booking to the registry
    ///
    /// # Errors
    ///
    /// Returns error if the booking's folio bills in a foreign currency
    pub fn add_booking(&mut self, booking: Booking) -> Result<BookingId, DeskError> {
        if booking.folio().currency() != self.currency {
            return Err(currency_mismatch(self.currency, booking.folio().currency()));
        }
        let id = booking.id();
        self.bookings.push(booking);
        Ok(id)
    }

    /// Looks up a booking by ID
    pub fn booking(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id() == id)
    }

    /// Looks up a booking by ID for mutation
    pub fn booking_mut(&mut self, id: BookingId) -> Option<&mut Booking> {
        self.bookings.iter_mut().find(|b| b.id() == id)
    }

    /// Returns all bookings in arrival order
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Finds a booking by reference, guest name, phone, or room number
    ///
    /// This is the search behind check-in and check-out: the reference
    /// and room number match exactly, name and phone match on contains.
    pub fn find_booking(&self, query: &str) -> Option<&Booking> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        let needle = query.to_lowercase();
        self.bookings.iter().find(|b| {
            b.booking_ref().eq_ignore_ascii_case(query)
                || b.room_no() == query
                || b.guest().mobile_no.contains(query)
                || b.guest().name.to_lowercase().contains(&needle)
        })
    }

    /// Returns bookings with a guest currently in house
    pub fn checked_in_bookings(&self) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.status() == BookingStatus::CheckedIn)
            .collect()
    }

    /// Returns reservations due to arrive on the given date
    pub fn arrivals_on(&self, date: NaiveDate) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.status() == BookingStatus::Reserved && b.stay().check_in == date)
            .collect()
    }

    /// Returns in-house bookings due to leave on the given date
    pub fn departures_on(&self, date: NaiveDate) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.status() == BookingStatus::CheckedIn && b.stay().check_out == date)
            .collect()
    }

    /// Returns bookings that still owe money
    pub fn pending_payments(&self) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.folio().balance_due().is_positive())
            .collect()
    }

    /// Computes the dashboard figures for the given business date
    pub fn summary(&self, on: NaiveDate) -> DeskSummary {
        let total_rooms = self.rooms.len();
        let available_rooms = self.rooms.values().filter(|r| r.is_available()).count();
        let occupied_rooms = self.rooms.values().filter(|r| r.is_occupied()).count();
        let occupancy_percent = if total_rooms == 0 {
            0
        } else {
            ((occupied_rooms * 100 + total_rooms / 2) / total_rooms) as u8
        };

        let collected = self
            .bookings
            .iter()
            .fold(Money::zero(self.currency), |acc, b| {
                acc + b.folio().total_paid()
            });
        let outstanding = self
            .bookings
            .iter()
            .map(|b| b.folio().balance_due())
            .filter(|balance| balance.is_positive())
            .fold(Money::zero(self.currency), |acc, balance| acc + balance);

        DeskSummary {
            total_rooms,
            available_rooms,
            occupied_rooms,
            occupancy_percent,
            arrivals: self.arrivals_on(on).len(),
            departures: self.departures_on(on).len(),
            collected,
            outstanding,
            pending_payment_count: self.pending_payments().len(),
        }
    }
}

fn currency_mismatch(house: Currency, other: Currency) -> DeskError {
    DeskError::Folio(MoneyError::CurrencyMismatch(house.to_string(), other.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{GuestProfile, Occupancy};
    use crate::room::RoomType;
    use core_kernel::StayDates;

    fn booking_for(name: &str, mobile: &str, room_no: &str) -> Booking {
        Booking::reserve(
            GuestProfile::new(name, mobile),
            Occupancy::default(),
            room_no,
            RoomType::Standard,
            StayDates::parse("2025-01-10", "2025-01-13").unwrap(),
            Currency::INR,
        )
    }

    #[test]
    fn test_add_and_list_rooms_in_number_order() {
        let mut registry = DeskRegistry::new(Currency::INR);
        registry
            .add_room(Room::new("102", RoomType::Deluxe, Currency::INR))
            .unwrap();
        registry
            .add_room(Room::new("101", RoomType::Standard, Currency::INR))
            .unwrap();

        let numbers: Vec<&str> = registry.rooms().iter().map(|r| r.room_no.as_str()).collect();
        assert_eq!(numbers, vec!["101", "102"]);
    }

    #[test]
    fn test_duplicate_room_number_rejected() {
        let mut registry = DeskRegistry::new(Currency::INR);
        registry
            .add_room(Room::new("101", RoomType::Standard, Currency::INR))
            .unwrap();

        let result = registry.add_room(Room::new("101", RoomType::Suite, Currency::INR));
        assert!(matches!(result, Err(DeskError::DuplicateRoom(_))));
        assert_eq!(registry.rooms().len(), 1);
    }

    #[test]
    fn test_foreign_currency_room_rejected() {
        let mut registry = DeskRegistry::new(Currency::INR);
        let result = registry.add_room(Room::new("101", RoomType::Standard, Currency::USD));

        assert!(matches!(result, Err(DeskError::Folio(_))));
        assert!(registry.rooms().is_empty());
    }

    #[test]
    fn test_foreign_currency_booking_rejected() {
        let mut registry = DeskRegistry::new(Currency::INR);
        let booking = Booking::reserve(
            GuestProfile::new("Guest", "9000000000"),
            Occupancy::default(),
            "101",
            RoomType::Standard,
            StayDates::parse("2025-01-10", "2025-01-13").unwrap(),
            Currency::EUR,
        );

        assert!(matches!(
            registry.add_booking(booking),
            Err(DeskError::Folio(_))
        ));
        assert!(registry.bookings().is_empty());
    }

    #[test]
    fn test_find_booking_by_each_predicate() {
        let mut registry = DeskRegistry::new(Currency::INR);
        let booking = booking_for("Rahul Sharma", "9876543210", "101");
        let booking_ref = booking.booking_ref().to_string();
        registry.add_booking(booking).unwrap();

        assert!(registry.find_booking(&booking_ref).is_some());
        assert!(registry.find_booking(&booking_ref.to_lowercase()).is_some());
        assert!(registry.find_booking("rahul").is_some());
        assert!(registry.find_booking("98765").is_some());
        assert!(registry.find_booking("101").is_some());
        assert!(registry.find_booking("nobody").is_none());
        assert!(registry.find_booking("   ").is_none());
    }

    #[test]
    fn test_empty_summary() {
        let registry = DeskRegistry::new(Currency::INR);
        let summary = registry.summary(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());

        assert_eq!(summary.total_rooms, 0);
        assert_eq!(summary.occupancy_percent, 0);
        assert!(summary.collected.is_zero());
        assert!(summary.outstanding.is_zero());
    }
}
