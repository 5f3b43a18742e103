//! Rooms and housekeeping state
//!
//! A room tracks two independent lifecycles: the occupancy status
//! (available through checked-out) and the cleaning status. Vacating a
//! room always marks it dirty; it only becomes available again once
//! housekeeping has cleaned it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

use crate::error::DeskError;

/// Room categories offered by the property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    /// Standard room
    Standard,
    /// Deluxe room
    Deluxe,
    /// Suite
    Suite,
    /// Premium suite
    Premium,
}

impl RoomType {
    /// Returns the display label
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Standard => "Standard",
            RoomType::Deluxe => "Deluxe",
            RoomType::Suite => "Suite",
            RoomType::Premium => "Premium",
        }
    }

    /// Returns the rack rate per night for this room type
    pub fn standard_rate(&self, currency: Currency) -> Money {
        let major = match self {
            RoomType::Standard => 1500,
            RoomType::Deluxe => 2500,
            RoomType::Suite => 4000,
            RoomType::Premium => 6000,
        };
        Money::from_major(major, currency)
    }
}

/// Occupancy status of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    /// Ready to take a booking
    Available,
    /// Held for an upcoming arrival
    Reserved,
    /// Guest is in the room
    CheckedIn,
    /// Guest has left, room awaits housekeeping
    CheckedOut,
    /// Out of service
    Maintenance,
}

impl RoomStatus {
    /// Returns the display label
    pub fn label(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Reserved => "Reserved",
            RoomStatus::CheckedIn => "Checked-In",
            RoomStatus::CheckedOut => "Checked-Out",
            RoomStatus::Maintenance => "Maintenance",
        }
    }

    /// Checks if transition is valid
    pub fn can_transition_to(&self, target: RoomStatus) -> bool {
        use RoomStatus::*;
        matches!(
            (*self, target),
            (Available, Reserved) |
            (Available, CheckedIn) |
            (Available, Maintenance) |
            (Reserved, CheckedIn) |
            (Reserved, Available) |
            (CheckedIn, CheckedOut) |
            (CheckedOut, Available) |
            (Maintenance, Available)
        )
    }
}

/// Housekeeping status of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CleaningStatus {
    /// Cleaned and inspected
    Clean,
    /// Needs cleaning
    Dirty,
    /// Housekeeping is in the room
    InProgress,
}

impl CleaningStatus {
    /// Returns the display label
    pub fn label(&self) -> &'static str {
        match self {
            CleaningStatus::Clean => "Clean",
            CleaningStatus::Dirty => "Dirty",
            CleaningStatus::InProgress => "In Progress",
        }
    }

    /// Checks if transition is valid
    pub fn can_transition_to(&self, target: CleaningStatus) -> bool {
        use CleaningStatus::*;
        matches!(
            (*self, target),
            (Clean, Dirty) | (Dirty, InProgress) | (Dirty, Clean) | (InProgress, Clean)
        )
    }
}

/// A guest room
///
/// Created through [`Room::new`] with the rack rate for its type;
/// the rate can be overridden per room with [`Room::with_nightly_rate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Room number, the natural key at the desk
    pub room_no: String,
    /// Room category
    pub room_type: RoomType,
    /// Rate charged per night
    pub nightly_rate: Money,
    /// Occupancy status
    pub status: RoomStatus,
    /// Housekeeping status
    pub cleaning_status: CleaningStatus,
    /// Name of the guest currently in the room
    pub current_guest: Option<String>,
    /// Date the current guest is expected to leave
    pub expected_check_out: Option<NaiveDate>,
}

impl Room {
    /// Creates a new available, clean room at the rack rate for its type
    pub fn new(room_no: impl Into<String>, room_type: RoomType, currency: Currency) -> Self {
        Self {
            room_no: room_no.into(),
            room_type,
            nightly_rate: room_type.standard_rate(currency),
            status: RoomStatus::Available,
            cleaning_status: CleaningStatus::Clean,
            current_guest: None,
            expected_check_out: None,
        }
    }

    /// Overrides the nightly rate
    pub fn with_nightly_rate(mut self, rate: Money) -> Self {
        self.nightly_rate = rate;
        self
    }

    /// Checks if the room can take a new booking
    pub fn is_available(&self) -> bool {
        self.status == RoomStatus::Available
    }

    /// Checks if a guest is currently in the room
    pub fn is_occupied(&self) -> bool {
        self.status == RoomStatus::CheckedIn
    }

    /// Holds the room for an upcoming arrival
    pub fn reserve(&mut self) -> Result<(), DeskError> {
        self.transition_to(RoomStatus::Reserved)
    }

    /// Releases a held room back to available
    pub fn release(&mut self) -> Result<(), DeskError> {
        self.transition_to(RoomStatus::Available)
    }

    /// Moves a guest into the room
    pub fn occupy(
        &mut self,
        guest: impl Into<String>,
        expected_check_out: NaiveDate,
    ) -> Result<(), DeskError> {
        self.transition_to(RoomStatus::CheckedIn)?;
        self.current_guest = Some(guest.into());
        self.expected_check_out = Some(expected_check_out);
        Ok(())
    }

    /// Moves the guest out and hands the room to housekeeping
    pub fn vacate(&mut self) -> Result<(), DeskError> {
        self.transition_to(RoomStatus::CheckedOut)?;
        self.cleaning_status = CleaningStatus::Dirty;
        self.current_guest = None;
        self.expected_check_out = None;
        Ok(())
    }

    /// Takes the room out of service
    pub fn set_maintenance(&mut self) -> Result<(), DeskError> {
        self.transition_to(RoomStatus::Maintenance)
    }

    /// Marks housekeeping as started
    pub fn begin_cleaning(&mut self) -> Result<(), DeskError> {
        self.cleaning_transition_to(CleaningStatus::InProgress)
    }

    /// Marks the room clean; a checked-out room becomes available again
    pub fn mark_cleaned(&mut self) -> Result<(), DeskError> {
        self.cleaning_transition_to(CleaningStatus::Clean)?;
        if self.status == RoomStatus::CheckedOut {
            self.transition_to(RoomStatus::Available)?;
        }
        Ok(())
    }

    fn transition_to(&mut self, target: RoomStatus) -> Result<(), DeskError> {
        if !self.status.can_transition_to(target) {
            return Err(DeskError::InvalidStatusTransition {
                from: format!("{:?}", self.status),
                to: format!("{:?}", target),
            });
        }
        self.status = target;
        Ok(())
    }

    fn cleaning_transition_to(&mut self, target: CleaningStatus) -> Result<(), DeskError> {
        if !self.cleaning_status.can_transition_to(target) {
            return Err(DeskError::InvalidStatusTransition {
                from: format!("{:?}", self.cleaning_status),
                to: format!("{:?}", target),
            });
        }
        self.cleaning_status = target;
        Ok(())
    }
}
