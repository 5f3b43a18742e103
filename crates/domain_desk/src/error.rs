//! Front desk domain errors

use thiserror::Error;

use domain_folio::FolioError;

/// Errors that can occur at the front desk
#[derive(Debug, Error)]
pub enum DeskError {
    /// No booking matched the given identifier or search query
    #[error("Booking not found: {0}")]
    BookingNotFound(String),

    /// No room with the given number is registered
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    /// A room with the given number is already registered
    #[error("Room already exists: {0}")]
    DuplicateRoom(String),

    /// The room cannot take a new booking in its current status
    #[error("Room {room_no} is not available ({status})")]
    RoomUnavailable { room_no: String, status: String },

    /// The room still has a guest checked in
    #[error("Room {0} is occupied")]
    RoomOccupied(String),

    /// The requested lifecycle change is not allowed
    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    /// Error raised by the booking's folio
    #[error(transparent)]
    Folio(#[from] FolioError),
}
