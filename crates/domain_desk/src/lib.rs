//! Front Desk Domain - Rooms, Bookings, and Desk Workflows
//!
//! This crate is the operational layer above the folio ledger: rooms
//! with their occupancy and housekeeping lifecycles, bookings that own
//! one folio per stay, an in-memory registry behind the desk, and the
//! `FrontDesk` service that drives the guest journey from reservation
//! to the printed checkout bill.
//!
//! # Guest journey
//!
//! ```rust,ignore
//! use domain_desk::{FrontDesk, ReservationRequest, Room, RoomType};
//!
//! let mut desk = FrontDesk::new(Currency::INR);
//! desk.add_room(Room::new("101", RoomType::Standard, Currency::INR))?;
//!
//! let id = desk.reserve(ReservationRequest::new(guest, occupancy, "101", stay))?;
//! desk.check_in(id)?;
//! desk.post_catalog_charge(id, "Breakfast", 2)?;
//! desk.record_payment(id, payment)?;
//! desk.check_out(id, None, None, true)?;
//! let bill = desk.generate_bill(id, BillType::CheckoutBill)?;
//! ```

pub mod bill;
pub mod booking;
pub mod desk;
pub mod error;
pub mod registry;
pub mod room;

pub use bill::{Bill, BillType, HotelInfo};
pub use booking::{
    Booking, BookingStatus, GuestFeedback, GuestProfile, IdProof, Occupancy, PaymentStatus,
};
pub use desk::{FrontDesk, ReservationRequest};
pub use error::DeskError;
pub use registry::{DeskRegistry, DeskSummary};
pub use room::{CleaningStatus, Room, RoomStatus, RoomType};
