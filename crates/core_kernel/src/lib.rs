//! Core Kernel - Foundational types for the front-desk system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with exact minor-unit arithmetic
//! - Stay date handling for nightly billing
//! - Strongly-typed entity identifiers

pub mod identifiers;
pub mod money;
pub mod temporal;

pub use identifiers::{BookingId, FolioId, PaymentId};
pub use money::{Currency, Money, MoneyError};
pub use temporal::{StayDates, TemporalError};
