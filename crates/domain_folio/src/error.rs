//! Folio domain errors

use core_kernel::{MoneyError, TemporalError};
use thiserror::Error;

/// Errors that can occur in the folio domain
///
/// Every failure is raised synchronously at the violating call and
/// leaves the folio unchanged; none are retryable.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Charge line failed construction-time validation
    #[error("Invalid charge line: {0}")]
    InvalidChargeLine(String),

    /// Payment failed validation
    #[error("Invalid payment: {0}")]
    InvalidPayment(String),

    /// Discount percent outside 0-100
    #[error("Invalid discount percent: {percent} (expected 0-100)")]
    InvalidDiscount { percent: u8 },

    /// Mutation attempted on a settled folio
    #[error("Folio is frozen and no longer accepts changes")]
    FolioFrozen,

    /// No charge line at the given position
    #[error("No charge line at position {0}")]
    LineNotFound(usize),

    /// Money arithmetic failure (currency mismatch, overflow)
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Stay date failure (unparseable date text)
    #[error("Date error: {0}")]
    Dates(#[from] TemporalError),
}
