//! Payment records
//!
//! Settlement here is immediate: a payment is recorded the moment the
//! desk takes it, so there is no processing lifecycle to track.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Money, PaymentId};

/// How the guest paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash at the desk
    Cash,
    /// Credit or debit card
    Card,
    /// UPI transfer
    Upi,
    /// Bank transfer
    BankTransfer,
}

impl PaymentMethod {
    /// Human-readable label as printed on bills
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

/// A payment record on a folio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// Amount received
    pub amount: Money,
    /// Payment method
    pub method: PaymentMethod,
    /// External reference (card slip, UPI transaction id)
    pub reference: Option<String>,
    /// When the payment was taken
    pub received_at: DateTime<Utc>,
}

impl Payment {
    /// Creates a payment record
    ///
    /// Amount validation happens when the payment is added to a folio,
    /// not here.
    pub fn new(amount: Money, method: PaymentMethod) -> Self {
        Self {
            id: PaymentId::new_v7(),
            amount,
            method,
            reference: None,
            received_at: Utc::now(),
        }
    }

    /// Sets the external reference
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}
