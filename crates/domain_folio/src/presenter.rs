//! Folio presentation
//!
//! Builds the display-ready statement for a folio: totals plus line
//! and payment rows. Pure derivation over the folio's queries; never
//! mutates and never fails, so calling it twice on an unchanged folio
//! yields identical statements.

use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::charge::ChargeCategory;
use crate::folio::Folio;
use crate::payment::PaymentMethod;

/// One charge line as displayed on a statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    pub description: String,
    pub category: ChargeCategory,
    pub quantity: u32,
    pub unit_amount: Money,
    pub amount: Money,
}

/// One payment as displayed on a statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementPayment {
    pub amount: Money,
    pub method: PaymentMethod,
    pub reference: Option<String>,
}

/// The display-ready figures for one folio
///
/// Carries everything a bill or screen needs, so renderers work from
/// this structure alone and never reach back into the folio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolioStatement {
    pub lines: Vec<StatementLine>,
    pub payments: Vec<StatementPayment>,
    pub subtotal: Money,
    pub discount_percent: u8,
    pub discount_amount: Money,
    pub grand_total: Money,
    pub total_paid: Money,
    pub balance_due: Money,
    pub is_frozen: bool,
}

/// Builds statements from folios
pub struct FolioPresenter;

impl FolioPresenter {
    /// Derives the statement for a folio without touching its state
    pub fn present(folio: &Folio) -> FolioStatement {
        let lines = folio
            .lines()
            .iter()
            .map(|line| StatementLine {
                description: line.description().to_string(),
                category: line.category(),
                quantity: line.quantity(),
                unit_amount: line.unit_amount(),
                amount: line.line_total(),
            })
            .collect();

        let payments = folio
            .payments()
            .iter()
            .map(|payment| StatementPayment {
                amount: payment.amount,
                method: payment.method,
                reference: payment.reference.clone(),
            })
            .collect();

        FolioStatement {
            lines,
            payments,
            subtotal: folio.subtotal(),
            discount_percent: folio.discount_percent(),
            discount_amount: folio.discount_amount(),
            grand_total: folio.grand_total(),
            total_paid: folio.total_paid(),
            balance_due: folio.balance_due(),
            is_frozen: folio.is_frozen(),
        }
    }
}
