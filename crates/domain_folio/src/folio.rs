//! Folio - the per-stay charge ledger
//!
//! A folio collects charge lines and payments for one stay and derives
//! every total on demand from that history. Mutations validate up
//! front, so a rejected call leaves the folio untouched, and a frozen
//! folio rejects all changes permanently.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, FolioId, Money, MoneyError};

use crate::charge::ChargeLine;
use crate::error::FolioError;
use crate::payment::Payment;

/// Folio lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FolioStatus {
    /// Accepting lines, payments and discount changes
    Open,
    /// Settled at checkout; permanently read-only
    Frozen,
}

/// The charge ledger for a single stay
///
/// Lines and payments are append-only. Subtotal, discount, grand total
/// and balance are never stored; each query recomputes them from the
/// current history, so they cannot drift out of sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folio {
    id: FolioId,
    currency: Currency,
    lines: Vec<ChargeLine>,
    payments: Vec<Payment>,
    discount_percent: u8,
    status: FolioStatus,
    opened_at: DateTime<Utc>,
    frozen_at: Option<DateTime<Utc>>,
}

impl Folio {
    /// Opens an empty folio in the given currency
    pub fn open(currency: Currency) -> Self {
        Self {
            id: FolioId::new_v7(),
            currency,
            lines: Vec::new(),
            payments: Vec::new(),
            discount_percent: 0,
            status: FolioStatus::Open,
            opened_at: Utc::now(),
            frozen_at: None,
        }
    }

    /// Returns the folio identifier
    pub fn id(&self) -> FolioId {
        self.id
    }

    /// Returns the folio currency; every line and payment matches it
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the lifecycle status
    pub fn status(&self) -> FolioStatus {
        self.status
    }

    /// Returns true once the folio has been settled
    pub fn is_frozen(&self) -> bool {
        self.status == FolioStatus::Frozen
    }

    /// When the folio was opened
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// When the folio was frozen, if it has been
    pub fn frozen_at(&self) -> Option<DateTime<Utc>> {
        self.frozen_at
    }

    /// All charge lines in posting order
    pub fn lines(&self) -> &[ChargeLine] {
        &self.lines
    }

    /// The charge line at a position, if any
    pub fn line(&self, position: usize) -> Option<&ChargeLine> {
        self.lines.get(position)
    }

    /// All payments in receipt order
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// The whole-percent discount currently applied
    pub fn discount_percent(&self) -> u8 {
        self.discount_percent
    }

    /// Appends a charge line, returning its position
    ///
    /// Fails with [`FolioError::FolioFrozen`] after settlement and with
    /// a currency mismatch when the line is not in the folio currency.
    pub fn add_line(&mut self, line: ChargeLine) -> Result<usize, FolioError> {
        self.ensure_open()?;
        self.ensure_currency(line.unit_amount().currency())?;
        self.lines.push(line);
        Ok(self.lines.len() - 1)
    }

    /// Appends the reversing line for an existing position
    ///
    /// The original line stays in history; the pair nets to zero.
    /// Returns the position of the reversal.
    pub fn reverse_line(&mut self, position: usize) -> Result<usize, FolioError> {
        self.ensure_open()?;
        let reversal = self
            .lines
            .get(position)
            .ok_or(FolioError::LineNotFound(position))?
            .reversal();
        self.lines.push(reversal);
        Ok(self.lines.len() - 1)
    }

    /// Records a payment, returning its position
    ///
    /// Zero-amount payments are accepted; negative amounts fail with
    /// [`FolioError::InvalidPayment`].
    pub fn add_payment(&mut self, payment: Payment) -> Result<usize, FolioError> {
        self.ensure_open()?;
        if payment.amount.is_negative() {
            return Err(FolioError::InvalidPayment(format!(
                "amount must not be negative, got {}",
                payment.amount
            )));
        }
        self.ensure_currency(payment.amount.currency())?;
        self.payments.push(payment);
        Ok(self.payments.len() - 1)
    }

    /// Sets the whole-percent discount applied to the subtotal
    ///
    /// Replaces any previous value. Fails with
    /// [`FolioError::InvalidDiscount`] above 100.
    pub fn set_discount_percent(&mut self, percent: u8) -> Result<(), FolioError> {
        self.ensure_open()?;
        if percent > 100 {
            return Err(FolioError::InvalidDiscount { percent });
        }
        self.discount_percent = percent;
        Ok(())
    }

    /// Freezes the folio at settlement
    ///
    /// Irreversible. Every later mutation, including a second freeze,
    /// fails with [`FolioError::FolioFrozen`].
    pub fn freeze(&mut self) -> Result<(), FolioError> {
        self.ensure_open()?;
        self.status = FolioStatus::Frozen;
        self.frozen_at = Some(Utc::now());
        Ok(())
    }

    /// Sum of all line totals, reversals included
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(self.currency), |acc, line| {
                acc + line.line_total()
            })
    }

    /// Discount on the subtotal, rounded half-up to the nearest minor unit
    pub fn discount_amount(&self) -> Money {
        self.subtotal().percentage(self.discount_percent)
    }

    /// Subtotal less discount
    ///
    /// Computed as the exact complement, so discount plus grand total
    /// always reproduces the subtotal.
    pub fn grand_total(&self) -> Money {
        self.subtotal() - self.discount_amount()
    }

    /// Sum of recorded payments
    pub fn total_paid(&self) -> Money {
        self.payments
            .iter()
            .fold(Money::zero(self.currency), |acc, p| acc + p.amount)
    }

    /// Grand total less payments; negative when the guest has overpaid
    pub fn balance_due(&self) -> Money {
        self.grand_total() - self.total_paid()
    }

    fn ensure_open(&self) -> Result<(), FolioError> {
        match self.status {
            FolioStatus::Open => Ok(()),
            FolioStatus::Frozen => Err(FolioError::FolioFrozen),
        }
    }

    fn ensure_currency(&self, other: Currency) -> Result<(), FolioError> {
        if other != self.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.to_string(),
            )
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charge::ChargeCategory;
    use crate::payment::PaymentMethod;

    fn inr(minor: i64) -> Money {
        Money::from_minor(minor, Currency::INR)
    }

    fn line(description: &str, minor: i64, quantity: u32) -> ChargeLine {
        ChargeLine::new(description, inr(minor), quantity, ChargeCategory::Custom).unwrap()
    }

    fn setup_folio() -> Folio {
        let mut folio = Folio::open(Currency::INR);
        folio.add_line(line("Room charges", 150000, 3)).unwrap();
        folio.add_line(line("Breakfast", 20000, 1)).unwrap();
        folio.add_line(line("Tea", 5000, 1)).unwrap();
        folio
    }

    #[test]
    fn test_open_folio_is_empty() {
        let folio = Folio::open(Currency::INR);
        assert_eq!(folio.status(), FolioStatus::Open);
        assert!(folio.lines().is_empty());
        assert!(folio.subtotal().is_zero());
        assert!(folio.balance_due().is_zero());
    }

    #[test]
    fn test_totals_recompute_from_lines() {
        let mut folio = setup_folio();
        assert_eq!(folio.subtotal(), inr(475000));

        folio.set_discount_percent(10).unwrap();
        assert_eq!(folio.discount_amount(), inr(47500));
        assert_eq!(folio.grand_total(), inr(427500));
    }

    #[test]
    fn test_add_line_returns_positions_in_order() {
        let mut folio = Folio::open(Currency::INR);
        assert_eq!(folio.add_line(line("First", 100, 1)).unwrap(), 0);
        assert_eq!(folio.add_line(line("Second", 200, 1)).unwrap(), 1);
        assert_eq!(folio.line(1).unwrap().description(), "Second");
    }

    #[test]
    fn test_reverse_line_nets_to_zero() {
        let mut folio = setup_folio();
        let before = folio.subtotal();

        let pos = folio.reverse_line(1).unwrap();
        assert_eq!(pos, 3);
        assert_eq!(folio.subtotal(), before - inr(20000));
        assert!(folio.line(3).unwrap().description().starts_with("Reversal:"));
    }

    #[test]
    fn test_reverse_line_unknown_position() {
        let mut folio = setup_folio();
        assert!(matches!(
            folio.reverse_line(99),
            Err(FolioError::LineNotFound(99))
        ));
        assert_eq!(folio.lines().len(), 3);
    }

    #[test]
    fn test_rejects_foreign_currency_line() {
        let mut folio = setup_folio();
        let usd = ChargeLine::new(
            "Imported",
            Money::from_minor(100, Currency::USD),
            1,
            ChargeCategory::Custom,
        )
        .unwrap();

        assert!(matches!(
            folio.add_line(usd),
            Err(FolioError::Money(MoneyError::CurrencyMismatch(_, _)))
        ));
        assert_eq!(folio.lines().len(), 3);
    }

    #[test]
    fn test_negative_payment_rejected() {
        let mut folio = setup_folio();
        let payment = Payment::new(inr(-100), PaymentMethod::Cash);

        assert!(matches!(
            folio.add_payment(payment),
            Err(FolioError::InvalidPayment(_))
        ));
        assert!(folio.payments().is_empty());
    }

    #[test]
    fn test_discount_above_hundred_rejected() {
        let mut folio = setup_folio();
        assert!(matches!(
            folio.set_discount_percent(101),
            Err(FolioError::InvalidDiscount { percent: 101 })
        ));
        assert_eq!(folio.discount_percent(), 0);
    }

    #[test]
    fn test_frozen_folio_rejects_everything() {
        let mut folio = setup_folio();
        folio.set_discount_percent(10).unwrap();
        folio.add_payment(Payment::new(inr(400000), PaymentMethod::Cash)).unwrap();
        folio.freeze().unwrap();

        let totals_before = (folio.subtotal(), folio.grand_total(), folio.balance_due());

        assert!(matches!(
            folio.add_line(line("Late", 100, 1)),
            Err(FolioError::FolioFrozen)
        ));
        assert!(matches!(
            folio.add_payment(Payment::new(inr(100), PaymentMethod::Cash)),
            Err(FolioError::FolioFrozen)
        ));
        assert!(matches!(
            folio.set_discount_percent(5),
            Err(FolioError::FolioFrozen)
        ));
        assert!(matches!(folio.reverse_line(0), Err(FolioError::FolioFrozen)));
        assert!(matches!(folio.freeze(), Err(FolioError::FolioFrozen)));

        assert_eq!(
            (folio.subtotal(), folio.grand_total(), folio.balance_due()),
            totals_before
        );
        assert!(folio.frozen_at().is_some());
    }
}
