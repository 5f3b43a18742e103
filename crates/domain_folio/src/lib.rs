//! Folio Domain - Per-Stay Charge Ledger
//!
//! This crate implements the billing core of the front desk: an
//! append-only ledger of charge lines and payments per stay, with
//! derived totals that are recomputed on demand rather than stored.
//!
//! # Billing rules
//!
//! - Amounts are integer minor units; sums and line totals are exact
//! - The only rounding point is the percentage discount, which rounds
//!   half-up to the nearest minor unit
//! - Corrections append reversing lines; history is never edited
//! - Freezing at checkout makes the folio permanently read-only
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_folio::{Folio, FolioPresenter, RatePlan};
//!
//! let mut folio = Folio::open(Currency::INR);
//!
//! // Post the room line for the stay
//! let rate = RatePlan::new(Money::from_major(1500, Currency::INR));
//! folio.add_line(rate.compute_room_line("2025-01-10", "2025-01-13")?)?;
//!
//! folio.set_discount_percent(10)?;
//! let statement = FolioPresenter::present(&folio);
//! ```

pub mod catalog;
pub mod charge;
pub mod error;
pub mod folio;
pub mod payment;
pub mod presenter;
pub mod rate;

pub use catalog::{CatalogItem, ChargeCatalog};
pub use charge::{ChargeCategory, ChargeLine};
pub use error::FolioError;
pub use folio::{Folio, FolioStatus};
pub use payment::{Payment, PaymentMethod};
pub use presenter::{FolioPresenter, FolioStatement, StatementLine, StatementPayment};
pub use rate::RatePlan;
