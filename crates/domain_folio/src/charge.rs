//! Charge lines
//!
//! A charge line is one billable item on a folio. Lines are immutable
//! once constructed; corrections append a reversing line rather than
//! editing history.

use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::error::FolioError;

/// Category of a charge line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargeCategory {
    /// Nightly room charges
    Room,
    /// Extra bed in the room
    ExtraBed,
    /// Meals and room service
    Food,
    /// Drinks, including bottled water
    Beverage,
    /// Laundry items
    Laundry,
    /// Miscellaneous hotel services
    Service,
    /// Damages billed to the guest
    Damage,
    /// Anything off the standard lists
    Custom,
}

impl ChargeCategory {
    /// Human-readable label as printed on bills
    pub fn label(&self) -> &'static str {
        match self {
            ChargeCategory::Room => "Room",
            ChargeCategory::ExtraBed => "Extra Bed",
            ChargeCategory::Food => "Food",
            ChargeCategory::Beverage => "Beverages",
            ChargeCategory::Laundry => "Laundry",
            ChargeCategory::Service => "Services",
            ChargeCategory::Damage => "Damages",
            ChargeCategory::Custom => "Other",
        }
    }
}

/// A single billable item on a folio
///
/// Validated at construction: the description must be non-empty and the
/// quantity at least one. There are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeLine {
    description: String,
    unit_amount: Money,
    quantity: u32,
    category: ChargeCategory,
}

impl ChargeLine {
    /// Creates a charge line
    ///
    /// Fails with [`FolioError::InvalidChargeLine`] when the description
    /// is empty or whitespace, or the quantity is zero.
    pub fn new(
        description: impl Into<String>,
        unit_amount: Money,
        quantity: u32,
        category: ChargeCategory,
    ) -> Result<Self, FolioError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(FolioError::InvalidChargeLine(
                "description must not be empty".to_string(),
            ));
        }
        if quantity == 0 {
            return Err(FolioError::InvalidChargeLine(
                "quantity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            description,
            unit_amount,
            quantity,
            category,
        })
    }

    /// Returns the description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the per-unit amount; negative for reversal lines
    pub fn unit_amount(&self) -> Money {
        self.unit_amount
    }

    /// Returns the quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the category
    pub fn category(&self) -> ChargeCategory {
        self.category
    }

    /// Total for this line: unit amount times quantity, exact
    pub fn line_total(&self) -> Money {
        self.unit_amount * self.quantity
    }

    /// Builds the line that cancels this one out
    ///
    /// Same quantity and category, negated unit amount, so the pair
    /// sums to zero in the folio subtotal.
    pub fn reversal(&self) -> Self {
        Self {
            description: format!("Reversal: {}", self.description),
            unit_amount: -self.unit_amount,
            quantity: self.quantity,
            category: self.category,
        }
    }
}
