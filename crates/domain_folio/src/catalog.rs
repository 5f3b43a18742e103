//! Standard charge catalog
//!
//! The fixed price list behind the quick-add buttons on the additional
//! charges screen: beverages, food and laundry at house prices. Custom
//! charges bypass the catalog and construct their lines directly.

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

use crate::charge::{ChargeCategory, ChargeLine};
use crate::error::FolioError;

/// A named item on the house price list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Item name as shown on the button and the bill
    pub name: String,
    /// Price per unit
    pub price: Money,
    /// Category the item posts under
    pub category: ChargeCategory,
}

impl CatalogItem {
    fn new(name: &str, price_major: i64, category: ChargeCategory) -> Self {
        Self {
            name: name.to_string(),
            price: Money::from_major(price_major, Currency::INR),
            category,
        }
    }

    /// Converts a catalog pick into a charge line
    pub fn charge_line(&self, quantity: u32) -> Result<ChargeLine, FolioError> {
        ChargeLine::new(self.name.clone(), self.price, quantity, self.category)
    }
}

/// The built-in house price list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeCatalog {
    items: Vec<CatalogItem>,
}

impl ChargeCatalog {
    /// Creates the standard price list used by the front desk
    pub fn standard() -> Self {
        Self {
            items: vec![
                // Beverages
                CatalogItem::new("Tea", 20, ChargeCategory::Beverage),
                CatalogItem::new("Coffee", 30, ChargeCategory::Beverage),
                CatalogItem::new("Soft Drink", 50, ChargeCategory::Beverage),
                CatalogItem::new("Water Bottle", 25, ChargeCategory::Beverage),
                CatalogItem::new("Juice", 60, ChargeCategory::Beverage),
                // Food
                CatalogItem::new("Breakfast", 200, ChargeCategory::Food),
                CatalogItem::new("Lunch", 350, ChargeCategory::Food),
                CatalogItem::new("Dinner", 400, ChargeCategory::Food),
                CatalogItem::new("Snacks", 100, ChargeCategory::Food),
                CatalogItem::new("Room Service", 150, ChargeCategory::Food),
                // Laundry
                CatalogItem::new("Shirt", 40, ChargeCategory::Laundry),
                CatalogItem::new("Pants", 50, ChargeCategory::Laundry),
                CatalogItem::new("Suit", 200, ChargeCategory::Laundry),
                CatalogItem::new("Dress", 150, ChargeCategory::Laundry),
                CatalogItem::new("Express Service", 100, ChargeCategory::Laundry),
            ],
        }
    }

    /// All items in listing order
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Items in one category, in listing order
    pub fn in_category(&self, category: ChargeCategory) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Looks up an item by name, case-insensitively
    pub fn find(&self, name: &str) -> Option<&CatalogItem> {
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }
}
