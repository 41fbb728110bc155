// src/model/inventory.rs - Inventory items and derived stock status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::timestamp;
use crate::table::{CellValue, TableRecord};

/// Default share of total stock at or below which an item is "low"
pub const DEFAULT_LOW_STOCK_THRESHOLD: f64 = 0.20;

/// Reservation state reported on an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InventoryStatus {
    Available,
    Reserved,
    Confirmed,
    Released,
    OutOfStock,
    LowStock,
    #[serde(other)]
    Unknown,
}

impl InventoryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Reserved => "Reserved",
            Self::Confirmed => "Confirmed",
            Self::Released => "Released",
            Self::OutOfStock => "Out of stock",
            Self::LowStock => "Low stock",
            Self::Unknown => "Unknown",
        }
    }
}

/// Stock level computed on the client; the backend never sends it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// `available == 0` is out of stock whatever the total. Otherwise the
    /// available share of `total` decides; a zero total counts as in stock.
    pub fn derive(available: u32, total: u32, threshold: f64) -> Self {
        if available == 0 {
            return Self::OutOfStock;
        }
        if total == 0 {
            return Self::InStock;
        }

        let ratio = available as f64 / total as f64;
        if ratio <= threshold {
            Self::LowStock
        } else {
            Self::InStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::InStock => "In stock",
            Self::LowStock => "Low stock",
            Self::OutOfStock => "Out of stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    pub available_quantity: u32,
    #[serde(default)]
    pub reserved_quantity: u32,
    pub total_quantity: u32,
    #[serde(with = "timestamp")]
    pub last_updated: DateTime<Utc>,
}

impl InventoryItem {
    pub fn stock_status(&self, threshold: f64) -> StockStatus {
        StockStatus::derive(self.available_quantity, self.total_quantity, threshold)
    }

    /// Available share of total stock in percent
    pub fn availability_percent(&self) -> f64 {
        if self.total_quantity == 0 {
            0.0
        } else {
            self.available_quantity as f64 / self.total_quantity as f64 * 100.0
        }
    }

    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.product_id.to_lowercase().contains(&term)
            || self.product_name.to_lowercase().contains(&term)
    }
}

impl TableRecord for InventoryItem {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "productId" | "id" => CellValue::text(&self.product_id),
            "productName" => CellValue::text(&self.product_name),
            "availableQuantity" => self.available_quantity.into(),
            "reservedQuantity" => self.reserved_quantity.into(),
            "totalQuantity" => self.total_quantity.into(),
            "availability" => self.availability_percent().into(),
            "lastUpdated" => self.last_updated.into(),
            _ => CellValue::Empty,
        }
    }
}

/// Figures for the cards above the inventory table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InventorySummary {
    pub products: usize,
    pub out_of_stock: usize,
    pub low_stock: usize,
}

impl InventorySummary {
    pub fn from_items(items: &[InventoryItem], threshold: f64) -> Self {
        let mut summary = Self {
            products: items.len(),
            ..Self::default()
        };

        for item in items {
            match item.stock_status(threshold) {
                StockStatus::OutOfStock => summary.out_of_stock += 1,
                StockStatus::LowStock => summary.low_stock += 1,
                StockStatus::InStock => {}
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(available: u32, total: u32) -> InventoryItem {
        serde_json::from_value(json!({
            "productId": format!("p-{}-{}", available, total),
            "productName": "Cable",
            "availableQuantity": available,
            "reservedQuantity": total.saturating_sub(available),
            "totalQuantity": total,
            "lastUpdated": "2024-03-07T09:05:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn stock_status_derivation() {
        let t = DEFAULT_LOW_STOCK_THRESHOLD;
        assert_eq!(StockStatus::derive(0, 100, t), StockStatus::OutOfStock);
        assert_eq!(StockStatus::derive(0, 0, t), StockStatus::OutOfStock);
        assert_eq!(StockStatus::derive(5, 55, t), StockStatus::LowStock);
        assert_eq!(StockStatus::derive(20, 100, t), StockStatus::LowStock);
        assert_eq!(StockStatus::derive(21, 100, t), StockStatus::InStock);
        assert_eq!(StockStatus::derive(3, 0, t), StockStatus::InStock);
    }

    #[test]
    fn threshold_is_configurable() {
        assert_eq!(StockStatus::derive(30, 100, 0.5), StockStatus::LowStock);
        assert_eq!(StockStatus::derive(30, 100, 0.1), StockStatus::InStock);
    }

    #[test]
    fn percent_and_summary() {
        let low = item(5, 55);
        assert_eq!(crate::utils::format::format_percent(low.availability_percent()), "9.1%");

        let items = vec![item(0, 10), low, item(50, 50), item(1, 10)];
        let summary = InventorySummary::from_items(&items, DEFAULT_LOW_STOCK_THRESHOLD);
        assert_eq!(
            summary,
            InventorySummary {
                products: 4,
                out_of_stock: 1,
                low_stock: 2,
            }
        );
    }
}
