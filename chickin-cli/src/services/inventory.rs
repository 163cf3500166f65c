//! Inventory stock status evaluation

use serde::Serialize;

use crate::data::models::InventoryItem;

/// Restocking urgency for a single inventory item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Urgent,
    Warning,
    Normal,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Urgent => "urgent",
            StockStatus::Warning => "warning",
            StockStatus::Normal => "normal",
        }
    }
}

/// Days of stock remaining at the current usage rate
pub fn days_of_runway(item: &InventoryItem) -> f64 {
    item.current_stock / item.usage_rate
}

/// Classify an item's restocking urgency.
///
/// Urgent when the remaining runway is at or below the supplier lead time
/// (the item would run out before a replacement order arrives), warning when
/// stock has fallen below the required minimum, normal otherwise.
pub fn stock_status(item: &InventoryItem) -> StockStatus {
    if days_of_runway(item) <= item.supplier_lead_time {
        StockStatus::Urgent
    } else if item.current_stock < item.min_required {
        StockStatus::Warning
    } else {
        StockStatus::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(current_stock: f64, min_required: f64, usage_rate: f64, lead_time: f64) -> InventoryItem {
        InventoryItem {
            id: 1,
            name: "Chicken Breast".to_string(),
            category: "Proteins".to_string(),
            current_stock,
            min_required,
            optimal_stock: min_required * 2.0,
            usage_rate,
            supplier_lead_time: lead_time,
            last_ordered: "2023-05-15".to_string(),
            price: 4.99,
        }
    }

    #[test]
    fn test_urgent_when_runway_at_lead_time() {
        // 10 units at 5/day is 2 days of runway, equal to the 2-day lead time
        assert_eq!(stock_status(&item(10.0, 15.0, 5.0, 2.0)), StockStatus::Urgent);
    }

    #[test]
    fn test_warning_when_below_minimum_but_runway_ok() {
        // 12 days of runway, but stock is under the required minimum
        assert_eq!(stock_status(&item(12.0, 15.0, 1.0, 3.0)), StockStatus::Warning);
    }

    #[test]
    fn test_normal_when_stocked() {
        assert_eq!(stock_status(&item(40.0, 15.0, 2.0, 3.0)), StockStatus::Normal);
    }

    #[test]
    fn test_zero_usage_rate_never_urgent() {
        // Infinite runway; still warns if under the minimum
        assert_eq!(stock_status(&item(10.0, 15.0, 0.0, 2.0)), StockStatus::Warning);
        assert_eq!(stock_status(&item(20.0, 15.0, 0.0, 2.0)), StockStatus::Normal);
    }
}
