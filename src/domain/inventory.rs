use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    pub id: i32,
    pub name: String,
    /// Stock on hand; fractional for items tracked by weight or volume.
    pub quantity: f64,
    pub unit: String,
    pub reorder_level: Option<f64>,
    pub active: bool,
}

impl InventoryItem {
    /// True when the item is active and stock has fallen to or below the
    /// configured reorder level.
    pub fn is_low_stock(&self) -> bool {
        self.active
            && self
                .reorder_level
                .is_some_and(|level| self.quantity <= level)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewInventoryItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub reorder_level: Option<f64>,
}

impl NewInventoryItem {
    #[must_use]
    pub fn new(name: String, quantity: f64, unit: String, reorder_level: Option<f64>) -> Self {
        Self {
            name: name.trim().to_string(),
            quantity,
            unit: unit.trim().to_string(),
            reorder_level,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateInventoryItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub reorder_level: Option<f64>,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: f64, reorder_level: Option<f64>, active: bool) -> InventoryItem {
        InventoryItem {
            id: 1,
            name: "Detergent".to_string(),
            quantity,
            unit: "l".to_string(),
            reorder_level,
            active,
        }
    }

    #[test]
    fn low_stock_requires_a_threshold() {
        assert!(!item(0.0, None, true).is_low_stock());
        assert!(item(2.0, Some(5.0), true).is_low_stock());
        assert!(!item(6.0, Some(5.0), true).is_low_stock());
    }

    #[test]
    fn inactive_items_are_never_low_stock() {
        assert!(!item(0.0, Some(5.0), false).is_low_stock());
    }
}
