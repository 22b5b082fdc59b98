use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A billable dry-cleaning operation with a base unit price and the
/// inventory consumed per execution unit.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub id: i32,
    pub name: String,
    /// Whole-currency-unit price charged when no clothing-type override applies.
    pub base_price: i64,
    pub consumables: Vec<Consumable>,
    pub created_at: NaiveDateTime,
}

/// Inventory quantity consumed per unit of service executed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Consumable {
    pub inventory_item_id: i32,
    pub quantity: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewService {
    pub name: String,
    pub base_price: i64,
    pub consumables: Vec<Consumable>,
}

impl NewService {
    #[must_use]
    pub fn new(name: String, base_price: i64, consumables: Vec<Consumable>) -> Self {
        Self {
            name: name.trim().to_string(),
            base_price,
            consumables: consumables.into_iter().filter(|c| c.quantity > 0.0).collect(),
        }
    }
}
