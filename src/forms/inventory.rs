use serde::Deserialize;
use validator::Validate;

use crate::domain::inventory::{NewInventoryItem, UpdateInventoryItem};

#[derive(Deserialize, Validate)]
pub struct AddInventoryItemForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub quantity: f64,
    #[validate(length(min = 1))]
    pub unit: String,
    pub reorder_level: Option<f64>,
}

#[derive(Deserialize, Validate)]
pub struct UpdateInventoryItemForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub quantity: f64,
    #[validate(length(min = 1))]
    pub unit: String,
    pub reorder_level: Option<f64>,
    pub active: bool,
}

impl From<&AddInventoryItemForm> for NewInventoryItem {
    fn from(form: &AddInventoryItemForm) -> Self {
        NewInventoryItem::new(
            form.name.clone(),
            form.quantity,
            form.unit.clone(),
            form.reorder_level,
        )
    }
}

impl From<&UpdateInventoryItemForm> for UpdateInventoryItem {
    fn from(form: &UpdateInventoryItemForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            quantity: form.quantity,
            unit: form.unit.trim().to_string(),
            reorder_level: form.reorder_level,
            active: form.active,
        }
    }
}
