use serde::Deserialize;
use validator::Validate;

use crate::domain::service::{Consumable, NewService};

#[derive(Deserialize, Validate)]
/// Payload shared by service create and update.
pub struct SaveServiceForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0))]
    pub base_price: i64,
    #[serde(default)]
    pub consumables: Vec<ConsumableForm>,
}

#[derive(Deserialize)]
pub struct ConsumableForm {
    pub inventory_item_id: i32,
    pub quantity: f64,
}

impl From<&SaveServiceForm> for NewService {
    fn from(form: &SaveServiceForm) -> Self {
        let consumables = form
            .consumables
            .iter()
            .map(|c| Consumable {
                inventory_item_id: c.inventory_item_id,
                quantity: c.quantity,
            })
            .collect();
        NewService::new(form.name.clone(), form.base_price, consumables)
    }
}
