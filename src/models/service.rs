//! Diesel models for the service catalog and its consumable links.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::service::{Consumable, Service as DomainService};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::services)]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub base_price: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::services)]
pub struct NewService<'a> {
    pub name: &'a str,
    pub base_price: i64,
}

#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = crate::schema::service_consumables)]
pub struct ServiceConsumable {
    pub service_id: i32,
    pub inventory_item_id: i32,
    pub quantity: f64,
}

impl Service {
    /// Assemble the domain aggregate from the header row and its consumable
    /// rows.
    pub fn into_domain(self, consumables: Vec<ServiceConsumable>) -> DomainService {
        DomainService {
            id: self.id,
            name: self.name,
            base_price: self.base_price,
            consumables: consumables.into_iter().map(Into::into).collect(),
            created_at: self.created_at,
        }
    }
}

impl From<ServiceConsumable> for Consumable {
    fn from(row: ServiceConsumable) -> Self {
        Self {
            inventory_item_id: row.inventory_item_id,
            quantity: row.quantity,
        }
    }
}
