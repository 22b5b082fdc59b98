use diesel::prelude::*;

use crate::domain::inventory::{
    InventoryItem as DomainInventoryItem, NewInventoryItem as DomainNewInventoryItem,
    UpdateInventoryItem as DomainUpdateInventoryItem,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::inventory_items)]
pub struct InventoryItem {
    pub id: i32,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub reorder_level: Option<f64>,
    pub active: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::inventory_items)]
pub struct NewInventoryItem<'a> {
    pub name: &'a str,
    pub quantity: f64,
    pub unit: &'a str,
    pub reorder_level: Option<f64>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::inventory_items)]
pub struct UpdateInventoryItem<'a> {
    pub name: &'a str,
    pub quantity: f64,
    pub unit: &'a str,
    pub reorder_level: Option<Option<f64>>,
    pub active: bool,
}

impl From<InventoryItem> for DomainInventoryItem {
    fn from(item: InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
            unit: item.unit,
            reorder_level: item.reorder_level,
            active: item.active,
        }
    }
}

impl<'a> From<&'a DomainNewInventoryItem> for NewInventoryItem<'a> {
    fn from(item: &'a DomainNewInventoryItem) -> Self {
        Self {
            name: item.name.as_str(),
            quantity: item.quantity,
            unit: item.unit.as_str(),
            reorder_level: item.reorder_level,
        }
    }
}

impl<'a> From<&'a DomainUpdateInventoryItem> for UpdateInventoryItem<'a> {
    fn from(item: &'a DomainUpdateInventoryItem) -> Self {
        Self {
            name: item.name.as_str(),
            quantity: item.quantity,
            unit: item.unit.as_str(),
            reorder_level: Some(item.reorder_level),
            active: item.active,
        }
    }
}
