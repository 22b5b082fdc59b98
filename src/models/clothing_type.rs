//! Diesel models for clothing types and their per-service price overrides.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::clothing_type::ClothingType as DomainClothingType;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::clothing_types)]
pub struct ClothingType {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clothing_types)]
pub struct NewClothingType<'a> {
    pub name: &'a str,
}

/// One override row. A NULL price means the row exists but falls back to the
/// service base price; it is kept so edits can round-trip the full form.
#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = crate::schema::clothing_type_prices)]
pub struct ClothingTypePrice {
    pub clothing_type_id: i32,
    pub service_id: i32,
    pub price: Option<i64>,
}

impl ClothingType {
    pub fn into_domain(self, prices: Vec<ClothingTypePrice>) -> DomainClothingType {
        let pricing: HashMap<i32, Option<i64>> = prices
            .into_iter()
            .map(|row| (row.service_id, row.price))
            .collect();
        DomainClothingType {
            id: self.id,
            name: self.name,
            pricing,
            created_at: self.created_at,
        }
    }
}
