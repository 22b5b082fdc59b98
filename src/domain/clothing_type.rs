use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A garment category carrying per-service price overrides.
///
/// The pricing map is keyed by service id. A missing key or an explicit
/// `None` both mean "charge the service base price"; `Some(0)` is a real
/// price, not an unset entry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClothingType {
    pub id: i32,
    pub name: String,
    pub pricing: HashMap<i32, Option<i64>>,
    pub created_at: NaiveDateTime,
}

impl ClothingType {
    /// Returns the override price for a service, if one is actually set.
    pub fn override_for(&self, service_id: i32) -> Option<i64> {
        self.pricing.get(&service_id).copied().flatten()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewClothingType {
    pub name: String,
    pub pricing: HashMap<i32, Option<i64>>,
}

impl NewClothingType {
    #[must_use]
    pub fn new(name: String, pricing: HashMap<i32, Option<i64>>) -> Self {
        Self {
            name: name.trim().to_string(),
            pricing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clothing_type(pricing: HashMap<i32, Option<i64>>) -> ClothingType {
        ClothingType {
            id: 1,
            name: "Suit".to_string(),
            pricing,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn missing_entry_yields_no_override() {
        let ct = clothing_type(HashMap::new());
        assert_eq!(ct.override_for(7), None);
    }

    #[test]
    fn null_entry_yields_no_override() {
        let ct = clothing_type(HashMap::from([(7, None)]));
        assert_eq!(ct.override_for(7), None);
    }

    #[test]
    fn zero_entry_is_a_real_override() {
        let ct = clothing_type(HashMap::from([(7, Some(0))]));
        assert_eq!(ct.override_for(7), Some(0));
    }
}
