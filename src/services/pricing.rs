//! Catalog price resolution.

use crate::domain::clothing_type::ClothingType;
use crate::domain::service::Service;

/// Unit price to charge for a clothing-type/service pair.
///
/// An override entry with a value wins, zero included; a missing entry or
/// an explicit null falls back to the service base price.
pub fn resolve_unit_price(service: &Service, clothing_type: &ClothingType) -> i64 {
    clothing_type
        .override_for(service.id)
        .unwrap_or(service.base_price)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use chrono::Utc;

    fn service(id: i32, base_price: i64) -> Service {
        Service {
            id,
            name: "Dry cleaning".to_string(),
            base_price,
            consumables: vec![],
            created_at: Utc::now().naive_utc(),
        }
    }

    fn clothing_type(pricing: HashMap<i32, Option<i64>>) -> ClothingType {
        ClothingType {
            id: 1,
            name: "Shirt".to_string(),
            pricing,
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn falls_back_to_base_price_without_an_entry() {
        let resolved = resolve_unit_price(&service(7, 5000), &clothing_type(HashMap::new()));
        assert_eq!(resolved, 5000);
    }

    #[test]
    fn falls_back_to_base_price_on_null_entry() {
        let ct = clothing_type(HashMap::from([(7, None)]));
        assert_eq!(resolve_unit_price(&service(7, 5000), &ct), 5000);
    }

    #[test]
    fn zero_override_means_free_not_unset() {
        let ct = clothing_type(HashMap::from([(7, Some(0))]));
        assert_eq!(resolve_unit_price(&service(7, 5000), &ct), 0);
    }

    #[test]
    fn override_wins_over_base_price() {
        let ct = clothing_type(HashMap::from([(7, Some(8000))]));
        assert_eq!(resolve_unit_price(&service(7, 5000), &ct), 8000);
    }
}
