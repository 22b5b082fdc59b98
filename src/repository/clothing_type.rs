use std::collections::HashMap;

use diesel::prelude::*;

use crate::domain::clothing_type::{ClothingType, NewClothingType};
use crate::models::clothing_type::{
    ClothingType as DbClothingType, ClothingTypePrice, NewClothingType as DbNewClothingType,
};
use crate::repository::{
    ClothingTypeReader, ClothingTypeWriter, DieselRepository,
    errors::{RepositoryError, RepositoryResult},
};

fn price_rows(clothing_type_id: i32, new_type: &NewClothingType) -> Vec<ClothingTypePrice> {
    new_type
        .pricing
        .iter()
        .map(|(&service_id, &price)| ClothingTypePrice {
            clothing_type_id,
            service_id,
            price,
        })
        .collect()
}

impl ClothingTypeReader for DieselRepository {
    fn get_clothing_type_by_id(&self, id: i32) -> RepositoryResult<Option<ClothingType>> {
        use crate::schema::{clothing_type_prices, clothing_types};

        let mut conn = self.conn()?;
        let clothing_type = clothing_types::table
            .find(id)
            .first::<DbClothingType>(&mut conn)
            .optional()?;

        let Some(clothing_type) = clothing_type else {
            return Ok(None);
        };

        let prices = clothing_type_prices::table
            .filter(clothing_type_prices::clothing_type_id.eq(id))
            .load::<ClothingTypePrice>(&mut conn)?;

        Ok(Some(clothing_type.into_domain(prices)))
    }

    fn list_clothing_types(&self) -> RepositoryResult<Vec<ClothingType>> {
        use crate::schema::{clothing_type_prices, clothing_types};

        let mut conn = self.conn()?;
        let rows = clothing_types::table
            .order(clothing_types::name.asc())
            .load::<DbClothingType>(&mut conn)?;

        let mut prices_by_type: HashMap<i32, Vec<ClothingTypePrice>> = HashMap::new();
        for row in clothing_type_prices::table.load::<ClothingTypePrice>(&mut conn)? {
            prices_by_type
                .entry(row.clothing_type_id)
                .or_default()
                .push(row);
        }

        Ok(rows
            .into_iter()
            .map(|clothing_type| {
                let prices = prices_by_type
                    .remove(&clothing_type.id)
                    .unwrap_or_default();
                clothing_type.into_domain(prices)
            })
            .collect())
    }
}

impl ClothingTypeWriter for DieselRepository {
    fn create_clothing_type(&self, new_type: &NewClothingType) -> RepositoryResult<ClothingType> {
        use crate::schema::{clothing_type_prices, clothing_types};

        let mut conn = self.conn()?;
        conn.transaction::<ClothingType, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(clothing_types::table)
                .values(&DbNewClothingType {
                    name: new_type.name.as_str(),
                })
                .get_result::<DbClothingType>(conn)?;

            let rows = price_rows(created.id, new_type);
            diesel::insert_into(clothing_type_prices::table)
                .values(&rows)
                .execute(conn)?;

            Ok(created.into_domain(rows))
        })
    }

    fn update_clothing_type(
        &self,
        clothing_type_id: i32,
        updates: &NewClothingType,
    ) -> RepositoryResult<ClothingType> {
        use crate::schema::{clothing_type_prices, clothing_types};

        let mut conn = self.conn()?;
        conn.transaction::<ClothingType, RepositoryError, _>(|conn| {
            let updated = diesel::update(clothing_types::table.find(clothing_type_id))
                .set(clothing_types::name.eq(updates.name.as_str()))
                .get_result::<DbClothingType>(conn)?;

            diesel::delete(
                clothing_type_prices::table
                    .filter(clothing_type_prices::clothing_type_id.eq(clothing_type_id)),
            )
            .execute(conn)?;

            let rows = price_rows(clothing_type_id, updates);
            diesel::insert_into(clothing_type_prices::table)
                .values(&rows)
                .execute(conn)?;

            Ok(updated.into_domain(rows))
        })
    }

    fn delete_clothing_type(&self, clothing_type_id: i32) -> RepositoryResult<()> {
        use crate::schema::{clothing_type_prices, clothing_types, invoice_items};

        let mut conn = self.conn()?;
        conn.transaction::<(), RepositoryError, _>(|conn| {
            let referenced_by_items: i64 = invoice_items::table
                .filter(invoice_items::clothing_type_id.eq(clothing_type_id))
                .count()
                .get_result(conn)?;
            if referenced_by_items > 0 {
                return Err(RepositoryError::Conflict(
                    "Clothing type is referenced by existing invoices".to_string(),
                ));
            }

            diesel::delete(
                clothing_type_prices::table
                    .filter(clothing_type_prices::clothing_type_id.eq(clothing_type_id)),
            )
            .execute(conn)?;
            diesel::delete(clothing_types::table.find(clothing_type_id)).execute(conn)?;
            Ok(())
        })
    }
}
