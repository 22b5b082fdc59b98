use std::collections::HashMap;

use diesel::prelude::*;

use crate::domain::service::{NewService, Service};
use crate::models::service::{
    NewService as DbNewService, Service as DbService, ServiceConsumable,
};
use crate::repository::{
    DieselRepository, ServiceReader, ServiceWriter,
    errors::{RepositoryError, RepositoryResult},
};

fn consumable_rows(service_id: i32, new_service: &NewService) -> Vec<ServiceConsumable> {
    new_service
        .consumables
        .iter()
        .map(|c| ServiceConsumable {
            service_id,
            inventory_item_id: c.inventory_item_id,
            quantity: c.quantity,
        })
        .collect()
}

impl ServiceReader for DieselRepository {
    fn get_service_by_id(&self, id: i32) -> RepositoryResult<Option<Service>> {
        use crate::schema::{service_consumables, services};

        let mut conn = self.conn()?;
        let service = services::table
            .find(id)
            .first::<DbService>(&mut conn)
            .optional()?;

        let Some(service) = service else {
            return Ok(None);
        };

        let consumables = service_consumables::table
            .filter(service_consumables::service_id.eq(id))
            .load::<ServiceConsumable>(&mut conn)?;

        Ok(Some(service.into_domain(consumables)))
    }

    fn list_services(&self) -> RepositoryResult<Vec<Service>> {
        use crate::schema::{service_consumables, services};

        let mut conn = self.conn()?;
        let rows = services::table
            .order(services::name.asc())
            .load::<DbService>(&mut conn)?;

        let mut consumables_by_service: HashMap<i32, Vec<ServiceConsumable>> = HashMap::new();
        for row in service_consumables::table.load::<ServiceConsumable>(&mut conn)? {
            consumables_by_service
                .entry(row.service_id)
                .or_default()
                .push(row);
        }

        Ok(rows
            .into_iter()
            .map(|service| {
                let consumables = consumables_by_service
                    .remove(&service.id)
                    .unwrap_or_default();
                service.into_domain(consumables)
            })
            .collect())
    }
}

impl ServiceWriter for DieselRepository {
    fn create_service(&self, new_service: &NewService) -> RepositoryResult<Service> {
        use crate::schema::{service_consumables, services};

        let mut conn = self.conn()?;
        conn.transaction::<Service, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(services::table)
                .values(&DbNewService {
                    name: new_service.name.as_str(),
                    base_price: new_service.base_price,
                })
                .get_result::<DbService>(conn)?;

            let rows = consumable_rows(created.id, new_service);
            diesel::insert_into(service_consumables::table)
                .values(&rows)
                .execute(conn)?;

            Ok(created.into_domain(rows))
        })
    }

    fn update_service(&self, service_id: i32, updates: &NewService) -> RepositoryResult<Service> {
        use crate::schema::{service_consumables, services};

        let mut conn = self.conn()?;
        conn.transaction::<Service, RepositoryError, _>(|conn| {
            let updated = diesel::update(services::table.find(service_id))
                .set(&DbNewService {
                    name: updates.name.as_str(),
                    base_price: updates.base_price,
                })
                .get_result::<DbService>(conn)?;

            diesel::delete(
                service_consumables::table
                    .filter(service_consumables::service_id.eq(service_id)),
            )
            .execute(conn)?;

            let rows = consumable_rows(service_id, updates);
            diesel::insert_into(service_consumables::table)
                .values(&rows)
                .execute(conn)?;

            Ok(updated.into_domain(rows))
        })
    }

    fn delete_service(&self, service_id: i32) -> RepositoryResult<()> {
        use crate::schema::{clothing_type_prices, invoice_items, service_consumables, services};

        let mut conn = self.conn()?;
        conn.transaction::<(), RepositoryError, _>(|conn| {
            let referenced_by_items: i64 = invoice_items::table
                .filter(invoice_items::service_id.eq(service_id))
                .count()
                .get_result(conn)?;
            if referenced_by_items > 0 {
                return Err(RepositoryError::Conflict(
                    "Service is referenced by existing invoices".to_string(),
                ));
            }

            diesel::delete(
                clothing_type_prices::table
                    .filter(clothing_type_prices::service_id.eq(service_id)),
            )
            .execute(conn)?;
            diesel::delete(
                service_consumables::table
                    .filter(service_consumables::service_id.eq(service_id)),
            )
            .execute(conn)?;
            diesel::delete(services::table.find(service_id)).execute(conn)?;
            Ok(())
        })
    }
}
