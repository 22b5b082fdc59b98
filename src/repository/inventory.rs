use diesel::prelude::*;

use crate::domain::inventory::{InventoryItem, NewInventoryItem, UpdateInventoryItem};
use crate::models::inventory::{
    InventoryItem as DbInventoryItem, NewInventoryItem as DbNewInventoryItem,
    UpdateInventoryItem as DbUpdateInventoryItem,
};
use crate::repository::{
    DieselRepository, InventoryReader, InventoryWriter, errors::RepositoryResult,
};

impl InventoryReader for DieselRepository {
    fn get_inventory_item_by_id(&self, id: i32) -> RepositoryResult<Option<InventoryItem>> {
        use crate::schema::inventory_items;

        let mut conn = self.conn()?;
        let item = inventory_items::table
            .find(id)
            .first::<DbInventoryItem>(&mut conn)
            .optional()?;

        Ok(item.map(Into::into))
    }

    fn list_inventory_items(&self) -> RepositoryResult<Vec<InventoryItem>> {
        use crate::schema::inventory_items;

        let mut conn = self.conn()?;
        let items = inventory_items::table
            .order(inventory_items::name.asc())
            .load::<DbInventoryItem>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn list_low_stock_items(&self) -> RepositoryResult<Vec<InventoryItem>> {
        use crate::schema::inventory_items;

        let mut conn = self.conn()?;
        // The threshold predicate lives on the domain type; the stock list
        // is small enough to filter after loading.
        let items = inventory_items::table
            .filter(inventory_items::active.eq(true))
            .order(inventory_items::name.asc())
            .load::<DbInventoryItem>(&mut conn)?
            .into_iter()
            .map(InventoryItem::from)
            .filter(InventoryItem::is_low_stock)
            .collect();

        Ok(items)
    }
}

impl InventoryWriter for DieselRepository {
    fn create_inventory_item(
        &self,
        new_item: &NewInventoryItem,
    ) -> RepositoryResult<InventoryItem> {
        use crate::schema::inventory_items;

        let mut conn = self.conn()?;
        let insertable: DbNewInventoryItem = new_item.into();
        let created = diesel::insert_into(inventory_items::table)
            .values(&insertable)
            .get_result::<DbInventoryItem>(&mut conn)?;

        Ok(created.into())
    }

    fn update_inventory_item(
        &self,
        item_id: i32,
        updates: &UpdateInventoryItem,
    ) -> RepositoryResult<InventoryItem> {
        use crate::schema::inventory_items;

        let mut conn = self.conn()?;
        let changeset: DbUpdateInventoryItem = updates.into();
        let updated = diesel::update(inventory_items::table.find(item_id))
            .set(&changeset)
            .get_result::<DbInventoryItem>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_inventory_item(&self, item_id: i32) -> RepositoryResult<()> {
        use crate::schema::inventory_items;

        let mut conn = self.conn()?;
        diesel::delete(inventory_items::table.find(item_id)).execute(&mut conn)?;
        Ok(())
    }
}
