use std::collections::HashMap;

use diesel::prelude::*;

use crate::domain::invoice::{Invoice, NewInvoice, PaymentStatus};
use crate::models::invoice::{
    Invoice as DbInvoice, InvoiceItem as DbInvoiceItem, NewInvoice as DbNewInvoice, NewInvoiceItem,
};
use crate::models::service::ServiceConsumable;
use crate::repository::{
    DieselRepository, InvoiceListQuery, InvoiceReader, InvoiceWriter,
    errors::{RepositoryError, RepositoryResult},
};

impl InvoiceReader for DieselRepository {
    fn get_invoice_by_id(&self, id: i32) -> RepositoryResult<Option<Invoice>> {
        use crate::schema::{invoice_items, invoices};

        let mut conn = self.conn()?;
        let invoice = invoices::table
            .find(id)
            .first::<DbInvoice>(&mut conn)
            .optional()?;

        let Some(invoice) = invoice else {
            return Ok(None);
        };

        let items = invoice_items::table
            .filter(invoice_items::invoice_id.eq(id))
            .load::<DbInvoiceItem>(&mut conn)?;

        Ok(Some(invoice.into_domain(items)))
    }

    fn list_invoices(&self, query: InvoiceListQuery) -> RepositoryResult<(usize, Vec<Invoice>)> {
        use crate::schema::invoices;

        let mut conn = self.conn()?;
        let mut statement = invoices::table.into_boxed();
        let mut count_statement = invoices::table.into_boxed();

        if let Some(customer_id) = query.customer_id {
            statement = statement.filter(invoices::customer_id.eq(customer_id));
            count_statement = count_statement.filter(invoices::customer_id.eq(customer_id));
        }
        if let Some(status) = query.payment_status {
            statement = statement.filter(invoices::payment_status.eq(status.to_string()));
            count_statement = count_statement.filter(invoices::payment_status.eq(status.to_string()));
        }

        let total: i64 = count_statement.count().get_result(&mut conn)?;

        statement = statement.order(invoices::created_at.desc());
        if let Some(pagination) = query.pagination {
            let page = pagination.page.max(1) as i64;
            let per_page = pagination.per_page as i64;
            statement = statement.limit(per_page).offset((page - 1) * per_page);
        }

        let headers = statement.load::<DbInvoice>(&mut conn)?;
        let items = DbInvoiceItem::belonging_to(&headers)
            .load::<DbInvoiceItem>(&mut conn)?
            .grouped_by(&headers);

        let invoices = headers
            .into_iter()
            .zip(items)
            .map(|(header, items)| header.into_domain(items))
            .collect();

        Ok((total as usize, invoices))
    }
}

impl InvoiceWriter for DieselRepository {
    fn create_invoice(&self, new_invoice: &NewInvoice) -> RepositoryResult<Invoice> {
        use crate::schema::{invoice_items, invoices};

        let mut conn = self.conn()?;
        conn.transaction::<Invoice, RepositoryError, _>(|conn| {
            let header = diesel::insert_into(invoices::table)
                .values(&DbNewInvoice {
                    customer_id: new_invoice.customer_id,
                    discount: new_invoice.discount,
                    subtotal: new_invoice.subtotal,
                    total: new_invoice.total,
                    payment_status: PaymentStatus::Pending.to_string(),
                    pickup_date: new_invoice.pickup_date,
                    created_at: new_invoice.created_at,
                })
                .get_result::<DbInvoice>(conn)?;

            let rows: Vec<NewInvoiceItem> = new_invoice
                .items
                .iter()
                .map(|item| NewInvoiceItem {
                    invoice_id: header.id,
                    clothing_type_id: item.clothing_type_id,
                    service_id: item.service_id,
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                })
                .collect();
            diesel::insert_into(invoice_items::table)
                .values(&rows)
                .execute(conn)?;

            let items = invoice_items::table
                .filter(invoice_items::invoice_id.eq(header.id))
                .load::<DbInvoiceItem>(conn)?;

            Ok(header.into_domain(items))
        })
    }

    fn mark_invoice_paid(&self, invoice_id: i32) -> RepositoryResult<Invoice> {
        use crate::schema::{invoice_items, invoices};

        let mut conn = self.conn()?;
        // Guarded update so a repeat call cannot silently succeed twice.
        let affected = diesel::update(
            invoices::table
                .find(invoice_id)
                .filter(invoices::payment_status.eq(PaymentStatus::Pending.to_string())),
        )
        .set(invoices::payment_status.eq(PaymentStatus::Paid.to_string()))
        .execute(&mut conn)?;

        if affected == 0 {
            let exists = invoices::table
                .find(invoice_id)
                .first::<DbInvoice>(&mut conn)
                .optional()?;
            return match exists {
                None => Err(RepositoryError::NotFound),
                Some(_) => Err(RepositoryError::Conflict(
                    "Invoice is already paid".to_string(),
                )),
            };
        }

        let header = invoices::table
            .find(invoice_id)
            .first::<DbInvoice>(&mut conn)?;
        let items = invoice_items::table
            .filter(invoice_items::invoice_id.eq(invoice_id))
            .load::<DbInvoiceItem>(&mut conn)?;

        Ok(header.into_domain(items))
    }

    fn execute_invoice(&self, invoice_id: i32) -> RepositoryResult<Invoice> {
        use crate::schema::{inventory_items, invoice_items, invoices, service_consumables};

        let mut conn = self.conn()?;
        // The whole deduction runs in one immediate transaction: a stock
        // shortfall anywhere rolls every deduction back.
        conn.immediate_transaction::<Invoice, RepositoryError, _>(|conn| {
            let header = invoices::table
                .find(invoice_id)
                .first::<DbInvoice>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            if header.executed {
                return Err(RepositoryError::Conflict(
                    "Invoice services have already been executed".to_string(),
                ));
            }

            let items = invoice_items::table
                .filter(invoice_items::invoice_id.eq(invoice_id))
                .load::<DbInvoiceItem>(conn)?;

            let service_ids: Vec<i32> = items.iter().map(|item| item.service_id).collect();
            let consumables = service_consumables::table
                .filter(service_consumables::service_id.eq_any(&service_ids))
                .load::<ServiceConsumable>(conn)?;

            // Total demand per inventory item, scaled by line quantity.
            let mut demand: HashMap<i32, f64> = HashMap::new();
            for item in &items {
                for consumable in consumables
                    .iter()
                    .filter(|c| c.service_id == item.service_id)
                {
                    *demand.entry(consumable.inventory_item_id).or_default() +=
                        consumable.quantity * item.quantity;
                }
            }

            for (inventory_item_id, needed) in &demand {
                let stock: f64 = inventory_items::table
                    .find(inventory_item_id)
                    .select(inventory_items::quantity)
                    .first(conn)?;

                if stock < *needed {
                    return Err(RepositoryError::Conflict(format!(
                        "Insufficient stock for inventory item {inventory_item_id}: \
                         need {needed}, have {stock}"
                    )));
                }

                diesel::update(inventory_items::table.find(inventory_item_id))
                    .set(inventory_items::quantity.eq(stock - needed))
                    .execute(conn)?;
            }

            let header = diesel::update(invoices::table.find(invoice_id))
                .set(invoices::executed.eq(true))
                .get_result::<DbInvoice>(conn)?;

            Ok(header.into_domain(items))
        })
    }
}
