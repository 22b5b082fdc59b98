//! Diesel models for invoices and their snapshot-priced line items.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::invoice::{Invoice as DomainInvoice, LineItem as DomainLineItem, PaymentStatus};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::invoices)]
pub struct Invoice {
    pub id: i32,
    pub customer_id: i32,
    pub discount: i64,
    pub subtotal: i64,
    pub total: i64,
    pub payment_status: String,
    pub executed: bool,
    pub pickup_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::invoices)]
pub struct NewInvoice {
    pub customer_id: i32,
    pub discount: i64,
    pub subtotal: i64,
    pub total: i64,
    pub payment_status: String,
    pub pickup_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Invoice, foreign_key = invoice_id))]
#[diesel(table_name = crate::schema::invoice_items)]
pub struct InvoiceItem {
    pub id: i32,
    pub invoice_id: i32,
    pub clothing_type_id: i32,
    pub service_id: i32,
    pub quantity: f64,
    pub unit_price: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::invoice_items)]
pub struct NewInvoiceItem {
    pub invoice_id: i32,
    pub clothing_type_id: i32,
    pub service_id: i32,
    pub quantity: f64,
    pub unit_price: i64,
}

impl Invoice {
    pub fn into_domain(self, items: Vec<InvoiceItem>) -> DomainInvoice {
        DomainInvoice {
            id: self.id,
            customer_id: self.customer_id,
            items: items.into_iter().map(Into::into).collect(),
            discount: self.discount,
            subtotal: self.subtotal,
            total: self.total,
            payment_status: PaymentStatus::from(self.payment_status.as_str()),
            executed: self.executed,
            pickup_date: self.pickup_date,
            created_at: self.created_at,
        }
    }
}

impl From<InvoiceItem> for DomainLineItem {
    fn from(item: InvoiceItem) -> Self {
        Self {
            id: item.id,
            clothing_type_id: item.clothing_type_id,
            service_id: item.service_id,
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}
