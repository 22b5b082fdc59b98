use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::domain::invoice::{Invoice, LineItem, PaymentStatus};

/// Invoice as shown to clients. The total is clamped at zero for display;
/// the raw value stays in storage for audit.
#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub id: i32,
    pub customer_id: i32,
    pub items: Vec<LineItem>,
    pub discount: i64,
    pub subtotal: i64,
    pub total: i64,
    pub payment_status: PaymentStatus,
    pub executed: bool,
    pub pickup_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        let total = invoice.display_total();
        Self {
            id: invoice.id,
            customer_id: invoice.customer_id,
            items: invoice.items,
            discount: invoice.discount,
            subtotal: invoice.subtotal,
            total,
            payment_status: invoice.payment_status,
            executed: invoice.executed,
            pickup_date: invoice.pickup_date,
            created_at: invoice.created_at,
        }
    }
}

/// Paged invoice listing.
#[derive(Debug, Serialize)]
pub struct InvoiceListResponse {
    pub total: usize,
    pub invoices: Vec<InvoiceResponse>,
}
