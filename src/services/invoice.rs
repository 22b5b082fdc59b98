//! Invoice creation, totals, and the payment/execution transitions.

use chrono::{NaiveDate, Utc};

use crate::domain::invoice::{Invoice, NewInvoice, NewLineItem};
use crate::repository::{
    ClothingTypeReader, CustomerReader, InvoiceListQuery, InvoiceReader, InvoiceWriter,
    ServiceReader,
};
use crate::services::{ServiceError, ServiceResult, pricing};

/// Unpriced invoice request as submitted by the counter.
#[derive(Clone, Debug)]
pub struct InvoiceDraft {
    pub customer_id: i32,
    pub items: Vec<DraftItem>,
    pub discount: i64,
    pub pickup_date: Option<NaiveDate>,
}

#[derive(Clone, Debug)]
pub struct DraftItem {
    pub clothing_type_id: i32,
    pub service_id: i32,
    pub quantity: f64,
}

/// Subtotal and raw total for a set of priced lines.
pub fn totals(items: &[NewLineItem], discount: i64) -> (i64, i64) {
    let subtotal: i64 = items.iter().map(NewLineItem::line_total).sum();
    (subtotal, subtotal - discount)
}

/// Prices every line against the catalog, computes totals, and persists the
/// invoice with its unit prices snapshotted at this moment.
pub fn create_invoice<R>(repo: &R, draft: &InvoiceDraft) -> ServiceResult<Invoice>
where
    R: CustomerReader + ServiceReader + ClothingTypeReader + InvoiceWriter + ?Sized,
{
    if draft.items.is_empty() {
        return Err(ServiceError::Validation(
            "An invoice needs at least one item".to_string(),
        ));
    }
    if draft.discount < 0 {
        return Err(ServiceError::Validation(
            "Discount cannot be negative".to_string(),
        ));
    }

    repo.get_customer_by_id(draft.customer_id)?
        .ok_or_else(|| ServiceError::NotFound(format!("Customer {} not found", draft.customer_id)))?;

    let mut items = Vec::with_capacity(draft.items.len());
    for draft_item in &draft.items {
        if draft_item.quantity <= 0.0 {
            return Err(ServiceError::Validation(
                "Item quantity must be positive".to_string(),
            ));
        }

        let service = repo.get_service_by_id(draft_item.service_id)?.ok_or_else(|| {
            ServiceError::NotFound(format!("Service {} not found", draft_item.service_id))
        })?;
        let clothing_type = repo
            .get_clothing_type_by_id(draft_item.clothing_type_id)?
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "Clothing type {} not found",
                    draft_item.clothing_type_id
                ))
            })?;

        items.push(NewLineItem {
            clothing_type_id: clothing_type.id,
            service_id: service.id,
            quantity: draft_item.quantity,
            unit_price: pricing::resolve_unit_price(&service, &clothing_type),
        });
    }

    let (subtotal, total) = totals(&items, draft.discount);
    let new_invoice = NewInvoice {
        customer_id: draft.customer_id,
        items,
        discount: draft.discount,
        pickup_date: draft.pickup_date,
        subtotal,
        total,
        created_at: Utc::now().naive_utc(),
    };

    Ok(repo.create_invoice(&new_invoice)?)
}

pub fn get_invoice<R>(repo: &R, invoice_id: i32) -> ServiceResult<Invoice>
where
    R: InvoiceReader + ?Sized,
{
    repo.get_invoice_by_id(invoice_id)?
        .ok_or_else(|| ServiceError::NotFound(format!("Invoice {invoice_id} not found")))
}

pub fn list_invoices<R>(repo: &R, query: InvoiceListQuery) -> ServiceResult<(usize, Vec<Invoice>)>
where
    R: InvoiceReader + ?Sized,
{
    Ok(repo.list_invoices(query)?)
}

/// PENDING -> PAID. A second call surfaces as a conflict.
pub fn mark_paid<R>(repo: &R, invoice_id: i32) -> ServiceResult<Invoice>
where
    R: InvoiceWriter + ?Sized,
{
    Ok(repo.mark_invoice_paid(invoice_id)?)
}

/// Deducts consumable inventory for every line item, all-or-nothing, and
/// flips the executed flag.
pub fn execute<R>(repo: &R, invoice_id: i32) -> ServiceResult<Invoice>
where
    R: InvoiceWriter + ?Sized,
{
    Ok(repo.execute_invoice(invoice_id)?)
}
