use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::invoice::{DraftItem, InvoiceDraft};

#[derive(Deserialize, Validate)]
pub struct CreateInvoicePayload {
    pub customer_id: i32,
    #[validate(length(min = 1))]
    pub items: Vec<InvoiceItemPayload>,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub discount: i64,
    pub pickup_date: Option<NaiveDate>,
}

// Serialize is needed by the length check on `items`, which captures the
// offending value in its validation error.
#[derive(Deserialize, Serialize)]
pub struct InvoiceItemPayload {
    pub clothing_type_id: i32,
    pub service_id: i32,
    pub quantity: f64,
}

impl From<&CreateInvoicePayload> for InvoiceDraft {
    fn from(payload: &CreateInvoicePayload) -> Self {
        Self {
            customer_id: payload.customer_id,
            items: payload
                .items
                .iter()
                .map(|item| DraftItem {
                    clothing_type_id: item.clothing_type_id,
                    service_id: item.service_id,
                    quantity: item.quantity,
                })
                .collect(),
            discount: payload.discount,
            pickup_date: payload.pickup_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(items: Vec<InvoiceItemPayload>, discount: i64) -> CreateInvoicePayload {
        CreateInvoicePayload {
            customer_id: 1,
            items,
            discount,
            pickup_date: None,
        }
    }

    #[test]
    fn rejects_an_empty_item_list() {
        assert!(payload(vec![], 0).validate().is_err());
    }

    #[test]
    fn rejects_a_negative_discount() {
        let items = vec![InvoiceItemPayload {
            clothing_type_id: 1,
            service_id: 2,
            quantity: 1.0,
        }];
        assert!(payload(items, -500).validate().is_err());
    }

    #[test]
    fn accepts_a_priced_line() {
        let items = vec![InvoiceItemPayload {
            clothing_type_id: 1,
            service_id: 2,
            quantity: 2.5,
        }];
        assert!(payload(items, 0).validate().is_ok());
    }
}
