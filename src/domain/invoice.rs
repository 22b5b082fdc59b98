use std::fmt::Display;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Payment state of an invoice. Orthogonal to the `executed` flag.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "PAID")]
    Paid,
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "PENDING"),
            PaymentStatus::Paid => write!(f, "PAID"),
        }
    }
}

impl From<&str> for PaymentStatus {
    fn from(s: &str) -> Self {
        match s {
            "PAID" => PaymentStatus::Paid,
            _ => PaymentStatus::Pending,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: i32,
    pub customer_id: i32,
    pub items: Vec<LineItem>,
    /// Flat discount in whole currency units, never negative.
    pub discount: i64,
    pub subtotal: i64,
    /// Raw `subtotal - discount`; kept unclamped for audit. Use
    /// [`Invoice::display_total`] for anything user-facing.
    pub total: i64,
    pub payment_status: PaymentStatus,
    /// Whether consumable deduction has run for this invoice.
    pub executed: bool,
    pub pickup_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

impl Invoice {
    /// User-facing total, clamped at zero when the discount exceeds the
    /// subtotal.
    pub fn display_total(&self) -> i64 {
        self.total.max(0)
    }
}

/// A priced invoice line. The unit price is a snapshot taken at invoice
/// creation time; later catalog edits never alter it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub id: i32,
    pub clothing_type_id: i32,
    pub service_id: i32,
    pub quantity: f64,
    pub unit_price: i64,
}

impl LineItem {
    pub fn line_total(&self) -> i64 {
        line_total(self.unit_price, self.quantity)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewInvoice {
    pub customer_id: i32,
    pub items: Vec<NewLineItem>,
    pub discount: i64,
    pub pickup_date: Option<NaiveDate>,
    pub subtotal: i64,
    pub total: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewLineItem {
    pub clothing_type_id: i32,
    pub service_id: i32,
    pub quantity: f64,
    pub unit_price: i64,
}

impl NewLineItem {
    pub fn line_total(&self) -> i64 {
        line_total(self.unit_price, self.quantity)
    }
}

/// Monetary line total rounded to the nearest whole currency unit.
///
/// Quantities may be fractional (weight-based services), so the product is
/// rounded once here rather than carrying float drift into the totals.
pub fn line_total(unit_price: i64, quantity: f64) -> i64 {
    (unit_price as f64 * quantity).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_rounds_fractional_quantities() {
        assert_eq!(line_total(5000, 2.0), 10000);
        assert_eq!(line_total(1500, 2.5), 3750);
        assert_eq!(line_total(1000, 0.333), 333);
    }

    #[test]
    fn display_total_clamps_at_zero() {
        let invoice = Invoice {
            id: 1,
            customer_id: 1,
            items: vec![],
            discount: 5000,
            subtotal: 3000,
            total: -2000,
            payment_status: PaymentStatus::Pending,
            executed: false,
            pickup_date: None,
            created_at: chrono::Utc::now().naive_utc(),
        };
        assert_eq!(invoice.display_total(), 0);
        assert_eq!(invoice.total, -2000);
    }

    #[test]
    fn payment_status_round_trips_through_text() {
        assert_eq!(PaymentStatus::from("PAID"), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::from("PENDING"), PaymentStatus::Pending);
        assert_eq!(PaymentStatus::Paid.to_string(), "PAID");
    }
}
