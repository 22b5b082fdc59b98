use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: i32,
    pub category: String,
    /// Whole-currency-unit amount, always positive.
    pub amount: i64,
    pub description: String,
    pub date: NaiveDate,
    /// Relative path of the stored receipt upload, if any.
    pub receipt_path: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewExpense {
    pub category: String,
    pub amount: i64,
    pub description: String,
    pub date: NaiveDate,
    pub receipt_path: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateExpense {
    pub category: String,
    pub amount: i64,
    pub description: String,
    pub date: NaiveDate,
    /// `None` keeps the previously stored receipt.
    pub receipt_path: Option<String>,
}
