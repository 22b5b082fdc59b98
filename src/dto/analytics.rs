use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: i64,
    pub invoices: usize,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct MonthlyRevenue {
    /// `YYYY-MM`.
    pub month: String,
    pub revenue: i64,
    pub invoices: usize,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct TopCustomer {
    pub customer_id: i32,
    pub name: String,
    pub revenue: i64,
    pub invoices: usize,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct FinancialSummary {
    pub revenue: i64,
    pub expenses: i64,
    pub net: i64,
}
