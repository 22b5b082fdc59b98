use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::expense::{
    Expense as DomainExpense, NewExpense as DomainNewExpense, UpdateExpense as DomainUpdateExpense,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::expenses)]
pub struct Expense {
    pub id: i32,
    pub category: String,
    pub amount: i64,
    pub description: String,
    pub date: NaiveDate,
    pub receipt_path: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::expenses)]
pub struct NewExpense<'a> {
    pub category: &'a str,
    pub amount: i64,
    pub description: &'a str,
    pub date: NaiveDate,
    pub receipt_path: Option<&'a str>,
}

/// Changeset for expense edits. `receipt_path` stays untouched when the
/// update carries no new upload.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::expenses)]
pub struct UpdateExpense<'a> {
    pub category: &'a str,
    pub amount: i64,
    pub description: &'a str,
    pub date: NaiveDate,
    pub receipt_path: Option<&'a str>,
}

impl From<Expense> for DomainExpense {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            category: expense.category,
            amount: expense.amount,
            description: expense.description,
            date: expense.date,
            receipt_path: expense.receipt_path,
            created_at: expense.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewExpense> for NewExpense<'a> {
    fn from(expense: &'a DomainNewExpense) -> Self {
        Self {
            category: expense.category.as_str(),
            amount: expense.amount,
            description: expense.description.as_str(),
            date: expense.date,
            receipt_path: expense.receipt_path.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateExpense> for UpdateExpense<'a> {
    fn from(expense: &'a DomainUpdateExpense) -> Self {
        Self {
            category: expense.category.as_str(),
            amount: expense.amount,
            description: expense.description.as_str(),
            date: expense.date,
            receipt_path: expense.receipt_path.as_deref(),
        }
    }
}
