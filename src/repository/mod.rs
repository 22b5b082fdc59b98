use chrono::NaiveDate;

use crate::db::{DbConnection, DbPool};
use crate::domain::{
    clothing_type::{ClothingType, NewClothingType},
    customer::{Customer, NewCustomer},
    expense::{Expense, NewExpense, UpdateExpense},
    inventory::{InventoryItem, NewInventoryItem, UpdateInventoryItem},
    invoice::{Invoice, NewInvoice, PaymentStatus},
    service::{NewService, Service},
    user::{NewUser, User},
};
use crate::repository::errors::RepositoryResult;

pub mod clothing_type;
pub mod customer;
pub mod errors;
pub mod expense;
pub mod inventory;
pub mod invoice;
pub mod service;
pub mod user;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default)]
pub struct InvoiceListQuery {
    pub customer_id: Option<i32>,
    pub payment_status: Option<PaymentStatus>,
    pub pagination: Option<Pagination>,
}

impl InvoiceListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer(mut self, customer_id: i32) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn payment_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = Some(status);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExpenseListQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ExpenseListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, date: NaiveDate) -> Self {
        self.from = Some(date);
        self
    }

    pub fn to(mut self, date: NaiveDate) -> Self {
        self.to = Some(date);
        self
    }
}

pub trait CustomerReader {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
    fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
}

pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
}

pub trait ServiceReader {
    fn get_service_by_id(&self, id: i32) -> RepositoryResult<Option<Service>>;
    fn list_services(&self) -> RepositoryResult<Vec<Service>>;
}

pub trait ServiceWriter {
    fn create_service(&self, new_service: &NewService) -> RepositoryResult<Service>;
    fn update_service(&self, service_id: i32, updates: &NewService) -> RepositoryResult<Service>;
    /// Fails with a conflict when the service is still referenced by an
    /// invoice line. Clothing-type overrides for it are removed with it.
    fn delete_service(&self, service_id: i32) -> RepositoryResult<()>;
}

pub trait ClothingTypeReader {
    fn get_clothing_type_by_id(&self, id: i32) -> RepositoryResult<Option<ClothingType>>;
    fn list_clothing_types(&self) -> RepositoryResult<Vec<ClothingType>>;
}

pub trait ClothingTypeWriter {
    fn create_clothing_type(&self, new_type: &NewClothingType) -> RepositoryResult<ClothingType>;
    fn update_clothing_type(
        &self,
        clothing_type_id: i32,
        updates: &NewClothingType,
    ) -> RepositoryResult<ClothingType>;
    fn delete_clothing_type(&self, clothing_type_id: i32) -> RepositoryResult<()>;
}

pub trait InvoiceReader {
    fn get_invoice_by_id(&self, id: i32) -> RepositoryResult<Option<Invoice>>;
    fn list_invoices(&self, query: InvoiceListQuery) -> RepositoryResult<(usize, Vec<Invoice>)>;
}

pub trait InvoiceWriter {
    /// Persists the invoice header and its priced line items atomically.
    fn create_invoice(&self, new_invoice: &NewInvoice) -> RepositoryResult<Invoice>;
    /// One-way PENDING -> PAID transition; a repeat call is a conflict.
    fn mark_invoice_paid(&self, invoice_id: i32) -> RepositoryResult<Invoice>;
    /// Deducts consumables for every line item and flips the executed flag,
    /// all-or-nothing. A stock shortfall rolls the whole transaction back.
    fn execute_invoice(&self, invoice_id: i32) -> RepositoryResult<Invoice>;
}

pub trait InventoryReader {
    fn get_inventory_item_by_id(&self, id: i32) -> RepositoryResult<Option<InventoryItem>>;
    fn list_inventory_items(&self) -> RepositoryResult<Vec<InventoryItem>>;
    fn list_low_stock_items(&self) -> RepositoryResult<Vec<InventoryItem>>;
}

pub trait InventoryWriter {
    fn create_inventory_item(&self, new_item: &NewInventoryItem)
    -> RepositoryResult<InventoryItem>;
    fn update_inventory_item(
        &self,
        item_id: i32,
        updates: &UpdateInventoryItem,
    ) -> RepositoryResult<InventoryItem>;
    fn delete_inventory_item(&self, item_id: i32) -> RepositoryResult<()>;
}

pub trait ExpenseReader {
    fn get_expense_by_id(&self, id: i32) -> RepositoryResult<Option<Expense>>;
    fn list_expenses(&self, query: ExpenseListQuery) -> RepositoryResult<Vec<Expense>>;
}

pub trait ExpenseWriter {
    fn create_expense(&self, new_expense: &NewExpense) -> RepositoryResult<Expense>;
    fn update_expense(&self, expense_id: i32, updates: &UpdateExpense)
    -> RepositoryResult<Expense>;
    fn delete_expense(&self, expense_id: i32) -> RepositoryResult<()>;
}

pub trait UserReader {
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<(User, String)>>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<DbConnection> {
        self.pool.get().map_err(|e| {
            log::error!("Failed to get connection from pool: {e}");
            e.into()
        })
    }
}
