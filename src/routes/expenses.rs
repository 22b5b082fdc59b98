use std::fs;
use std::path::Path;

use actix_multipart::form::MultipartForm;
use actix_multipart::form::tempfile::TempFile;
use actix_web::{HttpResponse, Responder, ResponseError, delete, get, post, put, web};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::expense::{NewExpense, UpdateExpense};
use crate::domain::user::Role;
use crate::forms::expense::ExpenseForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::{DieselRepository, ExpenseListQuery, ExpenseReader, ExpenseWriter};
use crate::routes::ensure_role;
use crate::services::ServiceError;

#[derive(Deserialize)]
struct ExpenseListParams {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

/// Moves an uploaded receipt out of its temp file into the uploads
/// directory under a fresh name, returning the stored relative path.
fn save_receipt(receipt: &TempFile, uploads_dir: &str) -> Result<String, ServiceError> {
    let extension = receipt
        .file_name
        .as_deref()
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .unwrap_or("bin");
    let stored_name = format!("{}.{extension}", Uuid::new_v4());

    let receipts_dir = Path::new(uploads_dir).join("receipts");
    fs::create_dir_all(&receipts_dir)
        .map_err(|e| ServiceError::Internal(format!("Failed to create uploads dir: {e}")))?;
    // Copy instead of rename; the temp dir may sit on another filesystem.
    fs::copy(receipt.file.path(), receipts_dir.join(&stored_name))
        .map_err(|e| ServiceError::Internal(format!("Failed to store receipt: {e}")))?;

    Ok(format!("receipts/{stored_name}"))
}

fn validate_expense(form: &ExpenseForm) -> Result<(), ServiceError> {
    if form.category.trim().is_empty() {
        return Err(ServiceError::Validation(
            "Expense category cannot be empty".to_string(),
        ));
    }
    if *form.amount <= 0 {
        return Err(ServiceError::Validation(
            "Expense amount must be positive".to_string(),
        ));
    }
    Ok(())
}

#[get("/expenses")]
pub async fn list_expenses(
    params: web::Query<ExpenseListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Admin, Role::Moderator]) {
        return response;
    }

    let mut query = ExpenseListQuery::new();
    if let Some(from) = params.from {
        query = query.from(from);
    }
    if let Some(to) = params.to {
        query = query.to(to);
    }

    match repo.list_expenses(query) {
        Ok(expenses) => HttpResponse::Ok().json(expenses),
        Err(e) => ServiceError::from(e).error_response(),
    }
}

#[get("/expenses/{expense_id}")]
pub async fn show_expense(
    expense_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Admin, Role::Moderator]) {
        return response;
    }

    match repo.get_expense_by_id(expense_id.into_inner()) {
        Ok(Some(expense)) => HttpResponse::Ok().json(expense),
        Ok(None) => ServiceError::NotFound("Expense not found".to_string()).error_response(),
        Err(e) => ServiceError::from(e).error_response(),
    }
}

#[post("/expenses")]
pub async fn add_expense(
    MultipartForm(form): MultipartForm<ExpenseForm>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Admin, Role::Moderator]) {
        return response;
    }
    if let Err(e) = validate_expense(&form) {
        return e.error_response();
    }

    let receipt_path = match &form.receipt {
        Some(receipt) => match save_receipt(receipt, &server_config.uploads_dir) {
            Ok(path) => Some(path),
            Err(e) => return e.error_response(),
        },
        None => None,
    };

    let new_expense = NewExpense {
        category: form.category.trim().to_string(),
        amount: *form.amount,
        description: form.description.trim().to_string(),
        date: *form.date,
        receipt_path,
    };
    match repo.create_expense(&new_expense) {
        Ok(expense) => HttpResponse::Created().json(expense),
        Err(e) => ServiceError::from(e).error_response(),
    }
}

/// Replaces the expense fields; the stored receipt is kept unless a new
/// file is uploaded.
#[put("/expenses/{expense_id}")]
pub async fn update_expense(
    expense_id: web::Path<i32>,
    MultipartForm(form): MultipartForm<ExpenseForm>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Admin, Role::Moderator]) {
        return response;
    }
    if let Err(e) = validate_expense(&form) {
        return e.error_response();
    }

    let receipt_path = match &form.receipt {
        Some(receipt) => match save_receipt(receipt, &server_config.uploads_dir) {
            Ok(path) => Some(path),
            Err(e) => return e.error_response(),
        },
        None => None,
    };

    let updates = UpdateExpense {
        category: form.category.trim().to_string(),
        amount: *form.amount,
        description: form.description.trim().to_string(),
        date: *form.date,
        receipt_path,
    };
    match repo.update_expense(expense_id.into_inner(), &updates) {
        Ok(expense) => HttpResponse::Ok().json(expense),
        Err(e) => ServiceError::from(e).error_response(),
    }
}

#[delete("/expenses/{expense_id}")]
pub async fn delete_expense(
    expense_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Admin, Role::Moderator]) {
        return response;
    }

    match repo.delete_expense(expense_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => ServiceError::from(e).error_response(),
    }
}
