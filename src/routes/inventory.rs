use actix_web::{HttpResponse, Responder, ResponseError, delete, get, post, put, web};
use validator::Validate;

use crate::domain::inventory::{NewInventoryItem, UpdateInventoryItem};
use crate::domain::user::Role;
use crate::forms::inventory::{AddInventoryItemForm, UpdateInventoryItemForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{DieselRepository, InventoryReader, InventoryWriter};
use crate::routes::ensure_role;
use crate::services::ServiceError;

#[get("/inventory")]
pub async fn list_inventory(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match repo.list_inventory_items() {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => ServiceError::from(e).error_response(),
    }
}

/// Active items at or below their reorder level, for the dashboard alert.
#[get("/inventory/low-stock")]
pub async fn list_low_stock(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match repo.list_low_stock_items() {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => ServiceError::from(e).error_response(),
    }
}

#[get("/inventory/{item_id}")]
pub async fn show_inventory_item(
    item_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match repo.get_inventory_item_by_id(item_id.into_inner()) {
        Ok(Some(item)) => HttpResponse::Ok().json(item),
        Ok(None) => ServiceError::NotFound("Inventory item not found".to_string()).error_response(),
        Err(e) => ServiceError::from(e).error_response(),
    }
}

#[post("/inventory")]
pub async fn add_inventory_item(
    web::Json(form): web::Json<AddInventoryItemForm>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Moderator]) {
        return response;
    }
    if let Err(e) = form.validate() {
        return ServiceError::Validation(e.to_string()).error_response();
    }

    let new_item = NewInventoryItem::from(&form);
    match repo.create_inventory_item(&new_item) {
        Ok(item) => HttpResponse::Created().json(item),
        Err(e) => ServiceError::from(e).error_response(),
    }
}

#[put("/inventory/{item_id}")]
pub async fn update_inventory_item(
    item_id: web::Path<i32>,
    web::Json(form): web::Json<UpdateInventoryItemForm>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Moderator]) {
        return response;
    }
    if let Err(e) = form.validate() {
        return ServiceError::Validation(e.to_string()).error_response();
    }

    let updates = UpdateInventoryItem::from(&form);
    match repo.update_inventory_item(item_id.into_inner(), &updates) {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(e) => ServiceError::from(e).error_response(),
    }
}

#[delete("/inventory/{item_id}")]
pub async fn delete_inventory_item(
    item_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Moderator]) {
        return response;
    }

    match repo.delete_inventory_item(item_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => ServiceError::from(e).error_response(),
    }
}
