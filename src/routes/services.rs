use actix_web::{HttpResponse, Responder, ResponseError, delete, get, post, put, web};
use validator::Validate;

use crate::domain::service::NewService;
use crate::domain::user::Role;
use crate::forms::service::SaveServiceForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{DieselRepository, ServiceReader, ServiceWriter};
use crate::routes::ensure_role;
use crate::services::ServiceError;

#[get("/services")]
pub async fn list_services(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match repo.list_services() {
        Ok(services) => HttpResponse::Ok().json(services),
        Err(e) => ServiceError::from(e).error_response(),
    }
}

#[post("/services")]
pub async fn add_service(
    web::Json(form): web::Json<SaveServiceForm>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Moderator]) {
        return response;
    }
    if let Err(e) = form.validate() {
        return ServiceError::Validation(e.to_string()).error_response();
    }

    let new_service = NewService::from(&form);
    match repo.create_service(&new_service) {
        Ok(service) => HttpResponse::Created().json(service),
        Err(e) => ServiceError::from(e).error_response(),
    }
}

#[put("/services/{service_id}")]
pub async fn update_service(
    service_id: web::Path<i32>,
    web::Json(form): web::Json<SaveServiceForm>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Moderator]) {
        return response;
    }
    if let Err(e) = form.validate() {
        return ServiceError::Validation(e.to_string()).error_response();
    }

    let updates = NewService::from(&form);
    match repo.update_service(service_id.into_inner(), &updates) {
        Ok(service) => HttpResponse::Ok().json(service),
        Err(e) => ServiceError::from(e).error_response(),
    }
}

/// Refused while invoices still reference the service; clothing-type
/// overrides for it are removed along with it.
#[delete("/services/{service_id}")]
pub async fn delete_service(
    service_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Moderator]) {
        return response;
    }

    match repo.delete_service(service_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => ServiceError::from(e).error_response(),
    }
}
