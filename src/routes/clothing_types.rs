use actix_web::{HttpResponse, Responder, ResponseError, delete, get, post, put, web};
use validator::Validate;

use crate::domain::clothing_type::NewClothingType;
use crate::domain::user::Role;
use crate::forms::clothing_type::SaveClothingTypeForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{ClothingTypeReader, ClothingTypeWriter, DieselRepository};
use crate::routes::ensure_role;
use crate::services::ServiceError;

#[get("/clothing-types")]
pub async fn list_clothing_types(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match repo.list_clothing_types() {
        Ok(types) => HttpResponse::Ok().json(types),
        Err(e) => ServiceError::from(e).error_response(),
    }
}

#[post("/clothing-types")]
pub async fn add_clothing_type(
    web::Json(form): web::Json<SaveClothingTypeForm>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Moderator]) {
        return response;
    }
    if let Err(e) = form.validate() {
        return ServiceError::Validation(e.to_string()).error_response();
    }

    let new_type = NewClothingType::from(&form);
    match repo.create_clothing_type(&new_type) {
        Ok(clothing_type) => HttpResponse::Created().json(clothing_type),
        Err(e) => ServiceError::from(e).error_response(),
    }
}

#[put("/clothing-types/{clothing_type_id}")]
pub async fn update_clothing_type(
    clothing_type_id: web::Path<i32>,
    web::Json(form): web::Json<SaveClothingTypeForm>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Moderator]) {
        return response;
    }
    if let Err(e) = form.validate() {
        return ServiceError::Validation(e.to_string()).error_response();
    }

    let updates = NewClothingType::from(&form);
    match repo.update_clothing_type(clothing_type_id.into_inner(), &updates) {
        Ok(clothing_type) => HttpResponse::Ok().json(clothing_type),
        Err(e) => ServiceError::from(e).error_response(),
    }
}

#[delete("/clothing-types/{clothing_type_id}")]
pub async fn delete_clothing_type(
    clothing_type_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Moderator]) {
        return response;
    }

    match repo.delete_clothing_type(clothing_type_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => ServiceError::from(e).error_response(),
    }
}
