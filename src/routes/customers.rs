use actix_web::{HttpResponse, Responder, ResponseError, get, post, web};
use validator::Validate;

use crate::domain::customer::NewCustomer;
use crate::domain::user::Role;
use crate::forms::customer::AddCustomerForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{CustomerReader, CustomerWriter, DieselRepository};
use crate::routes::ensure_role;
use crate::services::ServiceError;

#[get("/customers")]
pub async fn list_customers(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Admin]) {
        return response;
    }

    match repo.list_customers() {
        Ok(customers) => HttpResponse::Ok().json(customers),
        Err(e) => ServiceError::from(e).error_response(),
    }
}

#[post("/customers")]
pub async fn add_customer(
    web::Json(form): web::Json<AddCustomerForm>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Admin]) {
        return response;
    }
    if let Err(e) = form.validate() {
        return ServiceError::Validation(e.to_string()).error_response();
    }

    let new_customer = NewCustomer::from(&form);
    match repo.create_customer(&new_customer) {
        Ok(customer) => HttpResponse::Created().json(customer),
        Err(e) => ServiceError::from(e).error_response(),
    }
}
