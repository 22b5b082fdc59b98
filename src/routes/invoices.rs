use actix_web::{HttpResponse, Responder, ResponseError, get, post, web};
use serde::Deserialize;
use validator::Validate;

use crate::domain::invoice::PaymentStatus;
use crate::domain::user::Role;
use crate::dto::invoice::{InvoiceListResponse, InvoiceResponse};
use crate::forms::invoice::CreateInvoicePayload;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{DieselRepository, InvoiceListQuery};
use crate::routes::{DEFAULT_ITEMS_PER_PAGE, ensure_role};
use crate::services::ServiceError;
use crate::services::invoice::{self as invoice_service, InvoiceDraft};

#[derive(Deserialize)]
struct InvoiceListParams {
    page: Option<usize>,
    per_page: Option<usize>,
    status: Option<PaymentStatus>,
    customer_id: Option<i32>,
}

impl InvoiceListParams {
    fn into_query(self) -> InvoiceListQuery {
        let mut query = InvoiceListQuery::new().paginate(
            self.page.unwrap_or(1),
            self.per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE),
        );
        if let Some(status) = self.status {
            query = query.payment_status(status);
        }
        if let Some(customer_id) = self.customer_id {
            query = query.customer(customer_id);
        }
        query
    }
}

#[get("/invoices")]
pub async fn list_invoices(
    params: web::Query<InvoiceListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Admin]) {
        return response;
    }

    match invoice_service::list_invoices(repo.get_ref(), params.into_inner().into_query()) {
        Ok((total, invoices)) => HttpResponse::Ok().json(InvoiceListResponse {
            total,
            invoices: invoices.into_iter().map(InvoiceResponse::from).collect(),
        }),
        Err(e) => e.error_response(),
    }
}

#[post("/invoices")]
pub async fn create_invoice(
    web::Json(payload): web::Json<CreateInvoicePayload>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Admin]) {
        return response;
    }
    if let Err(e) = payload.validate() {
        return ServiceError::Validation(e.to_string()).error_response();
    }

    let draft = InvoiceDraft::from(&payload);
    match invoice_service::create_invoice(repo.get_ref(), &draft) {
        Ok(invoice) => HttpResponse::Created().json(InvoiceResponse::from(invoice)),
        Err(e) => e.error_response(),
    }
}

#[get("/invoices/{invoice_id}")]
pub async fn show_invoice(
    invoice_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Admin]) {
        return response;
    }

    match invoice_service::get_invoice(repo.get_ref(), invoice_id.into_inner()) {
        Ok(invoice) => HttpResponse::Ok().json(InvoiceResponse::from(invoice)),
        Err(e) => e.error_response(),
    }
}

/// Unpaged history for a single customer.
#[get("/invoices/customer/{customer_id}")]
pub async fn customer_invoices(
    customer_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Admin]) {
        return response;
    }

    let query = InvoiceListQuery::new().customer(customer_id.into_inner());
    match invoice_service::list_invoices(repo.get_ref(), query) {
        Ok((_, invoices)) => HttpResponse::Ok()
            .json(invoices.into_iter().map(InvoiceResponse::from).collect::<Vec<_>>()),
        Err(e) => e.error_response(),
    }
}

#[post("/invoices/{invoice_id}/pay")]
pub async fn mark_invoice_paid(
    invoice_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Admin]) {
        return response;
    }

    match invoice_service::mark_paid(repo.get_ref(), invoice_id.into_inner()) {
        Ok(invoice) => HttpResponse::Ok().json(InvoiceResponse::from(invoice)),
        Err(e) => e.error_response(),
    }
}

#[post("/invoices/{invoice_id}/execute")]
pub async fn execute_invoice(
    invoice_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Admin]) {
        return response;
    }

    match invoice_service::execute(repo.get_ref(), invoice_id.into_inner()) {
        Ok(invoice) => HttpResponse::Ok().json(InvoiceResponse::from(invoice)),
        Err(e) => e.error_response(),
    }
}
