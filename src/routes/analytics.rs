use actix_web::{HttpResponse, Responder, ResponseError, get, web};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::services::analytics;

const DEFAULT_DAYS: u32 = 30;
const DEFAULT_MONTHS: u32 = 12;
const DEFAULT_TOP_CUSTOMERS: usize = 5;

#[derive(Deserialize)]
struct DailyParams {
    days: Option<u32>,
}

#[derive(Deserialize)]
struct MonthlyParams {
    months: Option<u32>,
}

#[derive(Deserialize)]
struct TopCustomersParams {
    limit: Option<usize>,
}

#[derive(Deserialize)]
struct SummaryParams {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

#[get("/analytics/daily")]
pub async fn daily_revenue(
    params: web::Query<DailyParams>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match analytics::daily_revenue(repo.get_ref(), params.days.unwrap_or(DEFAULT_DAYS)) {
        Ok(series) => HttpResponse::Ok().json(series),
        Err(e) => e.error_response(),
    }
}

#[get("/analytics/monthly")]
pub async fn monthly_revenue(
    params: web::Query<MonthlyParams>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match analytics::monthly_revenue(repo.get_ref(), params.months.unwrap_or(DEFAULT_MONTHS)) {
        Ok(series) => HttpResponse::Ok().json(series),
        Err(e) => e.error_response(),
    }
}

#[get("/analytics/top-customers")]
pub async fn top_customers(
    params: web::Query<TopCustomersParams>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match analytics::top_customers(
        repo.get_ref(),
        params.limit.unwrap_or(DEFAULT_TOP_CUSTOMERS),
    ) {
        Ok(ranked) => HttpResponse::Ok().json(ranked),
        Err(e) => e.error_response(),
    }
}

#[get("/analytics/financial")]
pub async fn financial_summary(
    params: web::Query<SummaryParams>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match analytics::financial_summary(repo.get_ref(), params.from, params.to) {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => e.error_response(),
    }
}
