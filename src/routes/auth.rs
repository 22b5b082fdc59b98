use actix_web::{HttpResponse, Responder, ResponseError, post, web};
use validator::Validate;

use crate::domain::user::Role;
use crate::dto::auth::{LoginResponse, UserProfile};
use crate::forms::auth::{LoginForm, RegisterForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::ensure_role;
use crate::services::ServiceError;
use crate::services::auth as auth_service;

#[post("/auth/login")]
pub async fn login(
    web::Json(form): web::Json<LoginForm>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return ServiceError::Validation(e.to_string()).error_response();
    }

    match auth_service::login(
        repo.get_ref(),
        &form.email,
        &form.password,
        &server_config.secret,
    ) {
        Ok(session) => HttpResponse::Ok().json(LoginResponse {
            token: session.token,
            user: UserProfile::from(session.user),
        }),
        Err(e) => e.error_response(),
    }
}

/// Creates a staff account. Only moderators may provision new logins.
#[post("/auth/register")]
pub async fn register(
    web::Json(form): web::Json<RegisterForm>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, &[Role::Moderator]) {
        return response;
    }
    if let Err(e) = form.validate() {
        return ServiceError::Validation(e.to_string()).error_response();
    }

    match auth_service::register(repo.get_ref(), &form.name, &form.email, &form.password, form.role)
    {
        Ok(created) => HttpResponse::Created().json(UserProfile::from(created)),
        Err(e) => e.error_response(),
    }
}
