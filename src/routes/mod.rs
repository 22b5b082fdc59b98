//! HTTP handlers. Authentication is enforced by the [`AuthenticatedUser`]
//! extractor; role checks happen per handler via [`ensure_role`].

use actix_web::HttpResponse;
use actix_web::http::header;

use crate::domain::user::Role;
use crate::models::auth::AuthenticatedUser;

pub mod analytics;
pub mod auth;
pub mod clothing_types;
pub mod customers;
pub mod expenses;
pub mod inventory;
pub mod invoices;
pub mod services;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// 303 redirect to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Sends authenticated callers outside the allowed set back to the
/// dashboard. Distinct from the 401 path, which redirects to the login
/// screen instead.
pub fn ensure_role(user: &AuthenticatedUser, allowed: &[Role]) -> Result<(), HttpResponse> {
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        Err(redirect("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> AuthenticatedUser {
        AuthenticatedUser {
            email: "staff@example.com".to_string(),
            name: "Staff".to_string(),
            role,
        }
    }

    #[test]
    fn ensure_role_accepts_listed_roles() {
        assert!(ensure_role(&user(Role::Admin), &[Role::Admin]).is_ok());
        assert!(ensure_role(&user(Role::Moderator), &[Role::Admin, Role::Moderator]).is_ok());
    }

    #[test]
    fn ensure_role_redirects_other_roles_home() {
        let response = ensure_role(&user(Role::Moderator), &[Role::Admin]).unwrap_err();
        assert_eq!(response.status(), actix_web::http::StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/"
        );
    }
}
