//! Bearer-token authentication types.
//!
//! Every gated handler takes an [`AuthenticatedUser`] argument; extraction
//! fails with 401 when the `Authorization: Bearer` header is missing or the
//! token does not verify, and the unauthorized-redirect middleware turns
//! that into a redirect to the login screen.

use std::future::{Ready, ready};

use actix_web::error::{ErrorInternalServerError, ErrorUnauthorized};
use actix_web::http::header;
use actix_web::{Error, FromRequest, HttpRequest, dev::Payload, web};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::domain::user::Role;
use crate::models::config::ServerConfig;

/// JWT claims carried by the session token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User email.
    pub sub: String,
    pub name: String,
    pub role: Role,
    pub exp: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct AuthenticatedUser {
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.sub,
            name: claims.name,
            role: claims.role,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = (|| {
            let config = req
                .app_data::<web::Data<ServerConfig>>()
                .ok_or_else(|| ErrorInternalServerError("server configuration missing"))?;

            let token = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.strip_prefix("Bearer "))
                .ok_or_else(|| ErrorUnauthorized("missing bearer token"))?;

            let token_data = decode::<Claims>(
                token,
                &DecodingKey::from_secret(config.secret.as_bytes()),
                &Validation::default(),
            )
            .map_err(|_| ErrorUnauthorized("invalid bearer token"))?;

            Ok(token_data.claims.into())
        })();
        ready(result)
    }
}
