//! Login and staff registration.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use crate::domain::user::{NewUser, Role, User};
use crate::models::auth::Claims;
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Sessions live for a week; clients cache the token and re-login after.
const TOKEN_TTL_DAYS: i64 = 7;

pub struct AuthenticatedSession {
    pub token: String,
    pub user: User,
}

pub fn login<R>(repo: &R, email: &str, password: &str, secret: &str) -> ServiceResult<AuthenticatedSession>
where
    R: UserReader + ?Sized,
{
    let email = email.trim().to_lowercase();
    let (user, password_hash) = repo
        .get_user_by_email(&email)?
        .ok_or_else(|| ServiceError::Unauthorized("Invalid email or password".to_string()))?;

    let valid = bcrypt::verify(password, &password_hash)
        .map_err(|e| ServiceError::Internal(format!("Password verification failed: {e}")))?;
    if !valid {
        return Err(ServiceError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token = issue_token(&user, secret)?;
    Ok(AuthenticatedSession { token, user })
}

pub fn register<R>(
    repo: &R,
    name: &str,
    email: &str,
    password: &str,
    role: Role,
) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ?Sized,
{
    let email = email.trim().to_lowercase();
    if repo.get_user_by_email(&email)?.is_some() {
        return Err(ServiceError::Conflict(
            "A user with this email already exists".to_string(),
        ));
    }

    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| ServiceError::Internal(format!("Password hashing failed: {e}")))?;

    let new_user = NewUser::new(name.to_string(), email, password_hash, role);
    Ok(repo.create_user(&new_user)?)
}

pub fn issue_token(user: &User, secret: &str) -> ServiceResult<String> {
    let exp = (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp() as usize;
    let claims = Claims {
        sub: user.email.clone(),
        name: user.name.clone(),
        role: user.role,
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ServiceError::Internal(format!("Token signing failed: {e}")))
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{DecodingKey, Validation, decode};

    use super::*;

    #[test]
    fn issued_tokens_verify_with_the_same_secret() {
        let user = User {
            id: 1,
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            role: Role::Admin,
            created_at: Utc::now().naive_utc(),
        };

        let token = issue_token(&user, "secret").unwrap();
        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"secret"),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(data.claims.sub, "asha@example.com");
        assert_eq!(data.claims.role, Role::Admin);
    }

    #[test]
    fn tokens_do_not_verify_with_another_secret() {
        let user = User {
            id: 1,
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            role: Role::Admin,
            created_at: Utc::now().naive_utc(),
        };

        let token = issue_token(&user, "secret").unwrap();
        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"other-secret"),
            &Validation::default(),
        );
        assert!(result.is_err());
    }
}
