use serde::Deserialize;
use validator::Validate;

use crate::domain::user::Role;

#[derive(Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

fn default_role() -> Role {
    Role::Admin
}

#[derive(Deserialize, Validate)]
/// Staff registration payload; the route itself is MODERATOR-gated.
pub struct RegisterForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[serde(default = "default_role")]
    pub role: Role,
}
