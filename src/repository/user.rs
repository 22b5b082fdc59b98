use diesel::prelude::*;

use crate::domain::user::{NewUser, User};
use crate::models::user::{NewUser as DbNewUser, User as DbUser};
use crate::repository::{
    DieselRepository, UserReader, UserWriter,
    errors::{RepositoryError, RepositoryResult},
};

impl UserReader for DieselRepository {
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<(User, String)>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::email.eq(email))
            .first::<DbUser>(&mut conn)
            .optional()?;

        match user {
            Some(user) => {
                let password_hash = user.password_hash.clone();
                let domain: User = user
                    .try_into()
                    .map_err(|e: crate::domain::user::UnknownRole| {
                        RepositoryError::Unexpected(e.to_string())
                    })?;
                Ok(Some((domain, password_hash)))
            }
            None => Ok(None),
        }
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let insertable: DbNewUser = new_user.into();
        let created = diesel::insert_into(users::table)
            .values(&insertable)
            .get_result::<DbUser>(&mut conn)?;

        created
            .try_into()
            .map_err(|e: crate::domain::user::UnknownRole| {
                RepositoryError::Unexpected(e.to_string())
            })
    }
}
