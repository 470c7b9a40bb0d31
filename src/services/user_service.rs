use super::{password_service, PasswordService};
use crate::db::models::{CreatingUser, User};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::{pooled_connection::deadpool::Pool, AsyncPgConnection, RunQueryDsl};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserServiceError {
    #[error("database pool error: {0}")]
    Pool(#[from] diesel_async::pooled_connection::deadpool::PoolError),
    #[error("diesel error: {0}")]
    Diesel(#[from] diesel::result::Error),
    #[error("{0}")]
    PasswordService(#[from] password_service::PasswordServiceError),
    #[error("the email is already in use")]
    EmailTaken,
}

pub struct UserService {
    db_pool: Pool<AsyncPgConnection>,
    password_service: Arc<PasswordService>,
}

impl UserService {
    pub fn new(
        db_pool: Pool<AsyncPgConnection>,
        password_service: Arc<PasswordService>,
    ) -> Arc<Self> {
        Arc::new(Self {
            db_pool,
            password_service,
        })
    }

    /// Creates a new user. Their password will be hashed before being stored in the database.
    /// Returns `UserServiceError::EmailTaken` if the email is already registered.
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, UserServiceError> {
        use crate::db::schema;

        let password_hash = self.password_service.hash_password(password)?;

        let db = &mut self.db_pool.get().await?;
        let user = diesel::insert_into(schema::users::table)
            .values(CreatingUser {
                username,
                email,
                password: &password_hash,
            })
            .returning((
                schema::users::id,
                schema::users::username,
                schema::users::email,
                schema::users::joined_at,
            ))
            .get_result::<User>(db)
            .await;

        let user = match user {
            Ok(user) => user,
            Err(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                err,
            )) if err.constraint_name() == Some("users_email_key") => {
                return Err(UserServiceError::EmailTaken);
            }
            Err(err) => return Err(err.into()),
        };

        Ok(user)
    }

    /// Retrieves a user from the database by their ID.
    pub async fn get_user_by_id(&self, user_id: i32) -> Result<Option<User>, UserServiceError> {
        use crate::db::schema;

        let db = &mut self.db_pool.get().await?;
        let user = schema::users::dsl::users
            .filter(schema::users::id.eq(user_id))
            .select((
                schema::users::id,
                schema::users::username,
                schema::users::email,
                schema::users::joined_at,
            ))
            .first::<User>(db)
            .await
            .optional()?;

        Ok(user)
    }

    /// Retrieves a user from the database by their email.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, UserServiceError> {
        use crate::db::schema;

        let db = &mut self.db_pool.get().await?;
        let user = schema::users::dsl::users
            .filter(schema::users::email.eq(email))
            .select((
                schema::users::id,
                schema::users::username,
                schema::users::email,
                schema::users::joined_at,
            ))
            .first::<User>(db)
            .await
            .optional()?;

        Ok(user)
    }
}
