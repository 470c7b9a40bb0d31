use super::{password_service, PasswordService};
use crate::db::models::UserIdWithPassword;
use chrono::{Duration, Utc};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::{pooled_connection::deadpool::Pool, AsyncPgConnection, RunQueryDsl};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthServiceError {
    #[error("database pool error: {0}")]
    Pool(#[from] diesel_async::pooled_connection::deadpool::PoolError),
    #[error("diesel error: {0}")]
    Diesel(#[from] diesel::result::Error),
    #[error("{0}")]
    PasswordService(#[from] password_service::PasswordServiceError),
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Claims carried by an access token. The token is the only session state;
/// nothing is stored server-side.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccessTokenClaims {
    pub sub: i32,
    pub iat: i64,
    pub exp: i64,
}

pub struct AuthService {
    db_pool: Pool<AsyncPgConnection>,
    password_service: Arc<PasswordService>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_lifetime: Duration,
}

impl AuthService {
    pub fn new(
        db_pool: Pool<AsyncPgConnection>,
        password_service: Arc<PasswordService>,
        auth_secret: &str,
        token_lifetime: Duration,
    ) -> Arc<Self> {
        Arc::new(Self {
            db_pool,
            password_service,
            encoding_key: EncodingKey::from_secret(auth_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(auth_secret.as_bytes()),
            token_lifetime,
        })
    }

    /// Authenticates a user by their email and password.
    /// Returns the user ID if the authentication is successful, otherwise None.
    pub async fn authenticate_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<i32>, AuthServiceError> {
        use crate::db::schema;

        let db = &mut self.db_pool.get().await?;
        let user = schema::users::dsl::users
            .filter(schema::users::email.eq(email))
            .select((schema::users::id, schema::users::password))
            .first::<UserIdWithPassword>(db)
            .await
            .optional()?;

        let user = match user {
            Some(user) => user,
            None => {
                // prevent timing attacks by hashing a fake password
                self.password_service.hash_password(password)?;
                return Ok(None);
            }
        };

        if !self
            .password_service
            .verify_password_hash(password, &user.password)?
        {
            return Ok(None);
        }

        Ok(Some(user.id))
    }

    /// Issues a signed access token for the given user ID.
    pub fn issue_token(&self, user_id: i32) -> Result<String, AuthServiceError> {
        let now = Utc::now();
        let claims = AccessTokenClaims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + self.token_lifetime).timestamp(),
        };

        let token = jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Verifies an access token and returns the user ID it was issued for.
    /// Expired and malformed tokens yield `None`, indistinguishable from each other.
    pub fn verify_token(&self, token: &str) -> Option<i32> {
        let validation = Validation::default();
        let token_data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &validation)
                .ok()?;

        Some(token_data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn make_auth_service(secret: &str) -> Arc<AuthService> {
        // the pool connects lazily, so it never has to reach a real database here
        let db_pool = db::create_database_connection_pool("postgres://localhost", "unused")
            .unwrap();
        AuthService::new(
            db_pool,
            PasswordService::new(),
            secret,
            Duration::seconds(3600),
        )
    }

    #[test]
    fn test_token_round_trip() {
        let auth_service = make_auth_service("secret");

        let token = auth_service.issue_token(42).unwrap();
        assert_eq!(auth_service.verify_token(&token), Some(42));
    }

    #[test]
    fn test_verify_token_rejects_malformed_tokens() {
        let auth_service = make_auth_service("secret");

        assert_eq!(auth_service.verify_token(""), None);
        assert_eq!(auth_service.verify_token("not-a-token"), None);
    }

    #[test]
    fn test_verify_token_rejects_foreign_signatures() {
        let auth_service = make_auth_service("secret");
        let other_auth_service = make_auth_service("other-secret");

        let token = other_auth_service.issue_token(42).unwrap();
        assert_eq!(auth_service.verify_token(&token), None);
    }

    #[test]
    fn test_verify_token_rejects_expired_tokens() {
        let db_pool = db::create_database_connection_pool("postgres://localhost", "unused")
            .unwrap();
        let auth_service = AuthService::new(
            db_pool,
            PasswordService::new(),
            "secret",
            Duration::seconds(-3600),
        );

        let token = auth_service.issue_token(42).unwrap();
        assert_eq!(auth_service.verify_token(&token), None);
    }
}
