use crate::{dto::Error, services::AuthService};
use rocket::{
    http::Status,
    request::{FromRequest, Outcome, Request},
    State,
};
use serde::Serialize;
use std::sync::Arc;

/// The identity extracted from a verified bearer token.
/// Verification is a stateless signature check; no database access happens here.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct AuthUser {
    pub user_id: i32,
}

fn parse_authorization_header(authorization: &str) -> Option<&str> {
    let segments = authorization.trim().splitn(2, ' ').collect::<Vec<&str>>();

    if segments.len() != 2 || !segments[0].eq_ignore_ascii_case("bearer") {
        return None;
    }

    Some(segments[1])
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthUser {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let authorization = match request.headers().get_one("Authorization") {
            Some(token) => token,
            None => return Outcome::Error((Status::Unauthorized, Status::Unauthorized.into())),
        };
        let token = match parse_authorization_header(authorization) {
            Some(token) => token,
            None => return Outcome::Error((Status::Unauthorized, Status::Unauthorized.into())),
        };

        let auth_service = match request.guard::<&State<Arc<AuthService>>>().await {
            Outcome::Success(auth_service) => auth_service,
            Outcome::Error(err) => {
                log::error!(target: "guards::AuthUser", guard = "AuthUser", err:?; "Failed to get AuthService from request guard.");
                return Outcome::Error((
                    Status::InternalServerError,
                    Status::InternalServerError.into(),
                ));
            }
            Outcome::Forward(status) => {
                return Outcome::Forward(status);
            }
        };

        let user_id = match auth_service.verify_token(token) {
            Some(user_id) => user_id,
            None => return Outcome::Error((Status::Unauthorized, Status::Unauthorized.into())),
        };

        Outcome::Success(AuthUser { user_id })
    }
}
