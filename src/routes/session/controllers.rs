use super::dto::{CreatingSession, Session};
use crate::{dto::JsonRes, services::AuthService};
use rocket::{http::Status, post, routes, serde::json::Json, Build, Rocket, State};
use std::sync::Arc;

pub fn register_routes(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket.mount("/sessions", routes![create_session])
}

#[post("/", data = "<body>")]
async fn create_session(
    auth_service: &State<Arc<AuthService>>,
    body: Json<CreatingSession<'_>>,
) -> JsonRes<Session> {
    let user_id = auth_service
        .authenticate_user(body.email, body.password)
        .await;

    let user_id = match user_id {
        Ok(Some(user_id)) => user_id,
        Ok(None) => {
            return Err(Status::Unauthorized.into());
        }
        Err(err) => {
            log::error!(target: "routes::session::controllers", controller = "create_session", service = "AuthService", email = body.email, err:err; "Error returned from service.");
            return Err(Status::InternalServerError.into());
        }
    };

    // nothing is stored for the session; the signed token is the only state
    let token = match auth_service.issue_token(user_id) {
        Ok(token) => token,
        Err(err) => {
            log::error!(target: "routes::session::controllers", controller = "create_session", service = "AuthService", user_id, err:err; "Error returned from service.");
            return Err(Status::InternalServerError.into());
        }
    };

    Ok((Status::Created, Json(Session { token })))
}
