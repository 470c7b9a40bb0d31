use super::dto::{CreatingUser, RegisteredUser};
use crate::{
    dto::{Error, JsonRes},
    services::{AuthService, UserService, UserServiceError},
};
use rocket::{http::Status, post, routes, serde::json::Json, Build, Rocket, State};
use std::sync::Arc;

pub fn register_routes(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket.mount("/users", routes![create_user])
}

#[post("/", data = "<body>")]
async fn create_user(
    auth_service: &State<Arc<AuthService>>,
    user_service: &State<Arc<UserService>>,
    body: Json<CreatingUser<'_>>,
) -> JsonRes<RegisteredUser> {
    let user = user_service
        .create_user(body.username, body.email, body.password)
        .await;

    let user = match user {
        Ok(user) => user,
        Err(UserServiceError::EmailTaken) => {
            return Err(Error::new_static(
                Status::Conflict,
                "the email is already in use",
            ));
        }
        Err(err) => {
            let body = body.into_inner();
            log::error!(target: "routes::user::controllers", controller = "create_user", service = "UserService", username = body.username, email = body.email, err:err; "Error returned from service.");
            return Err(Status::InternalServerError.into());
        }
    };

    let token = match auth_service.issue_token(user.id) {
        Ok(token) => token,
        Err(err) => {
            log::error!(target: "routes::user::controllers", controller = "create_user", service = "AuthService", user_id = user.id, err:err; "Error returned from service.");
            return Err(Status::InternalServerError.into());
        }
    };

    Ok((Status::Created, Json(RegisteredUser { user, token })))
}
