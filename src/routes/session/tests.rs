use super::dto::{CreatingSession, Session};
use crate::{
    services::{AuthService, UserService},
    test::{create_test_rocket_instance, helpers::create_user},
};
use rocket::{
    http::{Accept, ContentType, Status},
    local::asynchronous::Client,
};
use std::sync::Arc;

#[rocket::async_test]
async fn test_create_session() {
    let (rocket, _database_dropper) = create_test_rocket_instance().await;
    let client = Client::tracked(rocket).await.unwrap();
    let auth_service = client.rocket().state::<Arc<AuthService>>().unwrap();
    let user_service = client.rocket().state::<Arc<UserService>>().unwrap();

    let user = create_user("login", user_service).await;

    let response = client
        .post("/sessions")
        .header(Accept::JSON)
        .header(ContentType::JSON)
        .body(
            serde_json::to_string(&CreatingSession {
                email: "login_user@example.com",
                password: "login_user_pw",
            })
            .unwrap(),
        )
        .dispatch()
        .await;

    let status = response.status();
    let session = response.into_json::<Session>().await.unwrap();

    assert_eq!(status, Status::Created);
    assert_eq!(auth_service.verify_token(&session.token), Some(user.id));
}

#[rocket::async_test]
async fn test_create_session_with_wrong_password() {
    let (rocket, _database_dropper) = create_test_rocket_instance().await;
    let client = Client::tracked(rocket).await.unwrap();
    let user_service = client.rocket().state::<Arc<UserService>>().unwrap();

    create_user("login", user_service).await;

    let response = client
        .post("/sessions")
        .header(Accept::JSON)
        .header(ContentType::JSON)
        .body(
            serde_json::to_string(&CreatingSession {
                email: "login_user@example.com",
                password: "wrong_pw",
            })
            .unwrap(),
        )
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn test_create_session_with_unknown_email() {
    let (rocket, _database_dropper) = create_test_rocket_instance().await;
    let client = Client::tracked(rocket).await.unwrap();

    let response = client
        .post("/sessions")
        .header(Accept::JSON)
        .header(ContentType::JSON)
        .body(
            serde_json::to_string(&CreatingSession {
                email: "nobody@example.com",
                password: "whatever",
            })
            .unwrap(),
        )
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Unauthorized);
}
