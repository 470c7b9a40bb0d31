use super::dto::{CreatingSubmission, FavoriteToggled};
use crate::{
    db::models::Submission,
    dto::{Error, JsonRes},
    guards::AuthUser,
    services::{SubmissionService, SubmissionServiceError, SubmissionWithOwner},
};
use rocket::{get, http::Status, post, routes, serde::json::Json, Build, Rocket, State};
use std::sync::Arc;
use uuid::Uuid;

pub fn register_routes(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket.mount(
        "/submissions",
        routes![create_submission, get_submissions, toggle_favorite],
    )
}

#[post("/", data = "<body>")]
async fn create_submission(
    auth_user: AuthUser,
    submission_service: &State<Arc<SubmissionService>>,
    body: Json<CreatingSubmission<'_>>,
) -> JsonRes<Submission> {
    let submission = submission_service
        .create_submission(auth_user.user_id, body.title, body.url, body.description)
        .await;

    let submission = match submission {
        Ok(submission) => submission,
        Err(SubmissionServiceError::UnknownUser { .. }) => {
            return Err(Error::new_static(Status::NotFound, "the user was not found"));
        }
        Err(err) => {
            let body = body.into_inner();
            log::error!(target: "routes::submission::controllers", controller = "create_submission", service = "SubmissionService", user_id = auth_user.user_id, body:serde, err:err; "Error returned from service.");
            return Err(Status::InternalServerError.into());
        }
    };

    Ok((Status::Created, Json(submission)))
}

/// Lists all submissions, newest first. A persistence failure degrades to an
/// empty list so the read-only view stays functional.
#[get("/")]
async fn get_submissions(
    submission_service: &State<Arc<SubmissionService>>,
) -> (Status, Json<Vec<SubmissionWithOwner>>) {
    let submissions = submission_service.get_submissions().await;

    let submissions = match submissions {
        Ok(submissions) => submissions,
        Err(err) => {
            log::error!(target: "routes::submission::controllers", controller = "get_submissions", service = "SubmissionService", err:err; "Error returned from service; degrading to an empty list.");
            Vec::new()
        }
    };

    (Status::Ok, Json(submissions))
}

#[post("/<submission_id>/favorite")]
async fn toggle_favorite(
    auth_user: AuthUser,
    submission_service: &State<Arc<SubmissionService>>,
    submission_id: Uuid,
) -> JsonRes<FavoriteToggled> {
    let favorited = submission_service
        .toggle_favorite(auth_user.user_id, submission_id)
        .await;

    let favorited = match favorited {
        Ok(Some(favorited)) => favorited,
        Ok(None) => {
            return Err(Error::new_static(
                Status::NotFound,
                "the submission was not found",
            ));
        }
        Err(SubmissionServiceError::UnknownUser { .. }) => {
            return Err(Error::new_static(
                Status::BadRequest,
                "the user was not found",
            ));
        }
        Err(err) => {
            log::error!(target: "routes::submission::controllers", controller = "toggle_favorite", service = "SubmissionService", user_id = auth_user.user_id, submission_id:serde, err:err; "Error returned from service.");
            return Err(Status::InternalServerError.into());
        }
    };

    Ok((Status::Ok, Json(FavoriteToggled { favorited })))
}
