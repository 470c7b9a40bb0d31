mod auth_service;
mod file_driver;
mod password_service;
mod section_image_service;
mod submission_service;
mod upload_service;
mod user_service;

pub use auth_service::*;
pub use file_driver::*;
pub use password_service::*;
pub use section_image_service::*;
pub use submission_service::*;
pub use upload_service::*;
pub use user_service::*;

use crate::config::AppConfig;
use chrono::Duration;
use diesel_async::{pooled_connection::deadpool::Pool, AsyncPgConnection};
use rocket::{Build, Rocket};
use std::sync::Arc;

pub fn register_services(
    rocket: Rocket<Build>,
    db_pool: Pool<AsyncPgConnection>,
    file_driver: Arc<impl 'static + FileDriver + Send + Sync>,
    app_config: &AppConfig,
) -> Rocket<Build> {
    let password_service = PasswordService::new();
    let auth_service = AuthService::new(
        db_pool.clone(),
        password_service.clone(),
        &app_config.auth_secret,
        Duration::seconds(app_config.token_lifetime_seconds as i64),
    );
    let user_service = UserService::new(db_pool.clone(), password_service.clone());
    let submission_service = SubmissionService::new(db_pool.clone());
    let section_image_service = SectionImageService::new(db_pool);
    let upload_service = UploadService::new(section_image_service.clone(), file_driver);

    rocket
        .manage(password_service)
        .manage(auth_service)
        .manage(user_service)
        .manage(submission_service)
        .manage(section_image_service)
        .manage(upload_service)
}
