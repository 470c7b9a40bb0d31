use super::dto::UploadForm;
use crate::{
    db::models::SectionImage,
    dto::{Error, JsonRes},
    services::{parse_tags, UploadService},
};
use rocket::{form::Form, http::Status, post, routes, serde::json::Json, Build, Rocket, State};
use std::sync::Arc;

pub fn register_routes(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket.mount("/upload", routes![upload_section_image])
}

#[post("/", data = "<body>")]
async fn upload_section_image(
    upload_service: &State<Arc<UploadService>>,
    body: Form<UploadForm<'_>>,
) -> JsonRes<SectionImage> {
    let UploadForm {
        file,
        label,
        description,
        tags,
    } = body.into_inner();

    let mut file = match file {
        Some(file) if 0 < file.len() => file,
        _ => {
            return Err(Error::new_static(Status::BadRequest, "no file provided"));
        }
    };

    let label = label.unwrap_or_default();
    // an empty description field means no description
    let description = description.filter(|description| !description.is_empty());
    let tags = parse_tags(tags.as_deref());

    let section_image = upload_service
        .store_section_image(&mut file, &label, description.as_deref(), &tags)
        .await;

    let section_image = match section_image {
        Ok(section_image) => section_image,
        Err(err) => {
            log::error!(target: "routes::upload::controllers", controller = "upload_section_image", service = "UploadService", label, err:err; "Error returned from service.");
            return Err(Status::InternalServerError.into());
        }
    };

    Ok((Status::Ok, Json(section_image)))
}
