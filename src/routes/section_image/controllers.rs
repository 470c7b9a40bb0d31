use super::dto::{CreatingSectionImage, RemovedSectionImage, UpdatingSectionImage};
use crate::{
    db::models::SectionImage,
    dto::JsonRes,
    services::SectionImageService,
};
use rocket::{
    delete, get, http::Status, post, put, routes, serde::json::Json, Build, Rocket, State,
};
use std::sync::Arc;
use uuid::Uuid;

pub fn register_routes(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket.mount(
        "/sections",
        routes![
            create_section_image,
            get_section_images,
            get_section_image,
            update_section_image,
            remove_section_image
        ],
    )
}

#[post("/", data = "<body>")]
async fn create_section_image(
    section_image_service: &State<Arc<SectionImageService>>,
    body: Json<CreatingSectionImage<'_>>,
) -> JsonRes<SectionImage> {
    let tags = body.tags.clone().unwrap_or_default();
    let section_image = section_image_service
        .create_section_image(body.url, body.label, body.description, &tags)
        .await;

    let section_image = match section_image {
        Ok(section_image) => section_image,
        Err(err) => {
            let body = body.into_inner();
            log::error!(target: "routes::section_image::controllers", controller = "create_section_image", service = "SectionImageService", body:serde, err:err; "Error returned from service.");
            return Err(Status::InternalServerError.into());
        }
    };

    Ok((Status::Created, Json(section_image)))
}

/// Lists section images, optionally filtered by label and tag. A persistence
/// failure degrades to an empty list so the gallery stays browsable.
#[get("/?<label>&<tag>")]
async fn get_section_images(
    section_image_service: &State<Arc<SectionImageService>>,
    label: Option<&str>,
    tag: Option<&str>,
) -> (Status, Json<Vec<SectionImage>>) {
    let section_images = section_image_service.get_section_images(label, tag).await;

    let section_images = match section_images {
        Ok(section_images) => section_images,
        Err(err) => {
            log::error!(target: "routes::section_image::controllers", controller = "get_section_images", service = "SectionImageService", label, tag, err:err; "Error returned from service; degrading to an empty list.");
            Vec::new()
        }
    };

    (Status::Ok, Json(section_images))
}

#[get("/<section_image_id>")]
async fn get_section_image(
    section_image_service: &State<Arc<SectionImageService>>,
    section_image_id: Uuid,
) -> JsonRes<SectionImage> {
    let section_image = section_image_service
        .get_section_image_by_id(section_image_id)
        .await;

    let section_image = match section_image {
        Ok(Some(section_image)) => section_image,
        Ok(None) => {
            return Err(Status::NotFound.into());
        }
        Err(err) => {
            log::error!(target: "routes::section_image::controllers", controller = "get_section_image", service = "SectionImageService", section_image_id:serde, err:err; "Error returned from service.");
            return Err(Status::InternalServerError.into());
        }
    };

    Ok((Status::Ok, Json(section_image)))
}

#[put("/<section_image_id>", data = "<body>")]
async fn update_section_image(
    section_image_service: &State<Arc<SectionImageService>>,
    section_image_id: Uuid,
    body: Json<UpdatingSectionImage>,
) -> JsonRes<SectionImage> {
    let section_image = section_image_service
        .update_section_image_by_id(
            section_image_id,
            body.label.as_deref(),
            body.description.as_ref().map(|inner| inner.as_deref()),
            body.tags.as_deref(),
        )
        .await;

    let section_image = match section_image {
        Ok(Some(section_image)) => section_image,
        Ok(None) => {
            return Err(Status::NotFound.into());
        }
        Err(err) => {
            let body = body.into_inner();
            log::error!(target: "routes::section_image::controllers", controller = "update_section_image", service = "SectionImageService", section_image_id:serde, body:serde, err:err; "Error returned from service.");
            return Err(Status::InternalServerError.into());
        }
    };

    Ok((Status::Ok, Json(section_image)))
}

/// Removing an already absent section image still reports `ok`, so removal
/// is idempotent from the caller's perspective.
#[delete("/<section_image_id>")]
async fn remove_section_image(
    section_image_service: &State<Arc<SectionImageService>>,
    section_image_id: Uuid,
) -> JsonRes<RemovedSectionImage> {
    let removed = section_image_service
        .remove_section_image_by_id(section_image_id)
        .await;

    if let Err(err) = removed {
        log::error!(target: "routes::section_image::controllers", controller = "remove_section_image", service = "SectionImageService", section_image_id:serde, err:err; "Error returned from service.");
        return Err(Status::InternalServerError.into());
    }

    Ok((Status::Ok, Json(RemovedSectionImage { ok: true })))
}
