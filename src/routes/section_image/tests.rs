use super::dto::{CreatingSectionImage, RemovedSectionImage, UpdatingSectionImage};
use crate::{
    db::models::SectionImage, services::SectionImageService, test::create_test_rocket_instance,
};
use rocket::{
    http::{Accept, ContentType, Status},
    local::asynchronous::Client,
};
use std::sync::Arc;
use uuid::Uuid;

#[rocket::async_test]
async fn test_create_section_image() {
    let (rocket, _database_dropper) = create_test_rocket_instance().await;
    let client = Client::tracked(rocket).await.unwrap();
    let section_image_service = client.rocket().state::<Arc<SectionImageService>>().unwrap();

    let response = client
        .post("/sections")
        .header(Accept::JSON)
        .header(ContentType::JSON)
        .body(
            serde_json::to_string(&CreatingSectionImage {
                url: "/uploads/hero.png",
                label: "Hero",
                description: Some("A hero section"),
                tags: Some(vec!["dark".to_string(), "wide".to_string()]),
            })
            .unwrap(),
        )
        .dispatch()
        .await;

    let status = response.status();
    let created_section_image = response.into_json::<SectionImage>().await.unwrap();

    assert_eq!(status, Status::Created);
    assert_eq!(created_section_image.url, "/uploads/hero.png");
    assert_eq!(created_section_image.label, "Hero");
    assert_eq!(
        created_section_image.description.as_deref(),
        Some("A hero section")
    );
    assert_eq!(created_section_image.tags, vec!["dark", "wide"]);

    let raw_created_section_image = section_image_service
        .get_section_image_by_id(created_section_image.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(raw_created_section_image, created_section_image);
}

#[rocket::async_test]
async fn test_create_section_image_defaults() {
    let (rocket, _database_dropper) = create_test_rocket_instance().await;
    let client = Client::tracked(rocket).await.unwrap();

    let response = client
        .post("/sections")
        .header(Accept::JSON)
        .header(ContentType::JSON)
        .body(
            serde_json::to_string(&CreatingSectionImage {
                url: "/uploads/footer.png",
                label: "Footer",
                description: None,
                tags: None,
            })
            .unwrap(),
        )
        .dispatch()
        .await;

    let status = response.status();
    let created_section_image = response.into_json::<SectionImage>().await.unwrap();

    assert_eq!(status, Status::Created);
    assert_eq!(created_section_image.description, None);
    assert_eq!(created_section_image.tags, Vec::<String>::new());
}

#[rocket::async_test]
async fn test_get_section_images_filtered_by_label() {
    let (rocket, _database_dropper) = create_test_rocket_instance().await;
    let client = Client::tracked(rocket).await.unwrap();
    let section_image_service = client.rocket().state::<Arc<SectionImageService>>().unwrap();

    section_image_service
        .create_section_image("/uploads/hero0.png", "Hero", None, &[])
        .await
        .unwrap();
    section_image_service
        .create_section_image("/uploads/hero1.png", "Hero", None, &[])
        .await
        .unwrap();
    section_image_service
        .create_section_image("/uploads/footer.png", "Footer", None, &[])
        .await
        .unwrap();

    let response = client
        .get("/sections?label=Hero")
        .header(Accept::JSON)
        .dispatch()
        .await;

    let status = response.status();
    let section_images = response.into_json::<Vec<SectionImage>>().await.unwrap();

    assert_eq!(status, Status::Ok);
    assert_eq!(section_images.len(), 2);
    assert!(section_images
        .iter()
        .all(|section_image| section_image.label == "Hero"));

    // newest first
    assert_eq!(section_images[0].url, "/uploads/hero1.png");
    assert_eq!(section_images[1].url, "/uploads/hero0.png");
}

#[rocket::async_test]
async fn test_get_section_images_filtered_by_tag() {
    let (rocket, _database_dropper) = create_test_rocket_instance().await;
    let client = Client::tracked(rocket).await.unwrap();
    let section_image_service = client.rocket().state::<Arc<SectionImageService>>().unwrap();

    section_image_service
        .create_section_image("/uploads/hero0.png", "Hero", None, &["dark".to_string()])
        .await
        .unwrap();
    section_image_service
        .create_section_image("/uploads/hero1.png", "Hero", None, &["light".to_string()])
        .await
        .unwrap();

    let response = client
        .get("/sections?tag=dark")
        .header(Accept::JSON)
        .dispatch()
        .await;

    let status = response.status();
    let section_images = response.into_json::<Vec<SectionImage>>().await.unwrap();

    assert_eq!(status, Status::Ok);
    assert_eq!(section_images.len(), 1);
    assert_eq!(section_images[0].url, "/uploads/hero0.png");
}

#[rocket::async_test]
async fn test_get_section_image_not_found() {
    let (rocket, _database_dropper) = create_test_rocket_instance().await;
    let client = Client::tracked(rocket).await.unwrap();

    let response = client
        .get(format!("/sections/{}", Uuid::new_v4()))
        .header(Accept::JSON)
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn test_update_section_image_clears_description_only() {
    let (rocket, _database_dropper) = create_test_rocket_instance().await;
    let client = Client::tracked(rocket).await.unwrap();
    let section_image_service = client.rocket().state::<Arc<SectionImageService>>().unwrap();

    let section_image = section_image_service
        .create_section_image(
            "/uploads/hero.png",
            "Hero",
            Some("A hero section"),
            &["dark".to_string()],
        )
        .await
        .unwrap();

    // `{"description": null}` clears the description and touches nothing else
    let response = client
        .put(format!("/sections/{}", section_image.id))
        .header(Accept::JSON)
        .header(ContentType::JSON)
        .body(
            serde_json::to_string(&UpdatingSectionImage {
                description: Some(None),
                ..Default::default()
            })
            .unwrap(),
        )
        .dispatch()
        .await;

    let status = response.status();
    let updated_section_image = response.into_json::<SectionImage>().await.unwrap();

    assert_eq!(status, Status::Ok);
    assert_eq!(updated_section_image.description, None);
    assert_eq!(updated_section_image.label, "Hero");
    assert_eq!(updated_section_image.tags, vec!["dark"]);
}

#[rocket::async_test]
async fn test_update_section_image_partial_fields() {
    let (rocket, _database_dropper) = create_test_rocket_instance().await;
    let client = Client::tracked(rocket).await.unwrap();
    let section_image_service = client.rocket().state::<Arc<SectionImageService>>().unwrap();

    let section_image = section_image_service
        .create_section_image(
            "/uploads/hero.png",
            "Hero",
            Some("A hero section"),
            &["dark".to_string()],
        )
        .await
        .unwrap();

    let response = client
        .put(format!("/sections/{}", section_image.id))
        .header(Accept::JSON)
        .header(ContentType::JSON)
        .body(
            serde_json::to_string(&UpdatingSectionImage {
                label: Some("Footer".to_string()),
                tags: Some(vec!["light".to_string()]),
                ..Default::default()
            })
            .unwrap(),
        )
        .dispatch()
        .await;

    let status = response.status();
    let updated_section_image = response.into_json::<SectionImage>().await.unwrap();

    assert_eq!(status, Status::Ok);
    assert_eq!(updated_section_image.label, "Footer");
    assert_eq!(updated_section_image.tags, vec!["light"]);

    // an omitted description is left unchanged
    assert_eq!(
        updated_section_image.description.as_deref(),
        Some("A hero section")
    );
}

#[rocket::async_test]
async fn test_update_section_image_not_found() {
    let (rocket, _database_dropper) = create_test_rocket_instance().await;
    let client = Client::tracked(rocket).await.unwrap();

    let response = client
        .put(format!("/sections/{}", Uuid::new_v4()))
        .header(Accept::JSON)
        .header(ContentType::JSON)
        .body(
            serde_json::to_string(&UpdatingSectionImage {
                label: Some("Hero".to_string()),
                ..Default::default()
            })
            .unwrap(),
        )
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn test_remove_section_image_is_idempotent() {
    let (rocket, _database_dropper) = create_test_rocket_instance().await;
    let client = Client::tracked(rocket).await.unwrap();
    let section_image_service = client.rocket().state::<Arc<SectionImageService>>().unwrap();

    let section_image = section_image_service
        .create_section_image("/uploads/hero.png", "Hero", None, &[])
        .await
        .unwrap();

    let response = client
        .delete(format!("/sections/{}", section_image.id))
        .header(Accept::JSON)
        .dispatch()
        .await;

    let status = response.status();
    let removed = response.into_json::<RemovedSectionImage>().await.unwrap();

    assert_eq!(status, Status::Ok);
    assert!(removed.ok);

    let raw_removed_section_image = section_image_service
        .get_section_image_by_id(section_image.id)
        .await
        .unwrap();

    assert_eq!(raw_removed_section_image, None);

    // removing again is not an error
    let response = client
        .delete(format!("/sections/{}", section_image.id))
        .header(Accept::JSON)
        .dispatch()
        .await;

    let status = response.status();
    let removed = response.into_json::<RemovedSectionImage>().await.unwrap();

    assert_eq!(status, Status::Ok);
    assert!(removed.ok);
}
