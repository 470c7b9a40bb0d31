use crate::db::models::{CreatingSectionImage, SectionImage, UpdatingSectionImage};
use diesel::{ExpressionMethods, OptionalExtension, PgArrayExpressionMethods, QueryDsl};
use diesel_async::{pooled_connection::deadpool::Pool, AsyncPgConnection, RunQueryDsl};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum SectionImageServiceError {
    #[error("database pool error: {0}")]
    Pool(#[from] diesel_async::pooled_connection::deadpool::PoolError),
    #[error("diesel error: {0}")]
    Diesel(#[from] diesel::result::Error),
}

pub struct SectionImageService {
    db_pool: Pool<AsyncPgConnection>,
}

impl SectionImageService {
    pub fn new(db_pool: Pool<AsyncPgConnection>) -> Arc<Self> {
        Arc::new(Self { db_pool })
    }

    /// Creates a new section image. An absent description is stored as null
    /// and tags default to an empty list.
    pub async fn create_section_image(
        &self,
        url: &str,
        label: &str,
        description: Option<&str>,
        tags: &[String],
    ) -> Result<SectionImage, SectionImageServiceError> {
        use crate::db::schema;

        let db = &mut self.db_pool.get().await?;
        let section_image = diesel::insert_into(schema::section_images::table)
            .values(CreatingSectionImage {
                url,
                label,
                description,
                tags: tags.to_vec(),
            })
            .returning((
                schema::section_images::id,
                schema::section_images::url,
                schema::section_images::label,
                schema::section_images::description,
                schema::section_images::tags,
                schema::section_images::created_at,
            ))
            .get_result::<SectionImage>(db)
            .await?;

        Ok(section_image)
    }

    /// Retrieves section images, newest first, optionally filtered by exact
    /// label and by tag membership.
    pub async fn get_section_images(
        &self,
        label: Option<&str>,
        tag: Option<&str>,
    ) -> Result<Vec<SectionImage>, SectionImageServiceError> {
        use crate::db::schema;

        let db = &mut self.db_pool.get().await?;
        let mut query = schema::section_images::dsl::section_images
            .select((
                schema::section_images::id,
                schema::section_images::url,
                schema::section_images::label,
                schema::section_images::description,
                schema::section_images::tags,
                schema::section_images::created_at,
            ))
            .order(schema::section_images::created_at.desc())
            .into_boxed();

        if let Some(label) = label {
            query = query.filter(schema::section_images::label.eq(label));
        }

        if let Some(tag) = tag {
            query = query.filter(schema::section_images::tags.contains(vec![tag]));
        }

        let section_images = query.load::<SectionImage>(db).await?;

        Ok(section_images)
    }

    /// Retrieves a section image by its ID.
    pub async fn get_section_image_by_id(
        &self,
        section_image_id: Uuid,
    ) -> Result<Option<SectionImage>, SectionImageServiceError> {
        use crate::db::schema;

        let db = &mut self.db_pool.get().await?;
        let section_image = schema::section_images::dsl::section_images
            .filter(schema::section_images::id.eq(section_image_id))
            .select((
                schema::section_images::id,
                schema::section_images::url,
                schema::section_images::label,
                schema::section_images::description,
                schema::section_images::tags,
                schema::section_images::created_at,
            ))
            .first::<SectionImage>(db)
            .await
            .optional()?;

        Ok(section_image)
    }

    /// Partially updates a section image by its ID. Fields passed as `None`
    /// are left unchanged; a description of `Some(None)` clears it.
    /// Returns the updated section image, or `None` if it was not found.
    pub async fn update_section_image_by_id(
        &self,
        section_image_id: Uuid,
        new_label: Option<&str>,
        new_description: Option<Option<&str>>,
        new_tags: Option<&[String]>,
    ) -> Result<Option<SectionImage>, SectionImageServiceError> {
        use crate::db::schema;

        let current = self.get_section_image_by_id(section_image_id).await?;
        let current = match current {
            Some(current) => current,
            None => return Ok(None),
        };

        let label = new_label.unwrap_or(&current.label);
        let description = match new_description {
            Some(description) => description,
            None => current.description.as_deref(),
        };
        let tags = match new_tags {
            Some(tags) => tags.to_vec(),
            None => current.tags.clone(),
        };

        let db = &mut self.db_pool.get().await?;
        let section_image = diesel::update(
            schema::section_images::dsl::section_images
                .filter(schema::section_images::id.eq(section_image_id)),
        )
        .set(UpdatingSectionImage {
            label,
            description,
            tags,
        })
        .returning((
            schema::section_images::id,
            schema::section_images::url,
            schema::section_images::label,
            schema::section_images::description,
            schema::section_images::tags,
            schema::section_images::created_at,
        ))
        .get_result::<SectionImage>(db)
        .await
        .optional()?;

        Ok(section_image)
    }

    /// Removes a section image by its ID.
    /// Returns whether a record was actually removed; removing an already
    /// absent record is not an error.
    pub async fn remove_section_image_by_id(
        &self,
        section_image_id: Uuid,
    ) -> Result<bool, SectionImageServiceError> {
        use crate::db::schema;

        let db = &mut self.db_pool.get().await?;
        let removed = diesel::delete(
            schema::section_images::dsl::section_images
                .filter(schema::section_images::id.eq(section_image_id)),
        )
        .execute(db)
        .await?;

        Ok(0 < removed)
    }
}
