use crate::db::models::{CreatingSubmission, Favorite, Submission, User};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::{pooled_connection::deadpool::Pool, AsyncPgConnection, RunQueryDsl};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, sync::Arc};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum SubmissionServiceError {
    #[error("database pool error: {0}")]
    Pool(#[from] diesel_async::pooled_connection::deadpool::PoolError),
    #[error("diesel error: {0}")]
    Diesel(#[from] diesel::result::Error),
    #[error("the user `{user_id}` does not exist")]
    UnknownUser { user_id: i32 },
}

/// A submission joined with its owner's public fields and the IDs of the
/// users who favorited it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionWithOwner {
    #[serde(flatten)]
    pub submission: Submission,
    pub owner: User,
    pub favorites: Vec<i32>,
}

pub struct SubmissionService {
    db_pool: Pool<AsyncPgConnection>,
}

impl SubmissionService {
    pub fn new(db_pool: Pool<AsyncPgConnection>) -> Arc<Self> {
        Arc::new(Self { db_pool })
    }

    /// Creates a new submission owned by the given user.
    pub async fn create_submission(
        &self,
        user_id: i32,
        title: &str,
        url: &str,
        description: &str,
    ) -> Result<Submission, SubmissionServiceError> {
        use crate::db::schema;

        let db = &mut self.db_pool.get().await?;
        let submission = diesel::insert_into(schema::submissions::table)
            .values(CreatingSubmission {
                title,
                url,
                description,
                user_id,
            })
            .returning((
                schema::submissions::id,
                schema::submissions::title,
                schema::submissions::url,
                schema::submissions::description,
                schema::submissions::user_id,
                schema::submissions::created_at,
            ))
            .get_result::<Submission>(db)
            .await;

        let submission = match submission {
            Ok(submission) => submission,
            Err(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                err,
            )) if err.constraint_name() == Some("submissions_user_fk") => {
                return Err(SubmissionServiceError::UnknownUser { user_id });
            }
            Err(err) => return Err(err.into()),
        };

        Ok(submission)
    }

    /// Retrieves all submissions, newest first, each with the owner's public
    /// fields and the IDs of the users who favorited it.
    pub async fn get_submissions(
        &self,
    ) -> Result<Vec<SubmissionWithOwner>, SubmissionServiceError> {
        use crate::db::schema;

        let db = &mut self.db_pool.get().await?;
        let rows = schema::submissions::table
            .inner_join(schema::users::table)
            .order(schema::submissions::created_at.desc())
            .select((
                (
                    schema::submissions::id,
                    schema::submissions::title,
                    schema::submissions::url,
                    schema::submissions::description,
                    schema::submissions::user_id,
                    schema::submissions::created_at,
                ),
                (
                    schema::users::id,
                    schema::users::username,
                    schema::users::email,
                    schema::users::joined_at,
                ),
            ))
            .load::<(Submission, User)>(db)
            .await?;

        let submission_ids = rows
            .iter()
            .map(|(submission, _)| submission.id)
            .collect::<Vec<_>>();
        let favorites = schema::favorites::dsl::favorites
            .filter(schema::favorites::submission_id.eq_any(&submission_ids))
            .select((
                schema::favorites::user_id,
                schema::favorites::submission_id,
            ))
            .load::<Favorite>(db)
            .await?;

        let mut favorites_by_submission = HashMap::<Uuid, Vec<i32>>::new();

        for favorite in favorites {
            favorites_by_submission
                .entry(favorite.submission_id)
                .or_default()
                .push(favorite.user_id);
        }

        let submissions = rows
            .into_iter()
            .map(|(submission, owner)| {
                let favorites = favorites_by_submission
                    .remove(&submission.id)
                    .unwrap_or_default();
                SubmissionWithOwner {
                    submission,
                    owner,
                    favorites,
                }
            })
            .collect();

        Ok(submissions)
    }

    /// Retrieves a submission by its ID.
    pub async fn get_submission_by_id(
        &self,
        submission_id: Uuid,
    ) -> Result<Option<Submission>, SubmissionServiceError> {
        use crate::db::schema;

        let db = &mut self.db_pool.get().await?;
        let submission = schema::submissions::dsl::submissions
            .filter(schema::submissions::id.eq(submission_id))
            .select((
                schema::submissions::id,
                schema::submissions::title,
                schema::submissions::url,
                schema::submissions::description,
                schema::submissions::user_id,
                schema::submissions::created_at,
            ))
            .first::<Submission>(db)
            .await
            .optional()?;

        Ok(submission)
    }

    /// Retrieves the IDs of the users who favorited the given submission.
    pub async fn get_submission_favorites(
        &self,
        submission_id: Uuid,
    ) -> Result<Vec<i32>, SubmissionServiceError> {
        use crate::db::schema;

        let db = &mut self.db_pool.get().await?;
        let user_ids = schema::favorites::dsl::favorites
            .filter(schema::favorites::submission_id.eq(submission_id))
            .select(schema::favorites::user_id)
            .load::<i32>(db)
            .await?;

        Ok(user_ids)
    }

    /// Toggles the favorite relation between a user and a submission.
    /// Returns `Some(true)` if the submission is now favorited by the user,
    /// `Some(false)` if it no longer is, or `None` if the submission does not exist.
    ///
    /// Each arm is a single atomic statement against the favorites relation,
    /// so concurrent toggles by the same user cannot double-apply.
    pub async fn toggle_favorite(
        &self,
        user_id: i32,
        submission_id: Uuid,
    ) -> Result<Option<bool>, SubmissionServiceError> {
        use crate::db::schema;

        let db = &mut self.db_pool.get().await?;
        let inserted = diesel::insert_into(schema::favorites::table)
            .values(Favorite {
                user_id,
                submission_id,
            })
            .on_conflict_do_nothing()
            .execute(db)
            .await;

        match inserted {
            Ok(0) => {}
            Ok(_) => return Ok(Some(true)),
            Err(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                err,
            )) if err.constraint_name() == Some("favorites_submission_fk") => {
                return Ok(None);
            }
            Err(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                err,
            )) if err.constraint_name() == Some("favorites_user_fk") => {
                return Err(SubmissionServiceError::UnknownUser { user_id });
            }
            Err(err) => return Err(err.into()),
        }

        // the pair already existed, so this toggle unfavorites
        diesel::delete(
            schema::favorites::dsl::favorites
                .filter(schema::favorites::user_id.eq(user_id))
                .filter(schema::favorites::submission_id.eq(submission_id)),
        )
        .execute(db)
        .await?;

        Ok(Some(false))
    }
}
