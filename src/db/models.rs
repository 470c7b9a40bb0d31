use chrono::NaiveDateTime;
use diesel::{
    associations::Identifiable, deserialize::Queryable, prelude::Insertable,
    query_builder::AsChangeset, Selectable,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Selectable, Queryable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::db::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub joined_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, Selectable, Queryable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::db::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct UserIdWithPassword {
    pub id: i32,
    pub password: String,
}

#[derive(Serialize, Deserialize, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::db::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CreatingUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize, Deserialize, Selectable, Queryable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::db::schema::submissions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub description: String,
    pub user_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::db::schema::submissions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CreatingSubmission<'a> {
    pub title: &'a str,
    pub url: &'a str,
    pub description: &'a str,
    pub user_id: i32,
}

#[derive(
    Serialize, Deserialize, Selectable, Queryable, Identifiable, Insertable, Debug, Clone, PartialEq,
)]
#[diesel(primary_key(user_id, submission_id))]
#[diesel(table_name = crate::db::schema::favorites)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub user_id: i32,
    pub submission_id: Uuid,
}

#[derive(Serialize, Deserialize, Selectable, Queryable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::db::schema::section_images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct SectionImage {
    pub id: Uuid,
    pub url: String,
    pub label: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::db::schema::section_images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CreatingSectionImage<'a> {
    pub url: &'a str,
    pub label: &'a str,
    pub description: Option<&'a str>,
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::db::schema::section_images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = true)]
pub struct UpdatingSectionImage<'a> {
    pub label: &'a str,
    pub description: Option<&'a str>,
    pub tags: Vec<String>,
}
