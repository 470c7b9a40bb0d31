use super::{file_driver::FileDriver, SectionImageService, SectionImageServiceError};
use crate::db::models::SectionImage;
use chrono::Utc;
use rocket::{fs::TempFile, http::ContentType};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum UploadServiceError {
    #[error("io error: {0}")]
    IO(#[from] std::io::Error),
    #[error("{0}")]
    SectionImageService(#[from] SectionImageServiceError),
}

pub struct UploadService {
    section_image_service: Arc<SectionImageService>,
    file_driver: Arc<dyn FileDriver + Send + Sync>,
}

impl UploadService {
    pub fn new(
        section_image_service: Arc<SectionImageService>,
        file_driver: Arc<impl 'static + FileDriver + Send + Sync>,
    ) -> Arc<Self> {
        Arc::new(Self {
            section_image_service,
            file_driver,
        })
    }

    /// Stores an uploaded image in the content directory under a generated
    /// name and records its metadata.
    /// The stored file is not rolled back if the metadata write fails.
    pub async fn store_section_image(
        &self,
        file: &mut TempFile<'_>,
        label: &str,
        description: Option<&str>,
        tags: &[String],
    ) -> Result<SectionImage, UploadServiceError> {
        let name = generate_file_name(file.content_type());
        self.file_driver.store(&name, file).await?;

        let url = format!("/uploads/{}", name);
        let section_image = self
            .section_image_service
            .create_section_image(&url, label, description, tags)
            .await?;

        Ok(section_image)
    }
}

/// Maps a declared content type to a stored file extension.
/// Unknown and missing types default to `.png`.
fn file_extension(content_type: Option<&ContentType>) -> &'static str {
    match content_type {
        Some(content_type) if content_type == &ContentType::JPEG => ".jpg",
        Some(content_type) if content_type == &ContentType::WEBP => ".webp",
        _ => ".png",
    }
}

/// Generates a collision-resistant file name from the current time and a
/// random suffix, with an extension derived from the declared content type.
fn generate_file_name(content_type: Option<&ContentType>) -> String {
    format!(
        "{}-{}{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple(),
        file_extension(content_type)
    )
}

/// Parses the JSON-encoded tag list carried by upload forms.
/// Malformed input degrades to an empty list instead of failing the upload.
pub fn parse_tags(raw: Option<&str>) -> Vec<String> {
    let raw = match raw {
        Some(raw) => raw,
        None => return Vec::new(),
    };

    serde_json::from_str::<Vec<String>>(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(Some(&ContentType::PNG)), ".png");
        assert_eq!(file_extension(Some(&ContentType::JPEG)), ".jpg");
        assert_eq!(file_extension(Some(&ContentType::WEBP)), ".webp");
        assert_eq!(file_extension(Some(&ContentType::PDF)), ".png");
        assert_eq!(file_extension(None), ".png");
    }

    #[test]
    fn test_generate_file_name_is_unique() {
        let lhs = generate_file_name(Some(&ContentType::PNG));
        let rhs = generate_file_name(Some(&ContentType::PNG));

        assert!(lhs.ends_with(".png"));
        assert_ne!(lhs, rhs);
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            parse_tags(Some(r#"["hero","dark"]"#)),
            vec!["hero".to_string(), "dark".to_string()]
        );
        assert_eq!(parse_tags(Some("[]")), Vec::<String>::new());
        assert_eq!(parse_tags(Some("not json")), Vec::<String>::new());
        assert_eq!(parse_tags(Some(r#"{"a":1}"#)), Vec::<String>::new());
        assert_eq!(parse_tags(None), Vec::<String>::new());
    }
}
