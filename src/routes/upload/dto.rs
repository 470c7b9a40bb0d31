use rocket::{form::FromForm, fs::TempFile};

#[derive(FromForm)]
pub struct UploadForm<'r> {
    pub file: Option<TempFile<'r>>,
    pub label: Option<String>,
    pub description: Option<String>,
    /// A JSON-encoded string array.
    pub tags: Option<String>,
}
