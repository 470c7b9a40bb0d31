pub mod local_file_system;

use async_trait::async_trait;
use rocket::fs::TempFile;

/// Storage backend for uploaded images. Stored files are addressed by the
/// generated file name they were stored under.
#[async_trait]
pub trait FileDriver {
    /// Stores an uploaded file under the given name.
    /// The name must be unique; the driver never overwrites silently.
    async fn store(&self, name: &str, file: &mut TempFile<'_>) -> Result<(), std::io::Error>;
}
