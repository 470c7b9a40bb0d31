use super::FileDriver;
use rocket::{async_trait, fs::TempFile};
use std::path::PathBuf;

/// Stores uploaded images in a local directory, which is expected to be
/// served publicly under `/uploads`.
pub struct LocalFileSystem {
    uploads_path: PathBuf,
}

impl LocalFileSystem {
    pub async fn new(uploads_path: impl Into<PathBuf>) -> Result<Self, std::io::Error> {
        let uploads_path = uploads_path.into();

        let uploads_path_exists = tokio::fs::try_exists(&uploads_path).await;
        let uploads_path_exists = match uploads_path_exists {
            Ok(exists) => exists,
            Err(err) => {
                log::error!(target: "file_driver", method="new", uploads_path:?, err:err; "Failed to check if uploads path exists.");
                return Err(err);
            }
        };

        if !uploads_path_exists {
            if let Err(err) = tokio::fs::create_dir_all(&uploads_path).await {
                log::error!(target: "file_driver", method="new", uploads_path:?, err:err; "Failed to create uploads path.");
                return Err(err);
            }
        }

        Ok(Self { uploads_path })
    }

    fn generate_file_path(&self, name: &str) -> PathBuf {
        self.uploads_path.join(name)
    }
}

#[async_trait]
impl FileDriver for LocalFileSystem {
    async fn store(&self, name: &str, file: &mut TempFile<'_>) -> Result<(), std::io::Error> {
        let path = self.generate_file_path(name);

        // move_copy_to falls back to a copy when the temp dir is on another device
        if let Err(err) = file.move_copy_to(&path).await {
            log::error!(target: "file_driver", method="store", name, path:?, err:err; "Failed to store file.");
            return Err(err);
        }

        Ok(())
    }
}
