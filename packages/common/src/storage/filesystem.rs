use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::error::StorageError;
use super::name::ImageName;
use super::traits::ImageStore;

/// Name of the fallback image served when an addressed image is missing.
pub const DEFAULT_IMAGE: &str = "default.jpg";

/// Filesystem-backed content-addressed image store.
///
/// Images live directly under `{base_path}/{addressed name}`. Writes go
/// through `{base_path}/.tmp` and are renamed into place, so a blob is never
/// observed half-written.
pub struct FilesystemImageStore {
    base_path: PathBuf,
    max_size: u64,
}

impl FilesystemImageStore {
    /// Create a new image store, creating the image directory if needed.
    pub async fn new(base_path: PathBuf, max_size: u64) -> Result<Self, StorageError> {
        fs::create_dir_all(&base_path).await?;
        fs::create_dir_all(base_path.join(".tmp")).await?;
        Ok(Self {
            base_path,
            max_size,
        })
    }

    fn image_path(&self, name: &ImageName) -> PathBuf {
        self.base_path.join(name.as_str())
    }

    fn temp_path(&self, name: &ImageName) -> PathBuf {
        self.base_path.join(".tmp").join(name.as_str())
    }
}

#[async_trait]
impl ImageStore for FilesystemImageStore {
    async fn save(
        &self,
        original_filename: &str,
        bytes: &[u8],
    ) -> Result<ImageName, StorageError> {
        if bytes.len() as u64 > self.max_size {
            return Err(StorageError::SizeLimitExceeded {
                actual: bytes.len() as u64,
                limit: self.max_size,
            });
        }

        let name = ImageName::from_original(original_filename)?;
        let temp_path = self.temp_path(&name);

        let mut temp_file = fs::File::create(&temp_path).await?;
        if let Err(e) = temp_file.write_all(bytes).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }
        if let Err(e) = temp_file.flush().await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }
        drop(temp_file);

        if let Err(e) = fs::rename(&temp_path, self.image_path(&name)).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        Ok(name)
    }

    async fn fetch(&self, name: &ImageName) -> Result<Vec<u8>, StorageError> {
        match fs::read(self.image_path(name)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("image not found, serving default: {name}");
                let default = self.base_path.join(DEFAULT_IMAGE);
                match fs::read(&default).await {
                    Ok(bytes) => Ok(bytes),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                        Err(StorageError::NotFound(DEFAULT_IMAGE.to_string()))
                    }
                    Err(e) => Err(e.into()),
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, name: &ImageName) -> Result<bool, StorageError> {
        Ok(fs::try_exists(self.image_path(name)).await?)
    }
}
