use async_trait::async_trait;

use super::error::StorageError;
use super::name::ImageName;

/// Content-addressed image storage.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store uploaded bytes under the content address computed from the
    /// original filename. Overwrites any existing blob with the same address.
    async fn save(
        &self,
        original_filename: &str,
        bytes: &[u8],
    ) -> Result<ImageName, StorageError>;

    /// Retrieve the bytes for an addressed image.
    ///
    /// A missing image is substituted with the fixed default image so the
    /// front end never shows a broken picture; only a missing default is an
    /// error.
    async fn fetch(&self, name: &ImageName) -> Result<Vec<u8>, StorageError>;

    /// Check whether an addressed image exists (the default image does not
    /// count as a substitute here).
    async fn exists(&self, name: &ImageName) -> Result<bool, StorageError>;
}
