use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

use super::error::StorageError;

/// The only accepted image extension. Matching is case-sensitive, so
/// `photo.JPG` is rejected.
pub const IMAGE_EXTENSION: &str = ".jpg";

/// A validated, content-addressed image file name.
///
/// The address is `hex(SHA-256(original_filename)) + ".jpg"`. The hash input
/// is the whole original filename (including its extension), not the file
/// contents, so two different images uploaded under the same original name
/// resolve to the same address and silently overwrite one another.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ImageName(String);

impl ImageName {
    /// Compute the content address for an original upload filename.
    pub fn from_original(original: &str) -> Result<Self, StorageError> {
        if !original.ends_with(IMAGE_EXTENSION) {
            return Err(StorageError::UnsupportedExtension(original.to_string()));
        }

        let digest = Sha256::digest(original.as_bytes());
        Ok(Self(format!("{}{IMAGE_EXTENSION}", hex::encode(digest))))
    }

    /// Accept an already-addressed name, e.g. from a request path segment.
    ///
    /// Performs no hashing. The name must carry the accepted extension and
    /// must be a plain filename, so a request cannot escape the image
    /// directory.
    pub fn from_addressed(name: &str) -> Result<Self, StorageError> {
        if !name.ends_with(IMAGE_EXTENSION) {
            return Err(StorageError::UnsupportedExtension(name.to_string()));
        }

        if name.contains('/') || name.contains('\\') || name.contains('\0') {
            return Err(StorageError::InvalidName(name.to_string()));
        }

        Ok(Self(name.to_string()))
    }

    /// The addressed file name, e.g. `ab8c...b3e2.jpg`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageName({})", self.0)
    }
}

impl fmt::Display for ImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ImageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for ImageName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
