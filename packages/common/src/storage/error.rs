use std::fmt;

/// Errors that can occur during image storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// The requested image was not found (and no fallback was available).
    NotFound(String),
    /// An I/O error occurred.
    Io(std::io::Error),
    /// The filename does not carry the accepted image extension.
    UnsupportedExtension(String),
    /// The requested name is not a plain filename (path separators, traversal).
    InvalidName(String),
    /// The image exceeds the configured size limit.
    SizeLimitExceeded { actual: u64, limit: u64 },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "image not found: {name}"),
            Self::Io(err) => write!(f, "storage IO error: {err}"),
            Self::UnsupportedExtension(name) => {
                write!(f, "image extension is not jpg: {name}")
            }
            Self::InvalidName(name) => write!(f, "invalid image name: {name}"),
            Self::SizeLimitExceeded { actual, limit } => {
                write!(f, "image exceeds size limit ({actual} > {limit} bytes)")
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
