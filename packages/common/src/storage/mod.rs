mod error;
mod name;
mod traits;

pub mod filesystem;

pub use error::StorageError;
pub use filesystem::{DEFAULT_IMAGE, FilesystemImageStore};
pub use name::{IMAGE_EXTENSION, ImageName};
pub use traits::ImageStore;
