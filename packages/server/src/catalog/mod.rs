mod flat_file;
mod sqlite;

pub use flat_file::FlatFileCatalog;
pub use sqlite::SqliteCatalog;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::item::Item;

/// Errors produced by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("image extension is not jpg: {0}")]
    InvalidImageFormat(String),
    #[error("item {0} not found")]
    NotFound(i32),
    #[error("catalog storage error: {0}")]
    Storage(String),
}

impl From<sea_orm::DbErr> for CatalogError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Storage(err.to_string())
    }
}

/// The item catalog, independent of which persistence generation backs it.
///
/// Two implementations exist: [`SqliteCatalog`] (rows in a single table,
/// real auto-increment ids) and [`FlatFileCatalog`] (one JSON document,
/// positional ids). The backend is chosen by configuration; handlers only
/// see this trait.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Append a new item. The image filename must end in `.jpg`
    /// (case-sensitive); on a rejected extension nothing is persisted.
    /// The stored `image_file_name` is the content address, never the
    /// caller-supplied filename.
    async fn add(
        &self,
        name: &str,
        category: &str,
        image_original_filename: &str,
    ) -> Result<Item, CatalogError>;

    /// All items in storage order.
    async fn list(&self) -> Result<Vec<Item>, CatalogError>;

    /// Look up one item. Id semantics are per backend: primary key for
    /// SQLite, zero-based position for the flat file.
    async fn get_by_id(&self, id: i32) -> Result<Item, CatalogError>;

    /// Substring match of `keyword` against item names. An empty keyword
    /// matches everything; no match yields an empty vec.
    async fn search(&self, keyword: &str) -> Result<Vec<Item>, CatalogError>;
}
