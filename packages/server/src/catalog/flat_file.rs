use std::path::PathBuf;

use async_trait::async_trait;
use common::storage::ImageName;
use serde::{Deserialize, Serialize};
use tokio::fs;

use super::{CatalogError, CatalogStore};
use crate::models::item::Item;

/// Flat-file catalog backend: the whole catalog is one JSON document,
/// `{"items":[{"name","category","imageFileName"},...]}`, rewritten on every
/// add. Items carry no persisted id; `get_by_id` interprets the id as the
/// zero-based position in document order, which drifts as items are appended.
pub struct FlatFileCatalog {
    path: PathBuf,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    items: Vec<StoredItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredItem {
    name: String,
    category: String,
    image_file_name: String,
}

impl StoredItem {
    fn into_item(self, position: usize) -> Item {
        Item {
            id: position as i32,
            name: self.name,
            category: self.category,
            image_file_name: self.image_file_name,
        }
    }
}

impl FlatFileCatalog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the whole document. A merely-absent file is an empty catalog.
    async fn load(&self) -> Result<Document, CatalogError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Document::default());
            }
            Err(e) => return Err(CatalogError::Storage(e.to_string())),
        };

        serde_json::from_slice(&bytes).map_err(|e| CatalogError::Storage(e.to_string()))
    }

    /// Rewrite the whole document via a temp file and an atomic rename, so a
    /// crash mid-write never leaves a truncated catalog behind.
    async fn store(&self, doc: &Document) -> Result<(), CatalogError> {
        let bytes = serde_json::to_vec(doc).map_err(|e| CatalogError::Storage(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        if let Err(e) = fs::write(&temp_path, &bytes).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(CatalogError::Storage(e.to_string()));
        }

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(CatalogError::Storage(e.to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl CatalogStore for FlatFileCatalog {
    async fn add(
        &self,
        name: &str,
        category: &str,
        image_original_filename: &str,
    ) -> Result<Item, CatalogError> {
        let image_name = ImageName::from_original(image_original_filename)
            .map_err(|_| CatalogError::InvalidImageFormat(image_original_filename.to_string()))?;

        let mut doc = self.load().await?;
        let position = doc.items.len();
        let stored = StoredItem {
            name: name.to_string(),
            category: category.to_string(),
            image_file_name: image_name.as_str().to_string(),
        };
        doc.items.push(stored.clone());
        self.store(&doc).await?;

        Ok(stored.into_item(position))
    }

    async fn list(&self) -> Result<Vec<Item>, CatalogError> {
        let doc = self.load().await?;
        Ok(doc
            .items
            .into_iter()
            .enumerate()
            .map(|(position, stored)| stored.into_item(position))
            .collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Item, CatalogError> {
        let position = usize::try_from(id).map_err(|_| CatalogError::NotFound(id))?;

        let doc = self.load().await?;
        doc.items
            .into_iter()
            .nth(position)
            .map(|stored| stored.into_item(position))
            .ok_or(CatalogError::NotFound(id))
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Item>, CatalogError> {
        // Plain substring containment; the LIKE wildcard quirk of the SQLite
        // backend does not apply here.
        let doc = self.load().await?;
        Ok(doc
            .items
            .into_iter()
            .enumerate()
            .filter(|(_, stored)| stored.name.contains(keyword))
            .map(|(position, stored)| stored.into_item(position))
            .collect())
    }
}
