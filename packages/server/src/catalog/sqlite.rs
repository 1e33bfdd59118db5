use async_trait::async_trait;
use common::storage::ImageName;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::{CatalogError, CatalogStore};
use crate::entity::item;
use crate::models::item::Item;

/// SQLite catalog backend: one row per item, ids are real auto-increment
/// primary keys. The connection is constructed once at startup and injected
/// here rather than re-opened per operation.
pub struct SqliteCatalog {
    db: DatabaseConnection,
}

impl SqliteCatalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<item::Model> for Item {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            category: model.category,
            image_file_name: model.image_file_name,
        }
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalog {
    async fn add(
        &self,
        name: &str,
        category: &str,
        image_original_filename: &str,
    ) -> Result<Item, CatalogError> {
        let image_name = ImageName::from_original(image_original_filename)
            .map_err(|_| CatalogError::InvalidImageFormat(image_original_filename.to_string()))?;

        let active = item::ActiveModel {
            name: Set(name.to_string()),
            category: Set(category.to_string()),
            image_file_name: Set(image_name.as_str().to_string()),
            ..Default::default()
        };

        let model = active.insert(&self.db).await?;
        Ok(model.into())
    }

    async fn list(&self) -> Result<Vec<Item>, CatalogError> {
        let models = item::Entity::find().all(&self.db).await?;
        Ok(models.into_iter().map(Item::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Item, CatalogError> {
        item::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Item::from)
            .ok_or(CatalogError::NotFound(id))
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Item>, CatalogError> {
        // The keyword is deliberately not escaped, so `%` and `_` keep their
        // LIKE wildcard meaning. Known quirk, kept for compatibility with the
        // original service.
        let models = item::Entity::find()
            .filter(item::Column::Name.like(format!("%{keyword}%")))
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Item::from).collect())
    }
}
