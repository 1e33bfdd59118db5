use std::sync::Arc;

use common::storage::ImageStore;

use crate::catalog::CatalogStore;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogStore>,
    pub images: Arc<dyn ImageStore>,
    pub config: AppConfig,
}
