use std::sync::Arc;

use tracing::{Level, info};

use common::storage::FilesystemImageStore;
use server::catalog::{CatalogStore, FlatFileCatalog, SqliteCatalog};
use server::config::{AppConfig, CatalogBackend};
use server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load()?;

    let catalog: Arc<dyn CatalogStore> = match config.catalog.backend {
        CatalogBackend::Sqlite => {
            let db = server::database::init_db(&config.catalog.database_url).await?;
            Arc::new(SqliteCatalog::new(db))
        }
        CatalogBackend::FlatFile => {
            Arc::new(FlatFileCatalog::new(config.catalog.flat_file_path.clone()))
        }
    };

    let images = Arc::new(
        FilesystemImageStore::new(config.images.dir.clone(), config.images.max_image_size).await?,
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        catalog,
        images,
        config,
    };
    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
