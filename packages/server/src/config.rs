use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

/// Which persistence generation backs the catalog.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogBackend {
    /// SQLite table; ids are real primary keys.
    Sqlite,
    /// Single JSON document rewritten on each add; ids are positional and
    /// drift as items are appended.
    FlatFile,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub backend: CatalogBackend,
    pub database_url: String,
    pub flat_file_path: PathBuf,
}

/// How image-save failures during item creation are reported.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ImagePersistence {
    /// Log and swallow; the API still reports success for the item metadata.
    BestEffort,
    /// Propagate the failure as a 500.
    Strict,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImageConfig {
    pub dir: PathBuf,
    /// Maximum accepted image size in bytes. The multipart body limit of the
    /// upload route is derived from this value.
    pub max_image_size: u64,
    pub persistence: ImagePersistence,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub images: ImageConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 9000)?
            .set_default("server.cors.allow_origins", vec!["http://localhost:3000"])?
            .set_default("server.cors.max_age", 3600)?
            .set_default("catalog.backend", "sqlite")?
            .set_default("catalog.database_url", "sqlite://items.db?mode=rwc")?
            .set_default("catalog.flat_file_path", "items.json")?
            .set_default("images.dir", "images")?
            .set_default("images.max_image_size", 8 * 1024 * 1024)?
            .set_default("images.persistence", "best-effort")?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., CATALOG__SERVER__PORT)
            .add_source(Environment::with_prefix("CATALOG").separator("__"))
            .build()?;

        let mut cfg: AppConfig = s.try_deserialize()?;

        // The front end sets its origin through FRONT_URL; keep honoring it.
        if let Ok(front_url) = std::env::var("FRONT_URL")
            && !front_url.is_empty()
        {
            cfg.server.cors.allow_origins = vec![front_url];
        }

        Ok(cfg)
    }
}
