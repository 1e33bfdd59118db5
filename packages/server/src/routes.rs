use axum::{Router, routing::get};

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

pub fn routes(config: &AppConfig) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::root))
        .route(
            "/items",
            get(handlers::item::list_items).post(handlers::item::add_item),
        )
        .route("/items/{item_id}", get(handlers::item::get_item))
        .route("/image/{image_filename}", get(handlers::image::get_image))
        .route("/search", get(handlers::item::search_items))
        .layer(handlers::item::upload_body_limit(
            config.images.max_image_size,
        ))
}
