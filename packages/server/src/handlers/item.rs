use axum::Json;
use axum::extract::{DefaultBodyLimit, Multipart, Path, Query, State};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::config::ImagePersistence;
use crate::error::{AppError, ErrorBody};
use crate::models::item::{Item, ItemListResponse, MessageResponse};
use crate::state::AppState;

/// Multipart body limit derived from the configured image size, with
/// headroom for the text fields and multipart framing. Oversized images are
/// then rejected by the image store itself rather than by the body limit.
pub fn upload_body_limit(max_image_size: u64) -> DefaultBodyLimit {
    let limit = max_image_size.saturating_add(64 * 1024);
    DefaultBodyLimit::max(usize::try_from(limit).unwrap_or(usize::MAX))
}

#[utoipa::path(
    get,
    path = "/items",
    tag = "Items",
    operation_id = "listItems",
    summary = "List the full catalog",
    responses(
        (status = 200, description = "All items in storage order", body = ItemListResponse),
        (status = 500, description = "Catalog unreadable (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_items(State(state): State<AppState>) -> Result<Json<ItemListResponse>, AppError> {
    let items = state.catalog.list().await?;
    Ok(Json(ItemListResponse { items }))
}

#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = "Items",
    operation_id = "getItem",
    summary = "Get one item",
    description = "Looks up a single item. For the SQLite backend the id is the \
        persisted primary key; for the flat-file backend it is the item's \
        zero-based position in storage order, which drifts as items are added.",
    params(("item_id" = i32, Path, description = "Item ID (backend-specific semantics)")),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 404, description = "Unknown item id (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Backend error (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> Result<Json<Item>, AppError> {
    let item = state.catalog.get_by_id(item_id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    post,
    path = "/items",
    tag = "Items",
    operation_id = "addItem",
    summary = "Add an item with its photo",
    description = "Multipart form with `name`, `category` and an `image` file. The \
        image's original filename must end in `.jpg`; the stored blob is named by \
        the SHA-256 hash of that filename. Catalog metadata is written first; in \
        best-effort mode an image-save failure is logged but the request still \
        succeeds.",
    request_body(content_type = "multipart/form-data", description = "Item fields plus image file"),
    responses(
        (status = 200, description = "Item received", body = MessageResponse),
        (status = 400, description = "Missing image field or bad extension (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Storage failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, multipart))]
pub async fn add_item(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MessageResponse>, AppError> {
    let mut name: Option<String> = None;
    let mut category: Option<String> = None;
    let mut image: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        match field.name() {
            Some("name") => {
                name = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read name: {e}"))
                })?);
            }
            Some("category") => {
                category = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read category: {e}"))
                })?);
            }
            Some("image") => {
                let filename = field
                    .file_name()
                    .map(|s| s.to_string())
                    .ok_or_else(|| AppError::Validation("Image field must have a filename".into()))?;
                let data = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Upload read error: {e}"))
                })?;
                image = Some((filename, data.to_vec()));
            }
            _ => {} // Ignore unknown fields.
        }
    }

    // Missing text fields arrive as empty strings, like form values in the
    // original service; only the image file itself is mandatory.
    let name = name.unwrap_or_default();
    let category = category.unwrap_or_default();
    let (filename, data) =
        image.ok_or_else(|| AppError::Validation("Missing 'image' field".into()))?;

    info!("Receive item: {name}");
    info!("Receive category: {category}");
    info!("Receive image: {filename}");

    let item = state.catalog.add(&name, &category, &filename).await?;

    if let Err(err) = state.images.save(&filename, &data).await {
        match state.config.images.persistence {
            ImagePersistence::BestEffort => {
                tracing::error!("Failed to save image {filename}: {err}");
            }
            // The catalog row is already persisted; strict mode reports the
            // half-failed write as a server error, whatever its cause.
            ImagePersistence::Strict => {
                return Err(AppError::Internal(format!(
                    "Failed to save image {filename}: {err}"
                )));
            }
        }
    }

    Ok(Json(MessageResponse {
        message: format!("item received: {}", item.name),
    }))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: String,
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "Items",
    operation_id = "searchItems",
    summary = "Search items by name",
    description = "Substring match of `keyword` against item names. An empty \
        keyword matches every item. On the SQLite backend the keyword is fed to \
        `LIKE` unescaped, so `%` and `_` act as wildcards.",
    params(("keyword" = String, Query, description = "Substring to match against item names")),
    responses(
        (status = 200, description = "Matching items (possibly empty)", body = [Item]),
        (status = 500, description = "Backend error (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn search_items(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.catalog.search(&query.keyword).await?;
    Ok(Json(items))
}
