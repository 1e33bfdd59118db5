use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::Response;
use common::storage::{ImageName, StorageError};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/image/{image_filename}",
    tag = "Images",
    operation_id = "getImage",
    summary = "Fetch an image blob",
    description = "Serves a stored image by its content-addressed name. A missing \
        image is silently substituted with the default image rather than a 404, so \
        the front end never shows a broken picture.",
    params(("image_filename" = String, Path, description = "Addressed image file name")),
    responses(
        (status = 200, description = "Image bytes"),
        (status = 400, description = "Name does not end with .jpg (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Storage failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_image(
    State(state): State<AppState>,
    Path(image_filename): Path<String>,
) -> Result<Response, AppError> {
    let name = ImageName::from_addressed(&image_filename).map_err(|e| match e {
        StorageError::UnsupportedExtension(_) => {
            AppError::Validation("Image path does not end with .jpg".into())
        }
        other => AppError::Validation(other.to_string()),
    })?;

    let bytes = state.images.fetch(&name).await?;
    let mime = mime_guess::from_path(name.as_str()).first_or_octet_stream();

    Response::builder()
        .header(header::CONTENT_TYPE, mime.as_ref())
        .body(Body::from(bytes))
        .map_err(|e| AppError::Internal(e.to_string()))
}
