use axum::Json;

use crate::models::item::MessageResponse;

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    operation_id = "root",
    summary = "Liveness check",
    responses((status = 200, description = "Service is up", body = MessageResponse)),
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello, world!".to_string(),
    })
}
