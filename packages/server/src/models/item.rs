use serde::Serialize;

/// A catalog entry as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Primary key for the SQLite backend; zero-based storage position for
    /// the flat-file backend (not stable across appends).
    #[schema(example = 1)]
    pub id: i32,
    /// Display name, stored verbatim.
    #[schema(example = "shoes")]
    pub name: String,
    /// Free-text category, stored verbatim.
    #[schema(example = "fashion")]
    pub category: String,
    /// Content-addressed image file name (SHA-256 of the original upload
    /// filename, plus the extension). Never the caller-supplied filename.
    #[schema(example = "ab8c0473395ba00807e93ce474c7fa875f27b8a63020c446f787dbe9ef0db3e2.jpg")]
    pub image_file_name: String,
}

/// Response DTO for the full catalog.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ItemListResponse {
    pub items: Vec<Item>,
}

/// Generic message envelope.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = "item received: shoes")]
    pub message: String,
}
