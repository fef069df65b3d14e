use serde::Deserialize;
use utoipa::ToSchema;

/// Multipart form accepted by the upload endpoint.
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct FileUploadForm {
    /// PDF document, at most 20 MiB.
    #[schema(value_type = String, format = Binary)]
    pub file: String,
}
