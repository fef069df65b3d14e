use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::IntoResponse,
};

use crate::{
    model::{api::ErrorDto, file::FileUploadForm},
    server::{
        error::AppError,
        service::file::{UploadedFile, INVALID_UPLOAD_MESSAGE, UPLOAD_SUCCESS_MESSAGE},
        state::AppState,
    },
};

/// Tag for grouping file endpoints in OpenAPI documentation
pub static FILE_TAG: &str = "file";

/// API version served by the file endpoints
pub static FILES_API_VERSION: &str = "0.1";

const UPLOAD_FIELD: &str = "file";

/// Download a document.
///
/// Every file id resolves to the configured document, sent as an attachment.
///
/// # Returns
/// - `200 OK` - Document bytes
/// - `404 Not Found` - Document does not exist
/// - `500 Internal Server Error` - Document could not be read
#[utoipa::path(
    get,
    path = "/api/v0.1/files/{file_id}",
    tag = FILE_TAG,
    params(("file_id" = String, Path, description = "File id")),
    responses(
        (status = 200, description = "Document contents", content_type = "application/octet-stream", body = Vec<u8>),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_file(
    State(state): State<AppState>,
    Path(file_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let Some(document) = state.files.get_document(&file_id).await? else {
        return Err(AppError::NotFound(format!("File {} not found", file_id)));
    };

    Ok((
        [
            (header::CONTENT_TYPE, document.content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", document.file_name),
            ),
        ],
        document.bytes,
    ))
}

/// Upload a PDF document.
///
/// Reads the `file` field of a multipart form. The file must be non-empty, at most
/// 20 MiB, and sent as `application/pdf`.
///
/// # Returns
/// - `200 OK` - File stored
/// - `400 Bad Request` - No file, or an empty, oversized, or non-PDF one
/// - `500 Internal Server Error` - File could not be written
#[utoipa::path(
    post,
    path = "/api/v0.1/files",
    tag = FILE_TAG,
    request_body(content = FileUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored", body = String),
        (status = 400, description = "Missing or invalid file", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_upload)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(invalid_upload)?;

        upload = Some(UploadedFile {
            content_type,
            bytes: bytes.to_vec(),
        });
        break;
    }

    let Some(file) = upload else {
        return Err(AppError::BadRequest(INVALID_UPLOAD_MESSAGE.to_string()));
    };

    state.files.upload(file).await?;

    Ok(UPLOAD_SUCCESS_MESSAGE)
}

fn invalid_upload(err: axum::extract::multipart::MultipartError) -> AppError {
    tracing::debug!("Failed to read multipart upload: {}", err.body_text());
    AppError::BadRequest(INVALID_UPLOAD_MESSAGE.to_string())
}
