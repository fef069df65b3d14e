//! Document download and PDF upload.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::server::{config::FilesConfig, error::AppError};

/// Largest accepted upload, in bytes (20 MiB).
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub const ACCEPTED_CONTENT_TYPE: &str = "application/pdf";

pub const INVALID_UPLOAD_MESSAGE: &str = "No file or an invalid one has been inputed";
pub const UPLOAD_SUCCESS_MESSAGE: &str = "Your file has been uploaded successfully";

/// A document read from disk, ready to be sent as an attachment.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A file received from a multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Non-empty, at most `MAX_UPLOAD_BYTES`, and declared as a PDF.
    pub fn is_acceptable(&self) -> bool {
        !self.bytes.is_empty()
            && self.bytes.len() <= MAX_UPLOAD_BYTES
            && self
                .content_type
                .as_deref()
                .is_some_and(|content_type| content_type.eq_ignore_ascii_case(ACCEPTED_CONTENT_TYPE))
    }
}

#[derive(Debug, Clone)]
pub struct FileService {
    document_path: PathBuf,
    upload_dir: PathBuf,
}

impl FileService {
    pub fn new(document_path: impl Into<PathBuf>, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            document_path: document_path.into(),
            upload_dir: upload_dir.into(),
        }
    }

    pub fn from_config(config: &FilesConfig) -> Self {
        Self::new(config.document_path.clone(), config.upload_dir.clone())
    }

    /// Reads the served document.
    ///
    /// Every file id maps to the same configured document.
    ///
    /// # Returns
    /// - `Ok(Some(Document))` - Document contents with its guessed content type
    /// - `Ok(None)` - The document does not exist
    /// - `Err(AppError::IoErr)` - The document exists but could not be read
    pub async fn get_document(&self, file_id: &str) -> Result<Option<Document>, AppError> {
        let bytes = match tokio::fs::read(&self.document_path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "Document for file id {} not found at {}",
                    file_id,
                    self.document_path.display()
                );
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Some(Document {
            file_name: file_name(&self.document_path),
            content_type: mime_guess::from_path(&self.document_path)
                .first_or_octet_stream()
                .to_string(),
            bytes,
        }))
    }

    /// Stores an uploaded PDF under a fresh unique name.
    ///
    /// # Returns
    /// - `Ok(PathBuf)` - Where the file was written
    /// - `Err(AppError::BadRequest)` - Empty, too large, or not a PDF
    /// - `Err(AppError::IoErr)` - Writing failed
    pub async fn upload(&self, file: UploadedFile) -> Result<PathBuf, AppError> {
        if !file.is_acceptable() {
            return Err(AppError::BadRequest(INVALID_UPLOAD_MESSAGE.to_string()));
        }

        tokio::fs::create_dir_all(&self.upload_dir).await?;

        let path = self
            .upload_dir
            .join(format!("uploaded_file_{}.pdf", Uuid::new_v4()));
        tokio::fs::write(&path, &file.bytes).await?;

        tracing::info!("Stored uploaded file at {}", path.display());

        Ok(path)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}
