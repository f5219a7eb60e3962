//! Request types for the analytics API.
//!
//! This module extracts the uploaded file from a `multipart/form-data`
//! body for the `/upload` endpoint.

use axum::body::Bytes;
use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;

/// Name of the form field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

/// A file received by the `/upload` endpoint.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// The client-supplied filename, if any.
    pub filename: Option<String>,
    /// The declared content type, if any.
    pub content_type: Option<String>,
    /// The raw file content.
    pub content: Bytes,
}

impl UploadedFile {
    /// Reads the `file` part out of a multipart body.
    ///
    /// Other parts are skipped. Returns `Ok(None)` if no `file` part exists.
    pub async fn from_multipart(multipart: &mut Multipart) -> Result<Option<Self>, MultipartError> {
        while let Some(field) = multipart.next_field().await? {
            if field.name() != Some(UPLOAD_FIELD) {
                continue;
            }

            let filename = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let content = field.bytes().await?;

            return Ok(Some(Self {
                filename,
                content_type,
                content,
            }));
        }
        Ok(None)
    }
}
