//! Response types for the analytics API.
//!
//! This module defines the upload success body, the error body and the
//! mapping from [`AnalyticsError`] to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;

/// Body returned after a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Human-readable confirmation.
    pub success: String,
    /// Number of records in the new dataset.
    pub records: usize,
    /// When the new dataset was built.
    pub loaded_at: DateTime<Utc>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates an invalid format error response.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new("INVALID_FORMAT", message)
    }

    /// Creates a payload too large error response.
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new("PAYLOAD_TOO_LARGE", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<AnalyticsError> for ApiErrorResponse {
    fn from(error: AnalyticsError) -> Self {
        match error {
            AnalyticsError::InvalidFormat { message } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::invalid_format(message),
            ),
            AnalyticsError::ProcessingError { message } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("PROCESSING_ERROR", "Error processing file", message),
            ),
            AnalyticsError::Io { path, message } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "IO_ERROR",
                    "Error saving file",
                    format!("{}: {}", path, message),
                ),
            ),
            other @ (AnalyticsError::ConfigNotFound { .. }
            | AnalyticsError::ConfigParseError { .. }
            | AnalyticsError::SourceNotFound { .. }) => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "INTERNAL_ERROR",
                    "Internal server error",
                    other.to_string(),
                ),
            ),
        }
    }
}
