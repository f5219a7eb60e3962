//! HTTP request handlers for the analytics API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analytics::{
    performance_analytics, promotion_analytics, salary_analytics, summary_analytics,
};
use crate::error::AnalyticsError;
use crate::models::EmployeeRecord;

use super::request::UploadedFile;
use super::response::{ApiError, ApiErrorResponse, UploadResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes();
    Router::new()
        .route("/api/employees", get(employees_handler))
        .route("/api/salary-analytics", get(salary_analytics_handler))
        .route("/api/performance-analytics", get(performance_analytics_handler))
        .route("/api/promotion-analytics", get(promotion_analytics_handler))
        .route("/api/summary", get(summary_handler))
        .route("/upload", post(upload_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, error: ApiErrorResponse) -> Response {
    warn!(
        correlation_id = %correlation_id,
        status = error.status.as_u16(),
        code = %error.error.code,
        message = %error.error.message,
        "Request failed"
    );
    error.into_response()
}

/// Runs one aggregate view against the current snapshot.
fn view_response<T, F>(state: &AppState, view: &'static str, compute: F) -> Response
where
    T: Serialize,
    F: FnOnce(&[EmployeeRecord]) -> T,
{
    let correlation_id = Uuid::new_v4();
    let start_time = Instant::now();

    let snapshot = state.store().snapshot();
    let body = compute(snapshot.records());

    info!(
        correlation_id = %correlation_id,
        view,
        records = snapshot.len(),
        duration_us = start_time.elapsed().as_micros(),
        "View computed"
    );
    json_response(StatusCode::OK, body)
}

/// Handler for GET /api/employees.
async fn employees_handler(State(state): State<AppState>) -> Response {
    view_response(&state, "employees", |records| records.to_vec())
}

/// Handler for GET /api/salary-analytics.
async fn salary_analytics_handler(State(state): State<AppState>) -> Response {
    view_response(&state, "salary", salary_analytics)
}

/// Handler for GET /api/performance-analytics.
async fn performance_analytics_handler(State(state): State<AppState>) -> Response {
    view_response(&state, "performance", performance_analytics)
}

/// Handler for GET /api/promotion-analytics.
async fn promotion_analytics_handler(State(state): State<AppState>) -> Response {
    view_response(&state, "promotion", promotion_analytics)
}

/// Handler for GET /api/summary.
async fn summary_handler(State(state): State<AppState>) -> Response {
    view_response(&state, "summary", summary_analytics)
}

/// Handler for POST /upload.
///
/// Accepts a multipart form with a `file` part holding CSV content. On
/// success the served dataset is replaced; on any failure it is unchanged.
async fn upload_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing upload request");

    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            let error = ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::invalid_format(rejection.body_text()),
            );
            return error_response(correlation_id, error);
        }
    };

    let upload = match UploadedFile::from_multipart(&mut multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            let error = ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::invalid_format("No file part in the request"),
            );
            return error_response(correlation_id, error);
        }
        Err(err) if err.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            let error = ApiErrorResponse::new(
                StatusCode::PAYLOAD_TOO_LARGE,
                ApiError::payload_too_large(err.body_text()),
            );
            return error_response(correlation_id, error);
        }
        Err(err) => {
            let error = ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::invalid_format(err.body_text()),
            );
            return error_response(correlation_id, error);
        }
    };

    info!(
        correlation_id = %correlation_id,
        filename = upload.filename.as_deref().unwrap_or(""),
        content_type = upload.content_type.as_deref().unwrap_or(""),
        bytes = upload.content.len(),
        "Upload received"
    );

    let start_time = Instant::now();
    let loader = state.loader();
    let outcome = tokio::task::spawn_blocking(move || {
        loader.load_upload(upload.filename.as_deref(), &upload.content)
    })
    .await
    .unwrap_or_else(|join_error| {
        Err(AnalyticsError::ProcessingError {
            message: format!("upload worker failed: {}", join_error),
        })
    });

    match outcome {
        Ok(dataset) => {
            let body = UploadResponse {
                success: "File uploaded and processed successfully".to_string(),
                records: dataset.len(),
                loaded_at: dataset.loaded_at(),
            };
            state.store().replace(dataset);
            info!(
                correlation_id = %correlation_id,
                records = body.records,
                duration_us = start_time.elapsed().as_micros(),
                "Upload applied"
            );
            json_response(StatusCode::OK, body)
        }
        Err(err) => error_response(correlation_id, err.into()),
    }
}
