//! HTTP API for the employee analytics service.
//!
//! Serves the five read-only aggregate views over the current dataset
//! snapshot and accepts CSV uploads that replace it.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{UPLOAD_FIELD, UploadedFile};
pub use response::{ApiError, ApiErrorResponse, UploadResponse};
pub use state::AppState;
