//! API Error Handling
//!
//! Unified error types and conversion for API responses. Error bodies use the
//! same `{"text": ...}` shape as successful replies so the chat platform can
//! display them.

use axum::{
    Json,
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::service::reply::Reply;
use crate::service::upload_service::UploadError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// A pipeline was selected without a file
    MissingAttachment,
    BadRequest(String),
    /// A collaborator (filesystem, object store) failed; the message is shown as is
    DependencyFailure(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, reply) = match self {
            ApiError::MissingAttachment => (StatusCode::BAD_REQUEST, Reply::missing_attachment()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Reply::plain(msg)),
            ApiError::DependencyFailure(msg) => {
                tracing::error!("Dependency failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, Reply::plain(msg))
            }
        };

        (status, Json(reply)).into_response()
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::MissingAttachment => ApiError::MissingAttachment,
            UploadError::Catalog(err) => {
                ApiError::DependencyFailure(format!("❌ Could not list pipelines: {}", err))
            }
            UploadError::Spool(err) => ApiError::DependencyFailure(format!(
                "❌ Upload failed: could not spool attachment: {}",
                err
            )),
            UploadError::Storage(err) => {
                ApiError::DependencyFailure(format!("❌ Upload failed: {}", err))
            }
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::BadRequest(err.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(err: MultipartRejection) -> Self {
        ApiError::BadRequest(err.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(err: FormRejection) -> Self {
        ApiError::BadRequest(err.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
