//! HTTP mapping of core errors.

use analyzer_core::CoreError;
use analyzer_files::FilesError;
use api_shared::ErrorRes;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Error returned by REST handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<FilesError> for ApiError {
    fn from(err: FilesError) -> Self {
        ApiError::Core(CoreError::Files(err))
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        let ApiError::Core(err) = self;
        match err {
            CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            CoreError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CoreError::Files(FilesError::NotFound(_)) => StatusCode::NOT_FOUND,
            CoreError::Files(FilesError::InvalidPath(_)) => StatusCode::BAD_REQUEST,
            CoreError::Files(_)
            | CoreError::MissingOwner { .. }
            | CoreError::UnknownOwner { .. }
            | CoreError::UnknownMediaType { .. }
            | CoreError::DuplicateId { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            let ApiError::Core(err) = &self;
            if err.is_integrity_violation() {
                tracing::error!(error = %err, "dataset integrity violation");
            } else {
                tracing::error!(error = %err, "internal error");
            }
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(ErrorRes {
            status: "error".into(),
            message,
        });

        (status, body).into_response()
    }
}
