use crate::domain::contact::ValidationError;
use crate::storage::StorageError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),
    #[error("Storage error while trying to {context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: StorageError,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Wraps a storage failure with the operation that was attempted.
    /// The context doubles as the client-facing message.
    pub fn storage(context: &'static str) -> impl FnOnce(StorageError) -> Self {
        move |source| Self::Storage { context, source }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::BadRequest(msg) => {
                tracing::warn!(message = %msg, "Validation error");
                (StatusCode::BAD_REQUEST, msg)
            }
            Self::UnprocessableEntity(msg) => {
                tracing::debug!(message = %msg, "Unprocessable entity");
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
            Self::Storage { context, source } => {
                tracing::error!(error = %source, "Storage error while trying to {context}");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Failed to {context}"))
            }
        };

        let body = Json(json!({
            "detail": detail
        }));

        (status, body).into_response()
    }
}
