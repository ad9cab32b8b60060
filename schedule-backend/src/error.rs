use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ApiResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbErr(#[from] sea_orm::DbErr),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Validation errors: {0:?}")]
    ValidationErrors(Vec<String>),

    #[error("Invalid UUID: {0}")]
    UuidError(#[from] uuid::Error),

    #[error("Validation failure: {0}")]
    ValidationFailure(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

/// エラーレスポンスに載せる詳細。field は単一フィールド起因のときのみ入る。
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorDetail {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::DbErr(err) => {
                tracing::error!("Database error: {:?}", err);
                match err {
                    sea_orm::DbErr::RecordNotFound(message) => (
                        StatusCode::NOT_FOUND,
                        ErrorDetail::new("NOT_FOUND", message),
                    ),
                    _ => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorDetail::new("DATABASE_ERROR", "A database error occurred"),
                    ),
                }
            }
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, ErrorDetail::new("NOT_FOUND", message))
            }
            AppError::ValidationError(message) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail::new("VALIDATION_ERROR", message),
            ),
            AppError::ValidationErrors(messages) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail::new("VALIDATION_ERRORS", messages.join("; ")),
            ),
            AppError::UuidError(err) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail::new("VALIDATION_ERROR", format!("Invalid UUID: {err}")),
            ),
            AppError::ValidationFailure(errors) => {
                let messages: Vec<String> = errors
                    .field_errors()
                    .into_iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            let message = e
                                .message
                                .as_ref()
                                .map_or_else(|| "Invalid value".to_string(), |m| m.to_string());
                            format!("{field}: {message}")
                        })
                    })
                    .collect();
                (
                    StatusCode::BAD_REQUEST,
                    ErrorDetail::new("VALIDATION_ERRORS", messages.join("; ")),
                )
            }
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail::new("BAD_REQUEST", message),
            ),
            AppError::Conflict(message) => {
                (StatusCode::CONFLICT, ErrorDetail::new("CONFLICT", message))
            }
            AppError::StorageUnavailable(message) => {
                tracing::error!("Storage unavailable: {}", message);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorDetail::new("STORAGE_UNAVAILABLE", "The storage backend is unavailable"),
                )
            }
            AppError::InternalServerError(message) => {
                tracing::error!("Internal server error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorDetail::new("INTERNAL_SERVER_ERROR", "An internal error occurred"),
                )
            }
        };

        (status, Json(ApiResponse::<()>::error(detail))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
