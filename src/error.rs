//! Error types for Bookshelf server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::repository::StoreError;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Route not found")]
    RouteNotFound,

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always "error"
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Store(StoreError::MissingKey) => {
                (StatusCode::BAD_REQUEST, "bookID is required")
            }
            // Kept as 403 rather than 409 for compatibility with existing clients
            AppError::Store(StoreError::DuplicateKey(_)) => {
                (StatusCode::FORBIDDEN, "Another book with the same ID exists")
            }
            AppError::Store(StoreError::NotFound(_)) => (StatusCode::NOT_FOUND, "Book not found"),
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, "Route not found"),
            AppError::MalformedBody(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        match &self {
            AppError::MalformedBody(detail) => {
                tracing::error!("Failed to decode request body: {}", detail);
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
            }
            _ => {}
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
