//! # Bookmark Errors
//!
//! Error types for validation, record access and request handling.
//!
//! Every client error except the rating check answers with the JSON
//! envelope `{"error":{"message":...}}`. The rating check answers with a
//! bare text body; existing clients match on that text.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use super::store::StorageError;

/// Result type for bookmark operations
pub type BookmarkResult<T> = Result<T, BookmarkError>;

/// Fixed message for an out-of-range or non-numeric rating
pub const INVALID_RATING_MESSAGE: &str = "Rating should be a number between 1 and 5.";

/// Fixed message for a PATCH without any recognized field
pub const EMPTY_UPDATE_MESSAGE: &str =
    "Request body must contain either 'title', 'url', 'description', or 'rating'";

/// Fixed message for an absent bookmark
pub const NOT_FOUND_MESSAGE: &str = "Bookmark Not Found";

/// Message returned for failures the service does not interpret
pub const SERVER_ERROR_MESSAGE: &str = "server error";

/// Bookmark errors
#[derive(Debug, Error)]
pub enum BookmarkError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// A required field is absent, null or empty
    #[error("'{0}' is required")]
    MissingField(&'static str),

    /// Rating is not an integer within 1..=5
    #[error("Rating should be a number between 1 and 5.")]
    InvalidRating,

    /// Update body names none of the mutable fields
    #[error("Request body must contain either 'title', 'url', 'description', or 'rating'")]
    EmptyUpdate,

    /// Body could not be decoded
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// No bookmark with the requested id
    #[error("Bookmark Not Found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Propagated from the table
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl BookmarkError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookmarkError::MissingField(_)
            | BookmarkError::InvalidRating
            | BookmarkError::EmptyUpdate
            | BookmarkError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            BookmarkError::NotFound => StatusCode::NOT_FOUND,
            BookmarkError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// `{"error":{"message":...}}`
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorMessage,
}

#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorMessage {
                message: message.into(),
            },
        }
    }
}

impl IntoResponse for BookmarkError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            BookmarkError::InvalidRating => (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                INVALID_RATING_MESSAGE,
            )
                .into_response(),
            BookmarkError::Storage(err) => {
                tracing::error!(error = %err, "storage failure");
                (status, Json(ErrorEnvelope::new(SERVER_ERROR_MESSAGE))).into_response()
            }
            other => (status, Json(ErrorEnvelope::new(other.to_string()))).into_response(),
        }
    }
}
