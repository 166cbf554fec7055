//! Custom error types for the users service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the users service
#[derive(Error, Debug)]
pub enum UsersError {
    /// Requested user does not exist
    #[error("User with id {0} not found")]
    NotFound(i64),

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] common::error::DatabaseError),
}

impl IntoResponse for UsersError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            UsersError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("User with id {} not found", id),
            ),
            UsersError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            UsersError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for users service results
pub type UsersResult<T> = Result<T, UsersError>;
