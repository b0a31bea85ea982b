//! Error handling for sporthub
//!
//! This module defines the error taxonomy used throughout the application
//! and maps every typed error to a stable HTTP status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Main error type for sporthub operations
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Duplicate value: {0}")]
    Duplicate(String),

    #[error("Not authenticated: {0}")]
    Authentication(String),

    #[error("Not authorized: {0}")]
    Authorization(String),

    #[error("Geocoding error: {0}")]
    Geocoding(#[from] GeocoderError),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Geocoding provider specific errors
#[derive(Error, Debug)]
pub enum GeocoderError {
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    #[error("Geocoding request timed out")]
    Timeout,

    #[error("Geocoding provider unavailable")]
    ServiceUnavailable,

    #[error("Invalid geocoding response: {0}")]
    InvalidResponse(String),

    #[error("No results for location query: {0}")]
    NoResults(String),
}

/// Result type alias for sporthub operations
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// HTTP status code this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Duplicate(_) => StatusCode::BAD_REQUEST,
            ApiError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ApiError::Authorization(_) => StatusCode::FORBIDDEN,
            ApiError::Upload(_) => StatusCode::BAD_REQUEST,
            // An unresolvable address is a client problem; a provider outage is not
            ApiError::Geocoding(GeocoderError::NoResults(_)) => StatusCode::BAD_REQUEST,
            ApiError::Geocoding(_) => StatusCode::BAD_GATEWAY,
            ApiError::Config(_)
            | ApiError::Database(_)
            | ApiError::Migration(_)
            | ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Server-side failures are logged in full but redacted from the body
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "internal server error");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let mut body = json!({
            "success": false,
            "error": message,
        });
        if let ApiError::Validation(errors) = &self {
            body["errors"] = json!(errors);
        }

        (status, Json(body)).into_response()
    }
}

/// Whether a sqlx error is a Postgres unique-index violation (SQLSTATE 23505)
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .map(|code| code == "23505")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::NotFound("event 1".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Validation(vec![]).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Duplicate("review".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Authentication("no token".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Authorization("not owner".into()).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::Upload("too large".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Geocoding(GeocoderError::NoResults("nowhere".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Geocoding(GeocoderError::Timeout).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::Config("missing secret".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_display() {
        let err = ApiError::Validation(vec![FieldError::new("name", "Please add a name")]);
        assert_eq!(err.to_string(), "Validation failed");
    }

    #[test]
    fn test_field_error_serializes() {
        let err = FieldError::new("rating", "Rating must be between 1 and 10");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["field"], "rating");
        assert_eq!(value["message"], "Rating must be between 1 and 10");
    }
}
