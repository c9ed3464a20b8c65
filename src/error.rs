//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the service.
//! The stores return it directly, the middleware and extractors short-circuit with it,
//! and handlers propagate it with `?`.
//!
//! `AppError` implements `actix_web::error::ResponseError`, so every failure reaches the
//! client as `{"error": <message>}` with the matching status code. `From` conversions
//! cover `validator::ValidationErrors`, `bcrypt::BcryptError` and
//! `actix_web::error::JsonPayloadError`.

use actix_web::{error::JsonPayloadError, error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Represents all possible errors that can occur within the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A required field is missing or empty (HTTP 400).
    InvalidInput(String),
    /// The request body could not be decoded (HTTP 400).
    DecodeError(String),
    /// Bad credentials, or a missing, unknown or expired session (HTTP 401).
    Unauthorized(String),
    /// The requested resource does not exist (HTTP 404).
    /// Used for an empty task list.
    NotFound(String),
    /// The path exists but does not accept the request method (HTTP 405).
    MethodNotAllowed(String),
    /// The username is already registered (HTTP 409).
    Conflict(String),
    /// Unexpected server-side failure, e.g. hashing errors (HTTP 500).
    InternalServerError(String),
}

impl AppError {
    /// The client-facing message carried by every variant.
    pub fn message(&self) -> &str {
        match self {
            AppError::InvalidInput(msg)
            | AppError::DecodeError(msg)
            | AppError::Unauthorized(msg)
            | AppError::NotFound(msg)
            | AppError::MethodNotAllowed(msg)
            | AppError::Conflict(msg)
            | AppError::InternalServerError(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
            AppError::DecodeError(msg) => write!(f, "Decode Error: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::MethodNotAllowed(msg) => write!(f, "Method Not Allowed: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into `HttpResponse` objects.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::DecodeError(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.message()
        }))
    }
}

/// Converts `validator::ValidationErrors` into `AppError::InvalidInput`.
///
/// Only the first field message is kept, so the client sees e.g.
/// `"Username or Password empty"` instead of the full validator report.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> AppError {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());
        AppError::InvalidInput(message)
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::InternalServerError`.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}

/// Converts JSON extractor failures into `AppError::DecodeError`.
impl From<JsonPayloadError> for AppError {
    fn from(error: JsonPayloadError) -> AppError {
        AppError::DecodeError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_responses() {
        let error = AppError::InvalidInput("Username or Password empty".into());
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::DecodeError("expected value".into());
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::Unauthorized("Wrong User or Password!".into());
        assert_eq!(error.error_response().status(), 401);

        let error = AppError::NotFound("Todolist not found!".into());
        assert_eq!(error.error_response().status(), 404);

        let error = AppError::MethodNotAllowed("Method is not allowed!".into());
        assert_eq!(error.error_response().status(), 405);

        let error = AppError::Conflict("Username already exist".into());
        assert_eq!(error.error_response().status(), 409);

        let error = AppError::InternalServerError("hash failed".into());
        assert_eq!(error.error_response().status(), 500);
    }

    #[actix_rt::test]
    async fn test_error_body_is_json_error_object() {
        let response = AppError::Conflict("Username already exist".into()).error_response();
        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "error": "Username already exist" }));
    }
}
