//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Failed responses carry a structured JSON body with a timestamp, one or more
//! messages, and the request path. The path is only known to the middleware layer,
//! so `IntoResponse` records the status and messages on the response and the
//! `error_details` middleware assembles the final body.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Infrastructure variants use `#[from]` for
/// automatic error conversion; the business-rule variants (`NotFound`, `InvalidInput`,
/// `Validation`) are raised explicitly by the service and model layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the HTTP listener.
    ///
    /// Only surfaces during startup; results in process exit rather than a response.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// The requested entity, or an entity referenced by the request, does not exist.
    /// Results in 404 Not Found with the provided message. Always terminal for the
    /// current operation.
    #[error("{0}")]
    NotFound(String),

    /// Business-rule violation that requires store knowledge to detect, such as a
    /// duplicate identifier.
    ///
    /// Results in 400 Bad Request with the provided message. Distinct from
    /// `Validation`, which covers field-level constraints checked before any
    /// service method runs.
    #[error("{0}")]
    InvalidInput(String),

    /// Field-level validation failures, one message per violated field.
    ///
    /// Raised by DTO conversion before a service method is invoked. Results in
    /// 400 Bad Request listing every collected message.
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),
}

/// Messages stashed on an error response for the `error_details` middleware.
///
/// `IntoResponse` cannot see the request, so the response carries its messages in an
/// extension and the middleware merges in the request path and timestamp.
#[derive(Debug, Clone)]
pub(crate) struct ErrorMessages(pub Vec<String>);

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and records the
/// human-readable messages for the error-body middleware. Internal errors are logged
/// with full details but surface a generic message to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `InvalidInput` and `Validation` variants
/// - 404 Not Found - For the `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, messages) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, vec![msg]),
            Self::InvalidInput(msg) => (StatusCode::BAD_REQUEST, vec![msg]),
            Self::Validation(messages) => (StatusCode::BAD_REQUEST, messages),
            err => {
                tracing::error!("Internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec!["Internal server error".to_string()],
                )
            }
        };

        let mut response = status.into_response();
        response.extensions_mut().insert(ErrorMessages(messages));
        response
    }
}
