//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod mail;
pub mod store;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ValidationErrorDto},
    server::{
        error::{auth::AuthError, config::ConfigError, store::StoreError},
        patch::{PatchError, PatchRejection},
        validation::FieldErrors,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Expected outcomes such as a missing city are
/// modelled as `Option`/`bool` by the services and only become `NotFound` at the
/// controller boundary.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Entity store error.
    ///
    /// Missing records map to 404, storage faults to 500.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// Database operation error from SeaORM outside of a store call (startup, migrations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Filesystem or socket error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Tracing subscriber could not be installed.
    #[error(transparent)]
    LoggingErr(#[from] tracing_subscriber::util::TryInitError),

    /// Malformed patch document (unsupported verb, unknown path, wrong value type).
    ///
    /// Results in 400 Bad Request with a generic message.
    #[error(transparent)]
    PatchErr(#[from] PatchError),

    /// Request body could not be read as JSON.
    ///
    /// Keeps axum's own status (400, 415 or 422). Handlers unwrap the body only after
    /// the bearer token has been checked.
    #[error(transparent)]
    JsonBody(#[from] JsonRejection),

    /// Field constraints violated by a create, update, or patched view.
    ///
    /// Results in 400 Bad Request with a field to messages map.
    #[error(transparent)]
    Validation(#[from] FieldErrors),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

impl From<PatchRejection> for AppError {
    fn from(rejection: PatchRejection) -> Self {
        match rejection {
            PatchRejection::Structural(err) => Self::PatchErr(err),
            PatchRejection::Validation(errors) => Self::Validation(errors),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `PatchErr`, and `Validation`
/// - 401/403 - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 404 Not Found - For `NotFound` and store lookups that raced with a delete
/// - 500 Internal Server Error - For everything else, details logged server-side
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::JsonBody(rejection) => rejection.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::PatchErr(err) => {
                tracing::debug!("Rejected patch document: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorDto {
                    error: errors.to_string(),
                    errors: errors.into_inner(),
                }),
            )
                .into_response(),
            Self::StoreErr(
                err @ (StoreError::CityNotFound(_) | StoreError::PointOfInterestNotFound(_)),
            ) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
