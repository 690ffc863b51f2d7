//! Error types for the BGS ledger server.
//!
//! This module provides specialized error types for each domain (configuration,
//! authentication, query construction, administration). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for their `Display`
//! and `Error` implementations.

pub mod admin;
pub mod auth;
pub mod config;
pub mod query;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{admin::AdminError, auth::AuthError, config::ConfigError, query::QueryError},
};

/// Main error type for the server application.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// type. `#[from]` conversions let the `?` operator lift any of them, and the
/// `IntoResponse` implementation maps each to an HTTP response.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables, reference tables)
/// - Authentication errors (session user lookup, access level checks)
/// - Query errors (missing filters, invalid parameters, time budget exceeded)
/// - Administration errors (unknown scripts, filesystem access)
/// - External library errors (database, sessions)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session user lookup, access denied).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Query error (usage errors in request parameters, time budget exceeded).
    #[error(transparent)]
    QueryError(#[from] QueryError),
    /// Administration error (unknown maintenance script, background directory access).
    #[error(transparent)]
    AdminError(#[from] AdminError),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own response mappings; everything else is treated as an
/// internal server error (500) and logged.
///
/// # Returns
/// - 400 Bad Request - For usage errors in query parameters or update bodies
/// - 403 Forbidden - For callers lacking the required access level
/// - 404 Not Found - For missing users or unknown scripts
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::QueryError(err) => err.into_response(),
            Self::AdminError(err) => err.into_response(),
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

/// Builds a JSON error response with the given status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}
