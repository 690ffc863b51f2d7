use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

/// Errors raised while turning request parameters into a database query.
#[derive(Error, Debug)]
pub enum QueryError {
    /// Unprivileged callers must narrow listings with at least one filter.
    #[error("Add at least 1 query parameter")]
    NoQueryParameters,
    #[error("Minimal cannot work with count")]
    MinimalWithCount,
    #[error("Invalid value for query parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("Invalid user update: {0}")]
    InvalidUserUpdate(String),
    #[error("Query exceeded its time budget of {0:?}")]
    Timeout(Duration),
}

impl QueryError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        match self {
            Self::Timeout(_) => InternalServerError(self).into_response(),
            err => {
                tracing::debug!("{}", err);

                error_response(StatusCode::BAD_REQUEST, err.to_string())
            }
        }
    }
}
