use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("No maintenance script named {0:?}")]
    UnknownScript(String),
    #[error("Failed to read background images directory: {0}")]
    BackgroundImages(#[from] std::io::Error),
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        match self {
            Self::UnknownScript(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
            Self::BackgroundImages(_) => InternalServerError(self).into_response(),
        }
    }
}
