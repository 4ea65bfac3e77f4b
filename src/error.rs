//! Per-request errors.
//!
//! Every variant renders as a plain-text body with its status code. Nothing
//! escapes the request boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::routing::{PayloadError, RouteError};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("path not found")]
    NotFound,

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error("name and id are required query params")]
    MissingSetParams,

    #[error("no route found")]
    UnknownRouteName,

    #[error("failed to set route: {0}")]
    SetFailed(RouteError),
}

impl DispatchError {
    pub fn status(&self) -> StatusCode {
        match self {
            DispatchError::NotFound => StatusCode::NOT_FOUND,
            DispatchError::Route(RouteError::MethodNotDefined) => StatusCode::METHOD_NOT_ALLOWED,
            DispatchError::Route(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DispatchError::Payload(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DispatchError::MissingSetParams | DispatchError::UnknownRouteName => {
                StatusCode::BAD_REQUEST
            }
            DispatchError::SetFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
