//! Main Crate Error

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::basic_response::{BasicResponse, FieldCase};

pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid request payload";
pub const NO_SUCH_ENDPOINT_MESSAGE: &str = "No such endpoint";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Body(#[from] BytesRejection),

    #[error("No such endpoint")]
    NoSuchEndpoint,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Json(_) | Error::Body(_) => {
                warn!("Rejecting request payload: {self}");
                BasicResponse::new(StatusCode::BAD_REQUEST, INVALID_PAYLOAD_MESSAGE).into_response()
            }
            Error::NoSuchEndpoint => {
                debug!("Request fell through to the endpoint fallback");
                BasicResponse::new(StatusCode::METHOD_NOT_ALLOWED, NO_SUCH_ENDPOINT_MESSAGE)
                    .with_case(FieldCase::Pascal)
                    .into_response()
            }
        }
    }
}
