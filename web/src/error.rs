use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::*;

use domain::error::{
    DomainErrorKind, Error as DomainError, ExternalErrorKind, InternalErrorKind,
};

use crate::response::{self, ErrorEnvelope};

pub type Result<T> = core::result::Result<T, Error>;

pub const NOT_FOUND_MESSAGE: &str = "Not found";
pub const TOKEN_EXCHANGE_FAILED_MESSAGE: &str = "Token exchange failed";
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub enum Error {
    Domain(DomainError),
    Web(WebErrorKind),
}

/// Errors raised by the web layer itself, before the domain is involved.
#[derive(Debug, PartialEq)]
pub enum WebErrorKind {
    /// No route (or no provider) matches the request.
    NotFound,
    /// The request body is not JSON of the expected shape.
    MalformedBody,
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Domain(err) => Some(err),
            Error::Web(_) => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

// Callers only ever see the envelope; the underlying source is logged and dropped.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Web(WebErrorKind::NotFound) => response::json(
                StatusCode::NOT_FOUND,
                &ErrorEnvelope::new(NOT_FOUND_MESSAGE),
            ),
            // Malformed bodies share the generic 500 with every other unexpected failure.
            Error::Web(WebErrorKind::MalformedBody) => internal_server_error(),
            Error::Domain(err) => match err.error_kind {
                DomainErrorKind::Internal(InternalErrorKind::Validation(message)) => {
                    response::json(StatusCode::BAD_REQUEST, &ErrorEnvelope::new(&message))
                }
                DomainErrorKind::External(ExternalErrorKind::Rejected { status, details }) => {
                    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                    response::json(
                        status,
                        &ErrorEnvelope::with_details(TOKEN_EXCHANGE_FAILED_MESSAGE, details),
                    )
                }
                ref error_kind => {
                    error!(
                        "Token exchange failed unexpectedly: {:?} (source: {:?})",
                        error_kind, err.source
                    );
                    internal_server_error()
                }
            },
        }
    }
}

fn internal_server_error() -> Response {
    response::json(
        StatusCode::INTERNAL_SERVER_ERROR,
        &ErrorEnvelope::new(INTERNAL_SERVER_ERROR_MESSAGE),
    )
}

impl From<DomainError> for Error {
    fn from(err: DomainError) -> Self {
        Error::Domain(err)
    }
}
