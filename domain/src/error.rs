//! Error types for the `domain` layer.
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors in the Domain layer are modeled as a tree structure
/// with `domain::error::Error` as the root type holding a tree of `error_kind`
/// enums that represent the kinds of errors that can occur while exchanging an
/// authorization code. The `source` field is used to hold the original error that caused
/// the domain error. `web` inspects the `error_kind`s to choose the HTTP status and
/// envelope returned to the caller, and only ever logs the `source`.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
    External(ExternalErrorKind),
}

/// Errors that originate inside this service.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    /// A required request field was missing. Holds the message returned to the caller.
    Validation(String),
    /// Server-side configuration (e.g. a client secret) is missing.
    Config,
    Other(String),
}

/// Errors that originate at a provider's token endpoint.
#[derive(Debug, PartialEq)]
pub enum ExternalErrorKind {
    Network,
    /// The provider answered, but not with JSON.
    InvalidResponse,
    /// The provider answered with a non-2xx status; `details` is its JSON body.
    Rejected { status: u16, details: Value },
}

impl Error {
    pub fn validation(message: &str) -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Validation(
                message.to_string(),
            )),
        }
    }

    pub fn config(message: &str) -> Self {
        Error {
            source: Some(message.to_string().into()),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
        }
    }

    pub fn rejected(status: u16, details: Value) -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::External(ExternalErrorKind::Rejected { status, details }),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Domain Error: {self:?}")
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Errors that result from issues building the reqwest::Client instance or the
        // outgoing request. These occur prior to any network calls being made.
        if err.is_builder() {
            Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                    "Failed to build reqwest client".to_string(),
                )),
            }
        // A body that could not be decoded as JSON.
        } else if err.is_decode() {
            Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::External(ExternalErrorKind::InvalidResponse),
            }
        // Errors that result from issues with the network call itself.
        } else {
            Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
            }
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::External(ExternalErrorKind::InvalidResponse),
        }
    }
}
