use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    List,
    Create,
    Update,
    Delete,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        })
    }
}

/// What went wrong underneath a [`NetworkError`]. Only used for logging;
/// callers treat every cause the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkCause {
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

/// The single failure kind of the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} request failed: {cause}")]
pub struct NetworkError {
    pub operation: StoreOperation,
    pub cause: NetworkCause,
}

impl NetworkError {
    pub fn new(operation: StoreOperation, cause: NetworkCause) -> Self {
        Self { operation, cause }
    }

    pub fn from_reqwest(operation: StoreOperation, err: reqwest::Error) -> Self {
        let cause = if let Some(status) = err.status() {
            NetworkCause::Status(status.as_u16())
        } else if err.is_decode() {
            NetworkCause::MalformedBody(err.to_string())
        } else {
            NetworkCause::Unreachable(err.to_string())
        };
        Self::new(operation, cause)
    }
}

#[derive(Debug, Error)]
pub enum ClientSetupError {
    #[error("invalid movie API url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("movie API url '{0}' cannot carry a resource path")]
    CannotBeABase(String),
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
