use thiserror::Error;

/// Locally detected problems with a payload, raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("year {0:?} is not an integer")]
    YearNotInteger(String),
    #[error("year {0} is outside 1800-2100")]
    YearOutOfRange(i64),
}
