//! User-facing notices, form state and transition outcomes for the controller.

use shared::{error::PayloadError, protocol::MoviePayload};

pub const INVALID_CREATE: &str = "Please enter a valid title and year (1800-2100)";
pub const CREATE_FAILED: &str = "Failed to add movie";
pub const NOT_FOUND: &str = "Movie not found";
pub const INVALID_YEAR: &str = "Invalid year";
pub const UPDATE_FAILED: &str = "Failed to update";
pub const CONFIRM_DELETE: &str = "Delete this movie permanently?";
pub const DELETE_FAILED: &str = "Failed to delete";

pub fn list_unavailable(endpoint: &str) -> String {
    format!("Error: could not reach the movie API at {endpoint}. Is it running?")
}

/// How a controller transition ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    Completed,
    /// Stopped locally (validation, cancellation, declined confirmation,
    /// unknown id) without touching the network.
    Aborted,
    /// A store call failed and the user was told.
    Failed,
}

/// Raw contents of the three-field create form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub title: String,
    pub genre: String,
    pub year: String,
}

impl CreateForm {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            year: year.into(),
        }
    }

    pub fn to_payload(&self) -> Result<MoviePayload, PayloadError> {
        MoviePayload::for_create(&self.title, &self.genre, &self.year)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.genre.is_empty() && self.year.is_empty()
    }
}
