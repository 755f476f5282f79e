use serde::{Deserialize, Serialize};

use crate::error::PayloadError;

pub const MIN_YEAR: i64 = 1800;
pub const MAX_YEAR: i64 = 2100;
pub const DEFAULT_GENRE: &str = "Unknown";

/// Request body for both create (`POST`) and full replacement (`PUT`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoviePayload {
    pub title: String,
    pub genre: String,
    pub year: i64,
}

impl MoviePayload {
    /// Validates raw form input for a new record.
    pub fn for_create(title: &str, genre: &str, year: &str) -> Result<Self, PayloadError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(PayloadError::EmptyTitle);
        }
        let year = parse_year(year)?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(PayloadError::YearOutOfRange(year));
        }
        let genre = match genre.trim() {
            "" => DEFAULT_GENRE,
            genre => genre,
        };

        Ok(Self {
            title: title.to_string(),
            genre: genre.to_string(),
            year,
        })
    }
}

pub fn parse_year(raw: &str) -> Result<i64, PayloadError> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .map_err(|_| PayloadError::YearNotInteger(raw.to_string()))
}
