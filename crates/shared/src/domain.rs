use std::fmt;

use serde::{Deserialize, Serialize};

pub const UNKNOWN_TITLE: &str = "Unknown";
pub const UNKNOWN_GENRE: &str = "N/A";
pub const UNKNOWN_YEAR: &str = "????";

/// Backend-assigned record identifier.
///
/// json-server style backends emit either numbers or strings; the id is kept in
/// the form it arrived in and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovieId {
    Number(i64),
    Text(String),
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for MovieId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for MovieId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub year: Option<i64>,
}

impl MovieRecord {
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or(UNKNOWN_TITLE)
    }

    pub fn display_genre(&self) -> &str {
        non_empty(self.genre.as_deref()).unwrap_or(UNKNOWN_GENRE)
    }

    pub fn display_year(&self) -> String {
        match self.year {
            Some(year) => year.to_string(),
            None => UNKNOWN_YEAR.to_string(),
        }
    }

    /// Case-insensitive substring match on title or genre. `needle` must
    /// already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        let title = self.title.as_deref().unwrap_or_default().to_lowercase();
        let genre = self.genre.as_deref().unwrap_or_default().to_lowercase();
        title.contains(needle) || genre.contains(needle)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: Option<&str>, genre: Option<&str>) -> MovieRecord {
        MovieRecord {
            id: MovieId::Number(1),
            title: title.map(str::to_string),
            genre: genre.map(str::to_string),
            year: None,
        }
    }

    #[test]
    fn accepts_numeric_and_string_ids() {
        let records: Vec<MovieRecord> = serde_json::from_str(
            r#"[{"id":1,"title":"Dune","genre":"Sci-Fi","year":1984},{"id":"a3f1","title":"Heat"}]"#,
        )
        .expect("decode");

        assert_eq!(records[0].id, MovieId::Number(1));
        assert_eq!(records[1].id, MovieId::Text("a3f1".into()));
        assert_eq!(records[1].genre, None);
        assert_eq!(records[1].year, None);
    }

    #[test]
    fn placeholders_cover_absent_and_empty_fields() {
        let movie = record(Some(""), None);
        assert_eq!(movie.display_title(), UNKNOWN_TITLE);
        assert_eq!(movie.display_genre(), UNKNOWN_GENRE);
        assert_eq!(movie.display_year(), UNKNOWN_YEAR);
    }

    #[test]
    fn matches_title_or_genre_ignoring_case() {
        let movie = record(Some("Dune"), Some("Sci-Fi"));
        assert!(movie.matches("dun"));
        assert!(movie.matches("sci"));
        assert!(movie.matches(""));
        assert!(!movie.matches("drama"));
        assert!(!record(None, None).matches("x"));
    }

    #[test]
    fn id_display_is_the_raw_value() {
        assert_eq!(MovieId::Number(42).to_string(), "42");
        assert_eq!(MovieId::from("abc").to_string(), "abc");
    }
}
