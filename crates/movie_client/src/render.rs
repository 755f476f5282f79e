//! Projection of movie records onto the display surface.

use shared::domain::{MovieId, MovieRecord};

use crate::escape::escape_html;

pub const NO_RESULTS: &str = "No movies found.";

/// Sink that shows a rendered list. Each call replaces everything it showed
/// before.
pub trait DisplaySurface {
    fn replace(&mut self, view: ListView);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Edit,
    Delete,
}

/// Row action bound to a record id when the row was rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    pub kind: ActionKind,
    pub id: MovieId,
}

/// A field as captured at render time, together with its HTML-escaped form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText {
    text: String,
    markup: String,
}

impl DisplayText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let markup = escape_html(&text);
        Self { text, markup }
    }

    /// Unescaped, for plain-text surfaces.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Movie {
        id: MovieId,
        title: DisplayText,
        year: DisplayText,
        genre: DisplayText,
        edit: RowAction,
        delete: RowAction,
    },
    Placeholder(String),
    Error(DisplayText),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    rows: Vec<Row>,
}

impl ListView {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Every action binding in display order.
    pub fn actions(&self) -> Vec<&RowAction> {
        self.rows
            .iter()
            .flat_map(|row| match row {
                Row::Movie { edit, delete, .. } => vec![edit, delete],
                Row::Placeholder(_) | Row::Error(_) => Vec::new(),
            })
            .collect()
    }

    /// Looks up the binding of the `index`-th movie row (zero based).
    pub fn action(&self, index: usize, kind: ActionKind) -> Option<&RowAction> {
        self.rows
            .iter()
            .filter_map(|row| match row {
                Row::Movie { edit, delete, .. } => Some((edit, delete)),
                Row::Placeholder(_) | Row::Error(_) => None,
            })
            .nth(index)
            .map(|(edit, delete)| match kind {
                ActionKind::Edit => edit,
                ActionKind::Delete => delete,
            })
    }

    pub fn movie_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row, Row::Movie { .. }))
            .count()
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<div id=\"movie-list\">\n");
        for row in &self.rows {
            match row {
                Row::Movie {
                    id,
                    title,
                    year,
                    genre,
                    ..
                } => {
                    html.push_str(&format!(
                        "  <div class=\"movie-item\" data-id=\"{}\">\
                         <p><strong>{}</strong> ({} - {})</p>\
                         <div><button class=\"edit-btn\">Edit</button>\
                         <button class=\"delete-btn\">Delete</button></div></div>\n",
                        escape_html(&id.to_string()),
                        title.markup(),
                        year.markup(),
                        genre.markup(),
                    ));
                }
                Row::Placeholder(text) => html.push_str(&format!("  <p>{text}</p>\n")),
                Row::Error(text) => html.push_str(&format!(
                    "  <p class=\"error\">{}</p>\n",
                    text.markup()
                )),
            }
        }
        html.push_str("</div>\n");
        html
    }
}

pub fn render_movies<'a, I>(records: I) -> ListView
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    let rows: Vec<Row> = records.into_iter().map(movie_row).collect();
    if rows.is_empty() {
        return ListView {
            rows: vec![Row::Placeholder(NO_RESULTS.to_string())],
        };
    }
    ListView { rows }
}

pub fn render_error(message: &str) -> ListView {
    ListView {
        rows: vec![Row::Error(DisplayText::new(message))],
    }
}

fn movie_row(record: &MovieRecord) -> Row {
    Row::Movie {
        id: record.id.clone(),
        title: DisplayText::new(record.display_title()),
        year: DisplayText::new(record.display_year()),
        genre: DisplayText::new(record.display_genre()),
        edit: RowAction {
            kind: ActionKind::Edit,
            id: record.id.clone(),
        },
        delete: RowAction {
            kind: ActionKind::Delete,
            id: record.id.clone(),
        },
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
