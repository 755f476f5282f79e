//! Step-by-step collection of a replacement record.
//!
//! An edit asks for title, genre and year in turn. Cancelling at any step ends
//! the session in [`EditState::Cancelled`] and nothing is sent.

use std::mem;

use shared::{
    domain::MovieRecord,
    error::PayloadError,
    protocol::{parse_year, MoviePayload},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    AwaitingTitle,
    AwaitingGenre { title: String },
    AwaitingYear { title: String, genre: String },
    Confirmed(MoviePayload),
    Cancelled,
    Rejected(PayloadError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPrompt {
    pub message: &'static str,
    pub default: String,
}

#[derive(Debug, Clone)]
pub struct EditSession {
    original: MovieRecord,
    state: EditState,
}

impl EditSession {
    pub fn new(original: MovieRecord) -> Self {
        Self {
            original,
            state: EditState::AwaitingTitle,
        }
    }

    #[cfg(test)]
    pub fn id(&self) -> &shared::domain::MovieId {
        &self.original.id
    }

    #[cfg(test)]
    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn into_state(self) -> EditState {
        self.state
    }

    /// The question to ask next, or `None` once the session has ended.
    pub fn prompt(&self) -> Option<EditPrompt> {
        let (message, default) = match self.state {
            EditState::AwaitingTitle => ("New title:", self.original.title.clone()),
            EditState::AwaitingGenre { .. } => ("New genre:", self.original.genre.clone()),
            EditState::AwaitingYear { .. } => {
                ("New year:", self.original.year.map(|year| year.to_string()))
            }
            EditState::Confirmed(_) | EditState::Cancelled | EditState::Rejected(_) => {
                return None
            }
        };
        Some(EditPrompt {
            message,
            default: default.unwrap_or_default(),
        })
    }

    /// Feeds the answer to the current prompt; `None` means the user cancelled.
    /// Answers after the session ended are ignored.
    pub fn answer(&mut self, input: Option<String>) {
        let state = mem::replace(&mut self.state, EditState::Cancelled);
        self.state = match (state, input) {
            (
                done @ (EditState::Confirmed(_) | EditState::Cancelled | EditState::Rejected(_)),
                _,
            ) => done,
            (_, None) => EditState::Cancelled,
            (EditState::AwaitingTitle, Some(title)) => {
                let title = match title.trim() {
                    "" => self.original.title.clone().unwrap_or_default(),
                    title => title.to_string(),
                };
                EditState::AwaitingGenre { title }
            }
            (EditState::AwaitingGenre { title }, Some(genre)) => EditState::AwaitingYear {
                title,
                genre: genre.trim().to_string(),
            },
            (EditState::AwaitingYear { title, genre }, Some(year)) => match parse_year(&year) {
                Ok(year) => EditState::Confirmed(MoviePayload { title, genre, year }),
                Err(err) => EditState::Rejected(err),
            },
        };
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.prompt().is_none()
    }
}

#[cfg(test)]
#[path = "tests/edit_session_tests.rs"]
mod tests;
