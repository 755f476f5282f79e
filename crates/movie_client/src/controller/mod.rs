//! Controller layer: user transitions against the remote store and the local cache.

pub mod edit_session;
pub mod events;

use shared::domain::MovieId;
use tracing::{debug, error, info, warn};

use crate::{
    cache::MovieCache,
    render::{render_error, render_movies, ActionKind, DisplaySurface, RowAction},
    MovieStore,
};
use edit_session::{EditSession, EditState};
use events::{CreateForm, TransitionOutcome};

/// Modal feedback channel: the only way the controller talks to the user
/// outside the display surface.
pub trait Interaction {
    fn alert(&mut self, message: &str);
    fn confirm(&mut self, message: &str) -> bool;
    /// `None` when the user cancels.
    fn prompt(&mut self, message: &str, default: &str) -> Option<String>;
}

pub struct Controller<S, D, I> {
    store: S,
    cache: MovieCache,
    surface: D,
    interaction: I,
}

impl<S, D, I> Controller<S, D, I>
where
    S: MovieStore,
    D: DisplaySurface,
    I: Interaction,
{
    pub fn new(store: S, surface: D, interaction: I) -> Self {
        Self {
            store,
            cache: MovieCache::new(),
            surface,
            interaction,
        }
    }

    pub fn cache(&self) -> &MovieCache {
        &self.cache
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn interaction(&self) -> &I {
        &self.interaction
    }

    pub fn interaction_mut(&mut self) -> &mut I {
        &mut self.interaction
    }

    /// Startup and every post-mutation reload: fetch the whole collection,
    /// install it and draw it. A failed fetch leaves the cache as it was and
    /// puts a persistent error on the surface.
    pub async fn refresh(&mut self) -> TransitionOutcome {
        match self.store.list().await {
            Ok(records) => {
                info!(count = records.len(), "loaded movie list");
                self.cache.replace(records);
                self.surface.replace(render_movies(self.cache.records()));
                TransitionOutcome::Completed
            }
            Err(err) => {
                error!(error = %err, endpoint = self.store.endpoint(), "movie list fetch failed");
                let message = events::list_unavailable(self.store.endpoint());
                self.surface.replace(render_error(&message));
                TransitionOutcome::Failed
            }
        }
    }

    /// Live filter over the cached snapshot. Returns the number of rows shown.
    pub fn search(&mut self, term: &str) -> usize {
        let matches = self.cache.filter(term);
        let shown = matches.len();
        debug!(term, shown, total = self.cache.len(), "filtered movie list");
        self.surface.replace(render_movies(matches));
        shown
    }

    pub async fn submit_create(&mut self, form: &mut CreateForm) -> TransitionOutcome {
        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "rejected create form");
                self.interaction.alert(events::INVALID_CREATE);
                return TransitionOutcome::Aborted;
            }
        };

        match self.store.create(&payload).await {
            Ok(()) => {
                info!(title = %payload.title, year = payload.year, "created movie");
                form.reset();
                self.refresh().await;
                TransitionOutcome::Completed
            }
            Err(err) => {
                error!(error = %err, "create failed");
                self.interaction.alert(events::CREATE_FAILED);
                TransitionOutcome::Failed
            }
        }
    }

    pub async fn request_edit(&mut self, id: &MovieId) -> TransitionOutcome {
        let Some(original) = self.cache.find(id).cloned() else {
            warn!(%id, "edit requested for unknown movie");
            self.interaction.alert(events::NOT_FOUND);
            return TransitionOutcome::Aborted;
        };

        let mut session = EditSession::new(original);
        while let Some(prompt) = session.prompt() {
            let answer = self.interaction.prompt(prompt.message, &prompt.default);
            session.answer(answer);
        }

        let payload = match session.into_state() {
            EditState::Confirmed(payload) => payload,
            EditState::Rejected(err) => {
                warn!(%id, error = %err, "rejected edit");
                self.interaction.alert(events::INVALID_YEAR);
                return TransitionOutcome::Aborted;
            }
            _ => {
                debug!(%id, "edit cancelled");
                return TransitionOutcome::Aborted;
            }
        };

        match self.store.update(id, &payload).await {
            Ok(()) => {
                info!(%id, "updated movie");
                self.refresh().await;
                TransitionOutcome::Completed
            }
            Err(err) => {
                error!(%id, error = %err, "update failed");
                self.interaction.alert(events::UPDATE_FAILED);
                TransitionOutcome::Failed
            }
        }
    }

    pub async fn request_delete(&mut self, id: &MovieId) -> TransitionOutcome {
        if !self.interaction.confirm(events::CONFIRM_DELETE) {
            debug!(%id, "delete declined");
            return TransitionOutcome::Aborted;
        }

        match self.store.delete(id).await {
            Ok(()) => {
                info!(%id, "deleted movie");
                self.refresh().await;
                TransitionOutcome::Completed
            }
            Err(err) => {
                error!(%id, error = %err, "delete failed");
                self.interaction.alert(events::DELETE_FAILED);
                TransitionOutcome::Failed
            }
        }
    }

    /// Runs a row binding from a rendered view.
    pub async fn invoke(&mut self, action: &RowAction) -> TransitionOutcome {
        match action.kind {
            ActionKind::Edit => self.request_edit(&action.id).await,
            ActionKind::Delete => self.request_delete(&action.id).await,
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
