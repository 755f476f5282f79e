use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use shared::{
    domain::{MovieId, MovieRecord},
    protocol::MoviePayload,
};
use tracing::debug;
use url::Url;

pub mod cache;
pub mod controller;
pub mod error;
pub mod escape;
pub mod render;

pub use cache::MovieCache;
pub use controller::{
    edit_session::{EditPrompt, EditSession, EditState},
    events::{CreateForm, TransitionOutcome},
    Controller, Interaction,
};
pub use error::{ClientSetupError, NetworkCause, NetworkError, StoreOperation};
pub use render::{ActionKind, DisplaySurface, DisplayText, ListView, Row, RowAction};

pub const DEFAULT_API_URL: &str = "http://localhost:3000/movies";

/// The backend collection endpoint.
///
/// Every call is attempted exactly once; failures come back as a single
/// [`NetworkError`] and are never retried here.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Address shown to the user when the collection cannot be loaded.
    fn endpoint(&self) -> &str;
    async fn list(&self) -> Result<Vec<MovieRecord>, NetworkError>;
    async fn create(&self, payload: &MoviePayload) -> Result<(), NetworkError>;
    async fn update(&self, id: &MovieId, payload: &MoviePayload) -> Result<(), NetworkError>;
    async fn delete(&self, id: &MovieId) -> Result<(), NetworkError>;
}

pub struct HttpMovieStore {
    http: Client,
    base: Url,
    endpoint: String,
}

impl HttpMovieStore {
    pub fn new(api_url: &str, timeout: Option<Duration>) -> Result<Self, ClientSetupError> {
        let base = Url::parse(api_url).map_err(|source| ClientSetupError::InvalidUrl {
            url: api_url.to_string(),
            source,
        })?;
        if base.cannot_be_a_base() {
            return Err(ClientSetupError::CannotBeABase(api_url.to_string()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: base.to_string(),
            base,
        })
    }

    fn item_url(&self, id: &MovieId) -> Url {
        let mut url = self.base.clone();
        // cannot_be_a_base was rejected in `new`, so segments are always available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&id.to_string());
        }
        url
    }
}

/// Redirects reqwest does not follow (300, 304, ...) come back as-is, so the
/// status range is checked here rather than with `error_for_status`.
fn check_status(
    op: StoreOperation,
    res: Response,
    accepts: fn(StatusCode) -> bool,
) -> Result<Response, NetworkError> {
    let status = res.status();
    if accepts(status) {
        Ok(res)
    } else {
        Err(NetworkError::new(op, NetworkCause::Status(status.as_u16())))
    }
}

fn is_success(status: StatusCode) -> bool {
    status.is_success()
}

#[async_trait]
impl MovieStore for HttpMovieStore {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn list(&self) -> Result<Vec<MovieRecord>, NetworkError> {
        let op = StoreOperation::List;
        let res = self
            .http
            .get(self.base.clone())
            .send()
            .await
            .map_err(|err| NetworkError::from_reqwest(op, err))?;
        let res = check_status(op, res, |status| status == StatusCode::OK)?;
        let movies: Vec<MovieRecord> = res
            .json()
            .await
            .map_err(|err| NetworkError::from_reqwest(op, err))?;
        debug!(count = movies.len(), "decoded movie list");
        Ok(movies)
    }

    async fn create(&self, payload: &MoviePayload) -> Result<(), NetworkError> {
        let res = self
            .http
            .post(self.base.clone())
            .json(payload)
            .send()
            .await
            .map_err(|err| NetworkError::from_reqwest(StoreOperation::Create, err))?;
        check_status(StoreOperation::Create, res, is_success)?;
        Ok(())
    }

    async fn update(&self, id: &MovieId, payload: &MoviePayload) -> Result<(), NetworkError> {
        let res = self
            .http
            .put(self.item_url(id))
            .json(payload)
            .send()
            .await
            .map_err(|err| NetworkError::from_reqwest(StoreOperation::Update, err))?;
        check_status(StoreOperation::Update, res, is_success)?;
        Ok(())
    }

    async fn delete(&self, id: &MovieId) -> Result<(), NetworkError> {
        let res = self
            .http
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(|err| NetworkError::from_reqwest(StoreOperation::Delete, err))?;
        check_status(StoreOperation::Delete, res, is_success)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
