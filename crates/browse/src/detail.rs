use omdb::{MovieDetail, OmdbError};

use crate::service::{user_message, MovieService};
use crate::session::Status;

/// A by-id lookup handed out by [`DetailLookup::begin_fetch`], tagged with
/// the generation that issued it.
#[derive(Debug, Clone)]
pub struct DetailRequest {
    generation: u64,
    pub imdb_id: String,
}

/// Loading/success/error projection of one full movie record.
///
/// Single-shot variant of the search session: one identifier, one request,
/// one record. Re-fetching (the identifier changed) resets and supersedes
/// the previous request exactly like a fresh lookup.
#[derive(Debug)]
pub struct DetailLookup {
    imdb_id: String,
    detail: Option<MovieDetail>,
    status: Status,
    generation: u64,
}

impl Default for DetailLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailLookup {
    pub fn new() -> Self {
        Self {
            imdb_id: String::new(),
            detail: None,
            status: Status::Idle,
            generation: 0,
        }
    }

    /// Start a lookup for `imdb_id`. A blank identifier is a no-op.
    pub fn begin_fetch(&mut self, imdb_id: &str) -> Option<DetailRequest> {
        let imdb_id = imdb_id.trim();
        if imdb_id.is_empty() {
            return None;
        }
        self.generation += 1;
        self.imdb_id = imdb_id.to_string();
        self.detail = None;
        self.status = Status::Loading;
        Some(DetailRequest {
            generation: self.generation,
            imdb_id: self.imdb_id.clone(),
        })
    }

    /// Feed the lookup outcome back in; superseded outcomes are discarded.
    pub fn apply(&mut self, request: &DetailRequest, outcome: Result<MovieDetail, OmdbError>) {
        if request.generation != self.generation {
            tracing::debug!(
                imdb_id = %request.imdb_id,
                "discarding detail response from a superseded request"
            );
            return;
        }
        match outcome {
            Ok(detail) => {
                self.detail = Some(detail);
                self.status = Status::Success;
            }
            Err(err) => {
                self.status = Status::Error {
                    message: user_message(&err),
                };
            }
        }
    }

    /// Run a full lookup round trip against `service`.
    pub async fn fetch(&mut self, service: &dyn MovieService, imdb_id: &str) {
        let Some(request) = self.begin_fetch(imdb_id) else {
            return;
        };
        let outcome = service.lookup_by_id(&request.imdb_id).await;
        self.apply(&request, outcome);
    }

    pub fn imdb_id(&self) -> &str {
        &self.imdb_id
    }

    pub fn detail(&self) -> Option<&MovieDetail> {
        self.detail.as_ref()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            Status::Error { message } => Some(message),
            _ => None,
        }
    }
}
