//! Mock movie service for testing the session cores.
//!
//! Responses are scripted ahead of time and consumed in order; every call
//! is recorded so tests can verify exactly which pages were requested.
//!
//! # Example
//!
//! ```ignore
//! use browse::mocks::{summary, MockMovieService};
//! use browse::SearchSession;
//!
//! #[tokio::test]
//! async fn first_page_loads() {
//!     let service = MockMovieService::new();
//!     service.push_search_page(vec![summary("tt1", "Batman", "1989", "movie")], 50);
//!
//!     let mut session = SearchSession::new();
//!     session.search(&service, "batman").await;
//!     assert_eq!(session.results().len(), 1);
//! }
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use omdb::{MovieDetail, MovieSummary, OmdbError, SearchPage};

use crate::service::MovieService;

/// Recorded service call for verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    Search { query: String, page: u32 },
    Lookup { imdb_id: String },
}

/// Mock implementation of [`MovieService`] with scripted responses.
#[derive(Clone, Default)]
pub struct MockMovieService {
    search_outcomes: Arc<Mutex<VecDeque<Result<SearchPage, OmdbError>>>>,
    lookup_outcomes: Arc<Mutex<VecDeque<Result<MovieDetail, OmdbError>>>>,
    calls: Arc<Mutex<Vec<ServiceCall>>>,
}

impl MockMovieService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful search page.
    pub fn push_search_page(&self, items: Vec<MovieSummary>, total_results: u32) {
        self.search_outcomes
            .lock()
            .unwrap()
            .push_back(Ok(SearchPage {
                items,
                total_results,
            }));
    }

    /// Script a failed search.
    pub fn push_search_error(&self, error: OmdbError) {
        self.search_outcomes.lock().unwrap().push_back(Err(error));
    }

    /// Script a successful detail lookup.
    pub fn push_lookup(&self, detail: MovieDetail) {
        self.lookup_outcomes.lock().unwrap().push_back(Ok(detail));
    }

    /// Script a failed detail lookup.
    pub fn push_lookup_error(&self, error: OmdbError) {
        self.lookup_outcomes.lock().unwrap().push_back(Err(error));
    }

    /// All calls made so far (for verification).
    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieService for MockMovieService {
    async fn search_by_title(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchPage, OmdbError> {
        self.calls.lock().unwrap().push(ServiceCall::Search {
            query: query.to_string(),
            page,
        });
        self.search_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted search outcome left")
    }

    async fn lookup_by_id(&self, imdb_id: &str) -> Result<MovieDetail, OmdbError> {
        self.calls.lock().unwrap().push(ServiceCall::Lookup {
            imdb_id: imdb_id.to_string(),
        });
        self.lookup_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted lookup outcome left")
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Build a search result item for tests.
pub fn summary(imdb_id: &str, title: &str, year: &str, kind: &str) -> MovieSummary {
    serde_json::from_value(serde_json::json!({
        "imdbID": imdb_id,
        "Title": title,
        "Year": year,
        "Type": kind,
        "Poster": "N/A",
    }))
    .expect("valid summary fixture")
}

/// Build a minimal detail record for tests.
pub fn detail(imdb_id: &str, title: &str) -> MovieDetail {
    serde_json::from_value(serde_json::json!({
        "imdbID": imdb_id,
        "Title": title,
        "Year": "1994",
        "Type": "movie",
        "Plot": "Two imprisoned men bond over a number of years.",
        "Ratings": [{"Source": "Internet Movie Database", "Value": "9.3/10"}],
        "Response": "True",
    }))
    .expect("valid detail fixture")
}

/// A connectivity-class error (no usable response).
pub fn transport_error() -> OmdbError {
    OmdbError::Json {
        path: ".".to_string(),
        source: serde::de::Error::custom("connection reset"),
    }
}
