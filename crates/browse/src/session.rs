use std::fmt;

use omdb::{MovieSummary, OmdbError, SearchPage};

use crate::service::{user_message, MovieService};

/// Lifecycle of one session operation.
///
/// `LoadingMore` keeps the already-accumulated results on screen while the
/// next page is in flight. Nothing leaves `Error` except a fresh search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    LoadingMore,
    Success,
    Error { message: String },
}

/// Client-side filter over the `Type` tag of accumulated results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeFilter {
    All,
    Kind(String),
}

impl TypeFilter {
    pub fn parse(name: &str) -> TypeFilter {
        if name.eq_ignore_ascii_case("all") {
            TypeFilter::All
        } else {
            TypeFilter::Kind(name.to_string())
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => write!(f, "All"),
            TypeFilter::Kind(kind) => write!(f, "{}", kind),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestKind {
    Search,
    LoadMore,
}

/// A page request handed out by `begin_search`/`begin_load_more`.
///
/// The generation tag ties the eventual response back to the session state
/// that issued it; `apply` drops outcomes whose generation no longer
/// matches (a stale page 1 arriving after a newer search, or a load-more
/// completing after `clear`).
#[derive(Debug, Clone)]
pub struct PageRequest {
    generation: u64,
    kind: RequestKind,
    pub query: String,
    pub page: u32,
}

/// One active search: the query, its accumulated pages, and the type filter.
///
/// The session is a plain state machine. `begin_*` methods mutate state and
/// hand out a [`PageRequest`]; the response is fed back through [`apply`].
/// The async [`search`]/[`load_more`] drivers run that round trip in one
/// call and are what a UI normally uses.
///
/// [`apply`]: SearchSession::apply
/// [`search`]: SearchSession::search
/// [`load_more`]: SearchSession::load_more
#[derive(Debug)]
pub struct SearchSession {
    query: String,
    results: Vec<MovieSummary>,
    page: u32,
    total_results: u32,
    status: Status,
    filter: TypeFilter,
    generation: u64,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            page: 1,
            total_results: 0,
            status: Status::Idle,
            filter: TypeFilter::All,
            generation: 0,
        }
    }

    /// Start a new search. Resets all accumulated state, supersedes any
    /// outstanding request, and returns the page-1 request to issue.
    /// A blank query is a no-op and returns `None`.
    pub fn begin_search(&mut self, query: &str) -> Option<PageRequest> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        self.generation += 1;
        self.query = query.to_string();
        self.results.clear();
        self.page = 1;
        self.total_results = 0;
        self.filter = TypeFilter::All;
        self.status = Status::Loading;
        Some(PageRequest {
            generation: self.generation,
            kind: RequestKind::Search,
            query: self.query.clone(),
            page: 1,
        })
    }

    /// Request the next page of the current search, or `None`
    /// when there is nothing to do: no successful search on screen, a page
    /// already in flight, or every result already loaded.
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if self.status != Status::Success || !self.can_load_more() {
            return None;
        }
        self.status = Status::LoadingMore;
        Some(PageRequest {
            generation: self.generation,
            kind: RequestKind::LoadMore,
            query: self.query.clone(),
            page: self.page + 1,
        })
    }

    /// Feed a page outcome back into the session. Outcomes from a
    /// superseded generation are discarded without touching state.
    pub fn apply(&mut self, request: &PageRequest, outcome: Result<SearchPage, OmdbError>) {
        if request.generation != self.generation {
            tracing::debug!(
                query = %request.query,
                page = request.page,
                "discarding response from a superseded request"
            );
            return;
        }
        match request.kind {
            RequestKind::Search => match outcome {
                Ok(page) => {
                    self.results = page.items;
                    self.total_results = page.total_results;
                    self.status = Status::Success;
                }
                Err(err) => {
                    self.status = Status::Error {
                        message: user_message(&err),
                    };
                }
            },
            RequestKind::LoadMore => match outcome {
                Ok(page) => {
                    self.results.extend(page.items);
                    self.page += 1;
                    self.status = Status::Success;
                }
                Err(err) => {
                    // Best-effort pagination: keep what is already on
                    // screen and stop growing the list.
                    tracing::warn!(
                        query = %request.query,
                        page = request.page,
                        error = %err,
                        "load-more failed, keeping current results"
                    );
                    self.status = Status::Success;
                }
            },
        }
    }

    /// Run a full search round trip against `service`.
    pub async fn search(&mut self, service: &dyn MovieService, query: &str) {
        let Some(request) = self.begin_search(query) else {
            return;
        };
        let outcome = service.search_by_title(&request.query, request.page).await;
        self.apply(&request, outcome);
    }

    /// Fetch and append the next page, if the guards allow one.
    pub async fn load_more(&mut self, service: &dyn MovieService) {
        let Some(request) = self.begin_load_more() else {
            return;
        };
        let outcome = service.search_by_title(&request.query, request.page).await;
        self.apply(&request, outcome);
    }

    /// Back to the freshly-constructed state. Supersedes any outstanding
    /// request.
    pub fn clear(&mut self) {
        let generation = self.generation + 1;
        *self = Self::new();
        self.generation = generation;
    }

    /// Pure state change; filtering never refetches.
    pub fn set_filter(&mut self, filter: TypeFilter) {
        self.filter = filter;
    }

    /// The accumulated results narrowed by the active filter, original
    /// order preserved. Derived on every read, never cached.
    pub fn visible_results(&self) -> Vec<&MovieSummary> {
        self.results
            .iter()
            .filter(|movie| match &self.filter {
                TypeFilter::All => true,
                TypeFilter::Kind(kind) => movie.kind == *kind,
            })
            .collect()
    }

    /// `All` plus each distinct `Type` tag present in the results, in
    /// first-observed order.
    pub fn available_filters(&self) -> Vec<TypeFilter> {
        let mut filters = vec![TypeFilter::All];
        for movie in &self.results {
            if !filters
                .iter()
                .any(|f| matches!(f, TypeFilter::Kind(kind) if *kind == movie.kind))
            {
                filters.push(TypeFilter::Kind(movie.kind.clone()));
            }
        }
        filters
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[MovieSummary] {
        &self.results
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_results(&self) -> u32 {
        self.total_results
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn active_filter(&self) -> &TypeFilter {
        &self.filter
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            Status::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn can_load_more(&self) -> bool {
        (self.results.len() as u32) < self.total_results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{summary, transport_error, MockMovieService, ServiceCall};

    fn page_of(prefix: &str, start: usize, count: usize, kind: &str) -> Vec<MovieSummary> {
        (start..start + count)
            .map(|n| {
                summary(
                    &format!("tt{:07}", n),
                    &format!("{} {}", prefix, n),
                    "2005",
                    kind,
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn search_success_fills_first_page() {
        let service = MockMovieService::new();
        service.push_search_page(page_of("Batman", 1, 10, "movie"), 50);

        let mut session = SearchSession::new();
        session.search(&service, "batman").await;

        assert_eq!(*session.status(), Status::Success);
        assert_eq!(session.results().len(), 10);
        assert_eq!(session.page(), 1);
        assert_eq!(session.total_results(), 50);
        assert_eq!(
            service.calls(),
            vec![ServiceCall::Search {
                query: "batman".to_string(),
                page: 1
            }]
        );
    }

    #[tokio::test]
    async fn blank_query_is_a_no_op() {
        let service = MockMovieService::new();
        let mut session = SearchSession::new();

        session.search(&service, "   ").await;

        assert_eq!(*session.status(), Status::Idle);
        assert!(session.results().is_empty());
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn query_is_trimmed_before_the_request() {
        let service = MockMovieService::new();
        service.push_search_page(page_of("Batman", 1, 1, "movie"), 1);

        let mut session = SearchSession::new();
        session.search(&service, "  batman  ").await;

        assert_eq!(session.query(), "batman");
        assert_eq!(
            service.calls(),
            vec![ServiceCall::Search {
                query: "batman".to_string(),
                page: 1
            }]
        );
    }

    #[tokio::test]
    async fn service_reported_failure_surfaces_verbatim() {
        let service = MockMovieService::new();
        service.push_search_error(omdb::OmdbError::NotFound {
            message: "Movie not found!".to_string(),
        });

        let mut session = SearchSession::new();
        session.search(&service, "zzzqqq123").await;

        assert_eq!(session.error_message(), Some("Movie not found!"));
        assert!(session.results().is_empty());
    }

    #[tokio::test]
    async fn http_rejection_surfaces_only_the_body_message() {
        let service = MockMovieService::new();
        service.push_search_error(omdb::OmdbError::Api {
            status_code: 401,
            message: "Invalid API key!".to_string(),
        });

        let mut session = SearchSession::new();
        session.search(&service, "batman").await;

        assert_eq!(session.error_message(), Some("Invalid API key!"));
    }

    #[tokio::test]
    async fn transport_failure_gets_the_generic_message() {
        let service = MockMovieService::new();
        service.push_search_error(transport_error());

        let mut session = SearchSession::new();
        session.search(&service, "batman").await;

        assert_eq!(
            session.error_message(),
            Some(crate::service::CONNECTIVITY_MESSAGE)
        );
    }

    #[tokio::test]
    async fn load_more_appends_without_reordering() {
        let service = MockMovieService::new();
        service.push_search_page(page_of("Batman", 1, 10, "movie"), 25);
        service.push_search_page(page_of("Batman", 11, 10, "movie"), 25);

        let mut session = SearchSession::new();
        session.search(&service, "batman").await;
        let first_page: Vec<String> = session
            .results()
            .iter()
            .map(|m| m.imdb_id.clone())
            .collect();

        session.load_more(&service).await;

        assert_eq!(*session.status(), Status::Success);
        assert_eq!(session.results().len(), 20);
        assert_eq!(session.page(), 2);
        let prefix: Vec<String> = session.results()[..10]
            .iter()
            .map(|m| m.imdb_id.clone())
            .collect();
        assert_eq!(prefix, first_page);
        assert_eq!(
            service.calls()[1],
            ServiceCall::Search {
                query: "batman".to_string(),
                page: 2
            }
        );
    }

    #[tokio::test]
    async fn load_more_is_a_no_op_when_everything_is_loaded() {
        let service = MockMovieService::new();
        service.push_search_page(page_of("Batman", 1, 7, "movie"), 7);

        let mut session = SearchSession::new();
        session.search(&service, "batman").await;
        session.load_more(&service).await;

        assert_eq!(session.results().len(), 7);
        assert_eq!(session.page(), 1);
        assert_eq!(service.calls().len(), 1);
    }

    #[test]
    fn only_one_page_request_can_be_in_flight() {
        let mut session = SearchSession::new();
        let request = session.begin_search("batman").unwrap();
        session.apply(
            &request,
            Ok(SearchPage {
                items: page_of("Batman", 1, 10, "movie"),
                total_results: 50,
            }),
        );

        assert!(session.begin_load_more().is_some());
        // Second begin while the first is outstanding.
        assert!(session.begin_load_more().is_none());
    }

    #[tokio::test]
    async fn load_more_failure_keeps_current_results() {
        let service = MockMovieService::new();
        service.push_search_page(page_of("Batman", 1, 10, "movie"), 50);
        service.push_search_error(transport_error());

        let mut session = SearchSession::new();
        session.search(&service, "batman").await;
        session.load_more(&service).await;

        assert_eq!(*session.status(), Status::Success);
        assert_eq!(session.results().len(), 10);
        assert_eq!(session.page(), 1);
        assert_eq!(session.error_message(), None);
    }

    #[test]
    fn stale_search_response_is_discarded() {
        let mut session = SearchSession::new();
        let stale = session.begin_search("batman").unwrap();
        let current = session.begin_search("superman").unwrap();

        session.apply(
            &stale,
            Ok(SearchPage {
                items: page_of("Batman", 1, 10, "movie"),
                total_results: 50,
            }),
        );
        assert_eq!(*session.status(), Status::Loading);
        assert!(session.results().is_empty());

        session.apply(
            &current,
            Ok(SearchPage {
                items: page_of("Superman", 1, 5, "movie"),
                total_results: 5,
            }),
        );
        assert_eq!(*session.status(), Status::Success);
        assert_eq!(session.results()[0].title, "Superman 1");
    }

    #[test]
    fn load_more_response_after_clear_is_discarded() {
        let mut session = SearchSession::new();
        let request = session.begin_search("batman").unwrap();
        session.apply(
            &request,
            Ok(SearchPage {
                items: page_of("Batman", 1, 10, "movie"),
                total_results: 50,
            }),
        );
        let pending = session.begin_load_more().unwrap();

        session.clear();
        session.apply(
            &pending,
            Ok(SearchPage {
                items: page_of("Batman", 11, 10, "movie"),
                total_results: 50,
            }),
        );

        assert_eq!(*session.status(), Status::Idle);
        assert!(session.results().is_empty());
    }

    #[tokio::test]
    async fn clear_restores_the_initial_state() {
        let service = MockMovieService::new();
        service.push_search_page(page_of("Batman", 1, 10, "series"), 50);

        let mut session = SearchSession::new();
        session.search(&service, "batman").await;
        session.set_filter(TypeFilter::Kind("series".to_string()));
        session.clear();

        assert_eq!(*session.status(), Status::Idle);
        assert!(session.results().is_empty());
        assert_eq!(session.query(), "");
        assert_eq!(session.page(), 1);
        assert_eq!(session.total_results(), 0);
        assert_eq!(*session.active_filter(), TypeFilter::All);
    }

    #[tokio::test]
    async fn filter_narrows_without_reordering() {
        let service = MockMovieService::new();
        let mut items = page_of("Batman", 1, 10, "movie");
        items.extend(page_of("Batman TV", 11, 10, "movie"));
        items[3] = summary("tt0103359", "Batman: TAS", "1992", "series");
        items[8] = summary("tt0118266", "Batman Beyond", "1999", "series");
        items[15] = summary("tt0147746", "Batman of the Future", "1999", "series");
        service.push_search_page(items, 20);

        let mut session = SearchSession::new();
        session.search(&service, "batman").await;

        assert_eq!(session.visible_results().len(), 20);

        session.set_filter(TypeFilter::Kind("series".to_string()));
        let visible = session.visible_results();
        assert_eq!(visible.len(), 3);
        assert_eq!(visible[0].imdb_id, "tt0103359");
        assert_eq!(visible[2].imdb_id, "tt0147746");

        session.set_filter(TypeFilter::All);
        assert_eq!(session.visible_results().len(), session.results().len());
    }

    #[tokio::test]
    async fn available_filters_keep_first_observed_order() {
        let service = MockMovieService::new();
        let items = vec![
            summary("tt1", "A", "2000", "movie"),
            summary("tt2", "B", "2001", "series"),
            summary("tt3", "C", "2002", "movie"),
            summary("tt4", "D", "2003", "episode"),
        ];
        service.push_search_page(items, 4);

        let mut session = SearchSession::new();
        session.search(&service, "abc").await;

        assert_eq!(
            session.available_filters(),
            vec![
                TypeFilter::All,
                TypeFilter::Kind("movie".to_string()),
                TypeFilter::Kind("series".to_string()),
                TypeFilter::Kind("episode".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn unknown_filter_kind_yields_an_empty_view() {
        let service = MockMovieService::new();
        service.push_search_page(page_of("Batman", 1, 5, "movie"), 5);

        let mut session = SearchSession::new();
        session.search(&service, "batman").await;
        session.set_filter(TypeFilter::Kind("game".to_string()));

        assert!(session.visible_results().is_empty());
    }

    #[tokio::test]
    async fn new_search_resets_the_filter() {
        let service = MockMovieService::new();
        service.push_search_page(page_of("Batman", 1, 5, "series"), 5);
        service.push_search_page(page_of("Superman", 1, 5, "movie"), 5);

        let mut session = SearchSession::new();
        session.search(&service, "batman").await;
        session.set_filter(TypeFilter::Kind("series".to_string()));

        session.search(&service, "superman").await;

        assert_eq!(*session.active_filter(), TypeFilter::All);
        assert_eq!(session.visible_results().len(), 5);
    }

    #[test]
    fn filter_parse_is_case_insensitive_for_all() {
        assert_eq!(TypeFilter::parse("ALL"), TypeFilter::All);
        assert_eq!(
            TypeFilter::parse("series"),
            TypeFilter::Kind("series".to_string())
        );
    }
}
