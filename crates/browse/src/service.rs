use async_trait::async_trait;
use omdb::{MovieDetail, OmdbClient, OmdbError, SearchPage};

/// Fixed fallback shown when no usable response arrived at all
/// (network down, malformed body). Service-reported messages are
/// surfaced verbatim instead.
pub(crate) const CONNECTIVITY_MESSAGE: &str =
    "Could not reach the movie service. Check your internet connection.";

/// The external movie-lookup service, as the session cores see it.
///
/// Both operations are idempotent lookups; implementations over a real
/// transport live here, fakes for tests live in [`crate::mocks`].
#[async_trait]
pub trait MovieService: Send + Sync {
    /// One page of titles matching `query`.
    async fn search_by_title(&self, query: &str, page: u32)
        -> Result<SearchPage, OmdbError>;

    /// Full record for one title by its external identifier.
    async fn lookup_by_id(&self, imdb_id: &str) -> Result<MovieDetail, OmdbError>;

    /// Service name for logging and debugging.
    fn name(&self) -> &'static str;
}

/// The production implementation, backed by the OMDb client.
pub struct OmdbService {
    client: OmdbClient,
}

impl OmdbService {
    pub fn new(client: OmdbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MovieService for OmdbService {
    async fn search_by_title(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchPage, OmdbError> {
        self.client.search_titles(query, page).await
    }

    async fn lookup_by_id(&self, imdb_id: &str) -> Result<MovieDetail, OmdbError> {
        self.client.lookup_title(imdb_id).await
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}

/// Message shown to the user for a failed operation: the service's own
/// words when it produced any, the fixed connectivity fallback otherwise.
/// `Api` failures carry a status prefix in their `Display` for logs; the
/// user sees only the body message.
pub(crate) fn user_message(err: &OmdbError) -> String {
    match err {
        OmdbError::NotFound { message } | OmdbError::Api { message, .. } => message.clone(),
        OmdbError::Request(_) | OmdbError::Json { .. } => CONNECTIVITY_MESSAGE.to_string(),
    }
}
