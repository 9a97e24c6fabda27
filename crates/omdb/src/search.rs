use serde::Deserialize;

use crate::error::OmdbError;
use crate::models::{MovieSummary, SearchPage};
use crate::OmdbClient;

/// The service signals failure in-band: a 200 with `"Response": "False"`
/// and an `Error` message instead of results.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RawSearchResponse {
    response: String,
    #[serde(default)]
    search: Vec<MovieSummary>,
    #[serde(rename = "totalResults", default)]
    total_results: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl RawSearchResponse {
    fn into_page(self) -> crate::Result<SearchPage> {
        if self.response != "True" {
            return Err(OmdbError::NotFound {
                message: self
                    .error
                    .unwrap_or_else(|| "Movie not found!".to_string()),
            });
        }
        let raw_total = self.total_results.unwrap_or_default();
        let total_results = raw_total.parse::<u32>().map_err(|_| OmdbError::Json {
            path: "totalResults".to_string(),
            source: serde::de::Error::custom(format!(
                "expected a decimal count, got {:?}",
                raw_total
            )),
        })?;
        Ok(SearchPage {
            items: self.search,
            total_results,
        })
    }
}

impl OmdbClient {
    /// Search titles by name, one page at a time.
    /// GET /?apikey=K&s={query}&page={page}
    pub async fn search_titles(&self, query: &str, page: u32) -> crate::Result<SearchPage> {
        let response = self
            .client()
            .get(self.url())
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("s", query),
                ("page", &page.to_string()),
            ])
            .send()
            .await?;
        let raw: RawSearchResponse = self.handle_response(response).await?;
        raw.into_page()
    }
}
