use crate::error::OmdbError;
use crate::models::MovieDetail;
use crate::OmdbClient;

impl OmdbClient {
    /// Get the full record for one title by IMDb ID.
    /// GET /?apikey=K&i={imdb_id}
    pub async fn lookup_title(&self, imdb_id: &str) -> crate::Result<MovieDetail> {
        let response = self
            .client()
            .get(self.url())
            .query(&[("apikey", self.api_key.as_str()), ("i", imdb_id)])
            .send()
            .await?;

        // Failures share the search shape: 200 with "Response": "False".
        let value: serde_json::Value = self.handle_response(response).await?;
        if value.get("Response").and_then(|v| v.as_str()) != Some("True") {
            let message = value
                .get("Error")
                .and_then(|v| v.as_str())
                .unwrap_or("Movie not found!")
                .to_string();
            return Err(OmdbError::NotFound { message });
        }
        serde_path_to_error::deserialize(value).map_err(|e| OmdbError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
