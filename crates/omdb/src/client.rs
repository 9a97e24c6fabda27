use reqwest::Client;

use crate::error::OmdbError;

const BASE_URL: &str = "https://www.omdbapi.com/";

pub struct OmdbClient {
    client: Client,
    pub(crate) api_key: String,
}

impl OmdbClient {
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self) -> &'static str {
        BASE_URL
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            // A rejected key comes back as 401 with an {"Error": ...} body.
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("Error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            return Err(OmdbError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| OmdbError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
