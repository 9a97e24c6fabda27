use thiserror::Error;

#[derive(Debug, Error)]
pub enum OmdbError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse JSON response at {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    /// The service answered but reported no match ("Response": "False").
    /// Covers both "Movie not found!" and invalid-ID rejections.
    #[error("{message}")]
    NotFound { message: String },

    #[error("API error: {status_code} - {message}")]
    Api { status_code: u16, message: String },
}
