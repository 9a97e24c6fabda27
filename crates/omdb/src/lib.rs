mod client;
mod error;
mod lookup;
pub mod models;
mod search;

pub use client::OmdbClient;
pub use error::OmdbError;
pub use models::{MovieDetail, MovieSummary, Rating, SearchPage};

pub type Result<T> = std::result::Result<T, OmdbError>;
