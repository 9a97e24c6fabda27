use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The service writes the literal string "N/A" where a field has no value.
pub(crate) const NOT_AVAILABLE: &str = "N/A";

fn present(value: &str) -> Option<&str> {
    if value.is_empty() || value == NOT_AVAILABLE {
        None
    } else {
        Some(value)
    }
}

/// One entry of a search result page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieSummary {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    /// Category tag, e.g. "movie", "series", "episode".
    #[serde(rename = "Type")]
    pub kind: String,
    pub poster: String,
}

impl MovieSummary {
    /// Poster URL, with the "N/A" sentinel normalized away.
    pub fn poster_url(&self) -> Option<&str> {
        present(&self.poster)
    }
}

/// One page of search results plus the total reported for the whole query.
#[derive(Debug, Clone)]
pub struct SearchPage {
    pub items: Vec<MovieSummary>,
    pub total_results: u32,
}

/// A `{Source, Value}` rating pair, e.g. ("Rotten Tomatoes", "89%").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rating {
    pub source: String,
    pub value: String,
}

/// Full record for one title. The fields below are the ones a front-end
/// projects by name; anything else the service sends lands in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieDetail {
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(default)]
    pub rated: String,
    #[serde(default)]
    pub released: String,
    #[serde(default)]
    pub runtime: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub writer: String,
    #[serde(default)]
    pub actors: String,
    #[serde(default)]
    pub plot: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub awards: String,
    #[serde(default)]
    pub poster: String,
    #[serde(default)]
    pub ratings: Vec<Rating>,
    #[serde(rename = "imdbVotes", default)]
    pub imdb_votes: String,
    #[serde(rename = "DVD", default)]
    pub dvd: String,
    #[serde(rename = "BoxOffice", default)]
    pub box_office: String,
    #[serde(default)]
    pub production: String,
    #[serde(default)]
    pub website: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl MovieDetail {
    /// A projected field with the "N/A" sentinel normalized away.
    pub fn field<'a>(&self, value: &'a str) -> Option<&'a str> {
        present(value)
    }

    pub fn poster_url(&self) -> Option<&str> {
        present(&self.poster)
    }

    pub fn plot_text(&self) -> Option<&str> {
        present(&self.plot)
    }

    /// Comma-separated genre string split into tags, empty when "N/A".
    pub fn genres(&self) -> Vec<&str> {
        match present(&self.genre) {
            Some(genre) => genre.split(", ").collect(),
            None => Vec::new(),
        }
    }
}
