//! Wire DTOs for the films API and the display-ready `Movie` record.
//!
//! # Design
//! `RawFilm` mirrors only the fields the client reads; serde ignores the
//! rest of each API entry. `Movie` is the shape handed to views and is
//! serialized with camelCase keys.

use serde::{Deserialize, Serialize};

/// Envelope returned by `GET /films`. Paging fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilmsPage {
    pub results: Vec<RawFilm>,
}

/// One entry of the `results` array as the API sends it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawFilm {
    pub episode_id: i64,
    pub title: String,
    pub opening_crawl: String,
    pub release_date: String,
}

/// Display-ready movie, immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub opening_text: String,
    pub release_date: String,
}

impl From<RawFilm> for Movie {
    fn from(raw: RawFilm) -> Self {
        Self {
            id: raw.episode_id,
            title: raw.title,
            opening_text: raw.opening_crawl,
            release_date: raw.release_date,
        }
    }
}
