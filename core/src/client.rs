//! Stateless HTTP request builder and response parser for the films API.
//!
//! # Design
//! `FilmsClient` holds only a `base_url` and carries no mutable state between
//! calls. The list operation is split into `build_list_films`, which produces
//! an `HttpRequest`, and `parse_list_films`, which consumes an `HttpResponse`
//! and returns display-ready `Movie` records. Whoever sits between the two
//! owns the network.

use crate::error::FetchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{FilmsPage, Movie};

/// Base URL of the public films API.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// Synchronous, stateless client for the films API.
#[derive(Debug, Clone)]
pub struct FilmsClient {
    base_url: String,
}

impl Default for FilmsClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl FilmsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_films(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/films", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Parse a films listing into movies, preserving response order.
    pub fn parse_list_films(&self, response: HttpResponse) -> Result<Vec<Movie>, FetchError> {
        check_status(&response)?;
        let page: FilmsPage = serde_json::from_str(&response.body)
            .map_err(|e| FetchError::Deserialization(e.to_string()))?;
        Ok(page.results.into_iter().map(Movie::from).collect())
    }
}

/// Any status outside the 2xx range is a failed request.
fn check_status(response: &HttpResponse) -> Result<(), FetchError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(FetchError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
