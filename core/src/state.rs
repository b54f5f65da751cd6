//! Immutable snapshot of the fetch lifecycle.
//!
//! Every transition returns a new `FetchState`; nothing mutates a published
//! snapshot. Movies are behind an `Arc` so a transition that keeps them
//! (starting a fetch, recording a failure) does not copy the list.

use std::sync::Arc;

use crate::types::Movie;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchState {
    movies: Arc<[Movie]>,
    loading: bool,
    error: Option<String>,
}

impl Default for FetchState {
    fn default() -> Self {
        Self {
            movies: Arc::from(Vec::new()),
            loading: false,
            error: None,
        }
    }
}

impl FetchState {
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A fetch has started: loading on, error cleared, movies kept.
    pub fn begin(&self) -> Self {
        Self {
            movies: Arc::clone(&self.movies),
            loading: true,
            error: None,
        }
    }

    /// A fetch succeeded: movies replaced wholesale.
    pub fn succeed(&self, movies: Vec<Movie>) -> Self {
        Self {
            movies: Arc::from(movies),
            loading: false,
            error: None,
        }
    }

    /// A fetch failed. Previously loaded movies stay visible under the error.
    pub fn fail(&self, message: impl Into<String>) -> Self {
        Self {
            movies: Arc::clone(&self.movies),
            loading: false,
            error: Some(message.into()),
        }
    }
}
