//! Films fetch client core.
//!
//! # Overview
//! Fetches the film list from the Star Wars API, maps each entry to a
//! display-ready `Movie`, and tracks the fetch lifecycle (movies, loading,
//! error) for a view that re-renders on every change.
//!
//! # Design
//! - `FilmsClient` is stateless: `build_list_films` produces a request and
//!   `parse_list_films` consumes a response.
//! - The host performs I/O through the `Transport` trait.
//! - `FetchController` publishes immutable `FetchState` snapshots over a
//!   watch channel; `render` turns a snapshot into exactly one `View`.
//! - Overlapping fetches are resolved by generation number: only the latest
//!   trigger's response is applied.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod render;
pub mod state;
pub mod types;

pub use client::{FilmsClient, DEFAULT_BASE_URL};
pub use controller::{FetchController, FetchOutcome, Lifecycle};
pub use error::{FetchError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use render::{render, View};
pub use state::FetchState;
pub use types::{FilmsPage, Movie, RawFilm};
