//! Error types for the films client.
//!
//! # Design
//! The three failure levels of a fetch (network, HTTP status, body parse)
//! stay distinct variants so logs can tell them apart, while `Display`
//! gives each a single human-readable line the view can show as-is.

use thiserror::Error;

/// The request never produced a response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors produced while fetching and parsing the films list.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure: the request never completed.
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Http { status: u16, body: String },

    /// The response body was not the expected films envelope.
    #[error("could not read the films response: {0}")]
    Deserialization(String),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
