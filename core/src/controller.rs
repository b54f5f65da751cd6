//! Fetch Controller: owns the films fetch lifecycle and publishes state.
//!
//! # Design
//! State lives in a `tokio::sync::watch` channel; subscribers are woken on
//! every transition and read an immutable `FetchState` snapshot.
//!
//! Overlapping triggers each issue their own request and none is cancelled.
//! Every trigger takes the next generation number, and a completion is only
//! applied while its generation is still the latest. The generation bump and
//! the `begin` transition happen under the channel's write lock, as does the
//! check-and-apply on completion, so a stale response can never land after a
//! newer trigger has started.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::client::FilmsClient;
use crate::error::FetchError;
use crate::http::Transport;
use crate::state::FetchState;
use crate::types::Movie;

/// When the controller fetches without being asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Fetch only on explicit user action. Loading and error are never
    /// recorded; failures are only reported through `FetchOutcome`.
    Manual,
    /// Fetch once when the view mounts, and again on user action. Loading
    /// and error are tracked in the published state.
    #[default]
    FetchOnMount,
}

/// What a single trigger ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was applied; holds the number of movies.
    Loaded(usize),
    /// The fetch failed; holds the message shown to the user.
    Failed(String),
    /// A newer trigger started before this one completed, so its result was
    /// dropped.
    Superseded,
}

pub struct FetchController<T> {
    client: FilmsClient,
    transport: T,
    lifecycle: Lifecycle,
    generation: AtomicU64,
    mounted: AtomicBool,
    state: watch::Sender<FetchState>,
}

impl<T: Transport> FetchController<T> {
    pub fn new(client: FilmsClient, transport: T, lifecycle: Lifecycle) -> Self {
        let (state, _) = watch::channel(FetchState::default());
        Self {
            client,
            transport,
            lifecycle,
            generation: AtomicU64::new(0),
            mounted: AtomicBool::new(false),
            state,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Current snapshot.
    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    /// Called when the view first appears. Under `FetchOnMount` the first
    /// call triggers a fetch and later calls do nothing.
    pub async fn mount(&self) -> Option<FetchOutcome> {
        if self.lifecycle != Lifecycle::FetchOnMount {
            return None;
        }
        if self.mounted.swap(true, Ordering::SeqCst) {
            return None;
        }
        Some(self.fetch().await)
    }

    /// Trigger a fetch and wait for it to complete.
    pub async fn fetch(&self) -> FetchOutcome {
        let generation = self.start();
        debug!(generation, base_url = self.client.base_url(), "fetching films");

        let result = self.load().await;
        self.finish(generation, result)
    }

    async fn load(&self) -> Result<Vec<Movie>, FetchError> {
        let request = self.client.build_list_films();
        let response = self.transport.execute(request).await?;
        self.client.parse_list_films(response)
    }

    fn start(&self) -> u64 {
        let mut generation = 0;
        let track = self.lifecycle == Lifecycle::FetchOnMount;
        self.state.send_if_modified(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            if track {
                *state = state.begin();
            }
            track
        });
        generation
    }

    fn finish(&self, generation: u64, result: Result<Vec<Movie>, FetchError>) -> FetchOutcome {
        let track = self.lifecycle == Lifecycle::FetchOnMount;
        let mut outcome = FetchOutcome::Superseded;
        self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            match result {
                Ok(movies) => {
                    outcome = FetchOutcome::Loaded(movies.len());
                    *state = state.succeed(movies);
                    true
                }
                Err(error) => {
                    let message = error.to_string();
                    if track {
                        *state = state.fail(message.clone());
                    }
                    outcome = FetchOutcome::Failed(message);
                    track
                }
            }
        });

        match &outcome {
            FetchOutcome::Loaded(count) => info!(generation, count = *count, "films loaded"),
            FetchOutcome::Failed(error) => warn!(generation, %error, "films fetch failed"),
            FetchOutcome::Superseded => debug!(generation, "discarding superseded films response"),
        }
        outcome
    }
}
