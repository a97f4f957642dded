//! Owner of the quote view state.
//!
//! [`QuotePresenter`] runs fetch cycles and publishes every state through a
//! `tokio::sync::watch` channel, which keeps only the latest value: late
//! subscribers see the current state immediately, and a slow reader may
//! skip intermediate states but never the last one.

mod scope;

pub use scope::FetchScope;

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::data::QuoteRepository;
use crate::domain::QuoteId;
use crate::ui::mvi::Reducer;
use crate::ui::quote::{QuoteIntent, QuoteReducer, QuoteUiState};

/// Runs fetch cycles and owns the only mutable view state.
///
/// Must be used from inside a tokio runtime: [`fetch_quote`](Self::fetch_quote)
/// spawns the network call.
pub struct QuotePresenter {
    repository: QuoteRepository,
    inner: Arc<Shared>,
}

struct Shared {
    state: watch::Sender<QuoteUiState>,
    /// Generation of the most recent cycle. Publication happens while this
    /// lock is held, so checking the generation and the scope, then sending,
    /// is atomic with respect to new cycles and teardown.
    latest_generation: Mutex<u64>,
    scope: FetchScope,
}

impl Shared {
    /// Apply `intent` if `generation` is still current and the scope is live.
    fn publish(&self, generation: u64, intent: QuoteIntent) {
        let latest = self.latest_generation.lock();
        if self.scope.is_cancelled() {
            tracing::debug!(generation, "Presenter closed, dropping result");
            return;
        }
        if *latest != generation {
            tracing::debug!(
                generation,
                latest = *latest,
                "Superseded fetch cycle, dropping result"
            );
            return;
        }
        self.state
            .send_modify(|state| *state = QuoteReducer::reduce(std::mem::take(state), intent));
    }
}

impl QuotePresenter {
    pub fn new(repository: QuoteRepository) -> Self {
        let (state, _) = watch::channel(QuoteUiState::default());
        Self {
            repository,
            inner: Arc::new(Shared {
                state,
                latest_generation: Mutex::new(0),
                scope: FetchScope::new(),
            }),
        }
    }

    /// Start a fetch cycle for `id`.
    ///
    /// `Loading` is published before this returns; the terminal state
    /// arrives later through [`subscribe`](Self::subscribe). Starting a new
    /// cycle supersedes any cycle still in flight.
    pub fn fetch_quote(&self, id: QuoteId) {
        let generation = {
            let mut latest = self.inner.latest_generation.lock();
            if self.inner.scope.is_cancelled() {
                tracing::debug!(quote_id = id, "Presenter closed, ignoring fetch");
                return;
            }
            *latest += 1;
            self.inner.state.send_modify(|state| {
                *state = QuoteReducer::reduce(std::mem::take(state), QuoteIntent::FetchStarted)
            });
            *latest
        };

        tracing::info!(quote_id = id, generation, "Fetch cycle started");

        let repository = self.repository.clone();
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let result = tokio::select! {
                _ = inner.scope.cancelled() => return,
                result = repository.get_quote(id) => result,
            };

            let intent = match result {
                Ok(quote) => {
                    tracing::info!(quote_id = quote.id, generation, "Quote loaded");
                    QuoteIntent::Loaded { quote }
                }
                Err(err) => {
                    tracing::warn!(
                        quote_id = id,
                        generation,
                        kind = err.kind(),
                        error = %err,
                        "Quote fetch failed"
                    );
                    QuoteIntent::Failed {
                        message: format!("Error getting quote: {}", err),
                    }
                }
            };

            inner.publish(generation, intent);
        });
    }

    /// Receiver that always holds the latest state.
    pub fn subscribe(&self) -> watch::Receiver<QuoteUiState> {
        self.inner.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> QuoteUiState {
        self.inner.state.borrow().clone()
    }

    /// Tear down: in-flight cycles are abandoned and nothing is published
    /// after this returns.
    pub fn close(&self) {
        let _latest = self.inner.latest_generation.lock();
        self.inner.scope.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.scope.is_cancelled()
    }
}

impl Drop for QuotePresenter {
    fn drop(&mut self) {
        self.close();
    }
}
