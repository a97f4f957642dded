//! In-process `QuoteApi` fakes.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use quotecard::data::remote::{FetchError, QuoteApi, QuoteDto};
use quotecard::domain::QuoteId;
use std::time::Duration;
use tokio::sync::oneshot;

pub type Reply = Result<QuoteDto, FetchError>;

pub fn dto(id: QuoteId, text: &str, author: &str) -> QuoteDto {
    QuoteDto {
        id,
        text: text.to_string(),
        author: author.to_string(),
    }
}

pub fn server_error(id: QuoteId) -> FetchError {
    FetchError::Status {
        status: 500,
        url: format!("http://fake/quotes/{}", id),
    }
}

/// Answers every call immediately using `reply`.
pub struct StaticApi {
    reply: fn(QuoteId) -> Reply,
    calls: Mutex<Vec<QuoteId>>,
}

impl StaticApi {
    pub fn new(reply: fn(QuoteId) -> Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Replies `{id, "Quote {id}", "Author {id}"}` for any id.
    pub fn echo() -> Self {
        Self::new(|id| Ok(dto(id, &format!("Quote {}", id), &format!("Author {}", id))))
    }

    pub fn calls(&self) -> Vec<QuoteId> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl QuoteApi for StaticApi {
    async fn fetch_quote(&self, id: QuoteId) -> Result<QuoteDto, FetchError> {
        self.calls.lock().push(id);
        (self.reply)(id)
    }
}

/// Holds every call open until the test completes it by index.
#[derive(Default)]
pub struct GatedApi {
    calls: Mutex<Vec<(QuoteId, Option<oneshot::Sender<Reply>>)>>,
}

impl GatedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn call_ids(&self) -> Vec<QuoteId> {
        self.calls.lock().iter().map(|(id, _)| *id).collect()
    }

    /// Wait until at least `n` calls have arrived.
    pub async fn wait_for_calls(&self, n: usize) {
        let start = std::time::Instant::now();
        while self.call_count() < n {
            assert!(
                start.elapsed() < Duration::from_secs(5),
                "expected {} calls, got {}",
                n,
                self.call_count()
            );
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    /// Finish call number `index`. Returns false if the caller went away.
    pub fn complete(&self, index: usize, reply: Reply) -> bool {
        let sender = self.calls.lock()[index].1.take().expect("call already completed");
        sender.send(reply).is_ok()
    }
}

#[async_trait]
impl QuoteApi for GatedApi {
    async fn fetch_quote(&self, id: QuoteId) -> Result<QuoteDto, FetchError> {
        let (tx, rx) = oneshot::channel();
        self.calls.lock().push((id, Some(tx)));
        rx.await.unwrap_or_else(|_| {
            Err(FetchError::Decode {
                url: format!("http://fake/quotes/{}", id),
                message: "gate dropped".to_string(),
            })
        })
    }
}
