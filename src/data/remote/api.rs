use async_trait::async_trait;

use super::dto::QuoteDto;
use super::error::FetchError;
use crate::domain::QuoteId;

/// Fetches raw quote records from a remote source.
///
/// [`HttpQuoteClient`](super::HttpQuoteClient) is the production
/// implementation; tests substitute their own.
#[async_trait]
pub trait QuoteApi: Send + Sync {
    /// Fetch the quote with the given id.
    ///
    /// Performs exactly one request. No local validation of `id`, no retry.
    async fn fetch_quote(&self, id: QuoteId) -> Result<QuoteDto, FetchError>;
}
