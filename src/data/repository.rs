use std::sync::Arc;

use crate::data::mapper::to_domain;
use crate::data::remote::{FetchError, QuoteApi};
use crate::domain::{Quote, QuoteId};

/// Domain-level access to quotes.
///
/// Every call goes to the injected [`QuoteApi`]; nothing is cached and
/// concurrent calls for the same id are not merged.
#[derive(Clone)]
pub struct QuoteRepository {
    api: Arc<dyn QuoteApi>,
}

impl QuoteRepository {
    pub fn new(api: Arc<dyn QuoteApi>) -> Self {
        Self { api }
    }

    /// Fetch and map the quote with the given id. Errors pass through untouched.
    pub async fn get_quote(&self, id: QuoteId) -> Result<Quote, FetchError> {
        let dto = self.api.fetch_quote(id).await?;
        Ok(to_domain(dto))
    }
}
