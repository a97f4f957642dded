//! Remote quote service: wire types and the fetch client.

mod api;
mod client;
mod dto;
mod error;

pub use api::QuoteApi;
pub use client::HttpQuoteClient;
pub use dto::QuoteDto;
pub use error::FetchError;
