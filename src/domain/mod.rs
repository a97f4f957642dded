//! Transport-independent domain types.

mod quote;

pub use quote::{Quote, QuoteId};
