use crate::domain::Quote;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum QuoteIntent {
    /// A new fetch cycle began.
    FetchStarted,
    /// The repository returned a quote.
    Loaded { quote: Quote },
    /// The repository failed; `message` is what the user will read.
    Failed { message: String },
}

impl Intent for QuoteIntent {}
