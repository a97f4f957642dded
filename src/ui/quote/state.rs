use crate::domain::Quote;
use crate::ui::mvi::UiState;

/// What the quote screen is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuoteUiState {
    #[default]
    Loading,
    Success {
        quote: Quote,
    },
    Error {
        message: String,
    },
}

impl UiState for QuoteUiState {}

impl QuoteUiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True for `Success` and `Error`, the two ends of a fetch cycle.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn quote(&self) -> Option<&Quote> {
        match self {
            Self::Success { quote } => Some(quote),
            _ => None,
        }
    }
}
