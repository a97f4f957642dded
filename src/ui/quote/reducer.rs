use crate::ui::mvi::Reducer;
use crate::ui::quote::intent::QuoteIntent;
use crate::ui::quote::state::QuoteUiState;

pub struct QuoteReducer;

impl Reducer for QuoteReducer {
    type State = QuoteUiState;
    type Intent = QuoteIntent;

    // Every intent fully determines the next state, so the previous one is
    // never consulted. A new cycle always starts over from Loading.
    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QuoteIntent::FetchStarted => QuoteUiState::Loading,
            QuoteIntent::Loaded { quote } => QuoteUiState::Success { quote },
            QuoteIntent::Failed { message } => QuoteUiState::Error { message },
        }
    }
}
