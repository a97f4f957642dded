mod intent;
mod reducer;
mod state;

pub use intent::QuoteIntent;
pub use reducer::QuoteReducer;
pub use state::QuoteUiState;
