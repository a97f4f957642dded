//! Headless surface: one fetch cycle, rendered as plain text.

use crate::domain::QuoteId;
use crate::presenter::QuotePresenter;
use crate::ui::quote::QuoteUiState;

/// Plain-text rendering of a state, same content as the terminal view.
pub fn render_plain(state: &QuoteUiState) -> String {
    match state {
        QuoteUiState::Loading => "Loading...".to_string(),
        QuoteUiState::Success { quote } => format!("“{}”\n- {}", quote.text, quote.author),
        QuoteUiState::Error { message } => message.clone(),
    }
}

/// Run a single fetch cycle for `id` and return its terminal state.
///
/// A closed presenter never publishes again, so its current state is
/// returned as is.
pub async fn run_once(presenter: &QuotePresenter, id: QuoteId) -> QuoteUiState {
    if presenter.is_closed() {
        tracing::debug!(quote_id = id, "Presenter closed, skipping fetch");
        return presenter.state();
    }

    let mut state_rx = presenter.subscribe();
    presenter.fetch_quote(id);

    let state = match state_rx.wait_for(QuoteUiState::is_terminal).await {
        Ok(state) => (*state).clone(),
        Err(_) => presenter.state(),
    };
    state
}
