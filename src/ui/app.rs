use crate::domain::QuoteId;
use crate::presenter::QuotePresenter;
use crate::ui::quote::QuoteUiState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::watch;

/// Key bindings shown in the footer, as `(keys, action)`.
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("r", "Reload"),
    ("n/→", "Next"),
    ("p/←", "Previous"),
    ("q", "Quit"),
];

/// Interactive screen state around a [`QuotePresenter`].
///
/// The presenter owns the quote state; `App` only tracks which id is
/// selected and whether the user asked to quit.
pub struct App {
    should_quit: bool,
    quote_id: QuoteId,
    endpoint: String,
    presenter: QuotePresenter,
    state_rx: watch::Receiver<QuoteUiState>,
}

impl App {
    pub fn new(presenter: QuotePresenter, initial_id: QuoteId, endpoint: String) -> Self {
        let state_rx = presenter.subscribe();
        Self {
            should_quit: false,
            quote_id: initial_id.max(1),
            endpoint,
            presenter,
            state_rx,
        }
    }

    /// Fetch the initially selected quote.
    pub fn start(&self) {
        self.presenter.fetch_quote(self.quote_id);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
        self.presenter.close();
    }

    pub fn quote_id(&self) -> QuoteId {
        self.quote_id
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Latest published state.
    pub fn state(&self) -> QuoteUiState {
        self.state_rx.borrow().clone()
    }

    /// A fresh receiver for change notifications.
    pub fn subscribe(&self) -> watch::Receiver<QuoteUiState> {
        self.presenter.subscribe()
    }

    pub fn reload(&self) {
        self.presenter.fetch_quote(self.quote_id);
    }

    pub fn next_quote(&mut self) {
        self.quote_id = self.quote_id.saturating_add(1);
        self.presenter.fetch_quote(self.quote_id);
    }

    pub fn previous_quote(&mut self) {
        if self.quote_id <= 1 {
            return;
        }
        self.quote_id -= 1;
        self.presenter.fetch_quote(self.quote_id);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.request_quit()
            }
            KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
            KeyCode::Char('r') => self.reload(),
            KeyCode::Char('n') | KeyCode::Right => self.next_quote(),
            KeyCode::Char('p') | KeyCode::Left => self.previous_quote(),
            _ => {}
        }
    }
}
