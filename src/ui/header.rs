use crate::domain::QuoteId;
use crate::ui::quote::QuoteUiState;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    endpoint: &'a str,
    quote_id: QuoteId,
}

impl<'a> Header<'a> {
    pub fn new(endpoint: &'a str, quote_id: QuoteId) -> Self {
        Self { endpoint, quote_id }
    }

    pub fn widget(&self, state: &QuoteUiState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, color) = match state {
            QuoteUiState::Loading => ("loading", STATUS_PENDING),
            QuoteUiState::Success { .. } => ("ok", STATUS_OK),
            QuoteUiState::Error { .. } => ("error", STATUS_ERROR),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", Style::default().fg(color)),
            Span::styled("  ", text_style),
            Span::styled(
                "quotecard",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.endpoint.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("#{}", self.quote_id), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, Style::default().fg(color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
