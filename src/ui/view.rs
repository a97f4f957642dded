//! The quote screen body: one of three views depending on [`QuoteUiState`].

use crate::domain::Quote;
use crate::ui::layout::card_rect;
use crate::ui::quote::QuoteUiState;
use crate::ui::theme::{
    ACCENT, CARD_BORDER, CARD_DIVIDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;

const CARD_MAX_WIDTH: u16 = 72;
const CARD_TOP_MARGIN: u16 = 2;
const CARD_PADDING_X: u16 = 2;
const CARD_PADDING_Y: u16 = 1;

pub fn render_quote_view(frame: &mut Frame, area: Rect, state: &QuoteUiState) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    match state {
        QuoteUiState::Loading => {
            let loading = Paragraph::new("Loading...")
                .style(Style::default().fg(MUTED_TEXT))
                .block(Block::default().padding(Padding::horizontal(1)));
            frame.render_widget(loading, area);
        }
        QuoteUiState::Success { quote } => render_card(frame, area, quote),
        QuoteUiState::Error { message } => {
            let error = Paragraph::new(message.as_str())
                .style(Style::default().fg(STATUS_ERROR))
                .wrap(Wrap { trim: true })
                .block(Block::default().padding(Padding::horizontal(1)));
            frame.render_widget(error, area);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, quote: &Quote) {
    let width = area.width.saturating_sub(4).min(CARD_MAX_WIDTH).max(1);
    let inner_width = usize::from(width.saturating_sub(2 + 2 * CARD_PADDING_X).max(1));
    let text_rows = wrap_words(&format!("“{}”", quote.text), inner_width);
    let author_rows = wrap_words(&format!("- {}", quote.author), inner_width);

    // text + divider + author, then borders and vertical padding
    let rows = u16::try_from(text_rows.len() + 1 + author_rows.len()).unwrap_or(u16::MAX);
    let height = rows.saturating_add(2 + 2 * CARD_PADDING_Y);
    let card = card_rect(width, height, CARD_TOP_MARGIN, area);

    let text_style = Style::default().fg(HEADER_TEXT);
    let author_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = text_rows
        .into_iter()
        .map(|row| Line::styled(row, text_style))
        .collect();
    lines.push(Line::styled(
        "─".repeat(inner_width),
        Style::default().fg(CARD_DIVIDER),
    ));
    lines.extend(
        author_rows
            .into_iter()
            .map(|row| Line::styled(row, author_style).alignment(Alignment::Right)),
    );

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CARD_BORDER))
            .padding(Padding::symmetric(CARD_PADDING_X, CARD_PADDING_Y)),
    );
    frame.render_widget(paragraph, card);
}

fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Greedy word wrap by display width. Words wider than `width` are split.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        let mut word_width = display_width(&word);

        if word_width > width {
            if current_width > 0 {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let mut chunk = String::new();
            let mut chunk_width = 0;
            let mut buf = [0u8; 4];
            for ch in word.chars() {
                let ch_width = display_width(ch.encode_utf8(&mut buf));
                if chunk_width > 0 && chunk_width + ch_width > width {
                    rows.push(std::mem::take(&mut chunk));
                    chunk_width = 0;
                }
                chunk.push(ch);
                chunk_width += ch_width;
            }
            word = chunk;
            word_width = chunk_width;
        }

        if word_width == 0 {
            continue;
        }
        if current_width > 0 && current_width + 1 + word_width > width {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(&word);
        current_width += word_width;
    }

    if current_width > 0 || rows.is_empty() {
        rows.push(current);
    }
    rows
}
