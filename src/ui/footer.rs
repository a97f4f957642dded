use crate::ui::app::KEY_HINTS;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bottom bar: key bindings on the left, crate version on the right.
pub struct Footer {
    hints: &'static [(&'static str, &'static str)],
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self { hints: KEY_HINTS }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let label_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let key_style = Style::default().fg(ACCENT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::raw(" ")];
        for (index, (keys, action)) in self.hints.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" │ ", separator_style));
            }
            spans.push(Span::styled(*keys, key_style));
            spans.push(Span::styled(format!(": {}", action), label_style));
        }

        let version = Span::styled(format!("v{} ", VERSION), label_style);
        let used = Line::from(spans.clone()).width() + version.width();
        let content_width = usize::from(area.width.saturating_sub(2));
        spans.push(Span::raw(" ".repeat(content_width.saturating_sub(used))));
        spans.push(version);

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
