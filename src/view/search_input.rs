//! Search input widget for rendering the search bar.

use crate::state::SearchField;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar.
///
/// While typing, the field is editable and shows a block cursor. Otherwise
/// it shows the last typed text read-only with a hint for `/`.
pub struct SearchInput<'a> {
    field: &'a SearchField,
    typing: bool,
}

impl<'a> SearchInput<'a> {
    /// Search bar for `field`; `typing` shows the cursor.
    pub fn new(field: &'a SearchField, typing: bool) -> Self {
        Self { field, typing }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.field.text();

        if self.typing {
            let cursor = self.field.cursor();
            // Split text into before/after cursor for rendering cursor
            let before: String = text.chars().take(cursor).collect();
            let mut after = text.chars().skip(cursor);
            let cursor_char = after.next().map(String::from).unwrap_or_else(|| " ".into());
            let after_text: String = after.collect();

            let line = Line::from(vec![
                Span::raw(before),
                Span::styled(
                    cursor_char,
                    Style::default()
                        .bg(Color::White)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(after_text),
            ]);

            Paragraph::new(line)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Search images (Enter: search, Esc: cancel) ")
                        .border_style(Style::default().fg(Color::Yellow)),
                )
                .render(area, buf);
        } else {
            let line = if text.is_empty() {
                Line::from(Span::styled(
                    "Press / to search",
                    super::styles::MUTED_TEXT,
                ))
            } else {
                Line::from(text)
            };

            Paragraph::new(line)
                .block(Block::default().borders(Borders::ALL).title(" Search "))
                .render(area, buf);
        }
    }
}
