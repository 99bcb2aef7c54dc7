//! Gallery pane: a vertical list of image cards.
//!
//! Each card shows the tags, the engagement counts, and the preview URL.
//! The load-more control is drawn under the last card once it scrolls into
//! view.

use super::constants::{CARD_HEIGHT, LOAD_MORE_HEIGHT};
use super::styles::{GalleryStyles, MUTED_TEXT};
use crate::model::ImageRecord;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use std::ops::Range;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Number of whole cards that fit in a pane of `height` lines.
///
/// Never less than one, so there is always a card to select.
pub fn viewport_cards(height: u16, show_load_more: bool) -> usize {
    let reserved = if show_load_more { LOAD_MORE_HEIGHT } else { 0 };
    usize::from(height.saturating_sub(reserved) / CARD_HEIGHT).max(1)
}

/// Cut `text` to at most `width` display columns, ending in `…` if cut.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Gallery widget over a slice of records.
pub struct GalleryView<'a> {
    items: &'a [ImageRecord],
    visible: Range<usize>,
    selected: usize,
    show_load_more: bool,
    loading: bool,
    styles: &'a GalleryStyles,
}

impl<'a> GalleryView<'a> {
    /// Widget drawing `items` with `styles`.
    pub fn new(items: &'a [ImageRecord], styles: &'a GalleryStyles) -> Self {
        Self {
            items,
            visible: 0..items.len(),
            selected: 0,
            show_load_more: false,
            loading: false,
            styles,
        }
    }

    /// Cards to draw, as computed by `GalleryScroll::visible_range`.
    pub fn visible(mut self, visible: Range<usize>) -> Self {
        self.visible = visible;
        self
    }

    /// Index of the highlighted card.
    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    /// Draw the load-more control under the last card.
    pub fn show_load_more(mut self, show: bool) -> Self {
        self.show_load_more = show;
        self
    }

    /// A fetch is in flight.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    fn render_card(&self, index: usize, item: &ImageRecord, area: Rect, buf: &mut Buffer) {
        let border_style = if index == self.selected {
            self.styles.selected_border
        } else {
            self.styles.card_border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" #{} ", index + 1));

        let width = usize::from(area.width.saturating_sub(2));
        let counts = format!(
            "Likes {}  Views {}  Comments {}  Downloads {}",
            item.likes, item.views, item.comments, item.downloads
        );
        let lines = vec![
            Line::from(Span::styled(
                truncate_to_width(&item.tags, width),
                self.styles.tags,
            )),
            Line::from(Span::styled(
                truncate_to_width(&counts, width),
                self.styles.counts,
            )),
            Line::from(Span::styled(
                truncate_to_width(&item.preview_url, width),
                self.styles.url,
            )),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let message = if self.loading {
            "Searching…"
        } else {
            "No images yet. Press / to search."
        };
        let y = area.y + area.height / 2;
        Paragraph::new(Line::from(Span::styled(message, MUTED_TEXT)))
            .alignment(Alignment::Center)
            .render(Rect { y, height: 1, ..area }, buf);
    }
}

impl Widget for GalleryView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.items.is_empty() {
            self.render_empty(area, buf);
            return;
        }

        let end = self.visible.end.min(self.items.len());
        let start = self.visible.start.min(end);
        let bottom = area.y + area.height;
        let mut y = area.y;

        for (index, item) in self.items[start..end].iter().enumerate() {
            if y >= bottom {
                break;
            }
            let height = CARD_HEIGHT.min(bottom - y);
            self.render_card(start + index, item, Rect { y, height, ..area }, buf);
            y += height;
        }

        let last_card_shown = end == self.items.len();
        if self.show_load_more && last_card_shown && y < bottom {
            let label = if self.loading {
                "Loading more…"
            } else {
                "[ m ] Load more"
            };
            Paragraph::new(Line::from(Span::styled(label, self.styles.load_more)))
                .alignment(Alignment::Center)
                .render(Rect { y, height: LOAD_MORE_HEIGHT, ..area }, buf);
        }
    }
}
