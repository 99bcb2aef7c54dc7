//! Card selection and scroll offset for the gallery pane.
//!
//! Positions are card indices. The view decides how many cards fit on
//! screen and passes that in as `viewport`.

use std::ops::Range;

/// Selected card and first drawn card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryScroll {
    selected: usize,
    offset: usize,
}

impl GalleryScroll {
    /// Index of the selected card.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the first card drawn.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Back to the top, for a new search.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Select the next card, stopping at the last.
    pub fn select_next(&mut self, len: usize) {
        self.select(self.selected.saturating_add(1), len);
    }

    /// Select the previous card, stopping at the first.
    pub fn select_prev(&mut self, len: usize) {
        self.select(self.selected.saturating_sub(1), len);
    }

    /// Move the selection down one screen of cards.
    pub fn page_down(&mut self, len: usize, viewport: usize) {
        self.select(self.selected.saturating_add(viewport.max(1)), len);
    }

    /// Move the selection up one screen of cards.
    pub fn page_up(&mut self, len: usize, viewport: usize) {
        self.select(self.selected.saturating_sub(viewport.max(1)), len);
    }

    /// Select the first card.
    pub fn select_first(&mut self, len: usize) {
        self.select(0, len);
    }

    /// Select the newest card.
    pub fn select_last(&mut self, len: usize) {
        self.select(len.saturating_sub(1), len);
    }

    fn select(&mut self, index: usize, len: usize) {
        self.selected = index.min(len.saturating_sub(1));
    }

    /// Adjust the offset so the selected card is on screen.
    pub fn ensure_visible(&mut self, len: usize, viewport: usize) {
        let viewport = viewport.max(1);
        self.selected = self.selected.min(len.saturating_sub(1));
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + viewport {
            self.offset = self.selected + 1 - viewport;
        }
        let max_offset = len.saturating_sub(viewport);
        self.offset = self.offset.min(max_offset);
    }

    /// Indices of the cards currently drawn.
    pub fn visible_range(&self, len: usize, viewport: usize) -> Range<usize> {
        let start = self.offset.min(len);
        let end = (self.offset + viewport).min(len);
        start..end
    }
}
