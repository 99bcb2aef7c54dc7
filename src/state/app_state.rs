//! Application UI state.
//!
//! Everything the shell tracks besides the gallery itself: which mode the
//! keyboard is in, the search field contents, card selection, help overlay
//! visibility, and the notice currently on screen.

use crate::gallery::Notice;
use crate::state::{GalleryScroll, SearchField};
use std::time::{Duration, Instant};

/// How long a notice stays in the status bar.
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Where keystrokes go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are bindings: navigation, load more, quit.
    #[default]
    Browsing,
    /// Keys edit the search field until Enter or Esc.
    Typing,
}

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Results were found.
    Success,
    /// Informational, such as the end of results.
    Info,
    /// Nothing useful happened.
    Warning,
}

impl NoticeLevel {
    /// Level used to display `notice`.
    pub fn of(notice: Notice) -> Self {
        match notice {
            Notice::Found(_) => NoticeLevel::Success,
            Notice::EndOfResults => NoticeLevel::Info,
            Notice::EmptyQuery | Notice::NoResults => NoticeLevel::Warning,
        }
    }
}

/// A notice and when it was posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeBanner {
    notice: Notice,
    posted_at: Instant,
}

impl NoticeBanner {
    /// Banner for `notice` posted at `posted_at`.
    pub fn new(notice: Notice, posted_at: Instant) -> Self {
        Self { notice, posted_at }
    }

    /// The notice shown.
    pub fn notice(&self) -> Notice {
        self.notice
    }

    /// Display level of the notice.
    pub fn level(&self) -> NoticeLevel {
        NoticeLevel::of(self.notice)
    }

    /// True once the banner has been up for [`NOTICE_TTL`].
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.posted_at) >= NOTICE_TTL
    }
}

/// Root UI state. Pure data, no side effects.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Where key presses go.
    pub input_mode: InputMode,
    /// Search bar contents.
    pub search_field: SearchField,
    /// Gallery selection and scroll position.
    pub scroll: GalleryScroll,
    /// Help overlay is open.
    pub help_visible: bool,
    banner: Option<NoticeBanner>,
}

impl AppState {
    /// State with the search field pre-filled, as after a search for `term`.
    pub fn with_search_text(term: &str) -> Self {
        Self {
            search_field: SearchField::with_text(term),
            ..Self::default()
        }
    }

    /// Notice currently on screen.
    pub fn banner(&self) -> Option<&NoticeBanner> {
        self.banner.as_ref()
    }

    /// Show `notice`, replacing whatever was on screen.
    pub fn post_notice(&mut self, notice: Notice, now: Instant) {
        self.banner = Some(NoticeBanner::new(notice, now));
    }

    /// Drop the banner once it has been up long enough.
    pub fn expire_banner(&mut self, now: Instant) {
        if self.banner.as_ref().is_some_and(|b| b.is_expired(now)) {
            self.banner = None;
        }
    }

    /// True while the search field has focus.
    pub fn is_typing(&self) -> bool {
        self.input_mode == InputMode::Typing
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
