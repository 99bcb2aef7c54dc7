//! Bottom status line.
//!
//! Shows the latest notice while it is fresh; otherwise the loaded count,
//! the controller phase, and key hints.

use super::styles::{GalleryStyles, MUTED_TEXT};
use crate::gallery::Phase;
use crate::state::NoticeBanner;
use ratatui::text::{Line, Span};

/// What the status bar needs to know.
#[derive(Debug, Clone, Copy)]
pub struct StatusInfo<'a> {
    /// Latest notice, if still fresh.
    pub banner: Option<&'a NoticeBanner>,
    /// Controller phase.
    pub phase: Phase,
    /// Cards in the gallery.
    pub loaded: usize,
    /// Total matches for the term, once known.
    pub total: Option<u64>,
    /// The search field has focus.
    pub typing: bool,
}

/// Build the status line.
pub fn status_line(info: StatusInfo<'_>, styles: &GalleryStyles) -> Line<'static> {
    if let Some(banner) = info.banner {
        return Line::from(Span::styled(
            format!(" {}", banner.notice()),
            styles.notice(banner.level()),
        ));
    }

    let mut spans = Vec::new();

    if let Some(total) = info.total {
        spans.push(Span::raw(format!(" {} of {} images", info.loaded, total)));
    } else if info.loaded > 0 {
        spans.push(Span::raw(format!(" {} images", info.loaded)));
    }

    let phase = match info.phase {
        Phase::Fetching => Some(" [loading]"),
        Phase::Exhausted => Some(" [end]"),
        Phase::Idle => None,
    };
    if let Some(phase) = phase {
        spans.push(Span::raw(phase));
    }

    let hints = if info.typing {
        "  Enter: search | Esc: cancel"
    } else {
        "  /: search | j/k: select | m: more | ?: help | q: quit"
    };
    spans.push(Span::styled(hints, MUTED_TEXT));

    Line::from(spans)
}
