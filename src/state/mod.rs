//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod gallery_scroll;
pub mod search_input_handler;

// Re-export for convenience
pub use app_state::{AppState, InputMode, NoticeBanner, NoticeLevel, NOTICE_TTL};
pub use gallery_scroll::GalleryScroll;
pub use search_input_handler::SearchField;
