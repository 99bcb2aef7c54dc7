//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Gallery navigation
    /// Select the previous card. Default: k/↑
    SelectPrev,
    /// Select the next card. Default: j/↓
    SelectNext,
    /// Move the selection up by one screen of cards. Default: Ctrl+u/Page Up
    PageUp,
    /// Move the selection down by one screen of cards. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first card. Default: g/Home
    SelectFirst,
    /// Jump to the last loaded card. Default: G/End
    SelectLast,

    // Search
    /// Focus the search field. Default: //Ctrl+f
    StartSearch,

    // Pagination
    /// Manually request the next page. Default: m
    LoadMore,

    // Application
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
