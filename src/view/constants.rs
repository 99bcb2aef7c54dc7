//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the search bar in lines (border + content).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
///
/// Single line for the current notice or keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of one gallery card in lines.
///
/// Two border lines plus tags, engagement counts, and preview URL.
pub const CARD_HEIGHT: u16 = 5;

/// Height of the load-more control under the last card.
pub const LOAD_MORE_HEIGHT: u16 = 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// How long the event loop waits for input before draining completions.
pub const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);
