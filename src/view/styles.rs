//! Gallery styling configuration.

use crate::state::NoticeLevel;
use ratatui::style::{Color, Modifier, Style};

/// Dimmed text for hints and secondary information.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Category headers in the help overlay.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag (or `no_color` in the config file)
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== GalleryStyles =====

/// Styles for cards, the load-more control, and notices.
///
/// With colors disabled every style falls back to the terminal default,
/// except that the selected card stays bold so selection remains visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryStyles {
    /// Border of unselected cards.
    pub card_border: Style,
    /// Border of the selected card.
    pub selected_border: Style,
    /// Tag line.
    pub tags: Style,
    /// Likes, views, comments and downloads.
    pub counts: Style,
    /// Preview URL.
    pub url: Style,
    /// Load-more control.
    pub load_more: Style,
    success: Style,
    info: Style,
    warning: Style,
}

impl GalleryStyles {
    /// Styles for the given color setting.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                card_border: Style::default().fg(Color::Gray),
                selected_border: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                tags: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                counts: Style::default().fg(Color::Cyan),
                url: MUTED_TEXT,
                load_more: Style::default().fg(Color::Green),
                success: Style::default().fg(Color::Green),
                info: Style::default().fg(Color::Blue),
                warning: Style::default().fg(Color::Yellow),
            }
        } else {
            Self {
                card_border: Style::default(),
                selected_border: Style::default().add_modifier(Modifier::BOLD),
                tags: Style::default(),
                counts: Style::default(),
                url: Style::default(),
                load_more: Style::default(),
                success: Style::default(),
                info: Style::default(),
                warning: Style::default(),
            }
        }
    }

    /// Style for a notice of `level`.
    pub fn notice(&self, level: NoticeLevel) -> Style {
        match level {
            NoticeLevel::Success => self.success,
            NoticeLevel::Info => self.info,
            NoticeLevel::Warning => self.warning,
        }
    }
}

impl Default for GalleryStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(env)]
    fn color_config_respects_no_color_flag() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(
            !config.colors_enabled(),
            "--no-color flag should disable colors"
        );
    }

    #[test]
    #[serial(env)]
    fn color_config_respects_no_color_env_var() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        assert!(
            !config.colors_enabled(),
            "NO_COLOR env var should disable colors"
        );
        std::env::remove_var("NO_COLOR");
    }

    #[test]
    #[serial(env)]
    fn color_config_enables_colors_by_default() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(false);
        assert!(config.colors_enabled());
    }

    #[test]
    fn disabled_colors_keep_selection_bold() {
        let styles = GalleryStyles::with_color_config(ColorConfig { enabled: false });

        assert_eq!(styles.card_border, Style::default());
        assert!(styles
            .selected_border
            .add_modifier
            .contains(Modifier::BOLD));
        assert_eq!(styles.notice(NoticeLevel::Warning), Style::default());
    }

    #[test]
    fn notice_levels_have_distinct_colors() {
        let styles = GalleryStyles::with_color_config(ColorConfig { enabled: true });

        assert_ne!(
            styles.notice(NoticeLevel::Success),
            styles.notice(NoticeLevel::Warning)
        );
        assert_ne!(
            styles.notice(NoticeLevel::Info),
            styles.notice(NoticeLevel::Warning)
        );
    }
}
