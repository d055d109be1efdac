//! Popup styling configuration.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
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

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PopupStyles =====

/// Styles for the popup widgets.
///
/// Without colors the selection and the search cursor fall back to reverse
/// video so they stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupStyles {
    pub title: Style,
    pub selected: Style,
    pub icon: Style,
    pub blank_icon: Style,
    pub search_border: Style,
    pub search_cursor: Style,
    pub clear_control: Style,
    pub placeholder: Style,
    pub help: Style,
}

impl PopupStyles {
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                title: Style::default(),
                selected: Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                icon: Style::default().fg(Color::Cyan),
                blank_icon: Style::default().fg(Color::DarkGray),
                search_border: Style::default().fg(Color::Gray),
                search_cursor: Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                clear_control: Style::default().fg(Color::Red),
                placeholder: Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
                help: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                title: Style::default(),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                icon: Style::default(),
                blank_icon: Style::default(),
                search_border: Style::default(),
                search_cursor: Style::default().add_modifier(Modifier::REVERSED),
                clear_control: Style::default(),
                placeholder: Style::default(),
                help: Style::default(),
            }
        }
    }
}

impl Default for PopupStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
