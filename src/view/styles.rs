//! Color configuration and table styling.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag or `color = false` in the config file
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the resolved color setting and environment.
    ///
    /// Colors stay on only when `color_setting` is true and `NO_COLOR` is
    /// unset.
    pub fn from_env_and_setting(color_setting: bool) -> Self {
        let enabled = color_setting && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== TableStyles =====

/// Styles for the table, input fields and status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyles {
    /// Column header row.
    pub header: Style,
    /// Border of the focused input field.
    pub focused_border: Style,
    /// Border of everything else.
    pub border: Style,
    /// Power cell of an entity with missing data.
    pub missing: Style,
    /// Status bar text after a failed fetch.
    pub error: Style,
    /// Status bar text otherwise.
    pub status: Style,
}

impl TableStyles {
    /// Styles for `config`. With colors off only text modifiers remain.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let header = Style::default().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                header: header.fg(Color::Cyan),
                focused_border: Style::default().fg(Color::Yellow),
                border: Style::default().fg(Color::DarkGray),
                missing: Style::default().fg(Color::DarkGray),
                error: Style::default().fg(Color::Red),
                status: Style::default().fg(Color::Gray),
            }
        } else {
            Self {
                header,
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                border: Style::default(),
                missing: Style::default(),
                error: Style::default().add_modifier(Modifier::BOLD),
                status: Style::default(),
            }
        }
    }
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_setting(true))
    }
}
