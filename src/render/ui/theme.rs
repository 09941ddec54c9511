//! Color theme and styling definitions using ratatui colors
//!
//! Themes are plain bundles of ratatui styles; views pick the style they need and no
//! further abstraction sits in between.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

use crate::error::WatchlistError;

/// Color theme for terminal UI elements
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Screen heading
    pub heading: Style,

    /// Record titles
    pub title: Style,

    /// Filled star position
    pub star_filled: Style,

    /// Empty star position
    pub star_empty: Style,

    /// "3/5" / "unrated" summary next to the stars
    pub rating_text: Style,

    /// Remove marker on each card
    pub remove_marker: Style,

    /// Hints and placeholders (empty input, empty list, empty note)
    pub placeholder: Style,

    /// Border of the focused input or selected card
    pub focus_border: Style,

    /// Border of everything else
    pub border: Style,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,

    /// Error/warning text
    pub error_text: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            heading: Style::default().add_modifier(Modifier::BOLD),
            title: Style::default().add_modifier(Modifier::BOLD),
            star_filled: Style::default().fg(Color::Yellow),
            star_empty: Style::default().fg(Color::DarkGray),
            rating_text: Style::default().fg(Color::Gray),
            remove_marker: Style::default().fg(Color::Red),
            placeholder: Style::default().fg(Color::DarkGray),
            focus_border: Style::default().fg(Color::Green),
            border: Style::default(),
            status_bg: Color::Blue,
            status_fg: Color::White,
            error_text: Color::Red,
        }
    }
}

impl ColorTheme {
    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            heading: Style::default().add_modifier(Modifier::BOLD),
            title: Style::default().add_modifier(Modifier::BOLD),
            star_filled: Style::default().add_modifier(Modifier::BOLD),
            star_empty: Style::default(),
            rating_text: Style::default(),
            remove_marker: Style::default(),
            placeholder: Style::default().add_modifier(Modifier::DIM),
            focus_border: Style::default().add_modifier(Modifier::REVERSED),
            border: Style::default(),
            status_bg: Color::Black,
            status_fg: Color::White,
            error_text: Color::White,
        }
    }

    /// Create a high-contrast theme
    pub fn high_contrast() -> Self {
        Self {
            heading: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            star_filled: Style::default().fg(Color::LightYellow),
            star_empty: Style::default().fg(Color::White),
            rating_text: Style::default().fg(Color::White),
            remove_marker: Style::default().fg(Color::LightRed),
            placeholder: Style::default().fg(Color::Gray),
            focus_border: Style::default().fg(Color::LightGreen),
            border: Style::default().fg(Color::White),
            status_bg: Color::White,
            status_fg: Color::Black,
            error_text: Color::LightRed,
        }
    }
}

/// Named themes selectable from the command line or configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "config",
    derive(serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ThemeName {
    #[default]
    Default,
    Monochrome,
    HighContrast,
}

impl ThemeName {
    pub const VARIANTS: [&'static str; 3] = ["default", "monochrome", "high-contrast"];

    pub fn color_theme(self) -> ColorTheme {
        match self {
            ThemeName::Default => ColorTheme::default(),
            ThemeName::Monochrome => ColorTheme::monochrome(),
            ThemeName::HighContrast => ColorTheme::high_contrast(),
        }
    }
}

impl FromStr for ThemeName {
    type Err = WatchlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(ThemeName::Default),
            "monochrome" => Ok(ThemeName::Monochrome),
            "high-contrast" => Ok(ThemeName::HighContrast),
            other => Err(WatchlistError::invalid_argument(format!(
                "unknown theme '{}' (expected one of: {})",
                other,
                Self::VARIANTS.join(", ")
            ))),
        }
    }
}
