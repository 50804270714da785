//! Gold-shop theme.
//!
//! A centralized palette with gold accents on a dark slate background.

use ratatui::style::{Color, Modifier, Style};

/// The main theme struct containing all colors and pre-computed styles.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Metallic gold - primary accent color
    pub gold: Color,
    /// Pale gold used while the result glows
    pub gold_bright: Color,
    /// Dark slate - main background
    pub slate: Color,
    /// Light slate - panel/card backgrounds
    pub slate_light: Color,

    /// Primary text color (near-white)
    pub text_primary: Color,
    /// Muted/secondary text color
    pub text_muted: Color,
    pub error: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            gold: Color::Rgb(212, 175, 55),
            gold_bright: Color::Rgb(255, 223, 128),
            slate: Color::Rgb(15, 23, 42),
            slate_light: Color::Rgb(30, 41, 59),
            text_primary: Color::Rgb(248, 250, 252),
            text_muted: Color::Rgb(148, 163, 184),
            error: Color::Rgb(239, 68, 68),
            accent: Color::Cyan,
        }
    }
}

impl Theme {
    // ─────────────────────────────────────────────────────────────
    // Pre-computed Styles
    // ─────────────────────────────────────────────────────────────

    /// Title style - bold gold text
    pub fn title(&self) -> Style {
        Style::default().fg(self.gold).add_modifier(Modifier::BOLD)
    }

    /// Subtitle/label style - muted text
    pub fn subtitle(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Highlighted/selected item style
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.slate)
            .bg(self.gold)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active(&self) -> Style {
        Style::default().fg(self.gold)
    }

    pub fn border_inactive(&self) -> Style {
        Style::default().fg(self.slate_light)
    }

    /// Border of a field that failed validation.
    pub fn border_error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn bg(&self) -> Style {
        Style::default().bg(self.slate)
    }

    /// Result value while glowing.
    pub fn glow(&self) -> Style {
        Style::default()
            .fg(self.gold_bright)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }
}

pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Convenience function to get the default theme.
pub fn theme() -> &'static Theme {
    &THEME
}

/// Icons used throughout the TUI
pub mod icons {
    pub const GOLD: &str = "🪙";
    pub const BACK: &str = "↩";
    pub const ARROW_RIGHT: &str = "➜";
    pub const SEPARATOR: &str = "│";
}
