//! Color palette and the styles the screen is painted with.
//!
//! Styles are named for the role they play on the CardioCare screen rather
//! than for their color. Emerald and rose are reserved for outcomes (service
//! online, risk polarity, errors) so they stay meaningful at a glance.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::RiskPolarity;

/// Palette and role styles for the CardioCare screen.
pub struct CardioTheme;

impl CardioTheme {
    /// Teal (#0D9488)
    pub const TEAL: Color = Color::Rgb(13, 148, 136);

    /// Light teal (#2DD4BF)
    pub const TEAL_LIGHT: Color = Color::Rgb(45, 212, 191);

    /// Near-white ink (#F8FAFC)
    pub const INK: Color = Color::Rgb(248, 250, 252);

    /// Slate (#94A3B8)
    pub const SLATE: Color = Color::Rgb(148, 163, 184);

    /// Dark slate (#64748B)
    pub const SLATE_DARK: Color = Color::Rgb(100, 116, 139);

    /// Emerald (#10B981)
    pub const EMERALD: Color = Color::Rgb(16, 185, 129);

    /// Amber (#FBBF24)
    pub const AMBER: Color = Color::Rgb(251, 191, 36);

    /// Rose (#F43F5E)
    pub const ROSE: Color = Color::Rgb(244, 63, 94);

    /// Blue (#3B82F6)
    pub const BLUE: Color = Color::Rgb(59, 130, 246);

    /// Screen title and the headline figures of a result.
    #[must_use]
    pub fn heading() -> Style {
        Style::default().fg(Self::INK).add_modifier(Modifier::BOLD)
    }

    /// Entered values and body text.
    #[must_use]
    pub fn value() -> Style {
        Style::default().fg(Self::INK)
    }

    /// Field captions and key descriptions.
    #[must_use]
    pub fn label() -> Style {
        Style::default().fg(Self::SLATE)
    }

    /// Placeholders, section captions and fine print.
    #[must_use]
    pub fn muted() -> Style {
        Style::default().fg(Self::SLATE_DARK)
    }

    /// Key names, the input cursor and anything the user can act on now.
    #[must_use]
    pub fn accent() -> Style {
        Style::default().fg(Self::TEAL_LIGHT)
    }

    /// Bold variant of [`accent`](Self::accent).
    #[must_use]
    pub fn emphasis() -> Style {
        Self::accent().add_modifier(Modifier::BOLD)
    }

    /// Border of a field or panel.
    #[must_use]
    pub fn frame(focused: bool) -> Style {
        if focused {
            Style::default().fg(Self::TEAL)
        } else {
            Style::default().fg(Self::SLATE)
        }
    }

    /// Title of a form field.
    #[must_use]
    pub fn field_title(focused: bool) -> Style {
        if focused {
            Self::emphasis()
        } else {
            Self::label()
        }
    }

    /// Loading gauge.
    #[must_use]
    pub fn progress() -> Style {
        Style::default().fg(Self::BLUE)
    }

    /// Error panel and offline badge.
    #[must_use]
    pub fn error() -> Style {
        Style::default().fg(Self::ROSE)
    }

    /// Badge while the service probe is outstanding.
    #[must_use]
    pub fn pending() -> Style {
        Style::default().fg(Self::AMBER)
    }

    /// Badge once the service has answered the probe.
    #[must_use]
    pub fn online() -> Style {
        Style::default().fg(Self::EMERALD)
    }

    /// Result card color, chosen from the predicted class.
    #[must_use]
    pub fn risk(polarity: RiskPolarity) -> Style {
        match polarity {
            RiskPolarity::Low => Style::default().fg(Self::EMERALD),
            RiskPolarity::High => Self::error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_colors_follow_polarity() {
        assert_eq!(CardioTheme::risk(RiskPolarity::Low).fg, Some(CardioTheme::EMERALD));
        assert_eq!(CardioTheme::risk(RiskPolarity::High).fg, Some(CardioTheme::ROSE));
    }

    #[test]
    fn test_focus_changes_frame_and_title() {
        assert_ne!(CardioTheme::frame(true), CardioTheme::frame(false));
        assert!(CardioTheme::field_title(true)
            .add_modifier
            .contains(Modifier::BOLD));
        assert_eq!(CardioTheme::field_title(false), CardioTheme::label());
    }
}
