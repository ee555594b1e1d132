//! Visual styles for the dashboard panels.

use ratatui::style::{Color, Modifier, Style};

/// Colour palette and derived styles.
pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub dim: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            text: Color::Gray,
            dim: Color::DarkGray,
            warning: Color::Yellow,
        }
    }
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Panel titles and the logo.
    pub fn header(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Table and banner body text.
    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Borders, hints, everything that should recede.
    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.dim)
    }

    /// Key characters in the help panel.
    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Stale-data marker.
    pub fn stale(&self) -> Style {
        Style::default().fg(self.warning).add_modifier(Modifier::BOLD)
    }
}
