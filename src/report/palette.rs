use std::fmt::Display;

use crossterm::style::Stylize;

/// Colors for the text report. A disabled palette returns its input unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn colored() -> Self {
        Self { enabled: true }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn sheet(&self, text: impl Display) -> String {
        self.paint(text, |s| s.cyan().to_string())
    }

    pub fn old(&self, text: impl Display) -> String {
        self.paint(text, |s| s.red().to_string())
    }

    pub fn new(&self, text: impl Display) -> String {
        self.paint(text, |s| s.green().to_string())
    }

    pub fn coord(&self, text: impl Display) -> String {
        self.paint(text, |s| s.blue().to_string())
    }

    fn paint(&self, text: impl Display, style: impl FnOnce(String) -> String) -> String {
        let text = text.to_string();
        if self.enabled { style(text) } else { text }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
    }
}
