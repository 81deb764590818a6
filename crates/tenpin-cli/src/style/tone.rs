//! Text tones used across commands.

use std::fmt::Display;

use owo_colors::{OwoColorize, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Scores and success marks.
    Score,
    Muted,
    Header,
    /// Commands and paths the user can copy.
    Code,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Tone::Score => Style::new().green().bold(),
            Tone::Muted => Style::new().dimmed(),
            Tone::Header => Style::new().bold(),
            Tone::Code => Style::new().blue(),
        }
    }

    /// Renders `value` in this tone, or plain when colors are off.
    pub fn paint(self, value: impl Display) -> String {
        if super::no_color() {
            value.to_string()
        } else {
            value.style(self.style()).to_string()
        }
    }
}
