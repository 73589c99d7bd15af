// third-party imports
use owo_colors::AnsiColors;
use serde::Deserialize;

// ---

/// Style of a single decorated report field as it appears in settings.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Style {
    #[serde(default)]
    pub modes: Vec<Mode>,
    #[serde(default)]
    pub foreground: Option<Color>,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            modes: Vec::new(),
            foreground: None,
        }
    }

    pub fn modes(self, modes: Vec<Mode>) -> Self {
        Self { modes, ..self }
    }

    pub fn foreground(self, foreground: Color) -> Self {
        Self {
            foreground: Some(foreground),
            ..self
        }
    }

    pub fn is_plain(&self) -> bool {
        self.modes.is_empty() && self.foreground.is_none()
    }
}

impl From<&Style> for owo_colors::Style {
    fn from(style: &Style) -> Self {
        let result = style.modes.iter().fold(owo_colors::Style::new(), |result, mode| match mode {
            Mode::Bold => result.bold(),
            Mode::Faint => result.dimmed(),
            Mode::Italic => result.italic(),
            Mode::Underline => result.underline(),
        });
        match style.foreground {
            Some(color) => result.color(AnsiColors::from(color)),
            None => result,
        }
    }
}

// ---

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Bold,
    Faint,
    Italic,
    Underline,
}

// ---

/// One of the 16 basic terminal colors or the terminal default.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl From<Color> for AnsiColors {
    fn from(color: Color) -> Self {
        match color {
            Color::Default => Self::Default,
            Color::Black => Self::Black,
            Color::Red => Self::Red,
            Color::Green => Self::Green,
            Color::Yellow => Self::Yellow,
            Color::Blue => Self::Blue,
            Color::Magenta => Self::Magenta,
            Color::Cyan => Self::Cyan,
            Color::White => Self::White,
            Color::BrightBlack => Self::BrightBlack,
            Color::BrightRed => Self::BrightRed,
            Color::BrightGreen => Self::BrightGreen,
            Color::BrightYellow => Self::BrightYellow,
            Color::BrightBlue => Self::BrightBlue,
            Color::BrightMagenta => Self::BrightMagenta,
            Color::BrightCyan => Self::BrightCyan,
            Color::BrightWhite => Self::BrightWhite,
        }
    }
}

#[cfg(test)]
mod tests;
