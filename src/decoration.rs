// std imports
use std::fmt;

// third-party imports
use owo_colors::{OwoColorize, Style};

// local imports
use crate::settings::Styles;

// ---

/// Decorates the individual header fields of a rendered syntax error report.
///
/// Each method receives the exact text of a field and writes it to `out`,
/// optionally wrapped in styling. Implementations must not alter the text
/// itself. All methods default to writing the text unchanged.
pub trait Decorate {
    fn path(&self, out: &mut dyn fmt::Write, text: &str) -> fmt::Result {
        out.write_str(text)
    }

    fn row(&self, out: &mut dyn fmt::Write, text: &str) -> fmt::Result {
        out.write_str(text)
    }

    fn column(&self, out: &mut dyn fmt::Write, text: &str) -> fmt::Result {
        out.write_str(text)
    }

    fn label(&self, out: &mut dyn fmt::Write, text: &str) -> fmt::Result {
        out.write_str(text)
    }

    fn separator(&self, out: &mut dyn fmt::Write, text: &str) -> fmt::Result {
        out.write_str(text)
    }

    fn message(&self, out: &mut dyn fmt::Write, text: &str) -> fmt::Result {
        out.write_str(text)
    }
}

// ---

/// Decoration that leaves every field as is.
#[derive(Clone, Copy, Debug, Default)]
pub struct Plain;

impl Decorate for Plain {}

// ---

/// Decoration that wraps every field in ANSI styling.
#[derive(Clone, Copy, Debug)]
pub struct Styled {
    path: Style,
    row: Style,
    column: Style,
    label: Style,
    separator: Style,
    message: Style,
}

impl Styled {
    pub fn new(styles: &Styles) -> Self {
        Self {
            path: (&styles.path).into(),
            row: (&styles.row).into(),
            column: (&styles.column).into(),
            label: (&styles.label).into(),
            separator: (&styles.separator).into(),
            message: (&styles.message).into(),
        }
    }

    #[inline]
    fn apply(out: &mut dyn fmt::Write, style: Style, text: &str) -> fmt::Result {
        if style.is_plain() {
            out.write_str(text)
        } else {
            write!(out, "{}", text.style(style))
        }
    }
}

impl From<&Styles> for Styled {
    fn from(styles: &Styles) -> Self {
        Self::new(styles)
    }
}

impl Decorate for Styled {
    fn path(&self, out: &mut dyn fmt::Write, text: &str) -> fmt::Result {
        Self::apply(out, self.path, text)
    }

    fn row(&self, out: &mut dyn fmt::Write, text: &str) -> fmt::Result {
        Self::apply(out, self.row, text)
    }

    fn column(&self, out: &mut dyn fmt::Write, text: &str) -> fmt::Result {
        Self::apply(out, self.column, text)
    }

    fn label(&self, out: &mut dyn fmt::Write, text: &str) -> fmt::Result {
        Self::apply(out, self.label, text)
    }

    fn separator(&self, out: &mut dyn fmt::Write, text: &str) -> fmt::Result {
        Self::apply(out, self.separator, text)
    }

    fn message(&self, out: &mut dyn fmt::Write, text: &str) -> fmt::Result {
        Self::apply(out, self.message, text)
    }
}
