//! Syntax error reports anchored to an exact offset in the source text.
//!
//! A [`SyntaxError`] keeps the whole source text and reconstructs the row, the
//! column and a caret-pointing excerpt only when it is rendered. Errors derived
//! with [`SyntaxError::fork`] or [`SyntaxError::fork_at`] share the source text,
//! the path and the rendering options with their origin.
//!
//! # Examples
//!
//! ```
//! use lexstream::report::SyntaxError;
//!
//! let err = SyntaxError::new("unexpected character", "ab\tcd\nef", 3).with_path("input.txt");
//! assert_eq!(
//!     err.pretty_print(),
//!     "input.txt:1:3 - SyntaxError: unexpected character\n\nab\tcd\n  \t^\nef",
//! );
//! ```

// std imports
use std::{
    fmt,
    iter::once,
    sync::Arc,
};

// third-party imports
use serde::Serialize;

// local imports
use crate::{
    decoration::{Decorate, Plain, Styled},
    error::Error,
    settings::{Excerpt, Settings},
};

// ---

pub const LABEL: &str = "SyntaxError";

const LOCATION_SEPARATOR: &str = ":";
const HEADER_SEPARATOR: &str = " - ";
const LABEL_SEPARATOR: &str = ": ";

// ---

/// Row and column of an offset within the source text.
///
/// `row` is 1-based, `column` is the 0-based number of characters preceding
/// the offset on its line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Location {
    pub row: usize,
    pub column: usize,
}

// ---

/// SyntaxError is a message anchored at a character offset of a source text.
#[derive(Clone)]
pub struct SyntaxError {
    message: String,
    offset: usize,
    shared: Arc<Shared>,
}

impl SyntaxError {
    /// Creates a new error for `raw` pointing at the character with index `offset`.
    pub fn new(message: impl Into<String>, raw: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
            shared: Arc::new(Shared {
                raw: raw.into(),
                path: None,
                excerpt: Excerpt::default(),
                decoration: None,
            }),
        }
    }

    /// Sets a logical source identifier, e.g. a file name, shown in the header.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.shared).path = Some(path.into());
        self
    }

    /// Sets the excerpt layout options.
    pub fn with_excerpt(mut self, excerpt: Excerpt) -> Self {
        Arc::make_mut(&mut self.shared).excerpt = excerpt;
        self
    }

    /// Registers a decoration applied to the header fields by [`Self::pretty_print`].
    pub fn with_decoration(mut self, decoration: impl Decorate + Send + Sync + 'static) -> Self {
        Arc::make_mut(&mut self.shared).decoration = Some(Arc::new(decoration));
        self
    }

    /// Applies excerpt options and styles from the given settings.
    pub fn with_settings(self, settings: &Settings) -> Self {
        self.with_excerpt(settings.excerpt.clone())
            .with_decoration(Styled::new(&settings.styles))
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn raw(&self) -> &str {
        &self.shared.raw
    }

    pub fn path(&self) -> Option<&str> {
        self.shared.path.as_deref()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Derives a sibling error with another message at the same offset.
    pub fn fork(&self, message: impl Into<String>) -> Self {
        self.fork_at(message, self.offset)
    }

    /// Derives a sibling error with another message and offset.
    pub fn fork_at(&self, message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
            shared: self.shared.clone(),
        }
    }

    /// Derives a sibling error describing an engine failure at its position.
    pub fn locate(&self, err: &Error) -> Self {
        self.fork_at(err.to_string(), err.position())
    }

    /// Returns the location of the offset, or `None` if it lies beyond the end of the source.
    pub fn location(&self) -> Option<Location> {
        self.anchor().map(|anchor| anchor.location)
    }

    /// Returns the source excerpt with the fault line and a caret line below it,
    /// or `None` if the offset lies beyond the end of the source.
    pub fn excerpt(&self) -> Option<String> {
        self.anchor().map(|anchor| anchor.excerpt(&self.shared.excerpt))
    }

    /// Renders the report using the registered decoration, if any.
    pub fn pretty_print(&self) -> String {
        match &self.shared.decoration {
            Some(decoration) => self.pretty_print_with(&**decoration),
            None => self.pretty_print_with(&Plain),
        }
    }

    /// Renders the report using the given decoration.
    ///
    /// If the decoration fails, the report degrades to the plain header without a location.
    pub fn pretty_print_with(&self, decoration: &dyn Decorate) -> String {
        let mut buf = String::new();
        match self.render(&mut buf, decoration) {
            Ok(()) => buf,
            Err(_) => {
                log::debug!("failed to render syntax error report, falling back to plain message");
                format!("{}{}{}", LABEL, LABEL_SEPARATOR, self.message)
            }
        }
    }

    fn render(&self, out: &mut dyn fmt::Write, decoration: &dyn Decorate) -> fmt::Result {
        let anchor = self.anchor();
        self.render_header(out, decoration, anchor.as_ref().map(|anchor| anchor.location))?;
        if let Some(anchor) = anchor {
            out.write_str("\n\n")?;
            out.write_str(&anchor.excerpt(&self.shared.excerpt))?;
        }
        Ok(())
    }

    fn render_header(
        &self,
        out: &mut dyn fmt::Write,
        decoration: &dyn Decorate,
        location: Option<Location>,
    ) -> fmt::Result {
        if let Some(path) = self.path() {
            decoration.path(out, path)?;
            if location.is_some() {
                decoration.separator(out, LOCATION_SEPARATOR)?;
            }
        }
        if let Some(location) = location {
            decoration.row(out, &location.row.to_string())?;
            decoration.separator(out, LOCATION_SEPARATOR)?;
            decoration.column(out, &location.column.to_string())?;
        }
        if self.path().is_some() || location.is_some() {
            decoration.separator(out, HEADER_SEPARATOR)?;
        }
        decoration.label(out, LABEL)?;
        decoration.separator(out, LABEL_SEPARATOR)?;
        decoration.message(out, &self.message)
    }

    fn anchor(&self) -> Option<Anchor<'_>> {
        Anchor::new(&self.shared.raw, self.offset)
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty_print())
    }
}

impl fmt::Debug for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxError")
            .field("message", &self.message)
            .field("offset", &self.offset)
            .field("path", &self.shared.path)
            .finish_non_exhaustive()
    }
}

impl std::error::Error for SyntaxError {}

// ---

#[derive(Clone)]
struct Shared {
    raw: String,
    path: Option<String>,
    excerpt: Excerpt,
    decoration: Option<Arc<dyn Decorate + Send + Sync>>,
}

// ---

/// The source text split around an offset.
struct Anchor<'a> {
    location: Location,
    // complete lines before the fault line, if there are any
    preceding: Option<&'a str>,
    // fault line part before the offset
    head: &'a str,
    // fault line part starting at the offset
    tail: &'a str,
    // complete lines after the fault line, if there are any
    following: Option<&'a str>,
}

impl<'a> Anchor<'a> {
    fn new(raw: &'a str, offset: usize) -> Option<Self> {
        let at = byte_offset(raw, offset)?;
        let (before, after) = raw.split_at(at);

        let (preceding, head) = match before.rfind('\n') {
            Some(i) => (Some(&before[..i]), &before[i + 1..]),
            None => (None, before),
        };
        let (tail, following) = match after.find('\n') {
            Some(i) => (&after[..i], Some(&after[i + 1..])),
            None => (after, None),
        };

        Some(Self {
            location: Location {
                row: 1 + before.bytes().filter(|&b| b == b'\n').count(),
                column: head.chars().count(),
            },
            preceding,
            head,
            tail: strip_cr(tail),
            following,
        })
    }

    fn excerpt(&self, options: &Excerpt) -> String {
        let fault = format!("{}{}", self.head, self.tail);
        let caret = self.caret(&options.caret);

        let mut lines: Vec<&str> = Vec::new();
        if let Some(preceding) = self.preceding {
            let all: Vec<_> = preceding.split('\n').map(strip_cr).collect();
            let skip = options.lines_before.map_or(0, |n| all.len().saturating_sub(n));
            lines.extend_from_slice(&all[skip..]);
        }
        lines.push(fault.as_str());
        lines.push(caret.as_str());

        let mut result = lines.join("\n");

        if let Some(following) = self.following {
            let take = options.lines_after.unwrap_or(usize::MAX);
            let following: Vec<_> = following.split('\n').map(strip_cr).take(take).collect();
            let following = following.join("\n");
            if !following.trim().is_empty() {
                result.push('\n');
                result.push_str(following.trim_end());
            }
        }

        result
    }

    fn caret(&self, marker: &str) -> String {
        let mut caret: String = self
            .head
            .chars()
            .map(|c| if c == '\t' { c } else { ' ' })
            .collect();
        caret.push_str(marker);
        caret
    }
}

// ---

fn byte_offset(raw: &str, offset: usize) -> Option<usize> {
    raw.char_indices().map(|(i, _)| i).chain(once(raw.len())).nth(offset)
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
