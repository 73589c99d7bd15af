// std imports
use std::borrow::Cow;

// third-party imports
use thiserror::Error;

// ---

pub const DEFAULT_END_OF_INPUT_MESSAGE: &str = "unexpected end of input";

/// Error is an error which may occur while consuming an input stream.
///
/// The engine itself only ever produces [`Error::EndOfInput`] and
/// [`Error::DepthLimitExceeded`]. [`Error::Syntax`] is provided for
/// tokenizers built on top of the engine so that grammar faults carry
/// an offset that can later be rendered by [`crate::report::SyntaxError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{}", .message.as_deref().unwrap_or(DEFAULT_END_OF_INPUT_MESSAGE))]
    EndOfInput {
        message: Option<Cow<'static, str>>,
        position: usize,
    },
    #[error("{message}")]
    Syntax { message: String, offset: usize },
    #[error("nesting depth limit of {limit} exceeded")]
    DepthLimitExceeded { limit: usize, position: usize },
}

impl Error {
    /// Creates a syntax fault anchored at the given offset.
    pub fn syntax(message: impl Into<String>, offset: usize) -> Self {
        Self::Syntax {
            message: message.into(),
            offset,
        }
    }

    /// Returns the absolute position the error refers to.
    pub fn position(&self) -> usize {
        match self {
            Self::EndOfInput { position, .. } => *position,
            Self::Syntax { offset, .. } => *offset,
            Self::DepthLimitExceeded { position, .. } => *position,
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput { .. })
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
