//! Lexstream is a small toolkit for writing tokenizers.
//!
//! It provides a generic [stream engine](stream::Engine) that feeds an input
//! sequence element by element to a tokenizer hook and a
//! [position-anchored syntax error](report::SyntaxError) that renders a
//! human-readable excerpt of the faulty input with a caret under the fault.

// public modules
pub mod decoration;
pub mod error;
pub mod observer;
pub mod report;
pub mod settings;
pub mod stream;
pub mod style;

// test-only modules
#[cfg(test)]
pub mod testing;

// public uses
pub use decoration::{Decorate, Plain, Styled};
pub use error::{Error, Result};
pub use report::{Location, SyntaxError};
pub use settings::Settings;
pub use stream::{Engine, OrphanBehavior, Token, Tokenize};
