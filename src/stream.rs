//! Stream engine for tokenizers.
//!
//! An [`Engine`] owns an ordered input sequence and an output token sequence.
//! A tokenizer implements [`Tokenize`] and is driven by [`Engine::drive`], which
//! removes elements from the front of the input one by one and hands them to
//! the tokenizer. The tokenizer may pull further elements with
//! [`Engine::take_one`], [`Engine::take_n`], [`Engine::consume`] and
//! [`Engine::consume_seeded`] before it returns.
//!
//! # Examples
//!
//! ```
//! use lexstream::stream::{Engine, OrphanBehavior, Tokenize};
//! use lexstream::error::Error;
//!
//! struct Words;
//!
//! impl Tokenize<char, String> for Words {
//!     type Error = Error;
//!
//!     fn on_next_value(&mut self, value: char, engine: &mut Engine<char, String>) -> Result<(), Error> {
//!         if !value.is_whitespace() {
//!             let word = engine
//!                 .consume_seeded(value, OrphanBehavior::Discard)
//!                 .take_until(|c| c.is_whitespace());
//!             engine.push_token(word.into_iter().collect());
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut engine = Engine::new("hello  stream world".chars());
//! let tokens = engine.drive(&mut Words).unwrap().take_tokens();
//! let words: Vec<_> = tokens.iter().map(|t| t.value.as_str()).collect();
//! assert_eq!(words, ["hello", "stream", "world"]);
//! ```

// std imports
use std::{borrow::Cow, collections::VecDeque, fmt};

// third-party imports
use serde::Serialize;

// local imports
use crate::{
    error::{Error, Result},
    observer::Observer,
    settings::Limits,
};

// ---

/// Defines what happens to the element that stopped a consumption loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OrphanBehavior {
    /// Append the element to the consumed sequence.
    Consume,
    /// Drop the element.
    Discard,
    /// Return the element to the front of the input.
    #[default]
    PutBack,
}

// ---

/// Token is a value produced by a tokenizer, stamped with the engine position
/// at the moment it was finalized.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token<V> {
    pub value: V,
    pub position: usize,
}

impl<V> Token<V> {
    pub fn new(value: V, position: usize) -> Self {
        Self { value, position }
    }
}

// ---

/// Tokenize is implemented by concrete tokenizers built on top of [`Engine`].
pub trait Tokenize<T, V> {
    type Error: From<Error>;

    /// Called once for every element removed from the front of the input by
    /// [`Engine::drive`], in input order.
    fn on_next_value(&mut self, value: T, engine: &mut Engine<T, V>) -> std::result::Result<(), Self::Error>;
}

// ---

/// Engine owns the input buffer, the produced tokens and the registered observers.
pub struct Engine<T, V = T> {
    input: VecDeque<T>,
    initial_len: usize,
    tokens: Vec<Token<V>>,
    observers: Vec<Box<dyn Observer<T>>>,
    depth: usize,
    max_depth: usize,
}

impl<T, V> Engine<T, V> {
    /// Creates a new engine taking ownership of the given input with default limits.
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_limits(values, &Limits::default())
    }

    /// Creates a new engine taking ownership of the given input.
    pub fn with_limits<I>(values: I, limits: &Limits) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let input: VecDeque<T> = values.into_iter().collect();
        let initial_len = input.len();
        log::debug!("engine created with {} elements", initial_len);

        Self {
            input,
            initial_len,
            tokens: Vec::new(),
            observers: Vec::new(),
            depth: 0,
            max_depth: limits.max_depth,
        }
    }

    /// Returns the number of elements consumed since the engine was created.
    #[inline]
    pub fn position(&self) -> usize {
        self.initial_len.saturating_sub(self.input.len())
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.input.is_empty()
    }

    /// Returns the next element without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.input.front()
    }

    /// Removes and returns the next element.
    #[inline]
    pub fn take_one(&mut self) -> Result<T> {
        self.take(1, None)
    }

    /// Discards `count - 1` elements, then removes and returns the following one.
    ///
    /// Fails with [`Error::EndOfInput`] if the input runs out first. Elements
    /// removed before that stay removed. A `count` of zero acts as one.
    #[inline]
    pub fn take_n(&mut self, count: usize) -> Result<T> {
        self.take(count, None)
    }

    /// Same as [`Self::take_n`] but fails with the given message.
    #[inline]
    pub fn take_n_with(&mut self, count: usize, message: impl Into<Cow<'static, str>>) -> Result<T> {
        self.take(count, Some(message.into()))
    }

    /// Starts a consumption loop with the next element as the first candidate.
    ///
    /// Fails with [`Error::EndOfInput`] if the input is exhausted.
    pub fn consume(&mut self, orphan: OrphanBehavior) -> Result<Consume<'_, T, V>> {
        let current = self.take_one()?;
        Ok(Consume::new(self, Vec::new(), Some(current), orphan))
    }

    /// Starts a consumption loop with `seed` already accepted.
    ///
    /// The seed is not tested by the predicate. The next element, if any,
    /// becomes the first candidate.
    pub fn consume_seeded(&mut self, seed: T, orphan: OrphanBehavior) -> Consume<'_, T, V> {
        let current = self.input.pop_front();
        Consume::new(self, vec![seed], current, orphan)
    }

    /// Appends a token stamped with the current position.
    pub fn push_token(&mut self, value: V) {
        let position = self.position();
        self.tokens.push(Token::new(value, position));
    }

    pub fn tokens(&self) -> &[Token<V>] {
        &self.tokens
    }

    /// Moves the produced tokens out, leaving the engine with none.
    pub fn take_tokens(&mut self) -> Vec<Token<V>> {
        std::mem::take(&mut self.tokens)
    }

    pub fn into_tokens(self) -> Vec<Token<V>> {
        self.tokens
    }

    /// Registers an observer notified with every element consumed by [`Self::drive`].
    pub fn subscribe(&mut self, observer: impl Observer<T> + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Returns the current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Runs `f` one nesting level deeper.
    ///
    /// Fails with [`Error::DepthLimitExceeded`] without running `f` if the
    /// configured maximum depth has been reached.
    pub fn nested<R, E, F>(&mut self, f: F) -> std::result::Result<R, E>
    where
        F: FnOnce(&mut Self) -> std::result::Result<R, E>,
        E: From<Error>,
    {
        if self.depth >= self.max_depth {
            log::debug!("nesting depth limit {} reached at position {}", self.max_depth, self.position());
            return Err(Error::DepthLimitExceeded {
                limit: self.max_depth,
                position: self.position(),
            }
            .into());
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Feeds every remaining element to `hook` until the input is exhausted.
    ///
    /// Any failure returned by the hook is propagated as is, leaving the input
    /// and the tokens in whatever state they were at that point.
    pub fn drive<H>(&mut self, hook: &mut H) -> std::result::Result<&mut Self, H::Error>
    where
        H: Tokenize<T, V> + ?Sized,
        T: Clone,
    {
        log::debug!("driving tokenizer over {} elements", self.remaining());

        while let Some(value) = self.input.pop_front() {
            log::trace!("element #{} taken", self.position());
            if self.observers.is_empty() {
                hook.on_next_value(value, self)?;
            } else {
                let observed = value.clone();
                hook.on_next_value(value, self)?;
                self.notify(&observed);
            }
        }

        log::debug!("tokenizer finished with {} tokens", self.tokens.len());
        Ok(self)
    }

    fn take(&mut self, count: usize, message: Option<Cow<'static, str>>) -> Result<T> {
        for _ in 1..count {
            if self.input.pop_front().is_none() {
                return Err(self.end_of_input(message));
            }
        }
        match self.input.pop_front() {
            Some(value) => Ok(value),
            None => Err(self.end_of_input(message)),
        }
    }

    fn put_back(&mut self, value: T) {
        self.input.push_front(value);
        log::trace!("element put back at position {}", self.position());
    }

    fn notify(&mut self, value: &T) {
        for observer in &mut self.observers {
            observer.notify(value);
        }
    }

    fn end_of_input(&self, message: Option<Cow<'static, str>>) -> Error {
        Error::EndOfInput {
            message,
            position: self.position(),
        }
    }
}

impl<T: fmt::Debug, V: fmt::Debug> fmt::Debug for Engine<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("position", &self.position())
            .field("input", &self.input)
            .field("tokens", &self.tokens)
            .field("observers", &self.observers.len())
            .field("depth", &self.depth)
            .finish()
    }
}

// ---

/// A pending consumption loop started by [`Engine::consume`] or [`Engine::consume_seeded`].
///
/// If it is dropped without running, the pending candidate element is returned to the input.
#[must_use = "consumption does not happen until take_while or take_until is called"]
pub struct Consume<'e, T, V> {
    engine: &'e mut Engine<T, V>,
    accepted: Vec<T>,
    current: Option<T>,
    orphan: OrphanBehavior,
}

impl<'e, T, V> Consume<'e, T, V> {
    fn new(engine: &'e mut Engine<T, V>, accepted: Vec<T>, current: Option<T>, orphan: OrphanBehavior) -> Self {
        Self {
            engine,
            accepted,
            current,
            orphan,
        }
    }

    /// Accepts elements while `predicate` holds.
    pub fn take_while<P>(self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.run(|value| predicate(value))
    }

    /// Accepts elements until `predicate` holds.
    pub fn take_until<P>(self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.run(|value| !predicate(value))
    }

    fn run<P>(mut self, mut accept: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        while let Some(current) = self.current.take() {
            if !accept(&current) {
                self.resolve(current);
                break;
            }
            self.accepted.push(current);
            self.current = self.engine.input.pop_front();
        }

        std::mem::take(&mut self.accepted)
    }

    fn resolve(&mut self, orphan: T) {
        match self.orphan {
            OrphanBehavior::Consume => self.accepted.push(orphan),
            OrphanBehavior::Discard => {}
            OrphanBehavior::PutBack => self.engine.put_back(orphan),
        }
    }
}

impl<T, V> Drop for Consume<'_, T, V> {
    fn drop(&mut self) {
        if let Some(current) = self.current.take() {
            self.engine.put_back(current);
        }
    }
}

impl<T: fmt::Debug, V> fmt::Debug for Consume<'_, T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consume")
            .field("position", &self.engine.position())
            .field("accepted", &self.accepted)
            .field("current", &self.current)
            .field("orphan", &self.orphan)
            .finish()
    }
}
