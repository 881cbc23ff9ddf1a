//! Common lexer module
//!
//! This module contains the token type and the interface every lexer collaborator implements.

use std::fmt;
use std::ops::Range;

/// A token produced by a lexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<K> {
    /// The kind terminals are matched against
    pub kind: K,
    /// The source text of the token
    pub text: String,
    /// Byte range of the token in the source
    pub span: Range<usize>,
}

impl<K> Token<K> {
    pub fn new(kind: K, text: impl Into<String>, span: Range<usize>) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Byte offset where the token starts
    pub fn position(&self) -> usize {
        self.span.start
    }
}

/// The next token to be matched, or `None` at the end of the stream
pub type Lookahead<K> = Option<Token<K>>;

/// Short human readable description of a lookahead, used in error messages
pub fn describe<K: fmt::Debug>(lookahead: &Lookahead<K>) -> String {
    match lookahead {
        Some(token) => format!("{:?} {:?}", token.kind, token.text),
        None => "end of input".to_string(),
    }
}

/// Errors raised by a lexer while tokenizing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// Byte offset of the offending input
    pub position: usize,
    pub message: String,
}

impl LexError {
    pub fn new(position: usize, message: impl Into<String>) -> Self {
        LexError {
            position,
            message: message.into(),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lexer error at position {}: {}", self.position, self.message)
    }
}

impl std::error::Error for LexError {}

/// Trait for lexer collaborators
///
/// `input` replaces whatever the lexer was tokenizing before. `token` returns the next
/// token, `Ok(None)` once the input is exhausted, and keeps returning `Ok(None)` after that.
pub trait Lexer {
    /// Token kind terminals are compared against
    type Kind: Clone + PartialEq + fmt::Debug;

    /// Feed the full source text to the lexer
    fn input(&mut self, text: &str);

    /// Produce the next token
    fn token(&mut self) -> Result<Option<Token<Self::Kind>>, LexError>;
}

impl<L: Lexer + ?Sized> Lexer for &mut L {
    type Kind = L::Kind;

    fn input(&mut self, text: &str) {
        (**self).input(text)
    }

    fn token(&mut self) -> Result<Option<Token<Self::Kind>>, LexError> {
        (**self).token()
    }
}
