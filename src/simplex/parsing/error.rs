//! Error types for parsing

use crate::simplex::grammar::GrammarError;
use crate::simplex::lexing::LexError;
use std::fmt;

/// Errors that end a parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The lexer could not tokenize the input
    Lex(LexError),
    /// The grammar cannot parse the request, e.g. an unknown main nonterminal
    Grammar(GrammarError),
    /// No alternative matched the input. Reported at the furthest token any terminal
    /// was tried against.
    Unexpected {
        /// Innermost nonterminal being expanded at that token
        nonterminal: String,
        /// Byte offset of the token, or the input length at the end of input
        position: usize,
        found: String,
        /// Terminals tried at that token
        expected: Vec<String>,
        /// Nonterminals being expanded, outermost first
        trail: Vec<String>,
    },
    /// The main nonterminal matched but tokens were left over
    TrailingInput { position: usize, found: String },
    /// Nonterminals nested deeper than the configured limit
    RecursionLimit {
        nonterminal: String,
        depth: usize,
        position: usize,
    },
    /// More tokens than the configured limit were pulled from the lexer
    TokenLimit { limit: usize },
}

impl ParseError {
    /// Byte offset in the input the error refers to, when there is one
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Lex(err) => Some(err.position),
            ParseError::Unexpected { position, .. }
            | ParseError::TrailingInput { position, .. }
            | ParseError::RecursionLimit { position, .. } => Some(*position),
            ParseError::Grammar(_) | ParseError::TokenLimit { .. } => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(err) => write!(f, "{}", err),
            ParseError::Grammar(err) => write!(f, "Grammar error: {}", err),
            ParseError::Unexpected {
                nonterminal,
                position,
                found,
                expected,
                trail,
            } => {
                write!(
                    f,
                    "Unexpected {} at position {} while parsing {}",
                    found, position, nonterminal
                )?;
                if !expected.is_empty() {
                    write!(f, ", expected {}", expected.join(" or "))?;
                }
                if trail.len() > 1 {
                    write!(f, " (in {})", trail.join(" > "))?;
                }
                Ok(())
            }
            ParseError::TrailingInput { position, found } => {
                write!(f, "Unexpected trailing input {} at position {}", found, position)
            }
            ParseError::RecursionLimit {
                nonterminal,
                depth,
                position,
            } => write!(
                f,
                "Recursion limit of {} reached expanding {} at position {}",
                depth, nonterminal, position
            ),
            ParseError::TokenLimit { limit } => write!(f, "Token limit of {} exceeded", limit),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(err) => Some(err),
            ParseError::Grammar(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

impl From<GrammarError> for ParseError {
    fn from(err: GrammarError) -> Self {
        ParseError::Grammar(err)
    }
}
