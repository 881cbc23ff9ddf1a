//! Error types for grammar construction

use std::fmt;

/// Errors detected while building a grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// The grammar has no rules at all
    EmptyGrammar,
    /// Quantifier notation that is not one of `?`, `*`, `+`, `{N}`, `{,M}`, `{N,}`, `{N,M}`
    UnknownQuantifier(String),
    /// Quantifier bounds with `min > max`
    InvalidBounds { min: usize, max: usize },
    /// A rule references a nonterminal that has no rule
    UndefinedNonterminal { name: String, referenced_by: String },
    /// A nonterminal was requested that has no alternatives
    NoAlternatives(String),
    /// A quantifier repeats an expression without symbols
    EmptyRepetition { nonterminal: String },
    /// A nonterminal can reach itself without consuming a token
    LeftRecursion(Vec<String>),
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::EmptyGrammar => write!(f, "Grammar has no rules"),
            GrammarError::UnknownQuantifier(notation) => {
                write!(f, "Unknown quantifier '{}'", notation)
            }
            GrammarError::InvalidBounds { min, max } => {
                write!(f, "Invalid quantifier bounds: min {} is greater than max {}", min, max)
            }
            GrammarError::UndefinedNonterminal {
                name,
                referenced_by,
            } => write!(
                f,
                "Undefined nonterminal '{}' referenced by '{}'",
                name, referenced_by
            ),
            GrammarError::NoAlternatives(name) => {
                write!(f, "Nonterminal '{}' has no alternatives", name)
            }
            GrammarError::EmptyRepetition { nonterminal } => write!(
                f,
                "Quantifier over an empty expression in '{}'",
                nonterminal
            ),
            GrammarError::LeftRecursion(cycle) => {
                write!(f, "Left recursion: {}", cycle.join(" -> "))
            }
        }
    }
}

impl std::error::Error for GrammarError {}
