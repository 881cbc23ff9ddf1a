//! Grammar symbols and expressions
//!
//! Everything in here is pure shape: no parse progress is ever stored in a symbol. Match
//! progress lives in [crate::simplex::matching], which borrows these shapes.

use super::bounds::Bounds;
use super::error::GrammarError;
use crate::simplex::lexing::Token;
use std::fmt;

/// A leaf symbol matched against exactly one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Terminal<K> {
    /// Any token of this kind
    Kind(K),
    /// A token of this kind whose text is exactly `text`, e.g. a keyword
    Exact { kind: K, text: String },
}

impl<K: PartialEq> Terminal<K> {
    pub fn matches(&self, token: &Token<K>) -> bool {
        match self {
            Terminal::Kind(kind) => token.kind == *kind,
            Terminal::Exact { kind, text } => token.kind == *kind && token.text == *text,
        }
    }
}

impl<K: fmt::Debug> fmt::Display for Terminal<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::Kind(kind) => write!(f, "{:?}", kind),
            Terminal::Exact { kind, text } => write!(f, "{:?} {:?}", kind, text),
        }
    }
}

/// One element of an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol<K> {
    Terminal(Terminal<K>),
    /// Reference to a nonterminal by name
    Nonterminal(String),
    Expression(Expression<K>),
    Quantifier(Quantifier<K>),
}

impl<K> From<Terminal<K>> for Symbol<K> {
    fn from(terminal: Terminal<K>) -> Self {
        Symbol::Terminal(terminal)
    }
}

impl<K> From<Expression<K>> for Symbol<K> {
    fn from(expression: Expression<K>) -> Self {
        Symbol::Expression(expression)
    }
}

impl<K> From<Quantifier<K>> for Symbol<K> {
    fn from(quantifier: Quantifier<K>) -> Self {
        Symbol::Quantifier(quantifier)
    }
}

/// Terminal matching any token of `kind`
pub fn t<K>(kind: K) -> Symbol<K> {
    Symbol::Terminal(Terminal::Kind(kind))
}

/// Terminal matching a token of `kind` with exactly this text
pub fn exact<K>(kind: K, text: impl Into<String>) -> Symbol<K> {
    Symbol::Terminal(Terminal::Exact {
        kind,
        text: text.into(),
    })
}

/// Reference to the nonterminal `name`
pub fn nt<K>(name: impl Into<String>) -> Symbol<K> {
    Symbol::Nonterminal(name.into())
}

/// An ordered sequence of symbols that must all match, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression<K> {
    symbols: Vec<Symbol<K>>,
}

impl<K> Expression<K> {
    pub fn new(symbols: Vec<Symbol<K>>) -> Self {
        Expression { symbols }
    }

    /// The expression matching no tokens at all
    pub fn empty() -> Self {
        Expression {
            symbols: Vec::new(),
        }
    }

    pub fn symbols(&self) -> &[Symbol<K>] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<K> FromIterator<Symbol<K>> for Expression<K> {
    fn from_iter<I: IntoIterator<Item = Symbol<K>>>(iter: I) -> Self {
        Expression::new(iter.into_iter().collect())
    }
}

/// An expression repeated greedily within [Bounds]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantifier<K> {
    expression: Expression<K>,
    bounds: Bounds,
}

impl<K> Quantifier<K> {
    pub fn new(expression: Expression<K>, bounds: Bounds) -> Self {
        Quantifier { expression, bounds }
    }

    /// Build a quantifier from regex style notation such as `"*"` or `"{2,3}"`
    pub fn parse(expression: Expression<K>, notation: &str) -> Result<Self, GrammarError> {
        Ok(Quantifier::new(expression, notation.parse()?))
    }

    pub fn expression(&self) -> &Expression<K> {
        &self.expression
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}
