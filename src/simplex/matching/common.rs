//! Types shared by the expression and quantifier states

use crate::simplex::grammar::{GrammarError, RuleId, Terminal};
use crate::simplex::lexing::{Lookahead, Token};
use crate::simplex::parsing::ParseError;

/// Answer of a state to one fed lookahead
#[derive(Debug, Clone, PartialEq)]
pub enum Feed<K> {
    /// The token was accepted, nothing is pending
    Consumed,
    /// The token was not accepted and must be redelivered
    Rejected(Lookahead<K>),
}

/// What a symbol matched, before actions are applied
#[derive(Debug, Clone, PartialEq)]
pub enum Matched<K> {
    Token(Token<K>),
    /// A completed nonterminal
    Node(Node<K>),
    /// A completed nested expression
    Group(Vec<Matched<K>>),
    /// A completed quantifier, one group per repetition
    Repetition(Vec<Vec<Matched<K>>>),
}

impl<K> Matched<K> {
    /// Whether any token was consumed to produce this match
    pub fn has_tokens(&self) -> bool {
        match self {
            Matched::Token(_) => true,
            Matched::Node(node) => node.children.iter().any(Matched::has_tokens),
            Matched::Group(items) => items.iter().any(Matched::has_tokens),
            Matched::Repetition(groups) => groups.iter().flatten().any(Matched::has_tokens),
        }
    }
}

/// A nonterminal that matched through the alternative `rule`
#[derive(Debug, Clone, PartialEq)]
pub struct Node<K> {
    pub rule: RuleId,
    pub children: Vec<Matched<K>>,
}

/// Result of expanding a nonterminal
#[derive(Debug, Clone, PartialEq)]
pub enum Expansion<K> {
    /// The nonterminal matched. `remainder` is the lookahead that ended it, if one was
    /// pulled and not consumed. A match that consumed no token always hands back the
    /// original lookahead as `Some(lookahead)`; `None` means tokens were consumed and
    /// nothing is pending.
    Matched {
        node: Node<K>,
        remainder: Option<Lookahead<K>>,
    },
    /// No alternative matched. The original lookahead is handed back unconsumed.
    Failed(Lookahead<K>),
}

/// Resolves nonterminal references for the match states
pub trait Resolver<K> {
    /// Fully match the nonterminal `name` starting at `lookahead`
    fn expand(&mut self, name: &str, lookahead: Lookahead<K>) -> Result<Expansion<K>, ParseError>;

    /// A terminal accepted `token`
    fn accepted(&mut self, _token: &Token<K>) {}

    /// A terminal refused `found`
    fn mismatched(&mut self, _expected: &Terminal<K>, _found: &Lookahead<K>) {}
}

/// Resolver for expressions made of terminals only
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNonterminals;

impl<K> Resolver<K> for NoNonterminals {
    fn expand(&mut self, name: &str, _lookahead: Lookahead<K>) -> Result<Expansion<K>, ParseError> {
        Err(GrammarError::NoAlternatives(name.to_string()).into())
    }
}
