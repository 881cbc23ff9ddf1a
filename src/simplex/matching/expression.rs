//! Sequence matching
//!
//! An [ExpressionState] walks the symbols of one expression with a cursor. The cursor only
//! moves forward, and every symbol it passes leaves exactly one matched value behind, so
//! `cursor == matched.len()` always holds.
//!
//! A nested expression or quantifier under the cursor gets its own child state, which is
//! dropped as soon as the cursor moves past it.

use super::common::{Expansion, Feed, Matched, Resolver};
use super::quantifier::QuantifierState;
use crate::simplex::grammar::{Expression, Symbol};
use crate::simplex::lexing::Lookahead;
use crate::simplex::parsing::ParseError;

#[derive(Debug, Clone)]
enum ChildState<'g, K> {
    Expression(ExpressionState<'g, K>),
    Quantifier(QuantifierState<'g, K>),
}

impl<K: Clone + PartialEq> ChildState<'_, K> {
    fn consumed(&self) -> bool {
        match self {
            ChildState::Expression(state) => state.consumed(),
            ChildState::Quantifier(state) => state.consumed(),
        }
    }
}

/// Match progress through one [Expression]
#[derive(Debug, Clone)]
pub struct ExpressionState<'g, K> {
    expression: &'g Expression<K>,
    cursor: usize,
    matched: Vec<Matched<K>>,
    child: Option<Box<ChildState<'g, K>>>,
}

impl<'g, K> ExpressionState<'g, K>
where
    K: Clone + PartialEq,
{
    pub fn new(expression: &'g Expression<K>) -> Self {
        ExpressionState {
            expression,
            cursor: 0,
            matched: Vec::new(),
            child: None,
        }
    }

    pub fn expression(&self) -> &'g Expression<K> {
        self.expression
    }

    /// Index of the symbol the next token goes to
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// One value per symbol passed so far
    pub fn matched(&self) -> &[Matched<K>] {
        &self.matched
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == self.expression.len()
    }

    /// Whether any token has been consumed since the last reset
    pub fn consumed(&self) -> bool {
        self.matched.iter().any(Matched::has_tokens)
            || self.child.as_ref().map_or(false, |child| child.consumed())
    }

    /// Back to the state of a freshly created match
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.matched.clear();
        self.child = None;
    }

    /// Hand out the matched values and reset
    pub fn take_matched(&mut self) -> Vec<Matched<K>> {
        let matched = std::mem::take(&mut self.matched);
        self.reset();
        matched
    }

    pub fn into_matched(self) -> Vec<Matched<K>> {
        self.matched
    }

    fn advance(&mut self, value: Matched<K>) {
        self.matched.push(value);
        self.cursor += 1;
        self.child = None;
    }

    /// Feed one lookahead to the symbol under the cursor
    ///
    /// Symbols that end without taking the lookahead (a satisfied quantifier, a nested
    /// expression or nonterminal that matched empty) pass it on to the next symbol. Once the
    /// expression is complete, lookaheads are rejected.
    pub fn feed<R>(&mut self, lookahead: Lookahead<K>, resolver: &mut R) -> Result<Feed<K>, ParseError>
    where
        R: Resolver<K> + ?Sized,
    {
        let mut lookahead = lookahead;
        loop {
            let Some(symbol) = self.expression.symbols().get(self.cursor) else {
                return Ok(Feed::Rejected(lookahead));
            };

            match symbol {
                Symbol::Terminal(terminal) => {
                    return match lookahead {
                        Some(token) if terminal.matches(&token) => {
                            resolver.accepted(&token);
                            self.advance(Matched::Token(token));
                            Ok(Feed::Consumed)
                        }
                        other => {
                            resolver.mismatched(terminal, &other);
                            Ok(Feed::Rejected(other))
                        }
                    };
                }
                Symbol::Nonterminal(name) => match resolver.expand(name, lookahead)? {
                    Expansion::Matched { node, remainder } => {
                        self.advance(Matched::Node(node));
                        match remainder {
                            Some(next) => lookahead = next,
                            None => return Ok(Feed::Consumed),
                        }
                    }
                    Expansion::Failed(back) => return Ok(Feed::Rejected(back)),
                },
                Symbol::Expression(inner) => {
                    let mut state = match self.child.take().map(|child| *child) {
                        Some(ChildState::Expression(state)) => state,
                        _ => ExpressionState::new(inner),
                    };
                    let feed = state.feed(lookahead, resolver)?;
                    match feed {
                        Feed::Consumed if state.is_complete() => {
                            self.advance(Matched::Group(state.into_matched()));
                            return Ok(Feed::Consumed);
                        }
                        Feed::Rejected(back) if state.is_complete() => {
                            self.advance(Matched::Group(state.into_matched()));
                            lookahead = back;
                        }
                        other => {
                            self.child = Some(Box::new(ChildState::Expression(state)));
                            return Ok(other);
                        }
                    }
                }
                Symbol::Quantifier(quantifier) => {
                    let mut state = match self.child.take().map(|child| *child) {
                        Some(ChildState::Quantifier(state)) => state,
                        _ => QuantifierState::new(quantifier),
                    };
                    let feed = state.feed(lookahead, resolver)?;
                    match feed {
                        // A saturated quantifier cannot take more, move on right away
                        Feed::Consumed if state.is_saturated() && state.is_complete() => {
                            self.advance(Matched::Repetition(state.into_groups()));
                            return Ok(Feed::Consumed);
                        }
                        Feed::Rejected(back) if state.is_complete() => {
                            self.advance(Matched::Repetition(state.into_groups()));
                            lookahead = back;
                        }
                        other => {
                            self.child = Some(Box::new(ChildState::Quantifier(state)));
                            return Ok(other);
                        }
                    }
                }
            }
        }
    }
}
