//! Repetition matching
//!
//! A [QuantifierState] reuses one inner [ExpressionState] across repetitions: each time the
//! inner expression completes, its values are moved out as a new group and the inner state is
//! reset for the next repetition.

use super::common::{Feed, Matched, Resolver};
use super::expression::ExpressionState;
use crate::simplex::grammar::Quantifier;
use crate::simplex::lexing::Lookahead;
use crate::simplex::parsing::ParseError;

/// Match progress through one [Quantifier]
#[derive(Debug, Clone)]
pub struct QuantifierState<'g, K> {
    quantifier: &'g Quantifier<K>,
    groups: Vec<Vec<Matched<K>>>,
    current: ExpressionState<'g, K>,
}

impl<'g, K> QuantifierState<'g, K>
where
    K: Clone + PartialEq,
{
    pub fn new(quantifier: &'g Quantifier<K>) -> Self {
        QuantifierState {
            quantifier,
            groups: Vec::new(),
            current: ExpressionState::new(quantifier.expression()),
        }
    }

    /// One group of matched values per completed repetition
    pub fn groups(&self) -> &[Vec<Matched<K>>] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<Vec<Matched<K>>> {
        self.groups
    }

    /// Enough repetitions and no repetition half way through
    pub fn is_complete(&self) -> bool {
        self.quantifier.bounds().admits(self.groups.len()) && !self.current.consumed()
    }

    /// Holds `max` repetitions and refuses any further token
    pub fn is_saturated(&self) -> bool {
        self.quantifier.bounds().is_saturated(self.groups.len())
    }

    /// Whether any token has been consumed since the last reset
    pub fn consumed(&self) -> bool {
        self.groups.iter().flatten().any(Matched::has_tokens) || self.current.consumed()
    }

    pub fn reset(&mut self) {
        self.groups.clear();
        self.current.reset();
    }

    fn close_repetition(&mut self) {
        let group = self.current.take_matched();
        self.groups.push(group);
    }

    /// Feed one lookahead to the repetition in progress, or start a new one
    pub fn feed<R>(&mut self, lookahead: Lookahead<K>, resolver: &mut R) -> Result<Feed<K>, ParseError>
    where
        R: Resolver<K> + ?Sized,
    {
        let mut lookahead = lookahead;
        loop {
            if self.is_saturated() {
                return Ok(Feed::Rejected(lookahead));
            }

            match self.current.feed(lookahead, resolver)? {
                Feed::Consumed => {
                    if self.current.is_complete() {
                        if self.current.consumed() {
                            self.close_repetition();
                        } else {
                            self.current.reset();
                        }
                    }
                    return Ok(Feed::Consumed);
                }
                Feed::Rejected(back) => {
                    if self.current.consumed() {
                        if self.current.is_complete() {
                            // The repetition ended right before `back`, which may start the next one
                            self.close_repetition();
                            lookahead = back;
                            continue;
                        }
                        // Half a repetition: the quantifier has failed
                        return Ok(Feed::Rejected(back));
                    }
                    // Nothing taken. An empty repetition only counts towards the minimum.
                    if self.current.is_complete() {
                        let group = self.current.take_matched();
                        while self.groups.len() < self.quantifier.bounds().min() {
                            self.groups.push(group.clone());
                        }
                    } else {
                        self.current.reset();
                    }
                    return Ok(Feed::Rejected(back));
                }
            }
        }
    }
}
