//! Matching
//!
//!     Match state for one parse. The grammar only describes shape; every cursor, matched
//!     value and repetition count lives here, in states that borrow the grammar. A fresh state
//!     is built whenever an alternative, nested expression or quantifier is entered, so the
//!     same grammar can drive many parses at once.
//!
//! The Feeding Protocol
//!
//!     States are fed one lookahead at a time and answer with a [Feed](common::Feed):
//!
//!         - Consumed: the token was taken and nothing is pending.
//!         - Rejected(token): the token was not taken and must be redelivered to whoever
//!           comes next. If the state is complete afterwards, it simply ended before this
//!           token. If it is not complete, it failed.
//!
//!     Nonterminal references are handed to a [Resolver](common::Resolver), normally the
//!     parser driver, which recurses into the nonterminal and pulls as many tokens as it
//!     needs before returning.
//!
//! Repetition
//!
//!     Quantifiers are greedy and never backtrack. Once a repetition has consumed a token it
//!     must complete, otherwise the quantifier fails, even if it already had enough
//!     repetitions. A quantifier refuses tokens outright once it holds `max` repetitions.
//!
//!     A repetition that matches without consuming a token is never repeated. When the
//!     quantifier stops short of `min`, empty repetitions fill the gap, so `(a?){2}`
//!     matches nothing at all.

pub mod common;
pub mod expression;
pub mod quantifier;

pub use common::{Expansion, Feed, Matched, NoNonterminals, Node, Resolver};
pub use expression::ExpressionState;
pub use quantifier::QuantifierState;
