//! Parsing
//!
//!     The recursive descent driver. [Parser] owns a lexer collaborator and borrows a
//!     [Grammar](crate::simplex::grammar::Grammar); each call to `parse` runs a fresh session
//!     over a new token stream.
//!
//! Expanding a Nonterminal
//!
//!     The alternatives of a nonterminal are tried in declaration order. Each alternative
//!     gets a fresh match state and is fed tokens until it completes or fails. The first one
//!     to complete wins. A failed alternative leaves no trace: the token stream is rewound to
//!     where the nonterminal started before the next alternative is tried, and when all of
//!     them fail the caller gets its lookahead back untouched.
//!
//!     The expansion stack doubles as the context handed to actions and reported in errors.
//!     Its depth is bounded by [ParserConfig::max_depth] so a grammar that recurses without
//!     consuming input ends in an error rather than a stack overflow.
//!
//! Actions
//!
//!     Actions are not run while matching. Matching builds a tree of completed nonterminals;
//!     only once the main nonterminal has matched is the tree reduced, bottom up, calling
//!     each action exactly once. An alternative that was abandoned therefore never runs an
//!     action, and actions may have side effects.
//!
//!     A nonterminal without an action reduces to the raw sequence of its matched values.
//!
//! Trailing Input
//!
//!     What happens to tokens left after the main nonterminal is a configuration choice,
//!     see [TrailingPolicy]. The default rejects them.

pub mod config;
pub mod error;
pub mod parser;
pub mod stream;
pub mod trace;
pub mod value;

pub use config::{ParserConfig, TrailingPolicy};
pub use error::ParseError;
pub use parser::Parser;
pub use stream::TokenStream;
pub use trace::{NoTrace, ParseTrace, TreeTrace};
pub use value::{ParseTree, Value};
