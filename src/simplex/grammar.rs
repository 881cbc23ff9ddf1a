//! Grammar
//!
//!     A grammar is authored once, before parsing, and never changes afterwards. It is a
//!     table of rules, each binding a nonterminal name to one alternative expression and an
//!     optional action. Several rules with the same name are alternatives, tried in the order
//!     they were added.
//!
//!     Expressions are built from four kinds of [Symbol]:
//!
//!         - Terminal: matched directly against one token, by kind or by kind and text.
//!         - Nonterminal: a reference to another rule name, resolved by recursive descent.
//!         - Expression: a nested sequence, matched as one unit.
//!         - Quantifier: a nested sequence repeated between `min` and `max` times.
//!
//!     Quantifier bounds follow the usual regex notation, see [Bounds]:
//!
//!         ?       Bounds::optional()
//!         *       Bounds::any()
//!         +       Bounds::at_least_one()
//!         {N}     Bounds::exactly(N)
//!         {,M}    Bounds::at_most(M)
//!         {N,}    Bounds::at_least(N)
//!         {N,M}   Bounds::between(N, M)
//!
//!     The grammar from the module docs of the parser:
//!
//!         STMT :      (EXPR "\n")+
//!         EXPR :      TERM "+" EXPR
//!                 |   TERM
//!         TERM :      NUMBER
//!
//!     is written as:
//!
//!     ```rust,ignore
//!     GrammarBuilder::new()
//!         .rule("STMT", Expression::new(vec![
//!             Quantifier::parse(Expression::new(vec![nt("EXPR"), t(Tok::Newline)]), "+")?.into(),
//!         ]))
//!         .rule("EXPR", Expression::new(vec![nt("TERM"), t(Tok::Plus), nt("EXPR")]))
//!         .rule("EXPR", Expression::new(vec![nt("TERM")]))
//!         .rule("TERM", Expression::new(vec![t(Tok::Number)]))
//!         .build()?
//!     ```
//!
//! Validation
//!
//!     `build` rejects grammars the parser cannot run: undefined nonterminals, repetitions
//!     of an empty expression and left recursion. The parser only supports LL(1) grammars;
//!     ambiguous grammars build fine but the first alternative always wins.

pub mod bounds;
pub mod error;
pub mod rules;
pub mod symbol;
pub mod validation;

pub use bounds::Bounds;
pub use error::GrammarError;
pub use rules::{Action, Grammar, GrammarBuilder, Rule, RuleId};
pub use symbol::{exact, nt, t, Expression, Quantifier, Symbol, Terminal};
