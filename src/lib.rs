//! # simplex
//!
//! A small grammar description and recursive descent parsing engine.
//!
//! A grammar is a set of named nonterminals, each defined by one or more alternative
//! expressions built from terminals, nonterminal references, nested expressions and
//! bounded repetitions. The parser drives such a grammar against the tokens produced by a
//! lexer, one token at a time, and folds completed nonterminals into values with
//! user-supplied actions.
//!
//! File Layout
//!
//! src/simplex
//!   ├── grammar     Immutable grammar shape: symbols, quantifiers, rules, validation
//!   ├── lexing      The lexer seam: tokens, the `Lexer` trait and a logos adapter
//!   ├── matching    Per-parse match state for expressions and quantifiers
//!   ├── parsing     The recursive descent driver, values, errors, config and tracing
//!   └── testing     Factories and a scripted lexer for tests
//!
//! The grammar is never mutated while parsing. All progress lives in match states that
//! borrow the grammar, so one grammar can drive any number of parses, including
//! concurrent ones.
//!
//! Example (with a logos token enum `Tok`):
//!
//! ```rust,ignore
//! use simplex::simplex::grammar::{nt, t, Bounds, Expression, GrammarBuilder, Quantifier};
//! use simplex::simplex::lexing::LogosLexer;
//! use simplex::simplex::parsing::Parser;
//!
//! // STMT := (EXPR "\n")+
//! // EXPR := TERM "+" EXPR | TERM
//! // TERM := NUMBER
//! let grammar = GrammarBuilder::new()
//!     .rule("STMT", Expression::new(vec![
//!         Quantifier::new(Expression::new(vec![nt("EXPR"), t(Tok::Newline)]), Bounds::at_least_one()).into(),
//!     ]))
//!     .rule("EXPR", Expression::new(vec![nt("TERM"), t(Tok::Plus), nt("EXPR")]))
//!     .rule("EXPR", Expression::new(vec![nt("TERM")]))
//!     .rule("TERM", Expression::new(vec![t(Tok::Number)]))
//!     .build()?;
//!
//! let mut parser = Parser::new(LogosLexer::<Tok>::new(), &grammar);
//! let value = parser.parse("1+2\n", "STMT")?;
//! ```

pub mod simplex;
