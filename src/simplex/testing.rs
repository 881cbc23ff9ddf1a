//! Testing utilities
//!
//! Factories for tokens and small lexers that make grammar tests short to write:
//!
//! - [mk_token](factories::mk_token) / [mk_tokens](factories::mk_tokens): tokens with
//!   realistic spans, without running a lexer.
//! - [ScriptedLexer](factories::ScriptedLexer): replays a fixed token list, optionally
//!   ending in a lexer error. It ignores the text it is given.
//! - [CharLexer](factories::CharLexer): a real lexer over `char` kinds. Every non whitespace
//!   character is a token of its own kind, or in word mode runs of alphanumerics become one
//!   `'w'` token.
//!
//! Grammars over `char` kinds read naturally in tests:
//!
//! ```rust-example
//! let grammar: Grammar<char, ()> = GrammarBuilder::new()
//!     .rule("PAIR", Expression::new(vec![t('('), t('n'), t(')')]))
//!     .build()?;
//! let mut parser = Parser::new(CharLexer::new(), &grammar);
//! parser.parse("(n)", "PAIR")?;
//! ```

pub mod factories;

pub use factories::{mk_token, mk_tokens, CharLexer, ScriptedLexer};
