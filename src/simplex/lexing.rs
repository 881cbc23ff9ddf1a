//! Lexer
//!
//!     The parser never looks at raw text. It pulls tokens, one at a time, from a lexer
//!     collaborator implementing [Lexer](common::Lexer). A token carries a kind, used for
//!     terminal matching, the source text it was made from, and its byte span, used for
//!     error reporting.
//!
//!     Any logos token enum can be used directly through [LogosLexer](logos_lexer::LogosLexer).
//!     Other tokenizers only need to implement the two methods of the trait.
//!
//! End of Input
//!
//!     The end of the token stream is represented as `None` in a [Lookahead]. It never
//!     matches a terminal, which lets quantifiers at the end of an expression find out that
//!     no further repetition is coming.

pub mod common;
pub mod logos_lexer;

pub use common::{LexError, Lexer, Lookahead, Token};
pub use logos_lexer::LogosLexer;
