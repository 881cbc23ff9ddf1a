//! Logos adapter
//!
//! Turns any logos token enum into a [Lexer]. The whole input is tokenized on `input`, the
//! same way the lex tokenizer collects `(Token, Span)` pairs up front, and tokens are then
//! handed out one by one.

use super::common::{LexError, Lexer, Token};
use logos::Logos;
use std::collections::VecDeque;
use std::fmt;

/// Lexer collaborator backed by a logos token enum
#[derive(Debug, Clone)]
pub struct LogosLexer<K> {
    pending: VecDeque<Result<Token<K>, LexError>>,
}

impl<K> LogosLexer<K> {
    pub fn new() -> Self {
        LogosLexer {
            pending: VecDeque::new(),
        }
    }
}

impl<K> Default for LogosLexer<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Lexer for LogosLexer<K>
where
    K: for<'s> Logos<'s, Source = str, Extras = ()> + Clone + PartialEq + fmt::Debug,
{
    type Kind = K;

    fn input(&mut self, text: &str) {
        self.pending.clear();

        let mut lexer = K::lexer(text);
        while let Some(result) = lexer.next() {
            let span = lexer.span();
            match result {
                Ok(kind) => {
                    self.pending
                        .push_back(Ok(Token::new(kind, lexer.slice(), span)));
                }
                Err(_) => {
                    // Nothing after an unrecognized character can be trusted
                    self.pending.push_back(Err(LexError::new(
                        span.start,
                        format!("unrecognized input {:?}", lexer.slice()),
                    )));
                    break;
                }
            }
        }
    }

    fn token(&mut self) -> Result<Option<Token<K>>, LexError> {
        self.pending.pop_front().transpose()
    }
}
