//! Token stream with rewind
//!
//! Wraps the lexer collaborator. Tokens are pulled lazily and kept, so the driver can rewind
//! to the start of an abandoned alternative and replay the same tokens to the next one. The
//! lexer itself is only ever asked for each token once.
//!
//! Every lookahead handed out is "in hand" until it is either consumed or given back with
//! [TokenStream::put_back].

use super::error::ParseError;
use crate::simplex::lexing::{Lexer, Lookahead, Token};

pub struct TokenStream<L: Lexer> {
    lexer: L,
    buffer: Vec<Token<L::Kind>>,
    position: usize,
    exhausted: bool,
    /// Byte length of the input, the position reported for the end of input
    end: usize,
    limit: Option<usize>,
}

impl<L: Lexer> TokenStream<L> {
    /// Feed `text` to `lexer` and start reading from the beginning
    pub fn new(mut lexer: L, text: &str, limit: Option<usize>) -> Self {
        lexer.input(text);
        TokenStream {
            lexer,
            buffer: Vec::new(),
            position: 0,
            exhausted: false,
            end: text.len(),
            limit,
        }
    }

    /// Next lookahead. The end of input is returned as `None`, as often as asked.
    pub fn next(&mut self) -> Result<Lookahead<L::Kind>, ParseError> {
        if let Some(token) = self.buffer.get(self.position) {
            self.position += 1;
            return Ok(Some(token.clone()));
        }
        if self.exhausted {
            return Ok(None);
        }
        if let Some(limit) = self.limit {
            if self.buffer.len() >= limit {
                return Err(ParseError::TokenLimit { limit });
            }
        }

        match self.lexer.token()? {
            Some(token) => {
                self.buffer.push(token.clone());
                self.position += 1;
                Ok(Some(token))
            }
            None => {
                self.exhausted = true;
                Ok(None)
            }
        }
    }

    /// Give back the lookahead most recently handed out
    pub fn put_back(&mut self, lookahead: &Lookahead<L::Kind>) {
        if lookahead.is_some() {
            debug_assert!(self.position > 0, "put back a token that was never read");
            self.position = self.position.saturating_sub(1);
        }
    }

    /// Index of the next token, usable with [TokenStream::rewind]
    pub fn mark(&self) -> usize {
        self.position
    }

    pub fn rewind(&mut self, mark: usize) {
        self.position = mark;
    }

    /// Stream index of a lookahead that is in hand
    pub fn index_of(&self, lookahead: &Lookahead<L::Kind>) -> usize {
        match lookahead {
            Some(_) => self.position.saturating_sub(1),
            None => self.position,
        }
    }

    /// Byte offset of a lookahead
    pub fn offset_of(&self, lookahead: &Lookahead<L::Kind>) -> usize {
        match lookahead {
            Some(token) => token.position(),
            None => self.end,
        }
    }
}
