//! Test factories for tokens and lexers

use std::collections::VecDeque;
use std::fmt::Debug;

use crate::simplex::lexing::{LexError, Lexer, Token};

/// Make a single token starting at byte `start`
pub fn mk_token<K>(kind: K, text: &str, start: usize) -> Token<K> {
    Token::new(kind, text, start..start + text.len())
}

/// Make tokens from a list of (kind, text), laid out back to back from offset 0
pub fn mk_tokens<K: Clone>(specs: &[(K, &str)]) -> Vec<Token<K>> {
    let mut start = 0;
    specs
        .iter()
        .map(|(kind, text)| {
            let token = mk_token(kind.clone(), text, start);
            start += text.len();
            token
        })
        .collect()
}

/// Lexer that replays a fixed list of tokens
#[derive(Debug, Clone)]
pub struct ScriptedLexer<K> {
    tokens: Vec<Token<K>>,
    pending: VecDeque<Token<K>>,
    error: Option<LexError>,
    failed: bool,
}

impl<K: Clone> ScriptedLexer<K> {
    pub fn new(tokens: Vec<Token<K>>) -> Self {
        ScriptedLexer {
            pending: tokens.iter().cloned().collect(),
            tokens,
            error: None,
            failed: false,
        }
    }

    /// Fail with `error` once every token has been handed out
    pub fn failing_with(mut self, error: LexError) -> Self {
        self.error = Some(error);
        self
    }
}

impl<K> Lexer for ScriptedLexer<K>
where
    K: Clone + PartialEq + Debug,
{
    type Kind = K;

    fn input(&mut self, _text: &str) {
        self.pending = self.tokens.iter().cloned().collect();
        self.failed = false;
    }

    fn token(&mut self) -> Result<Option<Token<K>>, LexError> {
        if let Some(token) = self.pending.pop_front() {
            return Ok(Some(token));
        }
        match &self.error {
            Some(error) if !self.failed => {
                self.failed = true;
                Err(error.clone())
            }
            _ => Ok(None),
        }
    }
}

/// Lexer over `char` kinds, whitespace separated
#[derive(Debug, Clone, Default)]
pub struct CharLexer {
    words: bool,
    pending: VecDeque<Token<char>>,
}

impl CharLexer {
    /// Every non whitespace character is a token whose kind is the character itself
    pub fn new() -> Self {
        CharLexer::default()
    }

    /// Runs of alphanumeric characters are one token of kind `'w'`, other characters are
    /// tokens of their own kind
    pub fn words() -> Self {
        CharLexer {
            words: true,
            pending: VecDeque::new(),
        }
    }
}

impl Lexer for CharLexer {
    type Kind = char;

    fn input(&mut self, text: &str) {
        self.pending.clear();
        let mut chars = text.char_indices().peekable();
        while let Some((start, c)) = chars.next() {
            if c.is_whitespace() {
                continue;
            }
            if self.words && c.is_alphanumeric() {
                let mut end = start + c.len_utf8();
                while let Some(&(next, d)) = chars.peek() {
                    if !d.is_alphanumeric() {
                        break;
                    }
                    end = next + d.len_utf8();
                    chars.next();
                }
                self.pending.push_back(Token::new('w', &text[start..end], start..end));
            } else {
                let end = start + c.len_utf8();
                self.pending.push_back(Token::new(c, &text[start..end], start..end));
            }
        }
    }

    fn token(&mut self) -> Result<Option<Token<char>>, LexError> {
        Ok(self.pending.pop_front())
    }
}
