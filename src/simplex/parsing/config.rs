//! Parser settings
//!
//! Settings deserialize with serde so they can be layered from configuration files, see the
//! `simplex-config` crate. Missing keys fall back to [ParserConfig::default].

use serde::Deserialize;

/// What to do with tokens left over after the main nonterminal matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrailingPolicy {
    /// Leftover tokens are a parse error
    #[default]
    Reject,
    /// Leftover tokens are never pulled from the lexer
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub trailing: TrailingPolicy,
    /// Maximum number of nested nonterminal expansions
    pub max_depth: usize,
    /// Maximum number of tokens pulled from the lexer, unbounded when absent
    pub max_tokens: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            trailing: TrailingPolicy::Reject,
            max_depth: 256,
            max_tokens: None,
        }
    }
}
