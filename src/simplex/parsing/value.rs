//! Reduced values and the action context

use crate::simplex::grammar::Grammar;
use crate::simplex::lexing::Token;
use crate::simplex::matching::{Matched, Node};

/// A matched value as seen by actions and returned by the parser
#[derive(Debug, Clone, PartialEq)]
pub enum Value<K, V> {
    /// A terminal
    Token(Token<K>),
    /// A nonterminal folded by its action
    Reduced(V),
    /// A nested expression, or a nonterminal without an action
    Sequence(Vec<Value<K, V>>),
    /// A quantifier, one group of values per repetition
    Repetition(Vec<Vec<Value<K, V>>>),
}

impl<K, V> Value<K, V> {
    pub fn as_token(&self) -> Option<&Token<K>> {
        match self {
            Value::Token(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_reduced(&self) -> Option<&V> {
        match self {
            Value::Reduced(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_reduced(self) -> Option<V> {
        match self {
            Value::Reduced(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_sequence(self) -> Option<Vec<Value<K, V>>> {
        match self {
            Value::Sequence(values) => Some(values),
            _ => None,
        }
    }

    pub fn into_repetition(self) -> Option<Vec<Vec<Value<K, V>>>> {
        match self {
            Value::Repetition(groups) => Some(groups),
            _ => None,
        }
    }
}

/// Chain of nonterminals from the main one down to the one being reduced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseTree {
    chain: Vec<String>,
}

impl ParseTree {
    pub fn new() -> Self {
        ParseTree { chain: Vec::new() }
    }

    /// Names, outermost first
    pub fn names(&self) -> &[String] {
        &self.chain
    }

    /// The nonterminal being reduced
    pub fn current(&self) -> Option<&str> {
        self.chain.last().map(String::as_str)
    }

    /// The nonterminal the current one is part of
    pub fn parent(&self) -> Option<&str> {
        self.chain.iter().rev().nth(1).map(String::as_str)
    }

    pub fn depth(&self) -> usize {
        self.chain.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.chain.iter().any(|n| n == name)
    }

    pub(crate) fn push(&mut self, name: &str) {
        self.chain.push(name.to_string());
    }

    pub(crate) fn pop(&mut self) {
        self.chain.pop();
    }
}

/// Fold a matched nonterminal into its value, children first
pub(crate) fn reduce<K, V>(grammar: &Grammar<K, V>, node: Node<K>, tree: &mut ParseTree) -> Value<K, V> {
    let rule = grammar.rule(node.rule);
    tree.push(rule.name());
    let values: Vec<Value<K, V>> = node
        .children
        .into_iter()
        .map(|matched| reduce_matched(grammar, matched, tree))
        .collect();
    let value = match rule.action() {
        Some(action) => Value::Reduced(action(values, tree)),
        None => Value::Sequence(values),
    };
    tree.pop();
    value
}

fn reduce_matched<K, V>(grammar: &Grammar<K, V>, matched: Matched<K>, tree: &mut ParseTree) -> Value<K, V> {
    match matched {
        Matched::Token(token) => Value::Token(token),
        Matched::Node(node) => reduce(grammar, node, tree),
        Matched::Group(items) => Value::Sequence(
            items
                .into_iter()
                .map(|item| reduce_matched(grammar, item, tree))
                .collect(),
        ),
        Matched::Repetition(groups) => Value::Repetition(
            groups
                .into_iter()
                .map(|group| {
                    group
                        .into_iter()
                        .map(|item| reduce_matched(grammar, item, tree))
                        .collect()
                })
                .collect(),
        ),
    }
}
