//! Rules, the rule table and its builder

use super::error::GrammarError;
use super::symbol::Expression;
use super::validation;
use crate::simplex::parsing::{ParseTree, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Semantic action run when a nonterminal has matched
///
/// It receives the values matched by the alternative, one per symbol of its expression, and
/// the chain of nonterminals from the main one down to the one being reduced. The returned
/// value replaces the nonterminal in its parent's values.
pub type Action<K, V> = Arc<dyn Fn(Vec<Value<K, V>>, &ParseTree) -> V + Send + Sync>;

/// Index of a rule in its grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleId(usize);

/// One alternative of a nonterminal
pub struct Rule<K, V> {
    name: String,
    expression: Expression<K>,
    action: Option<Action<K, V>>,
}

impl<K, V> Rule<K, V> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expression(&self) -> &Expression<K> {
        &self.expression
    }

    pub fn action(&self) -> Option<&Action<K, V>> {
        self.action.as_ref()
    }
}

impl<K, V> Clone for Rule<K, V>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Rule {
            name: self.name.clone(),
            expression: self.expression.clone(),
            action: self.action.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Rule<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("expression", &self.expression)
            .field("action", &self.action.as_ref().map(|_| "<action>"))
            .finish()
    }
}

/// Validated, immutable rule table
pub struct Grammar<K, V> {
    rules: Vec<Rule<K, V>>,
    /// Nonterminal names in order of first declaration
    order: Vec<String>,
    alternatives: HashMap<String, Vec<RuleId>>,
}

impl<K, V> Grammar<K, V> {
    /// Alternatives for `name`, in trial order. Empty for unknown names.
    pub fn alternatives(&self, name: &str) -> &[RuleId] {
        self.alternatives
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn rule(&self, id: RuleId) -> &Rule<K, V> {
        &self.rules[id.0]
    }

    pub fn rules(&self) -> impl Iterator<Item = (RuleId, &Rule<K, V>)> {
        self.rules.iter().enumerate().map(|(i, rule)| (RuleId(i), rule))
    }

    /// Nonterminal names in order of first declaration
    pub fn nonterminals(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.alternatives.contains_key(name)
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Grammar<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("rules", &self.rules)
            .finish()
    }
}

/// Collects rules and validates them into a [Grammar]
pub struct GrammarBuilder<K, V> {
    rules: Vec<Rule<K, V>>,
}

impl<K, V> GrammarBuilder<K, V> {
    pub fn new() -> Self {
        GrammarBuilder { rules: Vec::new() }
    }

    /// Add an alternative for `name` that reduces to its raw matched values
    pub fn rule(mut self, name: impl Into<String>, expression: Expression<K>) -> Self {
        self.rules.push(Rule {
            name: name.into(),
            expression,
            action: None,
        });
        self
    }

    /// Add an alternative for `name` whose values are folded by `action`
    pub fn rule_with<F>(mut self, name: impl Into<String>, expression: Expression<K>, action: F) -> Self
    where
        F: Fn(Vec<Value<K, V>>, &ParseTree) -> V + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            name: name.into(),
            expression,
            action: Some(Arc::new(action)),
        });
        self
    }

    pub fn build(self) -> Result<Grammar<K, V>, GrammarError> {
        let mut order = Vec::new();
        let mut alternatives: HashMap<String, Vec<RuleId>> = HashMap::new();
        for (i, rule) in self.rules.iter().enumerate() {
            if !alternatives.contains_key(&rule.name) {
                order.push(rule.name.clone());
            }
            alternatives
                .entry(rule.name.clone())
                .or_default()
                .push(RuleId(i));
        }

        let grammar = Grammar {
            rules: self.rules,
            order,
            alternatives,
        };
        validation::validate(&grammar)?;
        Ok(grammar)
    }
}

impl<K, V> Default for GrammarBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
