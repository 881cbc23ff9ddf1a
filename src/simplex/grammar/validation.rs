//! Build time grammar checks
//!
//! The checks run in order and stop at the first problem:
//!
//!     1. The grammar has at least one rule.
//!     2. Every referenced nonterminal has a rule.
//!     3. No quantifier repeats an empty expression (it could never make progress).
//!     4. No nonterminal is left recursive, directly or through nullable prefixes. The
//!        parser would otherwise recurse without consuming a token.

use super::error::GrammarError;
use super::rules::Grammar;
use super::symbol::{Expression, Symbol};
use std::collections::{HashMap, HashSet};

pub(crate) fn validate<K, V>(grammar: &Grammar<K, V>) -> Result<(), GrammarError> {
    if grammar.rules().next().is_none() {
        return Err(GrammarError::EmptyGrammar);
    }

    for (_, rule) in grammar.rules() {
        check_expression(grammar, rule.name(), rule.expression())?;
    }

    let nullable = nullable_nonterminals(grammar);
    if let Some(cycle) = find_left_recursion(grammar, &nullable) {
        return Err(GrammarError::LeftRecursion(cycle));
    }

    Ok(())
}

fn check_expression<K, V>(
    grammar: &Grammar<K, V>,
    rule_name: &str,
    expression: &Expression<K>,
) -> Result<(), GrammarError> {
    for symbol in expression.symbols() {
        match symbol {
            Symbol::Terminal(_) => {}
            Symbol::Nonterminal(name) => {
                if !grammar.contains(name) {
                    return Err(GrammarError::UndefinedNonterminal {
                        name: name.clone(),
                        referenced_by: rule_name.to_string(),
                    });
                }
            }
            Symbol::Expression(inner) => check_expression(grammar, rule_name, inner)?,
            Symbol::Quantifier(quantifier) => {
                if quantifier.expression().is_empty() {
                    return Err(GrammarError::EmptyRepetition {
                        nonterminal: rule_name.to_string(),
                    });
                }
                check_expression(grammar, rule_name, quantifier.expression())?;
            }
        }
    }
    Ok(())
}

/// Whether `symbol` can match without consuming a token
pub(crate) fn symbol_is_nullable<K>(symbol: &Symbol<K>, nullable: &HashSet<&str>) -> bool {
    match symbol {
        Symbol::Terminal(_) => false,
        Symbol::Nonterminal(name) => nullable.contains(name.as_str()),
        Symbol::Expression(inner) => expression_is_nullable(inner, nullable),
        Symbol::Quantifier(quantifier) => {
            quantifier.bounds().min() == 0 || expression_is_nullable(quantifier.expression(), nullable)
        }
    }
}

pub(crate) fn expression_is_nullable<K>(expression: &Expression<K>, nullable: &HashSet<&str>) -> bool {
    expression
        .symbols()
        .iter()
        .all(|symbol| symbol_is_nullable(symbol, nullable))
}

/// Fixed point over the rules: a nonterminal is nullable if any alternative is
pub(crate) fn nullable_nonterminals<K, V>(grammar: &Grammar<K, V>) -> HashSet<&str> {
    let mut nullable = HashSet::new();
    loop {
        let mut changed = false;
        for (_, rule) in grammar.rules() {
            if !nullable.contains(rule.name()) && expression_is_nullable(rule.expression(), &nullable) {
                nullable.insert(rule.name());
                changed = true;
            }
        }
        if !changed {
            return nullable;
        }
    }
}

/// Nonterminals that can be expanded before any token of `expression` is consumed
fn leading_nonterminals<'g, K>(
    expression: &'g Expression<K>,
    nullable: &HashSet<&str>,
    out: &mut Vec<&'g str>,
) {
    for symbol in expression.symbols() {
        match symbol {
            Symbol::Terminal(_) => return,
            Symbol::Nonterminal(name) => out.push(name),
            Symbol::Expression(inner) => leading_nonterminals(inner, nullable, out),
            Symbol::Quantifier(quantifier) => {
                leading_nonterminals(quantifier.expression(), nullable, out)
            }
        }
        if !symbol_is_nullable(symbol, nullable) {
            return;
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

fn find_left_recursion<'g, K, V>(
    grammar: &'g Grammar<K, V>,
    nullable: &HashSet<&str>,
) -> Option<Vec<String>> {
    let mut edges: HashMap<&'g str, Vec<&'g str>> = HashMap::new();
    for (_, rule) in grammar.rules() {
        let targets = edges.entry(rule.name()).or_default();
        leading_nonterminals(rule.expression(), nullable, targets);
    }

    let mut visits: HashMap<&'g str, Visit> = HashMap::new();
    let mut path = Vec::new();
    for name in grammar.nonterminals() {
        if let Some(cycle) = visit(name, &edges, &mut visits, &mut path) {
            return Some(cycle);
        }
    }
    None
}

fn visit<'g>(
    name: &'g str,
    edges: &HashMap<&'g str, Vec<&'g str>>,
    visits: &mut HashMap<&'g str, Visit>,
    path: &mut Vec<&'g str>,
) -> Option<Vec<String>> {
    match visits.get(name) {
        Some(Visit::Done) => return None,
        Some(Visit::InProgress) => {
            let start = path.iter().position(|n| *n == name).unwrap_or(0);
            let mut cycle: Vec<String> = path[start..].iter().map(|n| n.to_string()).collect();
            cycle.push(name.to_string());
            return Some(cycle);
        }
        None => {}
    }

    visits.insert(name, Visit::InProgress);
    path.push(name);
    for &next in edges.get(name).map(Vec::as_slice).unwrap_or_default() {
        if let Some(cycle) = visit(next, edges, visits, path) {
            return Some(cycle);
        }
    }
    path.pop();
    visits.insert(name, Visit::Done);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplex::grammar::bounds::Bounds;
    use crate::simplex::grammar::rules::GrammarBuilder;
    use crate::simplex::grammar::symbol::{nt, t, Quantifier};

    fn build(builder: GrammarBuilder<char, ()>) -> Result<Grammar<char, ()>, GrammarError> {
        builder.build()
    }

    #[test]
    fn test_empty_grammar() {
        assert_eq!(build(GrammarBuilder::new()).unwrap_err(), GrammarError::EmptyGrammar);
    }

    #[test]
    fn test_undefined_nonterminal_names_the_referencing_rule() {
        let result = build(
            GrammarBuilder::new()
                .rule("EXPR", Expression::new(vec![nt("TERM"), t('+'), nt("EXPR")]))
                .rule("EXPR", Expression::new(vec![nt("TERM")])),
        );

        assert_eq!(
            result.unwrap_err(),
            GrammarError::UndefinedNonterminal {
                name: "TERM".to_string(),
                referenced_by: "EXPR".to_string(),
            }
        );
    }

    #[test]
    fn test_undefined_nonterminal_inside_quantifier() {
        let result = build(GrammarBuilder::new().rule(
            "LIST",
            Expression::new(vec![Quantifier::new(
                Expression::new(vec![nt("ITEM")]),
                Bounds::any(),
            )
            .into()]),
        ));

        assert!(matches!(
            result,
            Err(GrammarError::UndefinedNonterminal { ref name, .. }) if name == "ITEM"
        ));
    }

    #[test]
    fn test_repetition_of_empty_expression() {
        let result = build(GrammarBuilder::new().rule(
            "A",
            Expression::new(vec![Quantifier::new(Expression::empty(), Bounds::any()).into()]),
        ));

        assert_eq!(
            result.unwrap_err(),
            GrammarError::EmptyRepetition {
                nonterminal: "A".to_string()
            }
        );
    }

    #[test]
    fn test_direct_left_recursion() {
        let result = build(
            GrammarBuilder::new()
                .rule("EXPR", Expression::new(vec![nt("EXPR"), t('+'), t('1')]))
                .rule("EXPR", Expression::new(vec![t('1')])),
        );

        assert_eq!(
            result.unwrap_err(),
            GrammarError::LeftRecursion(vec!["EXPR".to_string(), "EXPR".to_string()])
        );
    }

    #[test]
    fn test_left_recursion_through_nullable_prefix() {
        // A := B? A 'x' | 'y'   with B nullable, so A can reach itself without input
        let result = build(
            GrammarBuilder::new()
                .rule(
                    "A",
                    Expression::new(vec![
                        Quantifier::new(Expression::new(vec![nt("B")]), Bounds::optional()).into(),
                        nt("C"),
                    ]),
                )
                .rule("A", Expression::new(vec![t('y')]))
                .rule("B", Expression::new(vec![t('b')]))
                .rule("C", Expression::new(vec![nt("A"), t('x')])),
        );

        assert_eq!(
            result.unwrap_err(),
            GrammarError::LeftRecursion(vec!["A".to_string(), "C".to_string(), "A".to_string()])
        );
    }

    #[test]
    fn test_right_recursion_is_fine() {
        let result = build(
            GrammarBuilder::new()
                .rule("EXPR", Expression::new(vec![nt("TERM"), t('+'), nt("EXPR")]))
                .rule("EXPR", Expression::new(vec![nt("TERM")]))
                .rule("TERM", Expression::new(vec![t('1')]))
                .rule("TERM", Expression::new(vec![t('('), nt("EXPR"), t(')')])),
        );

        assert!(result.is_ok());
    }

    #[test]
    fn test_nullable_fixed_point() {
        let grammar = build(
            GrammarBuilder::new()
                .rule("A", Expression::new(vec![nt("B"), nt("C")]))
                .rule("B", Expression::empty())
                .rule(
                    "C",
                    Expression::new(vec![Quantifier::new(
                        Expression::new(vec![t('c')]),
                        Bounds::any(),
                    )
                    .into()]),
                )
                .rule("D", Expression::new(vec![nt("A"), t('d')])),
        )
        .unwrap();

        let nullable = nullable_nonterminals(&grammar);
        assert!(nullable.contains("A"));
        assert!(nullable.contains("B"));
        assert!(nullable.contains("C"));
        assert!(!nullable.contains("D"));
    }
}
