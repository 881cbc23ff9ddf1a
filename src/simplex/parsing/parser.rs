//! The parser driver
//!
//! [Parser] is the public entry point. Each parse runs a [Session] that owns the token stream
//! and the expansion stack, and acts as the [Resolver] the match states call back into for
//! nonterminal references.

use super::config::{ParserConfig, TrailingPolicy};
use super::error::ParseError;
use super::stream::TokenStream;
use super::trace::{NoTrace, ParseTrace};
use super::value::{reduce, ParseTree, Value};
use crate::simplex::grammar::{Grammar, GrammarError, RuleId, Terminal};
use crate::simplex::lexing::common::describe;
use crate::simplex::lexing::{Lexer, Lookahead, Token};
use crate::simplex::matching::{Expansion, ExpressionState, Feed, Node, Resolver};

/// Drives a grammar against the tokens of a lexer
pub struct Parser<'g, L: Lexer, V> {
    lexer: L,
    grammar: &'g Grammar<L::Kind, V>,
    config: ParserConfig,
}

impl<'g, L: Lexer, V> Parser<'g, L, V> {
    pub fn new(lexer: L, grammar: &'g Grammar<L::Kind, V>) -> Self {
        Parser {
            lexer,
            grammar,
            config: ParserConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn grammar(&self) -> &'g Grammar<L::Kind, V> {
        self.grammar
    }

    /// Parse `text` as the nonterminal `main`
    ///
    /// Returns the value of `main`: the result of its action, or the raw sequence of its
    /// matched values when it has none.
    pub fn parse(&mut self, text: &str, main: &str) -> Result<Value<L::Kind, V>, ParseError> {
        self.parse_with_trace(text, main, &mut NoTrace)
    }

    /// Like [Parser::parse], reporting every expansion to `trace`
    pub fn parse_with_trace(
        &mut self,
        text: &str,
        main: &str,
        trace: &mut dyn ParseTrace,
    ) -> Result<Value<L::Kind, V>, ParseError> {
        let session = Session {
            grammar: self.grammar,
            stream: TokenStream::new(&mut self.lexer, text, self.config.max_tokens),
            config: &self.config,
            trace,
            stack: Vec::new(),
            furthest: None,
        };
        session.run(main)
    }
}

/// The furthest token any terminal refused, and what was tried there
#[derive(Debug)]
struct Furthest {
    index: usize,
    position: usize,
    found: String,
    expected: Vec<String>,
    trail: Vec<String>,
}

struct Session<'g, 's, L: Lexer, V> {
    grammar: &'g Grammar<L::Kind, V>,
    stream: TokenStream<&'s mut L>,
    config: &'s ParserConfig,
    trace: &'s mut dyn ParseTrace,
    /// Nonterminals being expanded, outermost first
    stack: Vec<String>,
    furthest: Option<Furthest>,
}

impl<'g, 's, L: Lexer, V> Session<'g, 's, L, V> {
    fn run(mut self, main: &str) -> Result<Value<L::Kind, V>, ParseError> {
        let lookahead = self.stream.next()?;
        let node = match self.expand(main, lookahead)? {
            Expansion::Matched { node, remainder } => {
                if self.config.trailing == TrailingPolicy::Reject {
                    let next = match remainder {
                        Some(lookahead) => lookahead,
                        None => self.stream.next()?,
                    };
                    // A terminal that failed further in says more than the leftover token
                    let index = self.stream.index_of(&next);
                    if self.furthest.as_ref().map_or(false, |furthest| furthest.index > index) {
                        return Err(self.failure(main, &next));
                    }
                    if let Some(token) = next {
                        return Err(ParseError::TrailingInput {
                            position: token.position(),
                            found: describe(&Some(token)),
                        });
                    }
                }
                node
            }
            Expansion::Failed(lookahead) => return Err(self.failure(main, &lookahead)),
        };

        let mut tree = ParseTree::new();
        Ok(reduce(self.grammar, node, &mut tree))
    }

    fn failure(&mut self, main: &str, lookahead: &Lookahead<L::Kind>) -> ParseError {
        match self.furthest.take() {
            Some(furthest) => ParseError::Unexpected {
                nonterminal: furthest.trail.last().cloned().unwrap_or_else(|| main.to_string()),
                position: furthest.position,
                found: furthest.found,
                expected: furthest.expected,
                trail: furthest.trail,
            },
            // Only possible when no terminal was ever tried
            None => ParseError::Unexpected {
                nonterminal: main.to_string(),
                position: self.stream.offset_of(lookahead),
                found: describe(lookahead),
                expected: Vec::new(),
                trail: vec![main.to_string()],
            },
        }
    }

    /// Feed tokens to one alternative until it completes or fails
    ///
    /// The stream must be positioned at the first token of the alternative.
    fn run_alternative(&mut self, rule: RuleId) -> Result<Option<Expansion<L::Kind>>, ParseError> {
        let grammar = self.grammar;
        let mut state = ExpressionState::new(grammar.rule(rule).expression());
        loop {
            if state.is_complete() {
                return Ok(Some(Expansion::Matched {
                    node: Node {
                        rule,
                        children: state.into_matched(),
                    },
                    remainder: None,
                }));
            }

            let lookahead = self.stream.next()?;
            match state.feed(lookahead, self)? {
                Feed::Consumed => {}
                Feed::Rejected(back) if state.is_complete() => {
                    return Ok(Some(Expansion::Matched {
                        node: Node {
                            rule,
                            children: state.into_matched(),
                        },
                        remainder: Some(back),
                    }));
                }
                Feed::Rejected(_) => return Ok(None),
            }
        }
    }
}

impl<'g, 's, L: Lexer, V> Resolver<L::Kind> for Session<'g, 's, L, V> {
    fn expand(&mut self, name: &str, lookahead: Lookahead<L::Kind>) -> Result<Expansion<L::Kind>, ParseError> {
        let grammar = self.grammar;
        let alternatives = grammar.alternatives(name);
        if alternatives.is_empty() {
            return Err(GrammarError::NoAlternatives(name.to_string()).into());
        }
        if self.stack.len() >= self.config.max_depth {
            return Err(ParseError::RecursionLimit {
                nonterminal: name.to_string(),
                depth: self.config.max_depth,
                position: self.stream.offset_of(&lookahead),
            });
        }

        // Every alternative starts from the caller's lookahead
        self.stream.put_back(&lookahead);
        let start = self.stream.mark();
        let depth = self.stack.len();

        self.trace.enter(name, depth);
        self.stack.push(name.to_string());
        let mut expansion = None;
        for (index, &rule) in alternatives.iter().enumerate() {
            self.stream.rewind(start);
            self.trace.alternative(name, index, depth);
            expansion = self.run_alternative(rule)?;
            if expansion.is_some() {
                break;
            }
        }
        self.stack.pop();
        self.trace.exit(name, expansion.is_some(), depth);

        match expansion {
            // Matched empty: the caller's lookahead is still in the stream, hand it back
            Some(Expansion::Matched { node, remainder: None }) if self.stream.mark() == start => {
                let lookahead = self.stream.next()?;
                Ok(Expansion::Matched {
                    node,
                    remainder: Some(lookahead),
                })
            }
            Some(expansion) => Ok(expansion),
            None => {
                self.stream.rewind(start);
                let lookahead = self.stream.next()?;
                Ok(Expansion::Failed(lookahead))
            }
        }
    }

    fn accepted(&mut self, token: &Token<L::Kind>) {
        self.trace.accept(&token.text, token.position(), self.stack.len());
    }

    fn mismatched(&mut self, expected: &Terminal<L::Kind>, found: &Lookahead<L::Kind>) {
        let index = self.stream.index_of(found);
        let expected = expected.to_string();

        if let Some(furthest) = self.furthest.as_mut() {
            if furthest.index > index {
                return;
            }
            if furthest.index == index {
                if !furthest.expected.contains(&expected) {
                    furthest.expected.push(expected);
                }
                return;
            }
        }

        self.furthest = Some(Furthest {
            index,
            position: self.stream.offset_of(found),
            found: describe(found),
            expected: vec![expected],
            trail: self.stack.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplex::grammar::{exact, nt, t, Bounds, Expression, GrammarBuilder, Quantifier};
    use crate::simplex::parsing::TreeTrace;
    use crate::simplex::testing::factories::CharLexer;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn seq(symbols: Vec<crate::simplex::grammar::Symbol<char>>) -> Expression<char> {
        Expression::new(symbols)
    }

    /// EXPR := TERM '+' EXPR | TERM ; TERM := 'n'
    fn sums() -> Grammar<char, ()> {
        GrammarBuilder::new()
            .rule("EXPR", seq(vec![nt("TERM"), t('+'), nt("EXPR")]))
            .rule("EXPR", seq(vec![nt("TERM")]))
            .rule("TERM", seq(vec![t('n')]))
            .build()
            .unwrap()
    }

    fn count_terms(value: &Value<char, ()>) -> usize {
        match value {
            Value::Token(token) => usize::from(token.kind == 'n'),
            Value::Reduced(_) => 0,
            Value::Sequence(values) => values.iter().map(count_terms).sum(),
            Value::Repetition(groups) => groups.iter().flatten().map(count_terms).sum(),
        }
    }

    #[test]
    fn test_backtracks_to_later_alternative() {
        let grammar = sums();
        let mut parser = Parser::new(CharLexer::new(), &grammar);

        let value = parser.parse("n+n+n", "EXPR").unwrap();
        assert_eq!(count_terms(&value), 3);

        let value = parser.parse("n", "EXPR").unwrap();
        assert_eq!(count_terms(&value), 1);
    }

    #[test]
    fn test_first_matching_alternative_wins() {
        let grammar: Grammar<char, &'static str> = GrammarBuilder::new()
            .rule_with("A", seq(vec![t('a')]), |_, _| "first")
            .rule_with("A", seq(vec![t('a')]), |_, _| "second")
            .build()
            .unwrap();
        let mut parser = Parser::new(CharLexer::new(), &grammar);

        let value = parser.parse("a", "A").unwrap();
        assert_eq!(value, Value::Reduced("first"));
    }

    #[test]
    fn test_abandoned_alternatives_run_no_action() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let grammar: Grammar<char, ()> = GrammarBuilder::new()
            .rule("S", seq(vec![nt("P"), t('c')]))
            .rule("S", seq(vec![t('a'), t('b'), t('d')]))
            .rule_with("P", seq(vec![t('a'), t('b')]), move |_, _| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();
        let mut parser = Parser::new(CharLexer::new(), &grammar);

        parser.parse("abd", "S").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        parser.parse("abc", "S").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_reports_furthest_token() {
        let grammar = sums();
        let mut parser = Parser::new(CharLexer::new(), &grammar);

        let err = parser.parse("n+", "EXPR").unwrap_err();
        assert_eq!(
            err,
            ParseError::Unexpected {
                nonterminal: "TERM".to_string(),
                position: 2,
                found: "end of input".to_string(),
                expected: vec!["'n'".to_string()],
                trail: vec!["EXPR".to_string(), "EXPR".to_string(), "TERM".to_string()],
            }
        );
    }

    #[test]
    fn test_trailing_token_before_furthest_failure() {
        let grammar = sums();
        let mut parser = Parser::new(CharLexer::new(), &grammar);

        // EXPR matches the first `n` alone, but the failure at `x` is what went wrong
        match parser.parse("n+x", "EXPR").unwrap_err() {
            ParseError::Unexpected { position, found, .. } => {
                assert_eq!(position, 2);
                assert_eq!(found, "'x' \"x\"");
            }
            other => panic!("Expected Unexpected, got {:?}", other),
        }
    }

    #[test]
    fn test_expectations_at_same_token_are_merged() {
        let grammar: Grammar<char, ()> = GrammarBuilder::new()
            .rule("S", seq(vec![t('a'), t('b')]))
            .rule("S", seq(vec![t('a'), t('c')]))
            .build()
            .unwrap();
        let mut parser = Parser::new(CharLexer::new(), &grammar);

        match parser.parse("ad", "S").unwrap_err() {
            ParseError::Unexpected { position, expected, .. } => {
                assert_eq!(position, 1);
                assert_eq!(expected, vec!["'b'".to_string(), "'c'".to_string()]);
            }
            other => panic!("Expected Unexpected, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_input_policy() {
        let grammar = sums();

        let mut parser = Parser::new(CharLexer::new(), &grammar);
        let err = parser.parse("n n", "EXPR").unwrap_err();
        assert_eq!(
            err,
            ParseError::TrailingInput {
                position: 2,
                found: "'n' \"n\"".to_string()
            }
        );

        let config = ParserConfig {
            trailing: TrailingPolicy::Ignore,
            ..ParserConfig::default()
        };
        let mut parser = Parser::new(CharLexer::new(), &grammar).with_config(config);
        assert!(parser.parse("n n", "EXPR").is_ok());
    }

    #[test]
    fn test_unknown_main_nonterminal() {
        let grammar = sums();
        let mut parser = Parser::new(CharLexer::new(), &grammar);
        assert_eq!(
            parser.parse("n", "STMT").unwrap_err(),
            ParseError::Grammar(GrammarError::NoAlternatives("STMT".to_string()))
        );
    }

    #[test]
    fn test_recursion_limit() {
        // NEST := '(' NEST ')' | 'x'
        let grammar: Grammar<char, ()> = GrammarBuilder::new()
            .rule("NEST", seq(vec![t('('), nt("NEST"), t(')')]))
            .rule("NEST", seq(vec![t('x')]))
            .build()
            .unwrap();
        let config = ParserConfig {
            max_depth: 3,
            ..ParserConfig::default()
        };
        let mut parser = Parser::new(CharLexer::new(), &grammar).with_config(config);

        assert!(parser.parse("((x))", "NEST").is_ok());
        assert_eq!(
            parser.parse("(((x)))", "NEST").unwrap_err(),
            ParseError::RecursionLimit {
                nonterminal: "NEST".to_string(),
                depth: 3,
                position: 3,
            }
        );
    }

    #[test]
    fn test_token_limit() {
        let grammar = sums();
        let config = ParserConfig {
            max_tokens: Some(2),
            ..ParserConfig::default()
        };
        let mut parser = Parser::new(CharLexer::new(), &grammar).with_config(config);

        assert_eq!(
            parser.parse("n+n", "EXPR").unwrap_err(),
            ParseError::TokenLimit { limit: 2 }
        );
    }

    #[test]
    fn test_exact_terminals_and_optional_parts() {
        // DECL := 'w'="let" 'w' ('=' 'w')?
        let grammar: Grammar<char, ()> = GrammarBuilder::new()
            .rule(
                "DECL",
                seq(vec![
                    exact('w', "let"),
                    t('w'),
                    Quantifier::new(seq(vec![t('='), t('w')]), Bounds::optional()).into(),
                ]),
            )
            .build()
            .unwrap();
        let mut parser = Parser::new(CharLexer::words(), &grammar);

        assert!(parser.parse("let x", "DECL").is_ok());
        assert!(parser.parse("let x = y", "DECL").is_ok());
        assert!(parser.parse("var x", "DECL").is_err());
        assert!(parser.parse("let x =", "DECL").is_err());
    }

    #[test]
    fn test_empty_alternative_as_optional_part() {
        // S := OPT 'b' ; OPT := 'a' | <empty>
        let grammar: Grammar<char, ()> = GrammarBuilder::new()
            .rule("S", seq(vec![nt("OPT"), t('b')]))
            .rule("OPT", seq(vec![t('a')]))
            .rule("OPT", Expression::empty())
            .build()
            .unwrap();
        let mut parser = Parser::new(CharLexer::new(), &grammar);

        assert!(parser.parse("ab", "S").is_ok());
        let value = parser.parse("b", "S").unwrap();
        assert_eq!(count_terms(&value), 0);
        assert_eq!(
            value,
            Value::Sequence(vec![
                Value::Sequence(vec![]),
                Value::Token(crate::simplex::testing::mk_token('b', "b", 0)),
            ])
        );
        assert!(parser.parse("", "OPT").is_ok());
        assert!(parser.parse("a", "S").is_err());
    }

    #[test]
    fn test_empty_nonterminal_inside_nested_expression() {
        // S := ('x' E0 'y') ; E0 := <empty>
        let grammar: Grammar<char, ()> = GrammarBuilder::new()
            .rule("S", seq(vec![seq(vec![t('x'), nt("E0"), t('y')]).into()]))
            .rule("E0", Expression::empty())
            .build()
            .unwrap();
        let mut parser = Parser::new(CharLexer::new(), &grammar);

        assert!(parser.parse("xy", "S").is_ok());
        assert!(parser.parse("x", "S").is_err());
    }

    #[test]
    fn test_nullable_nonterminal_under_repetition_terminates() {
        // S := (E0)* 'b' ; E0 := <empty>
        let grammar: Grammar<char, ()> = GrammarBuilder::new()
            .rule(
                "S",
                seq(vec![Quantifier::new(seq(vec![nt("E0")]), Bounds::any()).into(), t('b')]),
            )
            .rule("E0", Expression::empty())
            .build()
            .unwrap();

        let (sender, receiver) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let mut parser = Parser::new(CharLexer::new(), &grammar);
            let _ = sender.send(parser.parse("b", "S"));
        });
        let result = receiver
            .recv_timeout(std::time::Duration::from_secs(5))
            .expect("parse to finish");

        let value = result.unwrap();
        let mut values = value.into_sequence().unwrap();
        assert_eq!(values.remove(0), Value::Repetition(vec![]));
    }

    #[test]
    fn test_optional_repeated_to_a_minimum() {
        // S := (a?){2} 'b'
        let grammar: Grammar<char, ()> = GrammarBuilder::new()
            .rule(
                "S",
                seq(vec![
                    Quantifier::new(
                        seq(vec![Quantifier::new(seq(vec![t('a')]), Bounds::optional()).into()]),
                        Bounds::exactly(2),
                    )
                    .into(),
                    t('b'),
                ]),
            )
            .build()
            .unwrap();
        let mut parser = Parser::new(CharLexer::new(), &grammar);

        for text in ["b", "ab", "aab"] {
            let value = parser.parse(text, "S").unwrap();
            let mut values = value.into_sequence().unwrap();
            let groups = values.remove(0).into_repetition().unwrap();
            assert_eq!(groups.len(), 2, "{:?}", text);
        }
        assert!(parser.parse("aaab", "S").is_err());
    }

    #[test]
    fn test_trace_shows_abandoned_alternatives() {
        let grammar = sums();
        let mut parser = Parser::new(CharLexer::new(), &grammar);
        let mut trace = TreeTrace::new(Vec::new());

        parser.parse_with_trace("n", "EXPR", &mut trace).unwrap();

        let output = String::from_utf8(trace.into_inner()).unwrap();
        insta::assert_snapshot!(output, @r###"
        EXPR
          #0
          TERM
            #0
            "n" at 0
          TERM ok
          #1
          TERM
            #0
            "n" at 0
          TERM ok
        EXPR ok
        "###);
    }
}
