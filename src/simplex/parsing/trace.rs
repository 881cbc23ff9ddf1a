//! Parse tracing
//!
//! A [ParseTrace] sink sees every expansion the driver attempts, including alternatives that
//! end up abandoned. [TreeTrace] writes them as an indented outline:
//!
//!     EXPR
//!       #0
//!       TERM
//!         #0
//!         "1" at 0
//!       TERM ok
//!       ...
//!     EXPR ok
//!
//! Depth is the number of enclosing nonterminals. Tokens are shown one level below the
//! nonterminal whose alternative accepted them.

use std::io::Write;

pub trait ParseTrace {
    /// Expansion of `nonterminal` starts
    fn enter(&mut self, _nonterminal: &str, _depth: usize) {}

    /// Alternative `index` of `nonterminal` is tried
    fn alternative(&mut self, _nonterminal: &str, _index: usize, _depth: usize) {}

    /// A terminal accepted a token
    fn accept(&mut self, _text: &str, _position: usize, _depth: usize) {}

    /// Expansion of `nonterminal` ended
    fn exit(&mut self, _nonterminal: &str, _matched: bool, _depth: usize) {}
}

/// Trace sink that records nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl ParseTrace for NoTrace {}

impl<T: ParseTrace + ?Sized> ParseTrace for &mut T {
    fn enter(&mut self, nonterminal: &str, depth: usize) {
        (**self).enter(nonterminal, depth)
    }

    fn alternative(&mut self, nonterminal: &str, index: usize, depth: usize) {
        (**self).alternative(nonterminal, index, depth)
    }

    fn accept(&mut self, text: &str, position: usize, depth: usize) {
        (**self).accept(text, position, depth)
    }

    fn exit(&mut self, nonterminal: &str, matched: bool, depth: usize) {
        (**self).exit(nonterminal, matched, depth)
    }
}

/// Writes the trace as an indented outline
pub struct TreeTrace<W: Write> {
    out: W,
}

impl<W: Write> TreeTrace<W> {
    pub fn new(out: W) -> Self {
        TreeTrace { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, depth: usize, text: std::fmt::Arguments<'_>) {
        // Tracing must never make a parse fail
        let _ = writeln!(self.out, "{:width$}{}", "", text, width = depth * 2);
    }
}

impl<W: Write> ParseTrace for TreeTrace<W> {
    fn enter(&mut self, nonterminal: &str, depth: usize) {
        self.line(depth, format_args!("{}", nonterminal));
    }

    fn alternative(&mut self, _nonterminal: &str, index: usize, depth: usize) {
        self.line(depth + 1, format_args!("#{}", index));
    }

    fn accept(&mut self, text: &str, position: usize, depth: usize) {
        self.line(depth, format_args!("{:?} at {}", text, position));
    }

    fn exit(&mut self, nonterminal: &str, matched: bool, depth: usize) {
        let outcome = if matched { "ok" } else { "failed" };
        self.line(depth, format_args!("{} {}", nonterminal, outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_trace_indents_by_depth() {
        let mut trace = TreeTrace::new(Vec::new());
        trace.enter("EXPR", 0);
        trace.alternative("EXPR", 0, 0);
        trace.enter("TERM", 1);
        trace.accept("1", 0, 2);
        trace.exit("TERM", true, 1);
        trace.exit("EXPR", false, 0);

        let output = String::from_utf8(trace.into_inner()).unwrap();
        insta::assert_snapshot!(output, @r###"
        EXPR
          #0
          TERM
            "1" at 0
          TERM ok
        EXPR failed
        "###);
    }
}
