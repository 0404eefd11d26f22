// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Guessing what the author meant from a single source line.
//!
//! These checks look at text only. They never see tokens or trees, so
//! they still work on lines the lexer could not tokenize.

use crate::suggestions::is_misspelling;

/// Line-shape predicates the classifier consults.
pub trait LineIntention {
    /// `x =` with nothing after the `=`.
    fn assignment(&self, line: &str) -> bool;

    /// A statement ending in a colon that does not open anything.
    fn unnecessary_colon(&self, line: &str) -> bool;

    /// A function declaration whose keyword did not lex as one.
    fn is_function(&self, line: &str) -> bool;
}

impl<T: LineIntention + ?Sized> LineIntention for &T {
    fn assignment(&self, line: &str) -> bool {
        (**self).assignment(line)
    }

    fn unnecessary_colon(&self, line: &str) -> bool {
        (**self).unnecessary_colon(line)
    }

    fn is_function(&self, line: &str) -> bool {
        (**self).is_function(line)
    }
}

/// The default heuristics.
#[derive(Debug, Clone, Copy, Default)]
pub struct Intention;

impl LineIntention for Intention {
    fn assignment(&self, line: &str) -> bool {
        let line = line.trim_end();
        let Some(before) = line.strip_suffix('=') else {
            return false;
        };
        // `==`, `!=`, `<=` and `>=` are comparisons, not assignments.
        if before.ends_with(['=', '!', '<', '>']) {
            return false;
        }
        !before.trim().is_empty()
    }

    fn unnecessary_colon(&self, line: &str) -> bool {
        line.trim_end().ends_with(':')
    }

    fn is_function(&self, line: &str) -> bool {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return false;
        };
        if first == "function" {
            return false;
        }
        is_misspelling(first, "function") || words.any(|word| word == "returns")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a =", true)]
    #[case("  a.b =   ", true)]
    #[case("a = 1", false)]
    #[case("a ==", false)]
    #[case("a !=", false)]
    #[case("a >=", false)]
    #[case("=", false)]
    #[case("", false)]
    fn assignment(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(Intention.assignment(line), expected);
    }

    #[rstest]
    #[case("if a:", true)]
    #[case("x = 1:  ", true)]
    #[case("x = {a: 1}", false)]
    #[case("", false)]
    fn unnecessary_colon(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(Intention.unnecessary_colon(line), expected);
    }

    #[rstest]
    #[case("funtion foo", true)]
    #[case("fucntion foo a:int returns int", true)]
    #[case("foo bar returns int", true)]
    #[case("function foo returns int", false)]
    #[case("foo bar", false)]
    #[case("   ", false)]
    fn is_function(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(Intention.is_function(line), expected);
    }
}
