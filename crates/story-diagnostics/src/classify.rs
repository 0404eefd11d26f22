// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Mapping raw failures onto error codes.
//!
//! Every failure gets exactly one code. Compiler errors already know
//! theirs; lexer and parser failures are classified by looking at the
//! offending source line.

use story_ast::{ErrorCode, LineMap};

use crate::failure::{Failure, Location};
use crate::intention::LineIntention;

/// Classifies failures against one source text.
pub struct Classifier<'a, I> {
    source: &'a str,
    line_map: LineMap,
    intention: I,
}

impl<'a, I: LineIntention> Classifier<'a, I> {
    pub fn new(source: &'a str, intention: I) -> Self {
        Self {
            source,
            line_map: LineMap::new(source),
            intention,
        }
    }

    pub fn classify(&self, failure: &Failure) -> ErrorCode {
        let code = match failure {
            Failure::Compiler(error) => error.code(),
            Failure::UnexpectedToken {
                location, expected, ..
            } => self.unexpected_token(location, expected),
            Failure::UnexpectedCharacters { location, allowed } => {
                self.unexpected_characters(location, allowed.as_deref())
            }
            Failure::Message(_) => ErrorCode::UnidentifiedError,
        };
        tracing::debug!(
            code = %code,
            kind = failure.kind_name(),
            line = ?failure.location().map(|l| l.line),
            "classified failure"
        );
        code
    }

    /// The source line a location points at, or `""` past the end.
    pub fn line_text(&self, location: &Location) -> &'a str {
        self.line_map
            .line_text(self.source, location.line)
            .unwrap_or("")
    }

    fn unexpected_token(&self, location: &Location, expected: &[String]) -> ErrorCode {
        let line = self.line_text(location);
        tracing::trace!(line, "checking unexpected token intention");
        if self.intention.assignment(line) {
            ErrorCode::AssignmentIncomplete
        } else if self.intention.unnecessary_colon(line) {
            ErrorCode::UnnecessaryColon
        } else if expects_only_indent(expected) {
            ErrorCode::BlockExpectedAfter
        } else {
            ErrorCode::UnexpectedToken
        }
    }

    fn unexpected_characters(&self, location: &Location, allowed: Option<&[String]>) -> ErrorCode {
        let line = self.line_text(location);
        tracing::trace!(line, "checking unexpected character intention");
        if self.intention.is_function(line) {
            ErrorCode::FunctionMisspell
        } else if self.intention.unnecessary_colon(line) {
            ErrorCode::UnnecessaryColon
        } else if allowed.is_none() && char_at(line, location.column).is_some_and(is_name_start) {
            ErrorCode::BlockExpectedBefore
        } else {
            ErrorCode::InvalidCharacter
        }
    }
}

/// The character at a 1-based column.
pub fn char_at(line: &str, column: usize) -> Option<char> {
    line.chars().nth(column.checked_sub(1)?)
}

fn is_name_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

/// The indenter names its token `_INDENT`; some grammars drop the underscore.
fn expects_only_indent(expected: &[String]) -> bool {
    matches!(expected, [only] if only.trim_start_matches('_') == "INDENT")
}
