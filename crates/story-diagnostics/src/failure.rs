// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Raw failures handed to the classifier.
//!
//! The lexer and parser report failures in a handful of shapes. Each
//! variant carries only the fields that shape guarantees.

use story_ast::CompilerError;
use thiserror::Error;

/// A 1-based source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub end_column: Option<usize>,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            end_column: None,
        }
    }

    pub fn with_end_column(mut self, end_column: usize) -> Self {
        self.end_column = Some(end_column);
        self
    }

    /// Width of the highlighted span, at least one character.
    pub fn width(&self) -> usize {
        self.end_column
            .map(|end| end.saturating_sub(self.column))
            .unwrap_or(1)
            .max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// The parser saw a token it did not expect.
    #[error("unexpected token `{token}` at line {}, column {}", .location.line, .location.column)]
    UnexpectedToken {
        location: Location,
        token: String,
        expected: Vec<String>,
    },

    /// The lexer could not tokenize the input at this point.
    ///
    /// `allowed` is `None` when the lexer had no constraint on what
    /// could follow.
    #[error("unexpected character at line {}, column {}", .location.line, .location.column)]
    UnexpectedCharacters {
        location: Location,
        allowed: Option<Vec<String>>,
    },

    /// Raised by a compiler pass.
    #[error(transparent)]
    Compiler(#[from] CompilerError),

    /// Anything else, with its own message and no position.
    #[error("{0}")]
    Message(String),
}

impl Failure {
    /// Where the failure happened, if known.
    ///
    /// Compiler errors report the source line their node derives from,
    /// even when the node sits on a synthetic line.
    pub fn location(&self) -> Option<Location> {
        match self {
            Failure::UnexpectedToken { location, .. }
            | Failure::UnexpectedCharacters { location, .. } => Some(*location),
            Failure::Compiler(error) => error.position.as_ref().map(|position| Location {
                line: position.line.source_line() as usize,
                column: position.column as usize,
                end_column: position.end_column.map(|end| end as usize),
            }),
            Failure::Message(_) => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Failure::UnexpectedToken { .. } => "unexpected_token",
            Failure::UnexpectedCharacters { .. } => "unexpected_characters",
            Failure::Compiler(_) => "compiler",
            Failure::Message(_) => "message",
        }
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Failure::Message(message)
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Failure::Message(message.to_string())
    }
}
