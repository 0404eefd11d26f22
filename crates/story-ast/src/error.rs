// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Structured compiler errors raised by tree-walking passes.

use std::fmt;

use thiserror::Error;

use crate::position::Position;
use crate::tree::Tree;
use crate::LineId;

/// The closed set of diagnostic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorCode {
    UnidentifiedError,
    InvalidCharacter,
    BlockExpectedBefore,
    BlockExpectedAfter,
    UnnecessaryColon,
    FunctionMisspell,
    AssignmentIncomplete,
    UnexpectedToken,
    FunctionAlreadyDeclared,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::UnidentifiedError,
        ErrorCode::InvalidCharacter,
        ErrorCode::BlockExpectedBefore,
        ErrorCode::BlockExpectedAfter,
        ErrorCode::UnnecessaryColon,
        ErrorCode::FunctionMisspell,
        ErrorCode::AssignmentIncomplete,
        ErrorCode::UnexpectedToken,
        ErrorCode::FunctionAlreadyDeclared,
    ];

    /// The stable code shown to users.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnidentifiedError => "E0001",
            ErrorCode::InvalidCharacter => "E0002",
            ErrorCode::BlockExpectedBefore => "E0003",
            ErrorCode::BlockExpectedAfter => "E0004",
            ErrorCode::UnnecessaryColon => "E0005",
            ErrorCode::FunctionMisspell => "E0006",
            ErrorCode::AssignmentIncomplete => "E0007",
            ErrorCode::UnexpectedToken => "E0008",
            ErrorCode::FunctionAlreadyDeclared => "E0009",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ErrorCode::UnidentifiedError => "unidentified error",
            ErrorCode::InvalidCharacter => "invalid character",
            ErrorCode::BlockExpectedBefore => "block expected before",
            ErrorCode::BlockExpectedAfter => "block expected after",
            ErrorCode::UnnecessaryColon => "unnecessary colon",
            ErrorCode::FunctionMisspell => "function misspelt",
            ErrorCode::AssignmentIncomplete => "assignment incomplete",
            ErrorCode::UnexpectedToken => "unexpected token",
            ErrorCode::FunctionAlreadyDeclared => "function already declared",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// What went wrong in a compiler pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileErrorKind {
    #[error("{}", .0.title())]
    Code(ErrorCode),

    #[error("function `{name}` has already been declared at line {previous_line}")]
    FunctionAlreadyDeclared { name: String, previous_line: LineId },

    #[error("Unknown compiler error")]
    Unknown,
}

impl CompileErrorKind {
    /// The category this error is reported under.
    pub fn code(&self) -> ErrorCode {
        match self {
            CompileErrorKind::Code(code) => *code,
            CompileErrorKind::FunctionAlreadyDeclared { .. } => ErrorCode::FunctionAlreadyDeclared,
            CompileErrorKind::Unknown => ErrorCode::UnidentifiedError,
        }
    }
}

impl From<ErrorCode> for CompileErrorKind {
    fn from(code: ErrorCode) -> Self {
        CompileErrorKind::Code(code)
    }
}

/// An error raised by a compiler pass, positioned at the offending node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct CompilerError {
    pub kind: CompileErrorKind,
    /// Where the offending node starts, if it could be resolved.
    pub position: Option<Position>,
}

impl CompilerError {
    pub fn new(kind: impl Into<CompileErrorKind>) -> Self {
        Self {
            kind: kind.into(),
            position: None,
        }
    }

    pub fn function_already_declared(name: impl Into<String>, previous_line: LineId) -> Self {
        Self::new(CompileErrorKind::FunctionAlreadyDeclared {
            name: name.into(),
            previous_line,
        })
    }

    /// Positions the error at `tree`. A tree without a resolvable
    /// column leaves the error unpositioned.
    pub fn at(mut self, tree: &Tree) -> Self {
        self.position = tree.position().ok();
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }
}
