// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Tokens as handed over by the lexer.

use std::fmt;

use crate::LineId;

/// A lexical atom: kind tag, literal value and 1-based position.
///
/// Lexer tokens carry all three position fields. Tokens the compiler
/// synthesizes only know their line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: String,
    pub value: String,
    pub line: LineId,
    pub column: Option<u32>,
    pub end_column: Option<u32>,
}

impl Token {
    /// A token read from source at `line`, spanning `column..end_column`.
    pub fn new(
        kind: impl Into<String>,
        value: impl Into<String>,
        line: u32,
        column: u32,
        end_column: u32,
    ) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            line: LineId::new(line),
            column: Some(column),
            end_column: Some(end_column),
        }
    }

    /// A compiler-created token that only knows its line.
    pub fn synthetic(kind: impl Into<String>, value: impl Into<String>, line: LineId) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            line,
            column: None,
            end_column: None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
