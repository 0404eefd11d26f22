// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Error code registry.
//!
//! Maps error codes (E0001, E0002, ...) to titles, hint templates and
//! categories. Used for error display and for looking codes up by name.

use std::collections::HashMap;

use story_ast::ErrorCode;

/// Registry of all known error codes.
pub struct ErrorCodeRegistry {
    codes: HashMap<&'static str, ErrorCodeInfo>,
}

/// Information about a single error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCodeInfo {
    pub kind: ErrorCode,
    pub code: &'static str,
    pub title: &'static str,
    /// Hint shown to the user. `{name}`-style placeholders are filled
    /// from the failure by [`ErrorCodeInfo::hint_with`].
    pub hint: &'static str,
    pub category: ErrorCategory,
}

/// Error category for grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Raised while lexing or parsing.
    Syntax,
    /// Raised by a compiler pass over a parsed tree.
    Semantic,
    /// Could not be classified.
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Syntax => write!(f, "Syntax"),
            ErrorCategory::Semantic => write!(f, "Semantic"),
            ErrorCategory::Unknown => write!(f, "Unknown"),
        }
    }
}

impl ErrorCodeInfo {
    pub fn of(kind: ErrorCode) -> Self {
        use ErrorCategory::*;

        let (hint, category) = match kind {
            ErrorCode::UnidentifiedError => ("", Unknown),
            ErrorCode::InvalidCharacter => ("`{character}` is not allowed here", Syntax),
            ErrorCode::BlockExpectedBefore => {
                ("An indented block is required to be before here", Syntax)
            }
            ErrorCode::BlockExpectedAfter => {
                ("An indented block is required to follow here", Syntax)
            }
            ErrorCode::UnnecessaryColon => {
                ("There is an unnecessary colon at the end of the line", Syntax)
            }
            ErrorCode::FunctionMisspell => ("You have misspelt `function`", Syntax),
            ErrorCode::AssignmentIncomplete => ("Missing value after `=`", Syntax),
            ErrorCode::UnexpectedToken => {
                ("`{token}` is not allowed here. Allowed: {allowed}", Syntax)
            }
            ErrorCode::FunctionAlreadyDeclared => (
                "Function `{name}` has already been declared at line {line}",
                Semantic,
            ),
        };

        Self {
            kind,
            code: kind.code(),
            title: kind.title(),
            hint,
            category,
        }
    }

    /// The hint with each `{key}` replaced by its value.
    ///
    /// The template is scanned once, so braces inside a value are copied
    /// as-is. Placeholders without a value are left in place.
    pub fn hint_with(&self, values: &[(&str, &str)]) -> String {
        let mut hint = String::with_capacity(self.hint.len());
        let mut rest = self.hint;
        while let Some(open) = rest.find('{') {
            hint.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let value = after.find('}').and_then(|close| {
                let key = &after[..close];
                values
                    .iter()
                    .find(|(name, _)| *name == key)
                    .map(|(_, value)| (*value, close))
            });
            match value {
                Some((value, close)) => {
                    hint.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    hint.push('{');
                    rest = after;
                }
            }
        }
        hint.push_str(rest);
        hint
    }
}

impl Default for ErrorCodeRegistry {
    fn default() -> Self {
        Self {
            codes: ErrorCode::ALL
                .iter()
                .map(|kind| (kind.code(), ErrorCodeInfo::of(*kind)))
                .collect(),
        }
    }
}

impl ErrorCodeRegistry {
    pub fn get(&self, code: &str) -> Option<&ErrorCodeInfo> {
        self.codes.get(code)
    }

    /// Whether `code` names a known error.
    pub fn is_error(&self, code: &str) -> bool {
        self.codes.contains_key(code)
    }

    pub fn all(&self) -> impl Iterator<Item = &ErrorCodeInfo> {
        self.codes.values()
    }
}
