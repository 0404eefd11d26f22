// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! JSON diagnostic output for machine consumption.
//!
//! Editors and tooling get the same classification as the terminal
//! message, without having to scrape it.

use serde::Serialize;
use story_ast::ErrorCode;

use crate::StoryError;

/// A single classified error in JSON form.
#[derive(Debug, Serialize)]
pub struct JsonDiagnostic {
    /// Error code (e.g., "E0007").
    pub code: &'static str,
    /// Code name (e.g., "assignment_incomplete").
    pub kind: ErrorCode,
    pub title: &'static str,
    /// "Syntax", "Semantic" or "Unknown".
    pub category: String,
    pub hint: String,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
    /// The plain terminal message.
    pub message: String,
}

/// A source location (1-based).
#[derive(Debug, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_column: Option<usize>,
    /// The source line text for context.
    pub source_line: String,
}

impl From<&StoryError> for JsonDiagnostic {
    fn from(error: &StoryError) -> Self {
        let info = error.info();
        let location = error.failure().location().map(|location| SourceLocation {
            line: location.line,
            column: location.column,
            end_column: location.end_column,
            source_line: error.line().to_string(),
        });
        let plain = error.clone().with_config(crate::RenderConfig::plain());
        JsonDiagnostic {
            code: info.code,
            kind: info.kind,
            title: info.title,
            category: info.category.to_string(),
            hint: error.hint(),
            file: error.name(),
            location,
            message: plain.message(),
        }
    }
}

/// Serialize one error to pretty JSON.
pub fn to_json(error: &StoryError) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonDiagnostic::from(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Failure, Location};
    use serde_json::Value;

    #[test]
    fn located_error() {
        let failure = Failure::UnexpectedToken {
            location: Location::new(1, 4),
            token: "$END".to_string(),
            expected: vec!["NAME".to_string()],
        };
        let error = StoryError::new(failure, "a =\n").with_path("hello.story");
        let json: Value = serde_json::from_str(&to_json(&error).unwrap()).unwrap();

        assert_eq!(json["code"], "E0007");
        assert_eq!(json["kind"], "assignment_incomplete");
        assert_eq!(json["category"], "Syntax");
        assert_eq!(json["hint"], "Missing value after `=`");
        assert_eq!(json["location"]["line"], 1);
        assert_eq!(json["location"]["source_line"], "a =");
        assert!(json["location"].get("end_column").is_none());
        assert!(json["message"].as_str().unwrap().starts_with("Error: syntax error"));
    }

    #[test]
    fn unlocated_error() {
        let error = StoryError::unnamed_error("no stories found");
        let json: Value = serde_json::from_str(&to_json(&error).unwrap()).unwrap();

        assert_eq!(json["code"], "E0001");
        assert_eq!(json["kind"], "unidentified_error");
        assert_eq!(json["hint"], "no stories found");
        assert_eq!(json["file"], "story");
        assert!(json.get("location").is_none());
    }
}
