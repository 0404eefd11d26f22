// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Story diagnostics.
//!
//! Turns raw lexer, parser and compiler failures into one of a closed set
//! of error codes with a human-actionable message. A [`StoryError`]
//! classifies its failure once, when it is created, and renders it on
//! demand:
//!
//! ```text
//! Error: syntax error in story at line 1, column 5
//!
//! 1|    foo bar
//!           ^
//!
//! E0003: An indented block is required to be before here
//! ```

pub mod classify;
pub mod codes;
pub mod config;
pub mod failure;
pub mod formatter;
pub mod intention;
pub mod json;
pub mod suggestions;

use std::fmt;
use std::path::{Path, PathBuf};

use story_ast::{CompileErrorKind, ErrorCode};

pub use classify::Classifier;
pub use codes::{ErrorCategory, ErrorCodeInfo, ErrorCodeRegistry};
pub use config::{ColorChoice, RenderConfig};
pub use failure::{Failure, Location};
pub use formatter::DiagnosticFormatter;
pub use intention::{Intention, LineIntention};

/// A classified failure, ready to render.
#[derive(Debug, Clone)]
pub struct StoryError {
    failure: Failure,
    source: String,
    path: Option<PathBuf>,
    config: RenderConfig,
    code: ErrorCode,
}

impl StoryError {
    /// Classifies `failure` against `source` with the default intentions.
    pub fn new(failure: impl Into<Failure>, source: impl Into<String>) -> Self {
        Self::with_intention(failure, source, Intention)
    }

    pub fn with_intention(
        failure: impl Into<Failure>,
        source: impl Into<String>,
        intention: impl LineIntention,
    ) -> Self {
        let failure = failure.into();
        let source = source.into();
        let code = Classifier::new(&source, intention).classify(&failure);
        Self {
            failure,
            source,
            path: None,
            config: RenderConfig::default(),
            code,
        }
    }

    /// A positionless error carrying only `message`.
    pub fn unnamed_error(message: impl Into<String>) -> Self {
        Self::new(Failure::Message(message.into()), "")
    }

    /// A failure of the compiler itself rather than of the story.
    pub fn internal_error(error: impl fmt::Display) -> Self {
        Self::unnamed_error(format!(
            "Internal error occurred: {}\nPlease report this as a bug.",
            error
        ))
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn failure(&self) -> &Failure {
        &self.failure
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn info(&self) -> ErrorCodeInfo {
        ErrorCodeInfo::of(self.code)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The story's display name: its path relative to the working
    /// directory when it lies inside it, else the path, else `story`.
    pub fn name(&self) -> String {
        let Some(path) = &self.path else {
            return "story".to_string();
        };
        if let Some(dir) = self.config.working_dir() {
            if let Ok(relative) = path.strip_prefix(&dir) {
                return relative.display().to_string();
            }
        }
        path.display().to_string()
    }

    /// The offending source line, empty when the failure has no location.
    pub fn line(&self) -> &str {
        match self.failure.location() {
            Some(location) => self.formatter_for("").line_text(location.line),
            None => "",
        }
    }

    /// The category-specific hint.
    pub fn hint(&self) -> String {
        let info = self.info();
        match (&self.code, &self.failure) {
            (ErrorCode::UnidentifiedError, failure) => failure.to_string(),
            (ErrorCode::InvalidCharacter, failure) => {
                let character = failure
                    .location()
                    .and_then(|location| classify::char_at(self.line(), location.column))
                    .map(String::from)
                    .unwrap_or_default();
                info.hint_with(&[("character", character.as_str())])
            }
            (ErrorCode::UnexpectedToken, Failure::UnexpectedToken { token, expected, .. }) => {
                let allowed = expected.join(", ");
                info.hint_with(&[("token", token.as_str()), ("allowed", allowed.as_str())])
            }
            (ErrorCode::FunctionAlreadyDeclared, Failure::Compiler(error)) => match &error.kind {
                CompileErrorKind::FunctionAlreadyDeclared {
                    name,
                    previous_line,
                } => {
                    let line = previous_line.to_string();
                    info.hint_with(&[("name", name.as_str()), ("line", line.as_str())])
                }
                _ => info.title.to_string(),
            },
            (ErrorCode::UnexpectedToken | ErrorCode::FunctionAlreadyDeclared, _) => {
                info.title.to_string()
            }
            _ => info.hint.to_string(),
        }
    }

    /// The full message, with the offending line highlighted when the
    /// failure has a location.
    pub fn message(&self) -> String {
        let Some(location) = self.failure.location() else {
            return self.failure.to_string();
        };
        let name = self.name();
        self.formatter_for(&name)
            .with_color(self.config.use_color())
            .format(&location, self.code.code(), &self.hint())
    }

    /// `code: hint` on one line.
    pub fn short_message(&self) -> String {
        format!("{}: {}", self.code.code(), self.hint())
    }

    /// Writes the full message to stderr.
    pub fn echo(&self) {
        eprintln!("{}", self.message());
    }

    fn formatter_for<'a>(&'a self, name: &'a str) -> DiagnosticFormatter<'a> {
        DiagnosticFormatter::new(&self.source, name)
    }
}

impl fmt::Display for StoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for StoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.failure)
    }
}
