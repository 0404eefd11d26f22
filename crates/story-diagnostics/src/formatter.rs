// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Terminal formatter for story errors.
//!
//! ```text
//! Error: syntax error in story at line 2, column 3
//!
//! 2|    a =
//!         ^
//!
//! E0007: Missing value after `=`
//! ```

use colored::Colorize;

use story_ast::LineMap;

use crate::failure::Location;

/// Separator between the line number and the source text.
const GUTTER: &str = "|    ";

/// Formats one located failure for terminal output.
pub struct DiagnosticFormatter<'a> {
    source: &'a str,
    name: &'a str,
    line_map: LineMap,
    color: bool,
}

impl<'a> DiagnosticFormatter<'a> {
    pub fn new(source: &'a str, name: &'a str) -> Self {
        Self {
            source,
            name,
            line_map: LineMap::new(source),
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Header, highlighted source line, then `code: hint`.
    pub fn format(&self, location: &Location, code: &str, hint: &str) -> String {
        format!(
            "{}\n\n{}\n\n{}: {}",
            self.header(location),
            self.highlight(location),
            code,
            hint
        )
    }

    pub fn header(&self, location: &Location) -> String {
        let name = if self.color {
            self.name.bold().to_string()
        } else {
            self.name.to_string()
        };
        format!(
            "Error: syntax error in {} at line {}, column {}",
            name, location.line, location.column
        )
    }

    /// The offending line behind its number, with markers under the
    /// failing span.
    pub fn highlight(&self, location: &Location) -> String {
        let number = location.line.to_string();
        let indent = number.len() + GUTTER.len() + location.column.saturating_sub(1);
        format!(
            "{}{}{}\n{}{}",
            number,
            GUTTER,
            self.line_text(location.line),
            " ".repeat(indent),
            self.symbols(location)
        )
    }

    pub fn symbols(&self, location: &Location) -> String {
        let symbols = "^".repeat(location.width());
        if self.color {
            symbols.red().to_string()
        } else {
            symbols
        }
    }

    /// Source text of a 1-based line, empty past the end.
    pub fn line_text(&self, line: usize) -> &'a str {
        self.line_map.line_text(self.source, line).unwrap_or("")
    }
}
