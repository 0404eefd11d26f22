// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Line identifiers.
//!
//! A line identifier is the source line a node came from, optionally
//! followed by synthesis components: `12` is a real line, `12.1` and
//! `12.2` are lines the compiler created while rewriting line 12.
//! Components compare numerically, so `12.2` sorts before `12.10`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A dotted line identifier such as `12` or `12.1.3`.
///
/// Never empty, and every component is at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct LineId {
    parts: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineIdError {
    #[error("empty line identifier")]
    Empty,
    #[error("invalid line identifier component `{0}`")]
    InvalidComponent(String),
}

impl LineId {
    /// A real source line. Line 0 does not exist; it is clamped to 1.
    pub fn new(line: u32) -> Self {
        Self {
            parts: vec![line.max(1)],
        }
    }

    pub fn from_parts(parts: Vec<u32>) -> Result<Self, LineIdError> {
        if parts.is_empty() {
            return Err(LineIdError::Empty);
        }
        if let Some(zero) = parts.iter().find(|p| **p == 0) {
            return Err(LineIdError::InvalidComponent(zero.to_string()));
        }
        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[u32] {
        &self.parts
    }

    /// The original source line this identifier derives from.
    pub fn source_line(&self) -> u32 {
        self.parts[0]
    }

    /// Whether the compiler created this line.
    pub fn is_synthetic(&self) -> bool {
        self.parts.len() > 1
    }

    /// The identifier without its last component. A real line is its own parent.
    pub fn parent(&self) -> LineId {
        if self.parts.len() == 1 {
            return self.clone();
        }
        Self {
            parts: self.parts[..self.parts.len() - 1].to_vec(),
        }
    }

    /// Extends this identifier with one more synthesis component.
    pub fn child(&self, n: u32) -> LineId {
        let mut parts = self.parts.clone();
        parts.push(n.max(1));
        Self { parts }
    }
}

impl Ord for LineId {
    fn cmp(&self, other: &Self) -> Ordering {
        // Slice ordering is lexicographic over numeric components,
        // with a prefix ordered before its extensions.
        self.parts.cmp(&other.parts)
    }
}

impl PartialOrd for LineId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

impl FromStr for LineId {
    type Err = LineIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(LineIdError::Empty);
        }
        let parts = s
            .split('.')
            .map(|part| match part.parse::<u32>() {
                Ok(n) if n > 0 && part.bytes().all(|b| b.is_ascii_digit()) => Ok(n),
                _ => Err(LineIdError::InvalidComponent(part.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { parts })
    }
}

impl From<u32> for LineId {
    fn from(line: u32) -> Self {
        LineId::new(line)
    }
}

impl From<LineId> for String {
    fn from(line: LineId) -> Self {
        line.to_string()
    }
}

impl TryFrom<String> for LineId {
    type Error = LineIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> LineId {
        s.parse().unwrap()
    }

    #[test]
    fn display_round_trips_dotted_form() {
        assert_eq!(id("12").to_string(), "12");
        assert_eq!(id("12.1.3").to_string(), "12.1.3");
    }

    #[test]
    fn rejects_malformed_identifiers() {
        assert_eq!("".parse::<LineId>(), Err(LineIdError::Empty));
        assert!("12.".parse::<LineId>().is_err());
        assert!(".1".parse::<LineId>().is_err());
        assert!("12.0".parse::<LineId>().is_err());
        assert!("12.a".parse::<LineId>().is_err());
        assert!("+3".parse::<LineId>().is_err());
    }

    #[test]
    fn orders_components_numerically() {
        assert!(id("12.2") < id("12.10"));
        assert!(id("12") < id("12.1"));
        assert!(id("12.9") < id("13"));
        assert!(id("2") < id("10"));
    }

    #[test]
    fn parent_and_child() {
        assert_eq!(id("12.1.3").parent(), id("12.1"));
        assert_eq!(id("12").parent(), id("12"));
        assert_eq!(id("12").child(4), id("12.4"));
        assert_eq!(id("12.4").source_line(), 12);
        assert!(id("12.4").is_synthetic());
        assert!(!id("12").is_synthetic());
    }
}
