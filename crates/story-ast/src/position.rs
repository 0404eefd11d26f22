// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Position resolution.
//!
//! A tree has no position of its own. It borrows the position of the
//! token found by always following the first child.

use thiserror::Error;

use crate::tree::{Child, Tree};
use crate::{LineId, Token};

/// Snapshot of a node's leftmost-token position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: LineId,
    pub column: u32,
    pub end_column: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("`{tag}` has no token on its leftmost spine")]
    NoToken { tag: String },
    #[error("the leftmost token of `{tag}` has no {field}")]
    Missing { tag: String, field: &'static str },
}

impl Tree {
    /// The token reached by descending through first children.
    pub fn first_token(&self) -> Result<&Token, PositionError> {
        let mut current = self;
        loop {
            match current.children.first() {
                Some(Child::Token(token)) => return Ok(token),
                Some(Child::Tree(tree)) => current = tree,
                None => {
                    return Err(PositionError::NoToken {
                        tag: self.data.clone(),
                    })
                }
            }
        }
    }

    pub fn first_token_mut(&mut self) -> Result<&mut Token, PositionError> {
        let tag = self.data.clone();
        let mut current = self;
        loop {
            match current.children.first_mut() {
                Some(Child::Token(token)) => return Ok(token),
                Some(Child::Tree(tree)) => current = tree,
                None => return Err(PositionError::NoToken { tag }),
            }
        }
    }

    pub fn line(&self) -> Result<&LineId, PositionError> {
        Ok(&self.first_token()?.line)
    }

    pub fn column(&self) -> Result<u32, PositionError> {
        self.first_token()?.column.ok_or_else(|| self.missing("column"))
    }

    pub fn end_column(&self) -> Result<u32, PositionError> {
        self.first_token()?
            .end_column
            .ok_or_else(|| self.missing("end column"))
    }

    /// Line, column and end column in one descent.
    ///
    /// The end column is optional; the column is not.
    pub fn position(&self) -> Result<Position, PositionError> {
        let token = self.first_token()?;
        let column = token.column.ok_or_else(|| self.missing("column"))?;
        Ok(Position {
            line: token.line.clone(),
            column,
            end_column: token.end_column,
        })
    }

    fn missing(&self, field: &'static str) -> PositionError {
        PositionError::Missing {
            tag: self.data.clone(),
            field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested() -> Tree {
        Tree::new(
            "outer",
            vec![
                Tree::new(
                    "inner",
                    vec![
                        Token::new("NAME", "a", 3, 5, 6).into(),
                        Token::new("NAME", "b", 4, 1, 2).into(),
                    ],
                )
                .into(),
                Token::new("NAME", "c", 9, 9, 10).into(),
            ],
        )
    }

    #[test]
    fn resolves_leftmost_token() {
        let tree = nested();
        assert_eq!(tree.line().unwrap().to_string(), "3");
        assert_eq!(tree.column().unwrap(), 5);
        assert_eq!(tree.end_column().unwrap(), 6);
    }

    #[test]
    fn empty_spine_fails() {
        let tree = Tree::new("outer", vec![Tree::new("inner", vec![]).into()]);
        assert_eq!(
            tree.line(),
            Err(PositionError::NoToken {
                tag: "outer".to_string()
            })
        );
        assert!(tree.position().is_err());
    }

    #[test]
    fn synthetic_token_has_line_only() {
        let line: LineId = "3.1".parse().unwrap();
        let tree = Tree::new("path", vec![Token::synthetic("NAME", "p-3.1", line.clone()).into()]);
        assert_eq!(tree.line().unwrap(), &line);
        assert!(matches!(
            tree.column(),
            Err(PositionError::Missing { field: "column", .. })
        ));
    }

    #[test]
    fn first_token_mut_relocates() {
        let mut tree = nested();
        tree.first_token_mut().unwrap().line = "3.2".parse().unwrap();
        assert_eq!(tree.line().unwrap().to_string(), "3.2");
    }
}
