// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Synthetic statement injection.
//!
//! Desugaring passes sometimes need to hoist a sub-expression into a
//! statement of its own:
//!
//! ```text
//! a = foo(bar(1))      →     p-3.1 = bar(1)
//!                            a = foo(p-3.1)
//! ```
//!
//! The hoisted statement has no source line, so it gets a synthetic one
//! derived from the block it lands in (`3.1`, `3.2`, ...). Synthetic lines
//! sort after the line they derive from and before the next real line.
//!
//! Hoisting is a two-step contract. The caller detaches the value from
//! its original site (see [`Tree::replace`]), hands it to
//! [`Synthesizer::inject_assignment`] by value, then installs
//! [`reference_to`] the returned assignment where the value used to be.

use std::collections::BTreeSet;

use story_ast::{Child, LineId, PositionError, Token, Tree};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesugarError {
    #[error("a block holds at least a statement, found {children} children")]
    MalformedBlock { children: usize },

    #[error(transparent)]
    Position(#[from] PositionError),
}

/// Creates trees that are not in the original source, bound to one block.
///
/// A block is a statement, optionally followed by the nested block it
/// introduces, plus any assignments earlier passes injected.
pub struct Synthesizer<'b> {
    block: &'b mut Tree,
    original_line: LineId,
    new_lines: BTreeSet<LineId>,
    next_suffix: u32,
}

impl<'b> Synthesizer<'b> {
    /// Binds to `block`, which must not be empty.
    ///
    /// A block that already holds injected assignments is accepted; new
    /// lines continue after the highest one found there, so a later pass
    /// never mints a line an earlier injector already used.
    pub fn new(block: &'b mut Tree) -> Result<Self, DesugarError> {
        if block.children.is_empty() {
            return Err(DesugarError::MalformedBlock { children: 0 });
        }
        let original_line = block.line()?.clone();
        let base = original_line.parent();
        let taken = block
            .extract("assignment")
            .into_iter()
            .filter_map(|assignment| assignment.line().ok())
            .filter(|line| line.is_synthetic() && line.parent() == base)
            .filter_map(|line| line.parts().last().copied())
            .max()
            .unwrap_or(0);
        Ok(Self {
            block,
            original_line,
            new_lines: BTreeSet::new(),
            next_suffix: taken + 1,
        })
    }

    pub fn block(&self) -> &Tree {
        self.block
    }

    /// Mints the next synthetic line.
    ///
    /// A block already on a synthetic line `12.1` mints siblings of it
    /// (`12.1`, `12.2`, ...), not children. Suffixes start at 1, or after
    /// the last one an earlier injector left in the block.
    pub fn fresh_line(&mut self) -> LineId {
        let line = self.original_line.parent().child(self.next_suffix);
        self.next_suffix += 1;
        tracing::debug!(block = %self.original_line, line = %line, "minted synthetic line");
        self.new_lines.insert(line.clone());
        line
    }

    /// Reuses `tree`'s line if this synthesizer minted it, otherwise mints one.
    pub fn line_for(&mut self, tree: &Tree) -> Result<LineId, DesugarError> {
        let line = tree.line()?;
        if self.new_lines.contains(line) {
            return Ok(line.clone());
        }
        Ok(self.fresh_line())
    }

    /// A `path` holding a single name token.
    ///
    /// Without a name, the path is named after its line (`p-12.1`),
    /// which cannot collide with another synthetic line's name.
    pub fn make_path(&mut self, name: Option<&str>, line: Option<LineId>) -> Tree {
        let line = line.unwrap_or_else(|| self.fresh_line());
        let name = match name {
            Some(name) => name.to_string(),
            None => format!("p-{}", line),
        };
        Tree::new("path", vec![Token::synthetic("NAME", name, line).into()])
    }

    /// Builds `p-<line> = value` on a synthetic line.
    ///
    /// The value's leftmost token moves to the new line. The value is
    /// not removed from anywhere: the caller detached it already.
    pub fn make_assignment(&mut self, mut value: Tree) -> Result<Tree, DesugarError> {
        let line = self.line_for(&value)?;
        value.first_token_mut()?.line = line.clone();
        let path = self.make_path(None, Some(line.clone()));
        let equals = Token::synthetic("EQUALS", "=", line);
        let fragment = Tree::new("assignment_fragment", vec![equals.into(), value.into()]);
        Ok(Tree::new("assignment", vec![path.into(), fragment.into()]))
    }

    /// Builds an assignment and adds it to the block.
    ///
    /// A value the statement needs goes before the statement. When the
    /// statement introduces a nested block, the value goes after the
    /// statement and before the nested block. Repeated injections keep
    /// their order.
    pub fn inject_assignment(&mut self, value: Tree) -> Result<&Tree, DesugarError> {
        let assignment = self.make_assignment(value)?;
        // The last child is the statement itself, or the nested block.
        let index = self.block.children.len() - 1;
        self.block.children.insert(index, assignment.into());
        let Child::Tree(inserted) = &self.block.children[index] else {
            unreachable!("an assignment tree was inserted at {index}");
        };
        Ok(inserted)
    }
}

/// A fresh copy of an assignment's target path, to install where the
/// hoisted value used to be.
pub fn reference_to(assignment: &Tree) -> Option<Tree> {
    assignment.walk("path").cloned()
}
