// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The syntax tree every compiler pass works on.
//!
//! A node is a grammar tag plus an ordered list of children, each a
//! token or another node. Nodes own their children; there is no sharing.

use std::fmt;

use crate::error::{CompileErrorKind, CompilerError};
use crate::Token;

/// Tags of the precedence ladder an operator-free expression descends
/// through, outermost first.
pub const UNARY_LEAF_CHAIN: [&str; 10] = [
    "expression",
    "or_expression",
    "and_expression",
    "cmp_expression",
    "arith_expression",
    "mul_expression",
    "unary_expression",
    "pow_expression",
    "primary_expression",
    "entity",
];

/// A child of a tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Child {
    Token(Token),
    Tree(Tree),
}

impl Child {
    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Child::Tree(tree) => Some(tree),
            Child::Token(_) => None,
        }
    }

    pub fn as_tree_mut(&mut self) -> Option<&mut Tree> {
        match self {
            Child::Tree(tree) => Some(tree),
            Child::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Child::Token(token) => Some(token),
            Child::Tree(_) => None,
        }
    }
}

impl From<Token> for Child {
    fn from(token: Token) -> Self {
        Child::Token(token)
    }
}

impl From<Tree> for Child {
    fn from(tree: Tree) -> Self {
        Child::Tree(tree)
    }
}

/// A syntax tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree {
    /// The grammar construct, e.g. `assignment` or `path`.
    pub data: String,
    pub children: Vec<Child>,
}

impl Tree {
    pub fn new(data: impl Into<String>, children: Vec<Child>) -> Self {
        Self {
            data: data.into(),
            children,
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn child(&self, index: usize) -> Option<&Child> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Child> {
        self.children.get_mut(index)
    }

    /// Direct children that are trees.
    pub fn subtrees(&self) -> impl Iterator<Item = &Tree> {
        self.children.iter().filter_map(Child::as_tree)
    }

    /// Direct children tagged `data`. Tokens never match.
    pub fn extract(&self, data: &str) -> Vec<&Tree> {
        self.subtrees().filter(|tree| tree.data == data).collect()
    }

    /// All descendants tagged `data`, depth-first in pre-order.
    ///
    /// The node itself is not included. The iterator is lazy; call again
    /// to restart.
    pub fn find<'a>(&'a self, data: &'a str) -> Descendants<'a> {
        let mut stack: Vec<&Tree> = self.subtrees().collect();
        stack.reverse();
        Descendants { stack, data }
    }

    /// The first direct subtree tagged `data`.
    pub fn walk(&self, data: &str) -> Option<&Tree> {
        self.subtrees().find(|tree| tree.data == data)
    }

    pub fn walk_mut(&mut self, data: &str) -> Option<&mut Tree> {
        self.children
            .iter_mut()
            .filter_map(Child::as_tree_mut)
            .find(|tree| tree.data == data)
    }

    /// Follows a dotted path of tags: `node("a.b.c")` walks to `a`, then
    /// `b` inside it, then `c`.
    pub fn node(&self, path: &str) -> Option<&Tree> {
        self.node_path(path.split('.'))
    }

    /// Same as [`Tree::node`], with the path already split.
    pub fn node_path<'p>(&self, segments: impl IntoIterator<Item = &'p str>) -> Option<&Tree> {
        let mut current = self;
        for segment in segments {
            current = current.walk(segment)?;
        }
        Some(current)
    }

    pub fn node_mut(&mut self, path: &str) -> Option<&mut Tree> {
        let mut current = self;
        for segment in path.split('.') {
            current = current.walk_mut(segment)?;
        }
        Some(current)
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Prepends a child.
    pub fn insert(&mut self, item: impl Into<Child>) {
        self.children.insert(0, item.into());
    }

    pub fn rename(&mut self, data: impl Into<String>) {
        self.data = data.into();
    }

    /// Replaces the child at `index`, returning the one it displaced.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn replace(&mut self, index: usize, item: impl Into<Child>) -> Child {
        std::mem::replace(&mut self.children[index], item.into())
    }

    // ------------------------------------------------------------------
    // Shape helpers
    // ------------------------------------------------------------------

    /// Rebuilds the dotted name of a `path` node: the base name, then
    /// the first token of every fragment, joined with `.`.
    pub fn extract_path(&self) -> String {
        let mut name = String::new();
        for child in &self.children {
            match child {
                Child::Token(token) => name.push_str(&token.value),
                Child::Tree(fragment) => {
                    name.push('.');
                    if let Ok(token) = fragment.first_token() {
                        name.push_str(&token.value);
                    }
                }
            }
        }
        name
    }

    /// Whether this expression is a bare value: every level of
    /// [`UNARY_LEAF_CHAIN`] present, in order, with exactly one child each.
    pub fn is_unary_leaf(&self) -> bool {
        let mut current = Some(self);
        for data in UNARY_LEAF_CHAIN {
            let Some(tree) = current else {
                return false;
            };
            if tree.data != data || tree.children.len() != 1 {
                return false;
            }
            current = tree.children[0].as_tree();
        }
        true
    }

    /// Fails with a compiler error positioned at this node unless `cond` holds.
    pub fn expect(&self, cond: bool, kind: impl Into<CompileErrorKind>) -> Result<(), CompilerError> {
        if cond {
            return Ok(());
        }
        Err(CompilerError::new(kind).at(self))
    }

    /// Matches a chain of single-child wrappers exactly.
    ///
    /// `expected` lists tags outermost first, starting with this node's
    /// own tag. Every node but the innermost must have exactly one child,
    /// and the innermost must hold no further subtree. Returns the
    /// innermost node on an exact match.
    pub fn follow_node_chain(&self, expected: &[&str]) -> Option<&Tree> {
        if self.children.len() != 1 {
            return None;
        }
        let (first, rest) = expected.split_first()?;
        if self.data != *first {
            return None;
        }
        let mut current = self;
        for data in rest {
            if current.children.len() != 1 {
                return None;
            }
            let next = current.children[0].as_tree()?;
            if next.data != *data {
                return None;
            }
            current = next;
        }
        if current.subtrees().next().is_some() {
            return None;
        }
        Some(current)
    }
}

/// Pre-order iterator over descendants with a given tag.
pub struct Descendants<'a> {
    stack: Vec<&'a Tree>,
    data: &'a str,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Tree;

    fn next(&mut self) -> Option<&'a Tree> {
        while let Some(tree) = self.stack.pop() {
            let start = self.stack.len();
            self.stack.extend(tree.subtrees());
            self.stack[start..].reverse();
            if tree.data == self.data {
                return Some(tree);
            }
        }
        None
    }
}

impl fmt::Display for Tree {
    /// Indented outline, one node or token per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_tree(tree: &Tree, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            writeln!(f, "{}{}", "  ".repeat(depth), tree.data)?;
            for child in &tree.children {
                match child {
                    Child::Tree(sub) => write_tree(sub, depth + 1, f)?,
                    Child::Token(token) => {
                        writeln!(f, "{}{} {}", "  ".repeat(depth + 1), token.kind, token.value)?
                    }
                }
            }
            Ok(())
        }
        write_tree(self, 0, f)
    }
}
