// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Syntax tree types for story scripts.
//!
//! This crate defines the tree the parser hands over and every later
//! pass queries and rewrites: tokens, line identifiers, tree navigation,
//! position resolution and the structured error passes raise.

pub mod error;
pub mod line;
pub mod position;
pub mod source;
pub mod token;
pub mod tree;

pub use error::{CompileErrorKind, CompilerError, ErrorCode};
pub use line::{LineId, LineIdError};
pub use position::{Position, PositionError};
pub use source::LineMap;
pub use token::Token;
pub use tree::{Child, Descendants, Tree, UNARY_LEAF_CHAIN};
