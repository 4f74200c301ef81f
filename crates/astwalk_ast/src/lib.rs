//! # astwalk_ast
//!
//! Schema-driven AST traversal for astwalk.
//!
//! This crate walks syntax trees depth-first, calling user handlers on entry
//! and exit of every node while keeping track of the chain of ancestors that
//! led to it. Which fields of a node hold children is not hard-coded: it is
//! read from a table of visitor keys, so any tree shape can be walked.
//!
//! ## Architecture
//!
//! - [`AstNode`] abstracts over node representations
//! - [`SyntaxNode`] is an arena-allocated node built with `bumpalo`
//! - `serde_json::Value` trees (ESTree/Babel JSON) are walked as-is
//! - [`VisitorKeys`] maps node types to their child fields, in traversal order
//! - [`traverse`] runs the walk with an `{enter, exit}` pair of [`Handlers`]
//!
//! ## Example
//!
//! ```rust
//! use std::convert::Infallible;
//!
//! use astwalk_ast::{traverse, Ancestry, AstArena, Handlers, Slot, SyntaxNode, VisitorKeys};
//!
//! fn exit(
//!     node: &SyntaxNode<'_>,
//!     ancestry: &Ancestry<'_, '_, SyntaxNode<'_>>,
//!     out: &mut Vec<String>,
//! ) -> Result<(), Infallible> {
//!     out.push(format!("{} at depth {}", node.node_type, ancestry.depth()));
//!     Ok(())
//! }
//!
//! let arena = AstArena::new();
//! let left = arena.text("Identifier", "a");
//! let right = arena.text("Identifier", "b");
//! let sum = arena.node(
//!     "BinaryExpression",
//!     &[("left", Slot::Node(left)), ("right", Slot::Node(right))],
//! );
//!
//! let mut out = Vec::new();
//! traverse(sum, VisitorKeys::babel(), Handlers::new().on_exit(exit), &mut out).unwrap();
//!
//! assert_eq!(
//!     out,
//!     ["Identifier at depth 1", "Identifier at depth 1", "BinaryExpression at depth 0"]
//! );
//! ```

mod arena;
mod error;
mod json;
mod node;
mod schema;
pub mod traverse;

pub use arena::AstArena;
pub use error::{SchemaError, TraverseError};
pub use node::{AstNode, Field, Slot, SyntaxNode};
pub use schema::{SchemaProvider, VisitorKeys};

// Re-export commonly used traversal items for convenience
pub use traverse::{
    traverse, Ancestry, AncestryFrame, Callback, HandlerKind, Handlers, Phase,
};
