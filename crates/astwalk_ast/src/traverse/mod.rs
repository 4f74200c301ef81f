//! Schema-driven depth-first traversal.
//!
//! # Overview
//!
//! - [`traverse`] - Walk a tree, calling handlers on typed nodes
//! - [`Handlers`] - The `{enter, exit}` callback pair
//! - [`Ancestry`] / [`AncestryFrame`] - The path from the root to the visited node
//! - [`HandlerKind`] - Handler shapes selected by name
//!
//! Which fields are followed is decided by a [`SchemaProvider`](crate::SchemaProvider),
//! not by the node type. Adding a node type to a tree only needs a new entry
//! in the visitor keys.
//!
//! # Examples
//!
//! ## Counting Identifiers in a JSON AST
//!
//! ```rust
//! use std::convert::Infallible;
//!
//! use astwalk_ast::{traverse, Ancestry, AstNode, VisitorKeys};
//! use serde_json::{json, Value};
//!
//! fn count_identifiers(
//!     node: &Value,
//!     _ancestry: &Ancestry<'_, '_, Value>,
//!     count: &mut usize,
//! ) -> Result<(), Infallible> {
//!     if node.node_type() == Some("Identifier") {
//!         *count += 1;
//!     }
//!     Ok(())
//! }
//!
//! let ast = json!({
//!     "type": "BinaryExpression",
//!     "left": { "type": "Identifier", "name": "a" },
//!     "right": { "type": "Identifier", "name": "b" }
//! });
//!
//! let mut count = 0;
//! traverse(&ast, VisitorKeys::babel(), count_identifiers, &mut count).unwrap();
//! assert_eq!(count, 2);
//! ```
//!
//! ## Stopping Early
//!
//! A callback error ends the traversal and is returned unchanged.
//!
//! ```rust
//! use astwalk_ast::{traverse, Ancestry, AstNode, VisitorKeys};
//! use serde_json::{json, Value};
//!
//! fn find_this(node: &Value, ancestry: &Ancestry<'_, '_, Value>, _: &mut ()) -> Result<(), String> {
//!     if node.node_type() == Some("ThisExpression") {
//!         return Err(ancestry.path());
//!     }
//!     Ok(())
//! }
//!
//! let ast = json!({
//!     "type": "ReturnStatement",
//!     "argument": { "type": "ThisExpression" }
//! });
//!
//! let found = traverse(&ast, VisitorKeys::babel(), find_this, &mut ());
//! assert_eq!(found, Err("ReturnStatement.argument".to_string()));
//! ```

mod ancestry;
mod handler;
mod walk;

pub use ancestry::{Ancestry, AncestryFrame};
pub use handler::{Callback, HandlerKind, Handlers, Phase};
pub use walk::traverse;
