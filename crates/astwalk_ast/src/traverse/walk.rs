//! The recursive walk.

use tracing::{debug, trace};

use super::ancestry::{Ancestry, AncestryFrame};
use super::handler::Handlers;
use crate::{AstNode, Field, SchemaProvider};

/// Walks the tree rooted at `node` depth-first.
///
/// For every node whose type has an entry in `schema`:
/// 1. `enter` runs with the node, the ancestry chain and `state`
/// 2. each field named by the entry is visited in entry order; single
///    children get a frame without index, sequence elements a frame with their
///    raw position, and absent children and holes are skipped
/// 3. `exit` runs once the whole subtree has been visited
///
/// Nodes without an entry (including values without a discriminant) are
/// leaves: neither callback runs for them.
///
/// `handlers` is either a bare enter closure or a [`Handlers`] pair. The first
/// error returned by a callback stops the traversal and is returned as is.
///
/// # Example
///
/// ```rust
/// use std::convert::Infallible;
///
/// use astwalk_ast::{traverse, Ancestry, AstArena, Slot, SyntaxNode, VisitorKeys};
///
/// fn names(
///     node: &SyntaxNode<'_>,
///     _ancestry: &Ancestry<'_, '_, SyntaxNode<'_>>,
///     out: &mut Vec<String>,
/// ) -> Result<(), Infallible> {
///     out.push(node.node_type.to_string());
///     Ok(())
/// }
///
/// let arena = AstArena::new();
/// let x = arena.text("Identifier", "x");
/// let ret = arena.node("ReturnStatement", &[("argument", Slot::Node(x))]);
///
/// let keys = VisitorKeys::new()
///     .with("ReturnStatement", ["argument"])
///     .with("Identifier", Vec::<String>::new());
///
/// let mut out = Vec::new();
/// traverse(ret, &keys, names, &mut out).unwrap();
/// assert_eq!(out, ["ReturnStatement", "Identifier"]);
/// ```
pub fn traverse<'h, 'a, 'k, N, K, S, E, H>(
    node: &'a N,
    schema: &'k K,
    handlers: H,
    state: &mut S,
) -> Result<(), E>
where
    N: AstNode,
    K: SchemaProvider + ?Sized,
    H: Into<Handlers<'h, 'a, N, S, E>>,
{
    let mut handlers = handlers.into();
    let mut ancestry = Ancestry::new();

    debug!(
        root = node.node_type().unwrap_or("<untyped>"),
        enter = handlers.has_enter(),
        exit = handlers.has_exit(),
        "Starting traversal"
    );

    let visited = walk(node, schema, &mut handlers, state, &mut ancestry)?;

    debug!(visited, "Finished traversal");
    Ok(())
}

/// Visits `node` and its subtree, returning the number of visited nodes.
fn walk<'h, 'a, 'k, N, K, S, E>(
    node: &'a N,
    schema: &'k K,
    handlers: &mut Handlers<'h, 'a, N, S, E>,
    state: &mut S,
    ancestry: &mut Ancestry<'a, 'k, N>,
) -> Result<usize, E>
where
    N: AstNode,
    K: SchemaProvider + ?Sized,
{
    let Some(keys) = node.node_type().and_then(|t| schema.fields_for(t)) else {
        trace!(
            node_type = node.node_type().unwrap_or("<untyped>"),
            "No visitor keys, treating as leaf"
        );
        return Ok(0);
    };

    handlers.enter(node, ancestry, state)?;
    let mut visited = 1;

    for key in keys {
        let key = key.as_str();
        match node.field(key) {
            Field::Absent => {}
            Field::Node(child) => {
                let mut frame = ancestry.push(AncestryFrame::field(node, key));
                visited += walk(child, schema, handlers, state, &mut frame)?;
            }
            Field::List(children) => {
                for (index, child) in children.iter().enumerate() {
                    let Some(child) = *child else {
                        continue;
                    };
                    let mut frame = ancestry.push(AncestryFrame::element(node, key, index));
                    visited += walk(child, schema, handlers, state, &mut frame)?;
                }
            }
        }
    }

    handlers.exit(node, ancestry, state)?;
    Ok(visited)
}
