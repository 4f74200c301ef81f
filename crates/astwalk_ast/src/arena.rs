//! Arena allocator for syntax nodes.
//!
//! Uses `bumpalo` for bump allocation. A whole tree lives in one arena and is
//! freed together when the arena is dropped.

use bumpalo::Bump;

use crate::node::{Slot, SyntaxNode};

/// Arena allocator for [`SyntaxNode`] trees.
///
/// Besides raw allocation, the arena offers builders that copy node types,
/// field names and child lists into the arena, so trees can be assembled from
/// temporaries.
///
/// # Example
///
/// ```rust
/// use astwalk_ast::{AstArena, Slot};
///
/// let arena = AstArena::new();
///
/// let a = arena.text("Identifier", "a");
/// let b = arena.text("Identifier", "b");
/// let array = arena.node("ArrayExpression", &[("elements", arena.list(&[Some(a), None, Some(b)]))]);
/// let stmt = arena.node("ExpressionStatement", &[("expression", Slot::Node(array))]);
///
/// assert_eq!(stmt.slots.len(), 1);
/// ```
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Creates a new arena.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Allocates a value in the arena and returns a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Allocates a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Allocates a node with the given named slots.
    pub fn node<'a>(&'a self, node_type: &str, slots: &[(&str, Slot<'a>)]) -> &'a SyntaxNode<'a> {
        let slots: Vec<(&'a str, Slot<'a>)> = slots
            .iter()
            .map(|&(name, slot)| (self.alloc_str(name), slot))
            .collect();
        let slots = self.bump.alloc_slice_copy(&slots);
        self.alloc(SyntaxNode::new(self.alloc_str(node_type), slots))
    }

    /// Allocates a node without fields.
    pub fn leaf<'a>(&'a self, node_type: &str) -> &'a SyntaxNode<'a> {
        self.alloc(SyntaxNode::leaf(self.alloc_str(node_type)))
    }

    /// Allocates a field-less node carrying a text value.
    pub fn text<'a>(&'a self, node_type: &str, value: &str) -> &'a SyntaxNode<'a> {
        self.alloc(SyntaxNode::text(
            self.alloc_str(node_type),
            self.alloc_str(value),
        ))
    }

    /// Copies a child list into the arena and wraps it in a [`Slot::List`].
    pub fn list<'a>(&'a self, items: &[Option<&'a SyntaxNode<'a>>]) -> Slot<'a> {
        Slot::List(self.bump.alloc_slice_copy(items))
    }

    /// Returns the total bytes allocated in this arena.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}
