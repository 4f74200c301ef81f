//! Node accessor trait and the arena-backed `SyntaxNode`.
//!
//! The traversal engine never looks at concrete node types. It only needs a
//! node's discriminant and a way to read a named field, which is what
//! [`AstNode`] provides.

use std::borrow::Cow;

/// The value of a named field on a node.
#[derive(Debug)]
pub enum Field<'n, N> {
    /// The field is missing or holds nothing.
    Absent,
    /// The field holds a single child.
    Node(&'n N),
    /// The field holds a sequence; `None` entries are holes.
    ///
    /// Borrowed when the node already stores its children in this shape.
    List(Cow<'n, [Option<&'n N>]>),
}

impl<'n, N> Field<'n, N> {
    /// Returns true if the field holds nothing.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }
}

/// Read-only access to a node, as needed by [`traverse`](crate::traverse).
///
/// A field that does not exist on the node shape and a field that exists but
/// is empty must both be reported as [`Field::Absent`].
pub trait AstNode: Sized {
    /// The discriminant used to look up the node's visitor keys.
    ///
    /// `None` means the value is not a typed node; it is treated as a leaf.
    fn node_type(&self) -> Option<&str>;

    /// Reads the field named `key`.
    fn field(&self, key: &str) -> Field<'_, Self>;
}

/// A named field slot on a [`SyntaxNode`].
#[derive(Debug, Clone, Copy)]
pub enum Slot<'a> {
    /// Present but holding nothing.
    Empty,
    /// A single child node.
    Node(&'a SyntaxNode<'a>),
    /// A sequence of children with optional holes.
    List(&'a [Option<&'a SyntaxNode<'a>>]),
}

/// A generic syntax node allocated in an [`AstArena`](crate::AstArena).
///
/// `SyntaxNode` does not fix a set of node kinds: the discriminant is a string
/// and fields are an ordered list of named slots, so any tree shape can be
/// built without touching the traversal engine.
///
/// # Example
///
/// ```rust
/// use astwalk_ast::{AstArena, AstNode, Slot};
///
/// let arena = AstArena::new();
/// let left = arena.text("Identifier", "a");
/// let binary = arena.node(
///     "BinaryExpression",
///     &[("left", Slot::Node(left)), ("right", Slot::Empty)],
/// );
///
/// assert_eq!(binary.node_type(), Some("BinaryExpression"));
/// assert!(binary.field("right").is_absent());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyntaxNode<'a> {
    /// The discriminant of this node.
    pub node_type: &'a str,

    /// Text value (identifier names, literal source).
    pub value: Option<&'a str>,

    /// Named fields in declaration order.
    pub slots: &'a [(&'a str, Slot<'a>)],
}

impl<'a> SyntaxNode<'a> {
    /// Creates a node with the given slots.
    #[inline]
    pub const fn new(node_type: &'a str, slots: &'a [(&'a str, Slot<'a>)]) -> Self {
        Self {
            node_type,
            value: None,
            slots,
        }
    }

    /// Creates a node without fields.
    #[inline]
    pub const fn leaf(node_type: &'a str) -> Self {
        Self::new(node_type, &[])
    }

    /// Creates a node without fields that carries a text value.
    #[inline]
    pub const fn text(node_type: &'a str, value: &'a str) -> Self {
        Self {
            node_type,
            value: Some(value),
            slots: &[],
        }
    }

    /// Returns the slot named `key`, if the node declares one.
    pub fn slot(&self, key: &str) -> Option<&Slot<'a>> {
        self.slots
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, slot)| slot)
    }
}

impl<'a> AstNode for SyntaxNode<'a> {
    #[inline]
    fn node_type(&self) -> Option<&str> {
        Some(self.node_type)
    }

    fn field(&self, key: &str) -> Field<'_, Self> {
        match self.slot(key) {
            Some(&Slot::Node(node)) => Field::Node(node),
            Some(&Slot::List(items)) => Field::List(Cow::Borrowed(items)),
            Some(Slot::Empty) | None => Field::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AstArena;

    #[test]
    fn test_leaf_has_no_fields() {
        let node = SyntaxNode::leaf("ThisExpression");

        assert_eq!(node.node_type(), Some("ThisExpression"));
        assert!(node.field("argument").is_absent());
        assert!(node.value.is_none());
    }

    #[test]
    fn test_text_node() {
        let node = SyntaxNode::text("Identifier", "foo");
        assert_eq!(node.value, Some("foo"));
        assert!(node.slots.is_empty());
    }

    #[test]
    fn test_field_reads_single_child() {
        let arena = AstArena::new();
        let arg = arena.text("Identifier", "x");
        let node = arena.node("SpreadElement", &[("argument", Slot::Node(arg))]);

        match node.field("argument") {
            Field::Node(child) => assert_eq!(child.value, Some("x")),
            other => panic!("expected a single child, got {:?}", other),
        }
    }

    #[test]
    fn test_field_reads_list_with_holes() {
        let arena = AstArena::new();
        let a = arena.text("Identifier", "a");
        let elements = arena.list(&[Some(a), None]);
        let node = arena.node("ArrayExpression", &[("elements", elements)]);

        match node.field("elements") {
            Field::List(items) => {
                assert_eq!(items.len(), 2);
                assert!(items[0].is_some());
                assert!(items[1].is_none());
            }
            other => panic!("expected a list, got {:?}", other),
        }
    }

    #[test]
    fn test_list_field_borrows_arena_slice() {
        let arena = AstArena::new();
        let a = arena.text("Identifier", "a");
        let node = arena.node("ArrayExpression", &[("elements", arena.list(&[Some(a)]))]);

        assert!(matches!(node.field("elements"), Field::List(Cow::Borrowed(_))));
    }

    #[test]
    fn test_empty_and_missing_slots_are_both_absent() {
        let arena = AstArena::new();
        let node = arena.node("ReturnStatement", &[("argument", Slot::Empty)]);

        assert!(node.field("argument").is_absent());
        assert!(node.field("label").is_absent());
    }
}
