//! The ancestry chain handed to enter/exit handlers.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::AstNode;

/// One edge on the path from the root to the node being visited.
#[derive(Debug)]
pub struct AncestryFrame<'a, 'k, N> {
    /// The parent node.
    pub node: &'a N,

    /// The field of `node` that was followed.
    ///
    /// Borrowed from the visitor keys, which may live shorter than the tree.
    pub key: &'k str,

    /// Position within the field when it holds a sequence.
    ///
    /// This is the raw position in the backing sequence, holes included.
    pub index: Option<usize>,
}

impl<'a, 'k, N> AncestryFrame<'a, 'k, N> {
    /// Creates a frame for a single-child field.
    #[inline]
    pub const fn field(node: &'a N, key: &'k str) -> Self {
        Self {
            node,
            key,
            index: None,
        }
    }

    /// Creates a frame for an element of a sequence field.
    #[inline]
    pub const fn element(node: &'a N, key: &'k str, index: usize) -> Self {
        Self {
            node,
            key,
            index: Some(index),
        }
    }
}

impl<N> Clone for AncestryFrame<'_, '_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for AncestryFrame<'_, '_, N> {}

/// Formats as `Type.key` or `Type.key[index]`.
impl<N: AstNode> fmt::Display for AncestryFrame<'_, '_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.node.node_type().unwrap_or("?"), self.key)?;
        if let Some(index) = self.index {
            write!(f, "[{}]", index)?;
        }
        Ok(())
    }
}

/// The ordered root-to-parent path of the node currently being visited.
///
/// The chain is owned by the traversal and mutated in place as it descends
/// and returns. Handlers only ever see it through a shared borrow, so it
/// cannot be retained past the call that received it; copy the frames out
/// (`ancestry.to_vec()`) when a snapshot is needed.
#[derive(Debug)]
pub struct Ancestry<'a, 'k, N> {
    frames: Vec<AncestryFrame<'a, 'k, N>>,
}

impl<'a, 'k, N> Ancestry<'a, 'k, N> {
    pub(crate) fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Returns the frames, root first.
    #[inline]
    pub fn frames(&self) -> &[AncestryFrame<'a, 'k, N>] {
        &self.frames
    }

    /// Returns the frame leading to the current node's parent.
    #[inline]
    pub fn parent(&self) -> Option<&AncestryFrame<'a, 'k, N>> {
        self.frames.last()
    }

    /// Number of frames; zero for the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns true when visiting the traversal root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.frames.is_empty()
    }

    /// Pushes a frame; it is popped when the returned guard drops.
    pub(crate) fn push(&mut self, frame: AncestryFrame<'a, 'k, N>) -> FrameGuard<'_, 'a, 'k, N> {
        self.frames.push(frame);
        FrameGuard { ancestry: self }
    }
}

impl<N: AstNode> Ancestry<'_, '_, N> {
    /// Renders the chain as `Program.body[2] > ExpressionStatement.expression`.
    pub fn path(&self) -> String {
        self.frames
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

impl<'a, 'k, N> Deref for Ancestry<'a, 'k, N> {
    type Target = [AncestryFrame<'a, 'k, N>];

    fn deref(&self) -> &Self::Target {
        &self.frames
    }
}

impl<'s, 'a, 'k, N> IntoIterator for &'s Ancestry<'a, 'k, N> {
    type Item = &'s AncestryFrame<'a, 'k, N>;
    type IntoIter = std::slice::Iter<'s, AncestryFrame<'a, 'k, N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Keeps one frame on the chain for as long as it lives.
///
/// Dropping the guard pops the frame, on normal return and on early return
/// through `?` alike.
pub(crate) struct FrameGuard<'g, 'a, 'k, N> {
    ancestry: &'g mut Ancestry<'a, 'k, N>,
}

impl<'a, 'k, N> Deref for FrameGuard<'_, 'a, 'k, N> {
    type Target = Ancestry<'a, 'k, N>;

    fn deref(&self) -> &Self::Target {
        &*self.ancestry
    }
}

impl<N> DerefMut for FrameGuard<'_, '_, '_, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.ancestry
    }
}

impl<N> Drop for FrameGuard<'_, '_, '_, N> {
    fn drop(&mut self) {
        self.ancestry.frames.pop();
    }
}
