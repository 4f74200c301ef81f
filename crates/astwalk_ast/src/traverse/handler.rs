//! Enter/exit handlers and their normalization.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::ancestry::Ancestry;
use crate::TraverseError;

/// A boxed enter or exit callback.
pub type Callback<'h, 'a, N, S, E> =
    Box<dyn FnMut(&'a N, &Ancestry<'a, '_, N>, &mut S) -> Result<(), E> + 'h>;

/// The canonical `{enter, exit}` handler pair.
///
/// Either callback may be missing. A bare closure converts into a pair with
/// only `enter` set, so `traverse(node, keys, f, state)` and
/// `traverse(node, keys, Handlers::new().on_enter(f), state)` behave the same.
///
/// # Example
///
/// ```rust
/// use std::convert::Infallible;
///
/// use astwalk_ast::{Ancestry, AstNode, Handlers, SyntaxNode};
///
/// fn exit(
///     node: &SyntaxNode<'_>,
///     _ancestry: &Ancestry<'_, '_, SyntaxNode<'_>>,
///     names: &mut Vec<String>,
/// ) -> Result<(), Infallible> {
///     names.push(node.node_type.to_string());
///     Ok(())
/// }
///
/// let handlers = Handlers::new().on_exit(exit);
/// assert!(!handlers.has_enter());
/// assert!(handlers.has_exit());
/// ```
pub struct Handlers<'h, 'a, N, S, E> {
    enter: Option<Callback<'h, 'a, N, S, E>>,
    exit: Option<Callback<'h, 'a, N, S, E>>,
}

impl<'h, 'a, N, S, E> Handlers<'h, 'a, N, S, E> {
    /// Creates a pair with neither callback set.
    pub fn new() -> Self {
        Self {
            enter: None,
            exit: None,
        }
    }

    /// Sets the pre-order callback.
    pub fn on_enter<F>(mut self, enter: F) -> Self
    where
        F: FnMut(&'a N, &Ancestry<'a, '_, N>, &mut S) -> Result<(), E> + 'h,
    {
        self.enter = Some(Box::new(enter));
        self
    }

    /// Sets the post-order callback.
    pub fn on_exit<F>(mut self, exit: F) -> Self
    where
        F: FnMut(&'a N, &Ancestry<'a, '_, N>, &mut S) -> Result<(), E> + 'h,
    {
        self.exit = Some(Box::new(exit));
        self
    }

    /// Returns true if an enter callback is set.
    pub fn has_enter(&self) -> bool {
        self.enter.is_some()
    }

    /// Returns true if an exit callback is set.
    pub fn has_exit(&self) -> bool {
        self.exit.is_some()
    }

    pub(crate) fn enter(
        &mut self,
        node: &'a N,
        ancestry: &Ancestry<'a, '_, N>,
        state: &mut S,
    ) -> Result<(), E> {
        match self.enter.as_mut() {
            Some(enter) => enter(node, ancestry, state),
            None => Ok(()),
        }
    }

    pub(crate) fn exit(
        &mut self,
        node: &'a N,
        ancestry: &Ancestry<'a, '_, N>,
        state: &mut S,
    ) -> Result<(), E> {
        match self.exit.as_mut() {
            Some(exit) => exit(node, ancestry, state),
            None => Ok(()),
        }
    }
}

impl<N, S, E> Default for Handlers<'_, '_, N, S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, S, E> fmt::Debug for Handlers<'_, '_, N, S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("enter", &self.has_enter())
            .field("exit", &self.has_exit())
            .finish()
    }
}

/// A bare callback is an enter-only handler.
impl<'h, 'a, N, S, E, F> From<F> for Handlers<'h, 'a, N, S, E>
where
    F: FnMut(&'a N, &Ancestry<'a, '_, N>, &mut S) -> Result<(), E> + 'h,
{
    fn from(enter: F) -> Self {
        Self::new().on_enter(enter)
    }
}

/// Which side of a node visit a callback runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Before the node's children.
    Enter,
    /// After the node's children.
    Exit,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Enter => f.write_str("enter"),
            Phase::Exit => f.write_str("exit"),
        }
    }
}

/// A handler shape selected by name (`enter`, `exit` or `both`).
///
/// This is how handlers are chosen from configuration or command-line
/// arguments; any other name is rejected with
/// [`TraverseError::InvalidHandler`] before a traversal starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandlerKind {
    /// Only the pre-order callback.
    Enter,
    /// Only the post-order callback.
    Exit,
    /// Both callbacks.
    #[default]
    Both,
}

impl HandlerKind {
    /// Returns true if the enter callback is wired.
    pub const fn wants_enter(self) -> bool {
        matches!(self, HandlerKind::Enter | HandlerKind::Both)
    }

    /// Returns true if the exit callback is wired.
    pub const fn wants_exit(self) -> bool {
        matches!(self, HandlerKind::Exit | HandlerKind::Both)
    }

    /// Builds a [`Handlers`] pair that routes the selected phases to
    /// `callback`.
    pub fn handlers<'h, 'a, N, S, E, F>(self, callback: F) -> Handlers<'h, 'a, N, S, E>
    where
        F: FnMut(Phase, &'a N, &Ancestry<'a, '_, N>, &mut S) -> Result<(), E> + Clone + 'h,
    {
        let mut handlers = Handlers::new();
        if self.wants_enter() {
            let mut enter = callback.clone();
            handlers = handlers.on_enter(move |node, ancestry, state| {
                enter(Phase::Enter, node, ancestry, state)
            });
        }
        if self.wants_exit() {
            let mut exit = callback;
            handlers = handlers.on_exit(move |node, ancestry, state| {
                exit(Phase::Exit, node, ancestry, state)
            });
        }
        handlers
    }
}

impl FromStr for HandlerKind {
    type Err = TraverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enter" => Ok(HandlerKind::Enter),
            "exit" => Ok(HandlerKind::Exit),
            "both" => Ok(HandlerKind::Both),
            other => Err(TraverseError::invalid_handler(format!(
                "expected one of enter, exit, both; got `{}`",
                other
            ))),
        }
    }
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerKind::Enter => f.write_str("enter"),
            HandlerKind::Exit => f.write_str("exit"),
            HandlerKind::Both => f.write_str("both"),
        }
    }
}
