//! Identity types: [`Node`] and [`Edge`].

use std::fmt;

/// A graph vertex, identified by an integer ID unique within its graph.
///
/// Nodes carry no state beyond their identity; two nodes are equal exactly
/// when their IDs are equal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node(pub usize);

impl Node {
    /// Create a node with the given ID.
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// The node's ID.
    #[inline]
    pub const fn id(self) -> usize {
        self.0
    }
}

impl From<usize> for Node {
    #[inline]
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed arc from `head` to `tail`.
///
/// Undirected graphs store both directions; there is no separate
/// undirected edge type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub head: Node,
    pub tail: Node,
}

impl Edge {
    /// Create an edge from `head` to `tail`.
    #[inline]
    pub const fn new(head: Node, tail: Node) -> Self {
        Self { head, tail }
    }

    /// The same edge pointing the other way.
    #[inline]
    pub const fn reversed(self) -> Self {
        Self {
            head: self.tail,
            tail: self.head,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.head, self.tail)
    }
}
