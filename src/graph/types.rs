//! Core type definitions for the graph engine

use std::fmt;

/// Caller-supplied node identifier
pub type NodeId = i64;

/// Identifies an edge by its endpoint pair.
///
/// Directed keys keep `(from, to)` order. Undirected keys are normalized so
/// that `first <= second`, which makes `(a, b)` and `(b, a)` the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub first: NodeId,
    pub second: NodeId,
}

impl EdgeKey {
    /// Key for a directed edge `from -> to`
    pub fn directed(from: NodeId, to: NodeId) -> Self {
        EdgeKey {
            first: from,
            second: to,
        }
    }

    /// Key for an undirected edge, smaller id first
    pub fn undirected(a: NodeId, b: NodeId) -> Self {
        Self::directed(a.min(b), a.max(b))
    }

    /// Key for an edge in a graph of the given orientation
    pub fn for_orientation(orientation: Orientation, a: NodeId, b: NodeId) -> Self {
        match orientation {
            Orientation::Directed => Self::directed(a, b),
            Orientation::Undirected => Self::undirected(a, b),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.first == self.second
    }

    /// The endpoint opposite to `id`, or `id` itself for a self-loop.
    /// Returns `None` when `id` is not an endpoint.
    pub fn opposite(&self, id: NodeId) -> Option<NodeId> {
        if self.first == id {
            Some(self.second)
        } else if self.second == id {
            Some(self.first)
        } else {
            None
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// Graph orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    Directed,
    #[default]
    Undirected,
}

impl Orientation {
    pub fn is_directed(&self) -> bool {
        matches!(self, Orientation::Directed)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Directed => write!(f, "directed"),
            Orientation::Undirected => write!(f, "undirected"),
        }
    }
}
