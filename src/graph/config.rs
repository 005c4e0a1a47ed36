//! Builder policy configuration

use super::types::Orientation;

/// Validation policy for [`GraphBuilder`](super::builder::GraphBuilder).
///
/// Every flag defaults to `false`, which yields the strictest undirected
/// builder: no duplicate nodes or edges, no self-loops, and edges may only
/// reference nodes that were already added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuilderConfig {
    /// A repeated `add_node` overwrites the earlier value instead of failing
    pub allow_duplicate_nodes: bool,
    /// A repeated `add_edge` overwrites the earlier value instead of failing
    pub allow_duplicate_edges: bool,
    /// Permit self-loops
    pub allow_redundant_edges: bool,
    /// Permit `add_edge` before its endpoints are added; endpoints are
    /// checked at build time instead
    pub build_edges_incrementally: bool,
    /// Build a directed graph
    pub is_directed: bool,
}

impl BuilderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default policy for a directed graph
    pub fn directed() -> Self {
        Self {
            is_directed: true,
            ..Self::default()
        }
    }

    pub fn with_duplicate_nodes(mut self, allow: bool) -> Self {
        self.allow_duplicate_nodes = allow;
        self
    }

    pub fn with_duplicate_edges(mut self, allow: bool) -> Self {
        self.allow_duplicate_edges = allow;
        self
    }

    pub fn with_redundant_edges(mut self, allow: bool) -> Self {
        self.allow_redundant_edges = allow;
        self
    }

    pub fn with_incremental_edges(mut self, enabled: bool) -> Self {
        self.build_edges_incrementally = enabled;
        self
    }

    pub fn with_directed(mut self, directed: bool) -> Self {
        self.is_directed = directed;
        self
    }

    pub fn orientation(&self) -> Orientation {
        if self.is_directed {
            Orientation::Directed
        } else {
            Orientation::Undirected
        }
    }
}
