//! Immutable graph storage
//!
//! A [`Graph`] is produced by [`GraphBuilder::build`](super::builder::GraphBuilder::build)
//! and never changes afterwards. Storage is an arena:
//! - nodes: ascending by id, with an id -> index map
//! - edges: ascending by [`EdgeKey`], with a key -> index map
//!
//! Undirected graphs store each edge once under its normalized key, so
//! lookups for `(a, b)` and `(b, a)` land on the same record.

use super::edge::{Edge, EdgeRecord};
use super::node::{Node, NodeRecord};
use super::types::{EdgeKey, NodeId, Orientation};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised while building or querying a graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node with id {0} has already been added")]
    DuplicateNode(NodeId),

    #[error("edge from {from} to {to} has already been added")]
    DuplicateEdge { from: NodeId, to: NodeId },

    #[error("edge from {0} to {0} is redundant")]
    RedundantEdge(NodeId),

    #[error("node with id {0} could not be found")]
    NodeNotFound(NodeId),

    #[error("edge from {from} to {to} could not be found")]
    EdgeNotFound { from: NodeId, to: NodeId },

    #[error("no value found in node with id {0}")]
    NoValueFoundInNode(NodeId),

    #[error("no value found in edge from {from} to {to}")]
    NoValueFoundInEdge { from: NodeId, to: NodeId },

    #[error("cannot use {0} on directed graph")]
    CannotUseForDirectedGraph(&'static str),

    #[error("cannot use {0} on undirected graph")]
    CannotUseForUndirectedGraph(&'static str),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// A built, read-only graph carrying optional node values `N` and edge values `E`
#[derive(Debug, Clone)]
pub struct Graph<N = (), E = ()> {
    orientation: Orientation,
    nodes: Vec<NodeRecord<N>>,
    edges: Vec<EdgeRecord<E>>,
    node_index: FxHashMap<NodeId, usize>,
    edge_index: FxHashMap<EdgeKey, usize>,
}

impl<N, E> Graph<N, E> {
    /// Assemble a graph from records already sorted and cross-linked by the builder
    pub(crate) fn from_parts(
        orientation: Orientation,
        nodes: Vec<NodeRecord<N>>,
        edges: Vec<EdgeRecord<E>>,
    ) -> Self {
        let node_index = nodes
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.id, idx))
            .collect();
        let edge_index = edges
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.key, idx))
            .collect();

        Graph {
            orientation,
            nodes,
            edges,
            node_index,
            edge_index,
        }
    }

    pub(crate) fn node_records(&self) -> &[NodeRecord<N>] {
        &self.nodes
    }

    pub(crate) fn edge_records(&self) -> &[EdgeRecord<E>] {
        &self.edges
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_directed(&self) -> bool {
        self.orientation.is_directed()
    }

    /// Look up a node by id
    pub fn node(&self, id: NodeId) -> GraphResult<Node<'_, N, E>> {
        self.node_index
            .get(&id)
            .map(|&idx| Node::new(self, idx))
            .ok_or(GraphError::NodeNotFound(id))
    }

    /// Look up the edge between `a` and `b`.
    ///
    /// For undirected graphs `edge(a, b)` and `edge(b, a)` return the same edge.
    pub fn edge(&self, a: NodeId, b: NodeId) -> GraphResult<Edge<'_, N, E>> {
        self.edge_by_key(EdgeKey::for_orientation(self.orientation, a, b))
            .ok_or(GraphError::EdgeNotFound { from: a, to: b })
    }

    pub(crate) fn edge_by_key(&self, key: EdgeKey) -> Option<Edge<'_, N, E>> {
        self.edge_index.get(&key).map(|&idx| Edge::new(self, idx))
    }

    /// All nodes, ascending by id
    pub fn nodes(&self) -> Vec<Node<'_, N, E>> {
        (0..self.nodes.len())
            .map(|idx| Node::new(self, idx))
            .collect()
    }

    /// All edges, ascending by `(from, to)` when directed and by the
    /// normalized pair when undirected
    pub fn edges(&self) -> Vec<Edge<'_, N, E>> {
        (0..self.edges.len())
            .map(|idx| Edge::new(self, idx))
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node_index.contains_key(&id)
    }

    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edge_index
            .contains_key(&EdgeKey::for_orientation(self.orientation, a, b))
    }

    /// Arena index of a node id
    pub(crate) fn index_of(&self, id: NodeId) -> Option<usize> {
        self.node_index.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{BuilderConfig, GraphBuilder};

    fn star(config: BuilderConfig) -> Graph {
        // 1 is connected to 2, 3 and 4
        let mut builder: GraphBuilder = GraphBuilder::with_config(config);
        for id in 1..=4 {
            builder.add_node(id, None);
        }
        builder
            .add_edge(1, 2, None)
            .add_edge(3, 1, None)
            .add_edge(4, 1, None);
        builder.build().unwrap()
    }

    #[test]
    fn test_get_node() {
        let graph = star(BuilderConfig::default());
        assert_eq!(graph.node(1).unwrap().neighbors().unwrap(), &[2, 3, 4]);
        assert_eq!(graph.node(5).unwrap_err(), GraphError::NodeNotFound(5));
    }

    #[test]
    fn test_undirected_edge_symmetric() {
        let graph = star(BuilderConfig::default());
        let forward = graph.edge(1, 3).unwrap();
        let backward = graph.edge(3, 1).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.key(), EdgeKey::undirected(1, 3));
        assert!(graph.contains_edge(3, 1));
        assert_eq!(
            graph.edge(2, 3).unwrap_err(),
            GraphError::EdgeNotFound { from: 2, to: 3 }
        );
    }

    #[test]
    fn test_directed_edge_independent() {
        let graph = star(BuilderConfig::directed());
        assert!(graph.edge(3, 1).is_ok());
        assert_eq!(
            graph.edge(1, 3).unwrap_err(),
            GraphError::EdgeNotFound { from: 1, to: 3 }
        );
        assert!(graph.contains_edge(1, 2));
        assert!(!graph.contains_edge(2, 1));
    }

    #[test]
    fn test_directed_edges_ordered_by_from_to() {
        let graph = star(BuilderConfig::directed());
        let keys: Vec<EdgeKey> = graph.edges().iter().map(|e| e.key()).collect();
        assert_eq!(
            keys,
            vec![
                EdgeKey::directed(1, 2),
                EdgeKey::directed(3, 1),
                EdgeKey::directed(4, 1),
            ]
        );
    }

    #[test]
    fn test_undirected_edges_ordered_by_normalized_pair() {
        let graph = star(BuilderConfig::default());
        let keys: Vec<EdgeKey> = graph.edges().iter().map(|e| e.key()).collect();
        assert_eq!(
            keys,
            vec![
                EdgeKey::undirected(1, 2),
                EdgeKey::undirected(1, 3),
                EdgeKey::undirected(1, 4),
            ]
        );
    }

    #[test]
    fn test_nodes_ascending_and_counts() {
        let graph = star(BuilderConfig::directed());
        let ids: Vec<NodeId> = graph.nodes().iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.contains_node(4));
        assert!(!graph.contains_node(0));
    }

    #[test]
    fn test_is_directed() {
        assert!(!star(BuilderConfig::default()).is_directed());
        assert!(star(BuilderConfig::directed()).is_directed());
        assert_eq!(
            star(BuilderConfig::directed()).orientation(),
            Orientation::Directed
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GraphError::DuplicateNode(1).to_string(),
            "node with id 1 has already been added"
        );
        assert_eq!(
            GraphError::DuplicateEdge { from: 1, to: 2 }.to_string(),
            "edge from 1 to 2 has already been added"
        );
        assert_eq!(
            GraphError::RedundantEdge(4).to_string(),
            "edge from 4 to 4 is redundant"
        );
        assert_eq!(
            GraphError::NodeNotFound(7).to_string(),
            "node with id 7 could not be found"
        );
        assert_eq!(
            GraphError::EdgeNotFound { from: 1, to: 2 }.to_string(),
            "edge from 1 to 2 could not be found"
        );
        assert_eq!(
            GraphError::NoValueFoundInNode(3).to_string(),
            "no value found in node with id 3"
        );
        assert_eq!(
            GraphError::NoValueFoundInEdge { from: 3, to: 5 }.to_string(),
            "no value found in edge from 3 to 5"
        );
        let err = GraphError::CannotUseForDirectedGraph("Node::neighbors");
        assert_eq!(
            err.to_string(),
            "cannot use Node::neighbors on directed graph"
        );
        let err = GraphError::CannotUseForUndirectedGraph("Edge::to");
        assert_eq!(err.to_string(), "cannot use Edge::to on undirected graph");
    }
}
