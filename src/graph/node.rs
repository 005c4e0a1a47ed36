//! Node records and node views
//!
//! The graph owns a flat table of [`NodeRecord`]s. A [`Node`] is a `Copy`
//! handle pairing a graph reference with an index into that table, so a node
//! can answer adjacency queries without owning or pointing back into anything.

use super::edge::Edge;
use super::store::{Graph, GraphError, GraphResult};
use super::types::{EdgeKey, NodeId};
use std::fmt;

/// Adjacency of a node, one variant per graph orientation.
/// All lists are sorted ascending by node id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Adjacency {
    Directed {
        incoming: Vec<NodeId>,
        outgoing: Vec<NodeId>,
    },
    Undirected {
        neighbors: Vec<NodeId>,
    },
}

impl Adjacency {
    pub(crate) fn sort(&mut self) {
        match self {
            Adjacency::Directed { incoming, outgoing } => {
                incoming.sort_unstable();
                outgoing.sort_unstable();
            }
            Adjacency::Undirected { neighbors } => neighbors.sort_unstable(),
        }
    }
}

/// Stored node data
#[derive(Debug, Clone)]
pub(crate) struct NodeRecord<N> {
    pub(crate) id: NodeId,
    pub(crate) value: Option<N>,
    pub(crate) adjacency: Adjacency,
}

/// Read-only view of a node in a built [`Graph`]
pub struct Node<'g, N, E> {
    graph: &'g Graph<N, E>,
    index: usize,
}

impl<'g, N, E> Node<'g, N, E> {
    pub(crate) fn new(graph: &'g Graph<N, E>, index: usize) -> Self {
        Node { graph, index }
    }

    fn record(&self) -> &'g NodeRecord<N> {
        &self.graph.node_records()[self.index]
    }

    /// Position of this node in the graph's ascending node table
    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> NodeId {
        self.record().id
    }

    pub fn graph(&self) -> &'g Graph<N, E> {
        self.graph
    }

    pub fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    /// The node's value, or `NoValueFoundInNode` when it was added without one
    pub fn value(&self) -> GraphResult<&'g N> {
        self.value_opt()
            .ok_or(GraphError::NoValueFoundInNode(self.id()))
    }

    pub fn value_opt(&self) -> Option<&'g N> {
        self.record().value.as_ref()
    }

    /// Ids of nodes with an edge into this one (directed graphs only)
    pub fn incoming(&self) -> GraphResult<&'g [NodeId]> {
        match &self.record().adjacency {
            Adjacency::Directed { incoming, .. } => Ok(incoming.as_slice()),
            Adjacency::Undirected { .. } => {
                Err(GraphError::CannotUseForUndirectedGraph("Node::incoming"))
            }
        }
    }

    /// Ids of nodes this one has an edge to (directed graphs only)
    pub fn outgoing(&self) -> GraphResult<&'g [NodeId]> {
        match &self.record().adjacency {
            Adjacency::Directed { outgoing, .. } => Ok(outgoing.as_slice()),
            Adjacency::Undirected { .. } => {
                Err(GraphError::CannotUseForUndirectedGraph("Node::outgoing"))
            }
        }
    }

    /// Ids of adjacent nodes (undirected graphs only)
    pub fn neighbors(&self) -> GraphResult<&'g [NodeId]> {
        match &self.record().adjacency {
            Adjacency::Undirected { neighbors } => Ok(neighbors.as_slice()),
            Adjacency::Directed { .. } => {
                Err(GraphError::CannotUseForDirectedGraph("Node::neighbors"))
            }
        }
    }

    /// Edges ending at this node, ordered by source id
    pub fn incoming_edges(&self) -> GraphResult<Vec<Edge<'g, N, E>>> {
        let id = self.id();
        match &self.record().adjacency {
            Adjacency::Directed { incoming, .. } => {
                let keys = incoming.iter().map(|&from| EdgeKey::directed(from, id));
                Ok(self.collect_edges(keys))
            }
            Adjacency::Undirected { .. } => Err(GraphError::CannotUseForUndirectedGraph(
                "Node::incoming_edges",
            )),
        }
    }

    /// Edges starting at this node, ordered by target id
    pub fn outgoing_edges(&self) -> GraphResult<Vec<Edge<'g, N, E>>> {
        let id = self.id();
        match &self.record().adjacency {
            Adjacency::Directed { outgoing, .. } => {
                let keys = outgoing.iter().map(|&to| EdgeKey::directed(id, to));
                Ok(self.collect_edges(keys))
            }
            Adjacency::Undirected { .. } => Err(GraphError::CannotUseForUndirectedGraph(
                "Node::outgoing_edges",
            )),
        }
    }

    /// Every edge touching this node.
    ///
    /// Directed nodes yield incoming edges followed by outgoing edges, each
    /// group ordered by the other endpoint. Undirected nodes yield edges
    /// ordered by neighbor id.
    pub fn incident_edges(&self) -> Vec<Edge<'g, N, E>> {
        let id = self.id();
        match &self.record().adjacency {
            Adjacency::Directed { incoming, outgoing } => {
                let incoming = incoming.iter().map(|&from| EdgeKey::directed(from, id));
                let outgoing = outgoing.iter().map(|&to| EdgeKey::directed(id, to));
                self.collect_edges(incoming.chain(outgoing))
            }
            Adjacency::Undirected { neighbors } => {
                let keys = neighbors.iter().map(|&n| EdgeKey::undirected(id, n));
                self.collect_edges(keys)
            }
        }
    }

    /// Number of incident edges
    pub fn degree(&self) -> usize {
        match &self.record().adjacency {
            Adjacency::Directed { incoming, outgoing } => incoming.len() + outgoing.len(),
            Adjacency::Undirected { neighbors } => neighbors.len(),
        }
    }

    /// Adjacency lists are built from the edge table, so every key resolves.
    fn collect_edges(&self, keys: impl Iterator<Item = EdgeKey>) -> Vec<Edge<'g, N, E>> {
        keys.filter_map(|key| self.graph.edge_by_key(key)).collect()
    }

    pub(crate) fn adjacency(&self) -> &'g Adjacency {
        &self.record().adjacency
    }
}

impl<N, E> Clone for Node<'_, N, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, E> Copy for Node<'_, N, E> {}

impl<N, E> PartialEq for Node<'_, N, E> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.index == other.index
    }
}

impl<N, E> Eq for Node<'_, N, E> {}

impl<N: fmt::Debug, E> fmt::Debug for Node<'_, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record();
        f.debug_struct("Node")
            .field("id", &record.id)
            .field("value", &record.value)
            .field("adjacency", &record.adjacency)
            .finish()
    }
}
