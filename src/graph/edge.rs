//! Edge records and edge views
//!
//! Edges are identified by their endpoint pair ([`EdgeKey`]). In undirected
//! graphs the key is normalized so the smaller id comes first, and a single
//! record serves lookups from either side.

use super::node::Node;
use super::store::{Graph, GraphError, GraphResult};
use super::types::{EdgeKey, NodeId};
use std::fmt;

/// Stored edge data
#[derive(Debug, Clone)]
pub(crate) struct EdgeRecord<E> {
    pub(crate) key: EdgeKey,
    pub(crate) value: Option<E>,
}

/// Read-only view of an edge in a built [`Graph`]
pub struct Edge<'g, N, E> {
    graph: &'g Graph<N, E>,
    index: usize,
}

impl<'g, N, E> Edge<'g, N, E> {
    pub(crate) fn new(graph: &'g Graph<N, E>, index: usize) -> Self {
        Edge { graph, index }
    }

    fn record(&self) -> &'g EdgeRecord<E> {
        &self.graph.edge_records()[self.index]
    }

    pub fn key(&self) -> EdgeKey {
        self.record().key
    }

    pub fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    pub fn is_self_loop(&self) -> bool {
        self.key().is_self_loop()
    }

    /// Source node of a directed edge
    pub fn from(&self) -> GraphResult<Node<'g, N, E>> {
        if !self.is_directed() {
            return Err(GraphError::CannotUseForUndirectedGraph("Edge::from"));
        }
        self.graph.node(self.key().first)
    }

    /// Target node of a directed edge
    pub fn to(&self) -> GraphResult<Node<'g, N, E>> {
        if !self.is_directed() {
            return Err(GraphError::CannotUseForUndirectedGraph("Edge::to"));
        }
        self.graph.node(self.key().second)
    }

    /// Endpoint nodes: `[from, to]` when directed, ascending by id when
    /// undirected. A self-loop yields a single node.
    pub fn nodes(&self) -> GraphResult<Vec<Node<'g, N, E>>> {
        let key = self.key();
        let mut nodes = Vec::with_capacity(2);
        nodes.push(self.graph.node(key.first)?);
        if !key.is_self_loop() {
            nodes.push(self.graph.node(key.second)?);
        }
        Ok(nodes)
    }

    /// The endpoint across from `id`; the node itself for a self-loop
    pub fn opposite(&self, id: NodeId) -> GraphResult<Node<'g, N, E>> {
        let other = self.key().opposite(id).ok_or(GraphError::NodeNotFound(id))?;
        self.graph.node(other)
    }

    /// The edge's value, or `NoValueFoundInEdge` when it was added without one
    pub fn value(&self) -> GraphResult<&'g E> {
        let key = self.key();
        self.value_opt().ok_or(GraphError::NoValueFoundInEdge {
            from: key.first,
            to: key.second,
        })
    }

    pub fn value_opt(&self) -> Option<&'g E> {
        self.record().value.as_ref()
    }
}

impl<N, E> Clone for Edge<'_, N, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, E> Copy for Edge<'_, N, E> {}

impl<N, E> PartialEq for Edge<'_, N, E> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.index == other.index
    }
}

impl<N, E> Eq for Edge<'_, N, E> {}

impl<N, E: fmt::Debug> fmt::Debug for Edge<'_, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record();
        f.debug_struct("Edge")
            .field("key", &record.key)
            .field("directed", &self.is_directed())
            .field("value", &record.value)
            .finish()
    }
}
