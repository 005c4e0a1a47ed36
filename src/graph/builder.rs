//! Validating graph builder
//!
//! The builder accumulates node and edge declarations in any order and turns
//! them into an immutable [`Graph`]. Validation follows the policy in
//! [`BuilderConfig`]. The first invalid call is recorded; every later call is
//! ignored and [`GraphBuilder::build`] returns that recorded error.

use super::config::BuilderConfig;
use super::edge::EdgeRecord;
use super::node::{Adjacency, NodeRecord};
use super::store::{Graph, GraphError, GraphResult};
use super::types::{EdgeKey, NodeId, Orientation};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Accumulates nodes and edges for a single [`Graph`]
#[derive(Debug, Clone)]
pub struct GraphBuilder<N = (), E = ()> {
    config: BuilderConfig,
    nodes: BTreeMap<NodeId, Option<N>>,
    edges: BTreeMap<EdgeKey, Option<E>>,
    status: GraphResult<()>,
}

impl<N, E> Default for GraphBuilder<N, E> {
    fn default() -> Self {
        Self::with_config(BuilderConfig::default())
    }
}

impl<N, E> GraphBuilder<N, E> {
    /// Create a builder for a strict undirected graph
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        GraphBuilder {
            config,
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            status: Ok(()),
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// The first error recorded by `add_node`/`add_edge`, if any
    pub fn error(&self) -> Option<&GraphError> {
        self.status.as_ref().err()
    }

    /// Number of distinct nodes declared so far
    pub fn pending_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges declared so far
    pub fn pending_edges(&self) -> usize {
        self.edges.len()
    }

    /// Declare a node.
    ///
    /// Fails with `DuplicateNode` on a repeated id unless duplicates are
    /// allowed, in which case the later value replaces the earlier one.
    pub fn add_node(&mut self, id: NodeId, value: Option<N>) -> &mut Self {
        if self.status.is_err() {
            trace!("Ignoring node {} after earlier builder error", id);
            return self;
        }

        if self.nodes.contains_key(&id) && !self.config.allow_duplicate_nodes {
            return self.fail(GraphError::DuplicateNode(id));
        }

        self.nodes.insert(id, value);
        self
    }

    /// Declare an edge.
    ///
    /// Checks, in order: both endpoints already declared (skipped when
    /// edges are built incrementally), self-loops, duplicates. Undirected
    /// edges are normalized first, so `(a, b)` and `(b, a)` are the same edge.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, value: Option<E>) -> &mut Self {
        if self.status.is_err() {
            trace!(
                "Ignoring edge {} -> {} after earlier builder error",
                from,
                to
            );
            return self;
        }

        if !self.config.build_edges_incrementally {
            for endpoint in [from, to] {
                if !self.nodes.contains_key(&endpoint) {
                    return self.fail(GraphError::NodeNotFound(endpoint));
                }
            }
        }

        if from == to && !self.config.allow_redundant_edges {
            return self.fail(GraphError::RedundantEdge(from));
        }

        let key = EdgeKey::for_orientation(self.config.orientation(), from, to);
        if self.edges.contains_key(&key) && !self.config.allow_duplicate_edges {
            return self.fail(GraphError::DuplicateEdge {
                from: key.first,
                to: key.second,
            });
        }

        self.edges.insert(key, value);
        self
    }

    fn fail(&mut self, error: GraphError) -> &mut Self {
        debug!("Graph builder recorded error: {}", error);
        self.status = Err(error);
        self
    }

    /// Consume the builder and produce the graph.
    ///
    /// Returns the first recorded error if any call failed, or
    /// `NodeNotFound` when an incrementally added edge references a node
    /// that was never declared.
    pub fn build(self) -> GraphResult<Graph<N, E>> {
        self.status?;

        let orientation = self.config.orientation();

        // BTreeMap iteration keeps nodes ascending by id, so arena index == rank
        let mut index = BTreeMap::new();
        let mut nodes: Vec<NodeRecord<N>> = Vec::with_capacity(self.nodes.len());
        for (idx, (id, value)) in self.nodes.into_iter().enumerate() {
            index.insert(id, idx);
            nodes.push(NodeRecord {
                id,
                value,
                adjacency: empty_adjacency(orientation),
            });
        }

        let mut edges = Vec::with_capacity(self.edges.len());
        for (key, value) in self.edges {
            let first = *index
                .get(&key.first)
                .ok_or(GraphError::NodeNotFound(key.first))?;
            let second = *index
                .get(&key.second)
                .ok_or(GraphError::NodeNotFound(key.second))?;

            link(&mut nodes, first, second, key);
            edges.push(EdgeRecord { key, value });
        }

        for node in &mut nodes {
            node.adjacency.sort();
        }

        debug!(
            "Built {} graph with {} nodes and {} edges",
            orientation,
            nodes.len(),
            edges.len()
        );

        // Edge keys come out of the BTreeMap already in canonical order
        Ok(Graph::from_parts(orientation, nodes, edges))
    }
}

fn empty_adjacency(orientation: Orientation) -> Adjacency {
    match orientation {
        Orientation::Directed => Adjacency::Directed {
            incoming: Vec::new(),
            outgoing: Vec::new(),
        },
        Orientation::Undirected => Adjacency::Undirected {
            neighbors: Vec::new(),
        },
    }
}

/// Cross-link the adjacency lists of the two endpoints of `key`
fn link<N>(nodes: &mut [NodeRecord<N>], first: usize, second: usize, key: EdgeKey) {
    if let Adjacency::Directed { outgoing, .. } = &mut nodes[first].adjacency {
        outgoing.push(key.second);
    }
    if let Adjacency::Directed { incoming, .. } = &mut nodes[second].adjacency {
        incoming.push(key.first);
    }

    if let Adjacency::Undirected { neighbors } = &mut nodes[first].adjacency {
        neighbors.push(key.second);
    }
    if key.is_self_loop() {
        return;
    }
    if let Adjacency::Undirected { neighbors } = &mut nodes[second].adjacency {
        neighbors.push(key.first);
    }
}
