//! Strongly connected components
//!
//! Kosaraju's two-pass algorithm built on the shared DFS driver:
//! 1. Forward DFS over all nodes, recording the finishing order
//! 2. Reverse DFS with roots taken in decreasing finish time; every tree of
//!    the second pass is one component
//!
//! On undirected graphs both passes walk incident edges, so the result is the
//! connected components.

use super::dfs::{traverse, DfsEvent, Direction};
use crate::graph::{Graph, Node, NodeId};
use rustc_hash::FxHashMap;
use std::fmt;
use tracing::debug;

/// A maximal set of mutually reachable nodes, sorted ascending by id
pub struct StronglyConnectedComponent<'g, N, E> {
    nodes: Vec<Node<'g, N, E>>,
}

impl<'g, N, E> StronglyConnectedComponent<'g, N, E> {
    fn new(mut nodes: Vec<Node<'g, N, E>>) -> Self {
        nodes.sort_by_key(|node| node.id());
        StronglyConnectedComponent { nodes }
    }

    pub fn nodes(&self) -> &[Node<'g, N, E>] {
        &self.nodes
    }

    pub fn ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|node| node.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes
            .binary_search_by_key(&id, |node| node.id())
            .is_ok()
    }

    /// Smallest member id; `None` only for an empty component
    pub fn min_id(&self) -> Option<NodeId> {
        self.nodes.first().map(|node| node.id())
    }
}

impl<N: fmt::Debug, E> fmt::Debug for StronglyConnectedComponent<'_, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.nodes.iter()).finish()
    }
}

/// Kosaraju's strongly connected components.
///
/// Components come back ordered by increasing size, ties broken by smallest
/// member id, so the output is deterministic.
pub fn kosaraju<N, E>(graph: &Graph<N, E>) -> Vec<StronglyConnectedComponent<'_, N, E>> {
    // Pass 1: finishing order
    let mut finished = Vec::with_capacity(graph.node_count());
    traverse(
        graph,
        Direction::Forward,
        0..graph.node_count(),
        &mut |event| {
            if let DfsEvent::Finish(node) = event {
                finished.push(node.index());
            }
        },
    );
    // Decreasing finish time
    finished.reverse();

    // Pass 2: transposed graph, one component per fresh root
    let mut components = Vec::new();
    let mut current = Vec::new();
    traverse(graph, Direction::Reverse, finished, &mut |event| match event {
        DfsEvent::Discover(node) => current.push(node),
        DfsEvent::RootFinish(_) if !current.is_empty() => {
            let nodes = std::mem::take(&mut current);
            components.push(StronglyConnectedComponent::new(nodes));
        }
        _ => {}
    });

    components.sort_by_key(|component| (component.len(), component.min_id()));

    debug!(
        "Kosaraju found {} components over {} nodes",
        components.len(),
        graph.node_count()
    );
    components
}

/// Map every node id to the position of its component in `components`
pub fn component_index<N, E>(
    components: &[StronglyConnectedComponent<'_, N, E>],
) -> FxHashMap<NodeId, usize> {
    let mut index = FxHashMap::default();
    for (position, component) in components.iter().enumerate() {
        for node in component.nodes() {
            index.insert(node.id(), position);
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{BuilderConfig, GraphBuilder};

    fn ids<N, E>(components: &[StronglyConnectedComponent<'_, N, E>]) -> Vec<Vec<NodeId>> {
        components.iter().map(|c| c.ids()).collect()
    }

    #[test]
    fn test_kosaraju_directed() {
        let mut builder: GraphBuilder = GraphBuilder::with_config(BuilderConfig::directed());
        for id in 1..=8 {
            builder.add_node(id, None);
        }
        // cycle 1 -> 2 -> 3 -> 4 -> 1
        builder
            .add_edge(1, 2, None)
            .add_edge(2, 3, None)
            .add_edge(3, 4, None)
            .add_edge(4, 1, None);
        // bridge into the second cycle
        builder.add_edge(3, 5, None);
        // cycle 5 -> 6 -> 7 -> 5
        builder
            .add_edge(5, 6, None)
            .add_edge(6, 7, None)
            .add_edge(7, 5, None);
        // bridge to a lone node
        builder.add_edge(7, 8, None);
        let graph = builder.build().unwrap();

        let components = kosaraju(&graph);
        assert_eq!(
            ids(&components),
            vec![vec![8], vec![5, 6, 7], vec![1, 2, 3, 4]]
        );
    }

    #[test]
    fn test_kosaraju_undirected() {
        let mut builder: GraphBuilder = GraphBuilder::new();
        for id in 1..=4 {
            builder.add_node(id, None);
        }
        builder.add_edge(1, 2, None).add_edge(3, 4, None);
        let graph = builder.build().unwrap();

        assert_eq!(ids(&kosaraju(&graph)), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_equal_size_ordered_by_min_id() {
        let mut builder: GraphBuilder = GraphBuilder::with_config(BuilderConfig::directed());
        for id in [10, 20, 30, 40] {
            builder.add_node(id, None);
        }
        builder.add_edge(30, 40, None).add_edge(40, 30, None);
        builder.add_edge(10, 20, None).add_edge(20, 10, None);
        builder.add_edge(30, 10, None);
        let graph = builder.build().unwrap();

        assert_eq!(ids(&kosaraju(&graph)), vec![vec![10, 20], vec![30, 40]]);
    }

    #[test]
    fn test_acyclic_graph_yields_singletons() {
        let mut builder: GraphBuilder = GraphBuilder::with_config(BuilderConfig::directed());
        for id in 1..=3 {
            builder.add_node(id, None);
        }
        builder.add_edge(3, 2, None).add_edge(2, 1, None);
        let graph = builder.build().unwrap();

        assert_eq!(ids(&kosaraju(&graph)), vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = GraphBuilder::<(), ()>::new().build().unwrap();
        assert!(kosaraju(&graph).is_empty());
    }

    #[test]
    fn test_component_index() {
        let mut builder: GraphBuilder = GraphBuilder::new();
        for id in 1..=5 {
            builder.add_node(id, None);
        }
        builder
            .add_edge(1, 2, None)
            .add_edge(2, 3, None)
            .add_edge(4, 5, None);
        let graph = builder.build().unwrap();
        let components = kosaraju(&graph);
        let index = component_index(&components);

        assert_eq!(index[&4], 0);
        assert_eq!(index[&5], 0);
        assert_eq!(index[&1], 1);
        assert_eq!(index[&3], 1);
        assert!(components[1].contains(2));
        assert!(!components[1].contains(4));
    }
}
