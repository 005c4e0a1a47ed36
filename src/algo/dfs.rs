//! Depth-first search
//!
//! One traversal driver serves every caller: the direction (forward along
//! outgoing edges, reverse along incoming edges, or undirected along both) and
//! the root order are parameters, and callers observe the walk through
//! [`DfsEvent`]s. Undirected graphs always walk incident edges, whatever
//! direction is requested.

use crate::graph::node::Adjacency;
use crate::graph::{Graph, GraphError, GraphResult, Node, NodeId};
use tracing::trace;

const EMPTY: &[NodeId] = &[];

/// Which edges a directed traversal follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Outgoing edges
    #[default]
    Forward,
    /// Incoming edges, i.e. a walk over the transposed graph
    Reverse,
    /// Incoming then outgoing edges, ignoring orientation
    Undirected,
}

/// Traversal parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DfsConfig {
    pub direction: Direction,
    /// Root visitation order for the outer loop. `None` walks all nodes
    /// ascending by id.
    pub order: Option<Vec<NodeId>>,
}

impl DfsConfig {
    pub fn forward() -> Self {
        Self::default()
    }

    pub fn reverse() -> Self {
        Self {
            direction: Direction::Reverse,
            order: None,
        }
    }

    pub fn undirected() -> Self {
        Self {
            direction: Direction::Undirected,
            order: None,
        }
    }

    pub fn with_order(mut self, order: Vec<NodeId>) -> Self {
        self.order = Some(order);
        self
    }
}

/// Traversal callbacks, in the order they fire for a single root:
/// `RootStart`, then `Discover`/`Finish` pairs nested like the recursion,
/// then `RootFinish`.
///
/// Root events fire for every entry of the outer loop. A root already reached
/// from an earlier one gets `RootStart` immediately followed by `RootFinish`.
#[derive(Debug)]
pub enum DfsEvent<'g, N, E> {
    /// An outer-loop root is about to be explored
    RootStart(Node<'g, N, E>),
    /// Node marked visited, before its adjacent nodes are explored
    Discover(Node<'g, N, E>),
    /// All nodes reachable through this node have been explored
    Finish(Node<'g, N, E>),
    /// The root's whole subtree has been explored
    RootFinish(Node<'g, N, E>),
}

/// Run a depth-first search over `graph`, reporting every event to `visitor`.
///
/// Fails with `NodeNotFound` if the custom order names an id the graph does
/// not contain; the check happens before any event fires.
pub fn depth_first_search<'g, N, E, F>(
    graph: &'g Graph<N, E>,
    config: &DfsConfig,
    mut visitor: F,
) -> GraphResult<()>
where
    F: FnMut(DfsEvent<'g, N, E>),
{
    match &config.order {
        Some(order) => {
            let roots = order
                .iter()
                .map(|&id| graph.index_of(id).ok_or(GraphError::NodeNotFound(id)))
                .collect::<GraphResult<Vec<usize>>>()?;
            traverse(graph, config.direction, roots, &mut visitor);
        }
        None => traverse(graph, config.direction, 0..graph.node_count(), &mut visitor),
    }
    Ok(())
}

/// Ids of the nodes adjacent to `node` for the given direction, as two runs
/// walked back to back
fn adjacent<'g, N, E>(node: Node<'g, N, E>, direction: Direction) -> (&'g [NodeId], &'g [NodeId]) {
    match (node.adjacency(), direction) {
        (Adjacency::Directed { outgoing, .. }, Direction::Forward) => (outgoing.as_slice(), EMPTY),
        (Adjacency::Directed { incoming, .. }, Direction::Reverse) => (incoming.as_slice(), EMPTY),
        (Adjacency::Directed { incoming, outgoing }, Direction::Undirected) => {
            (incoming.as_slice(), outgoing.as_slice())
        }
        (Adjacency::Undirected { neighbors }, _) => (neighbors.as_slice(), EMPTY),
    }
}

/// Core driver over arena indices.
///
/// Uses an explicit stack of `(node index, next adjacent position)` frames so
/// deep graphs cannot overflow the call stack; event order matches the
/// recursive formulation exactly.
pub(crate) fn traverse<'g, N, E, F>(
    graph: &'g Graph<N, E>,
    direction: Direction,
    roots: impl IntoIterator<Item = usize>,
    visitor: &mut F,
) where
    F: FnMut(DfsEvent<'g, N, E>),
{
    let mut visited = vec![false; graph.node_count()];
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in roots {
        let root_node = Node::new(graph, root);
        visitor(DfsEvent::RootStart(root_node));

        if !visited[root] {
            trace!("DFS descending from root {}", root_node.id());
            visited[root] = true;
            visitor(DfsEvent::Discover(root_node));
            stack.push((root, 0));
        }

        while let Some(frame) = stack.last_mut() {
            let (idx, pos) = *frame;
            let node = Node::new(graph, idx);
            let (first, second) = adjacent(node, direction);

            // Self-loops and antiparallel pairs repeat ids across the two
            // runs; the visited check absorbs them.
            match first.get(pos).or_else(|| second.get(pos - first.len())) {
                Some(&target) => {
                    frame.1 += 1;
                    let Some(next) = graph.index_of(target) else {
                        continue;
                    };
                    if !visited[next] {
                        visited[next] = true;
                        visitor(DfsEvent::Discover(Node::new(graph, next)));
                        stack.push((next, 0));
                    }
                }
                None => {
                    stack.pop();
                    visitor(DfsEvent::Finish(node));
                }
            }
        }

        visitor(DfsEvent::RootFinish(root_node));
    }
}
