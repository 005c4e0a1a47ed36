//! Trellis
//!
//! A value-storing graph engine: build a directed or undirected graph once,
//! then query and traverse it without further mutation.
//!
//! # Components
//!
//! - [`graph::GraphBuilder`]: accumulates node and edge declarations and
//!   validates them against a [`graph::BuilderConfig`] policy
//! - [`graph::Graph`]: the immutable, arena-backed result with [`graph::Node`]
//!   and [`graph::Edge`] views
//! - [`algo::depth_first_search`]: one DFS driver parameterized by direction
//!   (forward, reverse or undirected) and root order
//! - [`algo::kosaraju`]: strongly connected components (connected components
//!   on undirected graphs)
//!
//! ## Example Usage
//!
//! ```rust
//! use trellis::algo::kosaraju;
//! use trellis::graph::{BuilderConfig, GraphBuilder};
//!
//! let mut builder = GraphBuilder::<&str, &str>::with_config(BuilderConfig::directed());
//! builder
//!     .add_node(1, Some("node-val1"))
//!     .add_node(2, Some("node-val2"))
//!     .add_edge(1, 2, Some("edge-val"))
//!     .add_edge(2, 1, None);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.edge(1, 2).unwrap().value(), Ok(&"edge-val"));
//! assert_eq!(graph.node(1).unwrap().outgoing().unwrap(), &[2]);
//!
//! let components = kosaraju(&graph);
//! assert_eq!(components.len(), 1);
//! assert_eq!(components[0].ids(), vec![1, 2]);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use algo::{
    depth_first_search, kosaraju, DfsConfig, DfsEvent, Direction, StronglyConnectedComponent,
};
pub use graph::{
    BuilderConfig, Edge, EdgeKey, Graph, GraphBuilder, GraphError, GraphResult, Node, NodeId,
    Orientation,
};
