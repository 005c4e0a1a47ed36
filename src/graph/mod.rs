//! Graph data model
//!
//! This module implements the value-carrying graph:
//! - Nodes identified by caller-supplied ids, each with an optional value
//! - Edges identified by their endpoint pair, each with an optional value
//! - Directed and undirected orientations behind one query surface
//! - A validating builder producing immutable, arena-backed graphs

pub mod builder;
pub mod config;
pub mod edge;
pub mod node;
pub mod store;
pub mod types;

// Re-export main types
pub use builder::GraphBuilder;
pub use config::BuilderConfig;
pub use edge::Edge;
pub use node::Node;
pub use store::{Graph, GraphError, GraphResult};
pub use types::{EdgeKey, NodeId, Orientation};
