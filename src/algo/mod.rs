//! Graph algorithms
//!
//! Read-only algorithms over a built [`Graph`](crate::graph::Graph). Each call
//! keeps its visited sets and accumulators local, so any number of calls may
//! run against the same graph concurrently.

pub mod community;
pub mod dfs;

pub use community::{component_index, kosaraju, StronglyConnectedComponent};
pub use dfs::{depth_first_search, DfsConfig, DfsEvent, Direction};
