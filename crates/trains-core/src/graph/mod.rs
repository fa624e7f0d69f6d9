//! Weighted directed graph and its queries
//!
//! Towns are single characters and tracks are one-way edges with an integer
//! distance. The graph is built once from a textual edge list and then only
//! read:
//! - route distance along an exact sequence of towns
//! - trip counting bounded by stops or by remaining distance
//! - Dijkstra shortest path between two towns

pub mod algos;
pub mod digraph;
pub mod edge;
pub mod traversal;
pub mod types;

pub use digraph::WeightedDigraph;
pub use edge::{parse_edge, tokenize_spec};
pub use traversal::GraphProvider;
pub use types::{Adjacency, EdgeSpec, Node, Weight, INFINITY, STALLED_HOP_LIMIT};
