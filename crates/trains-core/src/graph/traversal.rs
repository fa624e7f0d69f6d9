use crate::graph::types::{Adjacency, Node};

/// Trait for providing read-only adjacency to the graph algorithms
pub trait GraphProvider {
    /// Outgoing edges of `node`, or `None` if it never appears as a source
    fn outbound(&self, node: Node) -> Option<&Adjacency>;

    /// Every node with at least one outgoing edge
    fn source_nodes(&self) -> Vec<Node>;
}
