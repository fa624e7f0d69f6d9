use crate::error::{Result, TrainsError};
use crate::graph::algos;
use crate::graph::edge::{parse_edge, tokenize_spec};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Adjacency, EdgeSpec, Node, Weight};
use std::collections::{BTreeMap, BTreeSet};

/// Directed graph with integer edge weights, immutable once built.
///
/// Stored as source -> (destination -> weight). A node that only ever appears
/// as a destination has no entry of its own and is treated as having no
/// outgoing edges. At most one edge exists per ordered pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedDigraph {
    contents: BTreeMap<Node, Adjacency>,
}

impl WeightedDigraph {
    /// Build a graph from a free-form spec such as
    /// `"Graph: AB5, BC4, CD8"`.
    ///
    /// Malformed tokens are skipped and a repeated source/destination pair
    /// overwrites the earlier weight. Never fails; an empty or entirely
    /// malformed spec gives an empty graph.
    pub fn from_spec(spec: &str) -> Self {
        let mut graph = Self::default();
        let tokens = tokenize_spec(spec);
        let mut skipped = 0usize;

        for token in &tokens {
            match parse_edge(token) {
                Some(edge) => {
                    graph.insert(edge);
                }
                None => {
                    skipped += 1;
                    tracing::debug!(token = %token, "skipping malformed edge token");
                }
            }
        }

        tracing::debug!(
            tokens = tokens.len(),
            skipped,
            edges = graph.edge_count(),
            "graph_built"
        );
        graph
    }

    /// Build a graph, rejecting malformed tokens and duplicate edges.
    ///
    /// Every malformed token is reported together in
    /// [`TrainsError::InvalidEdges`]; the first duplicate pair found yields
    /// [`TrainsError::DuplicateEdge`].
    pub fn from_spec_strict(spec: &str) -> Result<Self> {
        let mut graph = Self::default();
        let mut invalid = Vec::new();

        for token in tokenize_spec(spec) {
            let Some(edge) = parse_edge(&token) else {
                invalid.push(token);
                continue;
            };
            if let Some(first) = graph.insert(edge) {
                return Err(TrainsError::DuplicateEdge {
                    from: edge.source,
                    to: edge.dest,
                    first,
                    second: edge.weight,
                });
            }
        }

        if !invalid.is_empty() {
            return Err(TrainsError::InvalidEdges { tokens: invalid });
        }
        Ok(graph)
    }

    /// Insert an edge, returning the weight it replaced
    fn insert(&mut self, edge: EdgeSpec) -> Option<Weight> {
        self.contents
            .entry(edge.source)
            .or_default()
            .insert(edge.dest, edge.weight)
    }

    /// Outgoing edges of `node`, if it is a source
    pub fn outgoing(&self, node: Node) -> Option<&Adjacency> {
        self.contents.get(&node)
    }

    /// All nodes, sources and destinations alike, in sorted order
    pub fn nodes(&self) -> Vec<Node> {
        let mut nodes: BTreeSet<Node> = self.contents.keys().copied().collect();
        nodes.extend(self.contents.values().flat_map(|edges| edges.keys().copied()));
        nodes.into_iter().collect()
    }

    /// All edges, sorted by source then destination
    pub fn edges(&self) -> Vec<EdgeSpec> {
        self.contents
            .iter()
            .flat_map(|(&source, edges)| {
                edges
                    .iter()
                    .map(move |(&dest, &weight)| EdgeSpec::new(source, dest, weight))
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }

    pub fn edge_count(&self) -> usize {
        self.contents.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Total distance along `path`, or `None` if any hop is missing
    #[tracing::instrument(level = "debug", skip(self), ret)]
    pub fn route_distance(&self, path: &[Node]) -> Option<Weight> {
        algos::route_distance(self, path)
    }

    /// Number of walks from `start` to `end` within (or exactly at)
    /// `max_stops` stops
    #[tracing::instrument(level = "debug", skip(self), ret)]
    pub fn count_trips(&self, start: Node, end: Node, max_stops: u32, exact: bool) -> u64 {
        algos::count_trips(self, start, end, max_stops, exact)
    }

    /// Number of hops onto `end` that fit under the remaining distance budget
    #[tracing::instrument(level = "debug", skip(self), ret)]
    pub fn count_trips_below_distance(
        &self,
        start: Node,
        end: Node,
        distance_bound: Weight,
    ) -> u64 {
        algos::count_trips_below_distance(self, start, end, distance_bound)
    }

    /// Shortest distance from `start` to `end`, or `None` if there is no route
    #[tracing::instrument(level = "debug", skip(self), ret)]
    pub fn shortest_path(&self, start: Node, end: Node) -> Option<Weight> {
        algos::shortest_path(self, start, end)
    }
}

impl GraphProvider for WeightedDigraph {
    fn outbound(&self, node: Node) -> Option<&Adjacency> {
        self.outgoing(node)
    }

    fn source_nodes(&self) -> Vec<Node> {
        self.contents.keys().copied().collect()
    }
}
