use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Node, Weight, INFINITY};
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

/// Min-heap entry (via `Reverse`), ordered by distance and then by node so
/// that ties resolve deterministically
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub node: Node,
    pub distance: Weight,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// State tracked during the Dijkstra run
struct DijkstraState {
    distances: BTreeMap<Node, Weight>,
    finalized: BTreeSet<Node>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl DijkstraState {
    /// Seed every source node with its direct distance from `start`.
    /// `start` itself stays infinite unless it has a self-loop.
    fn seeded(provider: &dyn GraphProvider, start: Node) -> Self {
        let start_edges = provider.outbound(start);
        let distances: BTreeMap<Node, Weight> = provider
            .source_nodes()
            .into_iter()
            .map(|node| {
                let direct = start_edges.and_then(|edges| edges.get(&node)).copied();
                (node, direct.unwrap_or(INFINITY))
            })
            .collect();

        let heap = distances
            .iter()
            .filter(|&(_, &distance)| distance < INFINITY)
            .map(|(&node, &distance)| Reverse(HeapEntry { node, distance }))
            .collect();

        Self {
            distances,
            finalized: BTreeSet::new(),
            heap,
        }
    }

    /// Relax the outgoing edges of a freshly finalized node
    fn relax_from(&mut self, provider: &dyn GraphProvider, node: Node, distance: Weight) {
        let Some(edges) = provider.outbound(node) else {
            return;
        };

        for (&next, &weight) in edges {
            if self.finalized.contains(&next) {
                continue;
            }
            // Destination-only nodes are not tracked
            let Some(current) = self.distances.get_mut(&next) else {
                continue;
            };
            let candidate = distance.saturating_add(weight);
            if candidate < *current {
                *current = candidate;
                self.heap.push(Reverse(HeapEntry {
                    node: next,
                    distance: candidate,
                }));
            }
        }
    }
}

/// Length of the shortest route from `start` to `end`.
///
/// Both nodes must have outgoing edges, otherwise there is no route. The
/// distance from a node to itself is the shortest cycle through it, never a
/// zero-length stay. Returns `None` when `end` is unreachable.
pub fn shortest_path(provider: &dyn GraphProvider, start: Node, end: Node) -> Option<Weight> {
    provider.outbound(start)?;
    provider.outbound(end)?;

    let mut state = DijkstraState::seeded(provider, start);

    // An empty heap means every remaining node is unreachable
    while let Some(Reverse(HeapEntry { node, distance })) = state.heap.pop() {
        if !state.finalized.insert(node) {
            // Stale entry superseded by a shorter one
            continue;
        }
        state.relax_from(provider, node, distance);
    }

    state
        .distances
        .get(&end)
        .copied()
        .filter(|&distance| distance < INFINITY)
}

#[cfg(test)]
mod tests;
