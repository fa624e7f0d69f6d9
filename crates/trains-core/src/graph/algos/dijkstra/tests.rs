use super::*;
use crate::graph::WeightedDigraph;

fn sample() -> WeightedDigraph {
    WeightedDigraph::from_spec("Graph: AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7")
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        node: 'A',
        distance: 1,
    };
    let entry2 = HeapEntry {
        node: 'B',
        distance: 2,
    };
    let entry3 = HeapEntry {
        node: 'C',
        distance: 1,
    };

    assert_eq!(entry1.cmp(&entry2), Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), Ordering::Greater);

    // Equal distances fall back to node order
    assert_eq!(entry1.cmp(&entry3), Ordering::Less);

    assert_eq!(entry1, entry1);
    assert_ne!(entry1, entry3);
}

#[test]
fn test_heap_pops_smallest_first() {
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        node: 'B',
        distance: 7,
    }));
    heap.push(Reverse(HeapEntry {
        node: 'C',
        distance: 2,
    }));
    heap.push(Reverse(HeapEntry {
        node: 'A',
        distance: 2,
    }));

    let order: Vec<Node> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.node)).collect();
    assert_eq!(order, vec!['A', 'C', 'B']);
}

#[test]
fn test_shortest_path_sample() {
    let graph = sample();
    assert_eq!(shortest_path(&graph, 'A', 'C'), Some(9));
    assert_eq!(shortest_path(&graph, 'B', 'B'), Some(9));
}

#[test]
fn test_shortest_path_prefers_longer_hop_count() {
    // A-E-B costs 10, direct A-B costs 5; A-D-E costs 11, direct A-E costs 7
    let graph = sample();
    assert_eq!(shortest_path(&graph, 'A', 'B'), Some(5));
    assert_eq!(shortest_path(&graph, 'A', 'E'), Some(7));
    assert_eq!(shortest_path(&graph, 'C', 'B'), Some(5));
}

#[test]
fn test_shortest_path_self_without_cycle() {
    // A is never a destination, so no cycle returns to it
    assert_eq!(shortest_path(&sample(), 'A', 'A'), None);
}

#[test]
fn test_shortest_path_unreachable() {
    // Nothing leads back to A
    assert_eq!(shortest_path(&sample(), 'C', 'A'), None);
}

#[test]
fn test_shortest_path_destination_only_node_is_unknown() {
    let graph = WeightedDigraph::from_spec("AB1 BZ2");
    assert_eq!(shortest_path(&graph, 'A', 'Z'), None);
    assert_eq!(shortest_path(&graph, 'Z', 'A'), None);
    assert_eq!(shortest_path(&graph, 'A', 'B'), Some(1));
}

#[test]
fn test_shortest_path_unknown_nodes() {
    let graph = sample();
    assert_eq!(shortest_path(&graph, 'Q', 'C'), None);
    assert_eq!(shortest_path(&graph, 'A', 'Q'), None);
}

#[test]
fn test_shortest_path_self_loop() {
    let graph = WeightedDigraph::from_spec("AA4 AB1 BA1");
    assert_eq!(shortest_path(&graph, 'A', 'A'), Some(2));
}

#[test]
fn test_shortest_path_relaxes_through_cheaper_chain() {
    let graph = WeightedDigraph::from_spec("AD10 AB1 BC1 CD1 DA1");
    assert_eq!(shortest_path(&graph, 'A', 'D'), Some(3));
    assert_eq!(shortest_path(&graph, 'A', 'A'), Some(4));
}

#[test]
fn test_shortest_path_empty_graph() {
    let graph = WeightedDigraph::from_spec("");
    assert_eq!(shortest_path(&graph, 'A', 'C'), None);
    assert_eq!(shortest_path(&graph, 'B', 'B'), None);
}
