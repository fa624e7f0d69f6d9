use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Node, Weight};

/// Sum the edge weights along `path`, hop by hop.
///
/// Returns `None` for an empty path or as soon as any consecutive pair has no
/// direct edge. A single-node path has distance 0.
pub fn route_distance(provider: &dyn GraphProvider, path: &[Node]) -> Option<Weight> {
    if path.is_empty() {
        return None;
    }

    path.windows(2).try_fold(0, |total: Weight, hop| {
        let weight = provider.outbound(hop[0])?.get(&hop[1])?;
        Some(total.saturating_add(*weight))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedDigraph;

    fn sample() -> WeightedDigraph {
        WeightedDigraph::from_spec("Graph: AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7")
    }

    #[test]
    fn test_route_distance_sample_routes() {
        let graph = sample();
        assert_eq!(route_distance(&graph, &['A', 'B', 'C']), Some(9));
        assert_eq!(route_distance(&graph, &['A', 'D']), Some(5));
        assert_eq!(route_distance(&graph, &['A', 'D', 'C']), Some(13));
        assert_eq!(route_distance(&graph, &['A', 'E', 'B', 'C', 'D']), Some(22));
        assert_eq!(route_distance(&graph, &['A', 'E', 'D']), None);
    }

    #[test]
    fn test_route_distance_empty_path() {
        assert_eq!(route_distance(&sample(), &[]), None);
    }

    #[test]
    fn test_route_distance_single_node() {
        let graph = sample();
        assert_eq!(route_distance(&graph, &['A']), Some(0));
        // Not in the graph at all
        assert_eq!(route_distance(&graph, &['Z']), Some(0));
    }

    #[test]
    fn test_route_distance_no_partial_sum() {
        // A-B exists, B-A does not
        assert_eq!(route_distance(&sample(), &['A', 'B', 'A', 'B']), None);
    }

    #[test]
    fn test_route_distance_through_destination_only_node() {
        let graph = WeightedDigraph::from_spec("AB1 BZ2");
        assert_eq!(route_distance(&graph, &['A', 'B', 'Z']), Some(3));
        assert_eq!(route_distance(&graph, &['A', 'B', 'Z', 'A']), None);
    }
}
