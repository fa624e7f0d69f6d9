use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Node, Weight, STALLED_HOP_LIMIT};

/// Count walks from `start` that land on `end` within a stop budget.
///
/// With `exact` a hop onto `end` only counts when it is exactly the
/// `max_stops`-th stop; otherwise every hop onto `end` at stop 1..=max_stops
/// counts, so a walk passing through `end` several times is counted at each
/// pass. Nodes may be revisited.
pub fn count_trips(
    provider: &dyn GraphProvider,
    start: Node,
    end: Node,
    max_stops: u32,
    exact: bool,
) -> u64 {
    if max_stops == 0 {
        return 0;
    }
    count_trips_from(provider, start, end, max_stops, exact)
}

fn count_trips_from(
    provider: &dyn GraphProvider,
    node: Node,
    end: Node,
    stops_left: u32,
    exact: bool,
) -> u64 {
    let Some(edges) = provider.outbound(node) else {
        return 0;
    };

    let mut count = 0;
    for &next in edges.keys() {
        if next == end && (!exact || stops_left == 1) {
            count += 1;
        }
        if stops_left > 1 {
            count += count_trips_from(provider, next, end, stops_left - 1, exact);
        }
    }
    count
}

/// Count hops onto `end` whose edge weight is below the remaining budget.
///
/// The budget starts at `distance_bound` and each recursive step subtracts
/// the weight of the edge just taken. A negative budget ends the branch.
/// A branch that goes [`STALLED_HOP_LIMIT`] hops without lowering the budget
/// below anything seen earlier on the walk is also cut, which bounds walks
/// around zero- and negative-weight cycles.
pub fn count_trips_below_distance(
    provider: &dyn GraphProvider,
    start: Node,
    end: Node,
    distance_bound: Weight,
) -> u64 {
    let walk = BudgetWalk {
        budget: distance_bound,
        lowest: distance_bound,
        stalled: 0,
    };
    count_below_from(provider, start, end, walk)
}

#[derive(Debug, Clone, Copy)]
struct BudgetWalk {
    budget: Weight,
    lowest: Weight,
    stalled: usize,
}

impl BudgetWalk {
    fn step(self, weight: Weight) -> Self {
        let budget = self.budget.saturating_sub(weight);
        if budget < self.lowest {
            Self {
                budget,
                lowest: budget,
                stalled: 0,
            }
        } else {
            Self {
                budget,
                lowest: self.lowest,
                stalled: self.stalled + 1,
            }
        }
    }
}

fn count_below_from(
    provider: &dyn GraphProvider,
    node: Node,
    end: Node,
    walk: BudgetWalk,
) -> u64 {
    if walk.budget < 0 {
        return 0;
    }
    if walk.stalled >= STALLED_HOP_LIMIT {
        tracing::debug!(node = %node, budget = walk.budget, "walk stalled on non-positive cycle");
        return 0;
    }
    let Some(edges) = provider.outbound(node) else {
        return 0;
    };

    let mut count = 0;
    for (&next, &weight) in edges {
        if next == end && weight < walk.budget {
            count += 1;
        }
        count += count_below_from(provider, next, end, walk.step(weight));
    }
    count
}
