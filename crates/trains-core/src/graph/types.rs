use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A town, identified by a single character
pub type Node = char;

/// Edge weight and accumulated distance
pub type Weight = i64;

/// Outgoing edges of one node: destination -> weight
pub type Adjacency = BTreeMap<Node, Weight>;

/// Distance sentinel for unreachable nodes.
/// Halved so that `INFINITY + weight` cannot overflow during relaxation.
pub const INFINITY: Weight = Weight::MAX / 2;

/// Consecutive hops a distance-bounded walk may take without its remaining
/// budget reaching a new low. Walks over positive weights set a new low on
/// every hop, so only cycles whose total weight is not positive hit it.
pub const STALLED_HOP_LIMIT: usize = 1024;

/// A single directed, weighted edge, as written in a graph spec (`AB5`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub source: Node,
    pub dest: Node,
    pub weight: Weight,
}

impl EdgeSpec {
    pub fn new(source: Node, dest: Node, weight: Weight) -> Self {
        Self {
            source,
            dest,
            weight,
        }
    }
}

impl fmt::Display for EdgeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.source, self.dest, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_spec_display() {
        assert_eq!(EdgeSpec::new('A', 'B', 5).to_string(), "AB5");
        assert_eq!(EdgeSpec::new('Q', 'R', -3).to_string(), "QR-3");
    }

    #[test]
    fn test_infinity_survives_addition() {
        assert!(INFINITY.checked_add(INFINITY).is_some());
    }
}
