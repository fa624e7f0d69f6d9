//! Serializable graph queries and their answers
//!
//! A report is an ordered list of [`Query`] values evaluated against one
//! graph. Queries are loaded from config or built by the CLI.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::{Node, Weight, WeightedDigraph};

/// One question asked of the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Query {
    /// Distance along an exact sequence of towns
    Route { path: Vec<Node> },
    /// Walks from `start` to `end` bounded by stop count
    Trips {
        start: Node,
        end: Node,
        max_stops: u32,
        #[serde(default)]
        exact: bool,
    },
    /// Walks from `start` to `end` under a distance budget
    TripsWithin {
        start: Node,
        end: Node,
        distance: Weight,
    },
    /// Shortest distance from `start` to `end`
    Shortest { start: Node, end: Node },
}

/// Result of evaluating a [`Query`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Distance(Weight),
    Count(u64),
    /// Serializes as `null`
    NoRoute,
}

impl From<Option<Weight>> for Answer {
    fn from(distance: Option<Weight>) -> Self {
        distance.map_or(Answer::NoRoute, Answer::Distance)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Distance(distance) => write!(f, "{}", distance),
            Answer::Count(count) => write!(f, "{}", count),
            Answer::NoRoute => write!(f, "NO SUCH ROUTE"),
        }
    }
}

impl Query {
    pub fn evaluate(&self, graph: &WeightedDigraph) -> Answer {
        match self {
            Query::Route { path } => graph.route_distance(path).into(),
            Query::Trips {
                start,
                end,
                max_stops,
                exact,
            } => Answer::Count(graph.count_trips(*start, *end, *max_stops, *exact)),
            Query::TripsWithin {
                start,
                end,
                distance,
            } => Answer::Count(graph.count_trips_below_distance(*start, *end, *distance)),
            Query::Shortest { start, end } => graph.shortest_path(*start, *end).into(),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Route { path } => {
                let hops: Vec<String> = path.iter().map(char::to_string).collect();
                write!(f, "route {}", hops.join("-"))
            }
            Query::Trips {
                start,
                end,
                max_stops,
                exact,
            } => {
                let bound = if *exact { "exactly" } else { "at most" };
                write!(f, "trips {start}->{end} {bound} {max_stops} stops")
            }
            Query::TripsWithin {
                start,
                end,
                distance,
            } => write!(f, "trips {start}->{end} below distance {distance}"),
            Query::Shortest { start, end } => write!(f, "shortest {start}->{end}"),
        }
    }
}

/// The ten queries of the classic Kiwiland railroad problem
pub fn standard_queries() -> Vec<Query> {
    let route = |path: &str| Query::Route {
        path: path.chars().collect(),
    };
    vec![
        route("ABC"),
        route("AD"),
        route("ADC"),
        route("AEBCD"),
        route("AED"),
        Query::Trips {
            start: 'C',
            end: 'C',
            max_stops: 3,
            exact: false,
        },
        Query::Trips {
            start: 'A',
            end: 'C',
            max_stops: 4,
            exact: true,
        },
        Query::Shortest {
            start: 'A',
            end: 'C',
        },
        Query::Shortest {
            start: 'B',
            end: 'B',
        },
        Query::TripsWithin {
            start: 'C',
            end: 'C',
            distance: 30,
        },
    ]
}

/// Evaluate every query in order
pub fn evaluate_all(graph: &WeightedDigraph, queries: &[Query]) -> Vec<Answer> {
    queries.iter().map(|query| query.evaluate(graph)).collect()
}
