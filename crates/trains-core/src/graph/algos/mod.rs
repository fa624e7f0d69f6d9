//! Graph algorithm implementations
//!
//! - `route`: distance along an exact node sequence
//! - `trips`: walk counting bounded by stops or by distance
//! - `dijkstra`: weighted shortest path

pub mod dijkstra;
pub mod route;
pub mod trips;

pub use dijkstra::shortest_path;
pub use route::route_distance;
pub use trips::{count_trips, count_trips_below_distance};
