//! CLI commands for trains

pub mod dispatch;
pub mod edges;
pub mod load;
pub mod report;
