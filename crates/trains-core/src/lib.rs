//! Trains Core Library
//!
//! A small weighted directed graph of single-character towns, with the
//! route-distance, trip-counting and shortest-path queries built on it.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod query;
