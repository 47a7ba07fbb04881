//! Data layer for the traffic counter.
//!
//! Responsible for reading and parsing traffic count files, computing the
//! four summary analyses and running the top-level analysis pipeline.

pub mod aggregator;
pub mod analysis;
pub mod reader;

pub use traffic_core as core;
