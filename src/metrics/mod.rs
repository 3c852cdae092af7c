//! Trial statistics aggregation for WalkSim.

pub mod streaming;

pub use streaming::StreamingMean;
