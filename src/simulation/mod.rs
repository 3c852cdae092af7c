//! Top-level simulation state for WalkSim.

pub mod orchestrator;

pub use orchestrator::{Simulation, STEP_CEILING};
