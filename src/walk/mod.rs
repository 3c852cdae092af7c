//! Lattice random walk engine for WalkSim.

pub mod direction;
pub mod engine;

pub use direction::{DirectionSource, RngDirections, ScriptedDirections};
pub use engine::WalkEngine;
