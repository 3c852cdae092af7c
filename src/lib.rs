//! WalkSim - 3D lattice random walk simulation engine.
//!
//! This crate provides the pure-logic core of a random walk visualizer:
//! - An incremental walk engine on the integer lattice (ordinary and
//!   loop-erased modes, optional bounding box)
//! - Monte Carlo batch estimators for mean displacement, loop statistics,
//!   and return probability
//! - A simulation orchestrator that owns the live walk, the experiment
//!   schedules, and the accumulated result tables
//!
//! Rendering, windowing, and UI are out of scope; presentation layers consume
//! read-only snapshots (point sequence, loop segment, counters) from the
//! engine and drive it through the orchestrator.

pub mod core;
pub mod metrics;
pub mod montecarlo;
pub mod simulation;
pub mod walk;
