//! Core types and utilities for WalkSim.

pub mod error;
pub mod types;

pub use error::{Result, WalkError};
pub use types::*;
