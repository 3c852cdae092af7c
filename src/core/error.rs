//! Error types for WalkSim.

use thiserror::Error;

/// Result type alias for WalkSim operations.
pub type Result<T> = std::result::Result<T, WalkError>;

/// Error types for the simulation engine.
///
/// Policy states are not errors: undoing past the start of a walk is a no-op,
/// and an out-of-bounds candidate move is silently resampled. Only a
/// configuration the engine cannot make progress with is reported.
#[derive(Error, Debug)]
pub enum WalkError {
    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Bounded rejection sampling exhausted its retry budget. With a uniform
    /// 6-way move choice this only happens when the bounding box admits no
    /// neighbor of the current cell.
    #[error("No admissible move after {attempts} attempts; bounds exclude every neighbor")]
    UnreachableMove { attempts: usize },
}

impl WalkError {
    /// Create an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an unreachable move error.
    pub fn unreachable_move(attempts: usize) -> Self {
        Self::UnreachableMove { attempts }
    }
}
