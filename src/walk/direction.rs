//! Injectable move selection.
//!
//! The engine never talks to a generator directly; it draws from a
//! [`DirectionSource`] so simulations use a real RNG while tests supply exact
//! move sequences to exercise bounds rejection and loop detection.

use rand::Rng;

use crate::core::types::Direction;

/// A source of axis-aligned unit moves.
///
/// Conforming sources draw uniformly over exactly six outcomes; scripted test
/// sources may return whatever sequence the scenario needs.
pub trait DirectionSource {
    /// Produce the next move.
    fn next_direction(&mut self) -> Direction;
}

/// Uniform 6-way choice backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngDirections<R: Rng> {
    rng: R,
}

impl<R: Rng> RngDirections<R> {
    /// Wrap a generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DirectionSource for RngDirections<R> {
    fn next_direction(&mut self) -> Direction {
        Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())]
    }
}

/// Deterministic source replaying a fixed sequence of moves, cycling when
/// exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedDirections {
    moves: Vec<Direction>,
    cursor: usize,
}

impl ScriptedDirections {
    /// Create a source from a move script.
    ///
    /// # Panics
    /// Panics if the script is empty.
    pub fn new(moves: impl Into<Vec<Direction>>) -> Self {
        let moves = moves.into();
        assert!(!moves.is_empty(), "script needs at least one move");
        Self { moves, cursor: 0 }
    }
}

impl DirectionSource for ScriptedDirections {
    fn next_direction(&mut self) -> Direction {
        let direction = self.moves[self.cursor % self.moves.len()];
        self.cursor += 1;
        direction
    }
}
