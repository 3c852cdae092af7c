//! Incremental lattice random walk engine.
//!
//! Handles:
//! - Step generation under an optional bounding box (bounded rejection
//!   sampling)
//! - Undo of the most recent step
//! - Loop detection and erasure for the loop-erased random walk (LERW)
//! - Read-only snapshots for the presentation boundary

use crate::core::error::{Result, WalkError};
use crate::core::types::{Bounds, LatticePoint, WalkConfig};
use crate::walk::direction::DirectionSource;

/// Retry budget for rejection sampling in [`WalkEngine::step`]. A uniform
/// 6-way draw exhausts this only when the bounding box admits no neighbor of
/// the current cell.
pub const MAX_STEP_ATTEMPTS: usize = 4096;

/// One evolving lattice random walk.
///
/// The point sequence always holds at least two entries: it is seeded with
/// two origin points so the "previous point" lookup on step 0 is well
/// defined. The two seed points never count toward `steps`.
#[derive(Debug, Clone)]
pub struct WalkEngine {
    config: WalkConfig,
    points: Vec<LatticePoint>,
    steps: usize,
    start_position: LatticePoint,

    // Loop bookkeeping, live only in loop-erased mode.
    loop_segment: Vec<LatticePoint>,
    loop_exists: bool,
    erased_loop_count: usize,
    current_loop_size: usize,
    largest_loop_size: usize,
}

impl Default for WalkEngine {
    fn default() -> Self {
        Self::new(WalkConfig::default())
    }
}

impl WalkEngine {
    /// Create a walk seeded at the origin.
    pub fn new(config: WalkConfig) -> Self {
        Self {
            config,
            points: vec![LatticePoint::ORIGIN, LatticePoint::ORIGIN],
            steps: 0,
            start_position: LatticePoint::ORIGIN,
            loop_segment: Vec::new(),
            loop_exists: false,
            erased_loop_count: 0,
            current_loop_size: 0,
            largest_loop_size: 0,
        }
    }

    /// Take one uniform unit step.
    ///
    /// With bounds disabled the sampled candidate is accepted unconditionally.
    /// With bounds enabled, a candidate outside the closed box is discarded
    /// and a fresh move is sampled from the same point, up to
    /// [`MAX_STEP_ATTEMPTS`] times; exhaustion means the box admits no
    /// neighbor of the current cell and is reported as
    /// [`WalkError::UnreachableMove`] rather than looping forever.
    pub fn step<S: DirectionSource + ?Sized>(&mut self, src: &mut S) -> Result<()> {
        let last = self.current_position();
        for _ in 0..MAX_STEP_ATTEMPTS {
            let candidate = last.offset(src.next_direction());
            if !self.config.bounds_enabled || self.config.bounds.contains(candidate) {
                self.points.push(candidate);
                self.steps += 1;
                return Ok(());
            }
        }
        Err(WalkError::unreachable_move(MAX_STEP_ATTEMPTS))
    }

    /// Remove the most recently accepted step. No-op when no step has been
    /// accepted; never touches loop state. The orchestrator disables undo in
    /// loop-erased mode, the engine does not enforce that exclusion.
    pub fn undo_step(&mut self) {
        if self.steps == 0 {
            return;
        }
        self.points.pop();
        self.steps -= 1;
    }

    /// Euclidean distance from the start position to the current position.
    pub fn distance(&self) -> f64 {
        self.start_position.distance(self.current_position())
    }

    /// Clear the walk back to the two-point origin seed, zero the step count,
    /// and clear all loop bookkeeping including the largest-loop maximum.
    /// This is the only operation that resets the running maximum.
    pub fn reset(&mut self) {
        self.points.clear();
        self.points.push(LatticePoint::ORIGIN);
        self.points.push(LatticePoint::ORIGIN);
        self.start_position = self.points[0];
        self.steps = 0;
        self.loop_segment.clear();
        self.loop_exists = false;
        self.erased_loop_count = 0;
        self.current_loop_size = 0;
        self.largest_loop_size = 0;
    }

    /// Detect and erase a self-intersecting cycle ending at the current
    /// position.
    ///
    /// Scans `points[1..]` (the second seed sentinel included, position 0
    /// excluded) for the first occurrence of the current position. When an
    /// earlier occurrence exists, the cycle `points[i..=last]` is recorded as
    /// the pending loop segment, `points[i..last]` is erased so the closing
    /// point becomes the current position, and the loop size counters are
    /// updated. The loop size is an edge count: `segment.len() - 1`.
    ///
    /// Callers in loop-erased mode invoke this once per accepted step and
    /// consume a detected loop with [`consume_loop`](Self::consume_loop).
    pub fn check_loop(&mut self) {
        let last_idx = self.points.len() - 1;
        let current = self.points[last_idx];
        let found = self.points[1..last_idx]
            .iter()
            .position(|p| *p == current)
            .map(|i| i + 1);

        match found {
            None => {
                self.loop_exists = false;
                self.loop_segment.clear();
            }
            Some(i) => {
                self.loop_exists = true;
                self.loop_segment = self.points[i..=last_idx].to_vec();
                self.points.drain(i..last_idx);
                self.current_loop_size = self.loop_segment.len() - 1;
                if self.current_loop_size > self.largest_loop_size {
                    self.largest_loop_size = self.current_loop_size;
                }
            }
        }
    }

    /// Consume a pending loop: clear the flag and count the detection. One
    /// detected loop consumes exactly one step slot, regardless of how many
    /// edges it erased.
    pub fn consume_loop(&mut self) {
        if self.loop_exists {
            self.loop_exists = false;
            self.erased_loop_count += 1;
        }
    }

    /// Replace the bounding box.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.config.bounds = bounds;
    }

    /// Toggle the bounding box constraint.
    pub fn set_bounds_enabled(&mut self, enabled: bool) {
        self.config.bounds_enabled = enabled;
    }

    /// The walk configuration.
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Switch between ordinary and loop-erased mode. Callers reset the walk
    /// when changing modes; the setter itself only flips the flag.
    pub fn set_loop_erased(&mut self, loop_erased: bool) {
        self.config.loop_erased = loop_erased;
    }

    /// The recorded point sequence, seed sentinels included.
    pub fn points(&self) -> &[LatticePoint] {
        &self.points
    }

    /// The most recently detected cycle, empty when none is pending.
    pub fn loop_segment(&self) -> &[LatticePoint] {
        &self.loop_segment
    }

    /// The current position of the walk.
    #[inline]
    pub fn current_position(&self) -> LatticePoint {
        self.points[self.points.len() - 1]
    }

    /// Number of accepted steps since the last reset.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of recorded path segments, counting a pending loop's erased
    /// edges but not the seed sentinel.
    pub fn path_len(&self) -> usize {
        let base = self.points.len() - 2;
        if self.loop_exists {
            base + self.current_loop_size
        } else {
            base
        }
    }

    /// Whether a detected loop is pending consumption.
    pub fn loop_exists(&self) -> bool {
        self.loop_exists
    }

    /// Cumulative count of detected-and-consumed loops since the last reset.
    pub fn erased_loop_count(&self) -> usize {
        self.erased_loop_count
    }

    /// Edge count of the most recently detected loop.
    pub fn current_loop_size(&self) -> usize {
        self.current_loop_size
    }

    /// Largest loop size seen since the last reset, monotone between resets.
    pub fn largest_loop_size(&self) -> usize {
        self.largest_loop_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Direction;
    use crate::walk::direction::ScriptedDirections;

    fn engine() -> WalkEngine {
        WalkEngine::new(WalkConfig::default())
    }

    #[test]
    fn test_seeded_with_two_origin_points() {
        let walk = engine();
        assert_eq!(walk.points(), &[LatticePoint::ORIGIN, LatticePoint::ORIGIN]);
        assert_eq!(walk.steps(), 0);
        assert_eq!(walk.distance(), 0.0);
    }

    #[test]
    fn test_step_appends_one_point() {
        let mut walk = engine();
        let mut src = ScriptedDirections::new([Direction::XUp]);
        walk.step(&mut src).unwrap();
        assert_eq!(walk.steps(), 1);
        assert_eq!(walk.points().len(), 3);
        assert_eq!(walk.current_position(), LatticePoint::new(1, 0, 0));
    }

    #[test]
    fn test_undo_round_trip() {
        let mut walk = engine();
        let mut src = ScriptedDirections::new([Direction::YUp, Direction::ZDown]);
        walk.step(&mut src).unwrap();
        let before = walk.points().to_vec();
        walk.step(&mut src).unwrap();
        walk.undo_step();
        assert_eq!(walk.points(), &before[..]);
        assert_eq!(walk.steps(), 1);
    }

    #[test]
    fn test_undo_past_start_is_noop() {
        let mut walk = engine();
        walk.undo_step();
        assert_eq!(walk.points().len(), 2);
        assert_eq!(walk.steps(), 0);
    }

    #[test]
    fn test_bounds_reject_and_resample() {
        let config = WalkConfig {
            bounds: Bounds::symmetric(2, 2, 2),
            bounds_enabled: true,
            ..WalkConfig::default()
        };
        let mut walk = WalkEngine::new(config);

        // XUp is accepted once (reaching x = 1), rejected at the wall, and
        // the sampler falls through to YUp.
        let mut src = ScriptedDirections::new([Direction::XUp, Direction::XUp, Direction::YUp]);
        walk.step(&mut src).unwrap();
        walk.step(&mut src).unwrap();
        assert_eq!(walk.current_position(), LatticePoint::new(1, 1, 0));
        assert_eq!(walk.steps(), 2);
    }

    #[test]
    fn test_degenerate_box_reports_unreachable() {
        // Collapsed to the single origin cell: no neighbor is admissible.
        let config = WalkConfig {
            bounds: Bounds::new(LatticePoint::ORIGIN, LatticePoint::ORIGIN),
            bounds_enabled: true,
            ..WalkConfig::default()
        };
        let mut walk = WalkEngine::new(config);

        let mut src = ScriptedDirections::new([Direction::XUp]);
        let err = walk.step(&mut src).unwrap_err();
        assert!(matches!(err, WalkError::UnreachableMove { .. }));
        assert_eq!(walk.steps(), 0);
        assert_eq!(walk.points().len(), 2);
    }

    #[test]
    fn test_check_loop_no_revisit() {
        let mut walk = engine();
        let mut src = ScriptedDirections::new([Direction::XUp, Direction::YUp]);
        walk.step(&mut src).unwrap();
        walk.step(&mut src).unwrap();
        let before = walk.points().to_vec();

        walk.check_loop();
        assert!(!walk.loop_exists());
        assert_eq!(walk.points(), &before[..]);
        assert!(walk.loop_segment().is_empty());
    }

    #[test]
    fn test_check_loop_erases_revisit_to_origin() {
        // points = [P0, P0, P1, P0]: the first interior match is the seed
        // sentinel at index 1, so the whole excursion is one loop.
        let mut walk = engine();
        let mut src = ScriptedDirections::new([Direction::XUp, Direction::XDown]);
        walk.step(&mut src).unwrap();
        walk.step(&mut src).unwrap();

        walk.check_loop();
        assert!(walk.loop_exists());
        assert_eq!(
            walk.loop_segment(),
            &[
                LatticePoint::ORIGIN,
                LatticePoint::new(1, 0, 0),
                LatticePoint::ORIGIN,
            ]
        );
        assert_eq!(walk.current_loop_size(), 2);
        assert_eq!(walk.largest_loop_size(), 2);
        assert_eq!(walk.points(), &[LatticePoint::ORIGIN, LatticePoint::ORIGIN]);
    }

    #[test]
    fn test_check_loop_keeps_closing_point() {
        // Square loop away from the seed: out to (1,0,0), around a unit
        // square in the xy plane, back to (1,0,0).
        let mut walk = engine();
        let mut src = ScriptedDirections::new([
            Direction::XUp,
            Direction::YUp,
            Direction::XUp,
            Direction::YDown,
            Direction::XDown,
        ]);
        for _ in 0..5 {
            walk.step(&mut src).unwrap();
            walk.check_loop();
        }

        assert!(walk.loop_exists());
        assert_eq!(walk.current_loop_size(), 4);
        assert_eq!(walk.current_position(), LatticePoint::new(1, 0, 0));
        assert_eq!(
            walk.points(),
            &[
                LatticePoint::ORIGIN,
                LatticePoint::ORIGIN,
                LatticePoint::new(1, 0, 0),
            ]
        );
    }

    #[test]
    fn test_consume_loop_counts_once() {
        let mut walk = engine();
        let mut src = ScriptedDirections::new([Direction::ZUp, Direction::ZDown]);
        walk.step(&mut src).unwrap();
        walk.step(&mut src).unwrap();
        walk.check_loop();
        assert!(walk.loop_exists());

        walk.consume_loop();
        assert!(!walk.loop_exists());
        assert_eq!(walk.erased_loop_count(), 1);

        // Consuming with no loop pending changes nothing.
        walk.consume_loop();
        assert_eq!(walk.erased_loop_count(), 1);
    }

    #[test]
    fn test_largest_loop_is_monotone() {
        let mut walk = engine();
        // A 4-edge square loop first, then a 2-edge backtrack loop.
        let mut src = ScriptedDirections::new([
            Direction::YUp,
            Direction::XUp,
            Direction::YDown,
            Direction::XDown,
            Direction::ZUp,
            Direction::ZDown,
        ]);
        for _ in 0..6 {
            walk.step(&mut src).unwrap();
            walk.check_loop();
            walk.consume_loop();
        }

        assert_eq!(walk.largest_loop_size(), 4);
        assert_eq!(walk.erased_loop_count(), 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut walk = engine();
        let mut src = ScriptedDirections::new([Direction::XUp, Direction::XDown]);
        walk.step(&mut src).unwrap();
        walk.step(&mut src).unwrap();
        walk.check_loop();
        walk.consume_loop();

        walk.reset();
        assert_eq!(walk.points(), &[LatticePoint::ORIGIN, LatticePoint::ORIGIN]);
        assert_eq!(walk.steps(), 0);
        assert_eq!(walk.largest_loop_size(), 0);
        assert_eq!(walk.erased_loop_count(), 0);
        assert_eq!(walk.current_loop_size(), 0);
        assert!(!walk.loop_exists());
        assert!(walk.loop_segment().is_empty());
    }

    #[test]
    fn test_path_len_counts_pending_loop() {
        let mut walk = engine();
        let mut src = ScriptedDirections::new([Direction::XUp, Direction::XDown]);
        walk.step(&mut src).unwrap();
        assert_eq!(walk.path_len(), 1);
        walk.step(&mut src).unwrap();
        walk.check_loop();
        // Two points erased, but the pending loop still displays two edges.
        assert_eq!(walk.path_len(), 2);
        walk.consume_loop();
        assert_eq!(walk.path_len(), 0);
    }
}
