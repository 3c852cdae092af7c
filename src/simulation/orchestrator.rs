//! Simulation orchestrator.
//!
//! Owns everything the presentation layer drives: the live walk and its mode,
//! the visual auto-play ceiling, and the two numerical experiment schedules
//! with their accumulated result tables. All of this is explicit state passed
//! by reference into core calls; there are no process-wide singletons.

use crate::core::error::{Result, WalkError};
use crate::core::types::{Bounds, ReturnRow, SimulationRow, WalkConfig};
use crate::montecarlo::runner::{
    estimate_loop_statistics, estimate_mean_distance, estimate_return_probability,
    MonteCarloConfig,
};
use crate::walk::direction::DirectionSource;
use crate::walk::engine::WalkEngine;

/// Step budget at which both experiment schedules stop.
pub const STEP_CEILING: usize = 1_000_000;

/// First step budget of the distance/loop experiment.
const FIRST_DISTANCE_STEPS: usize = 10;
/// First step budget of the return-probability experiment.
const FIRST_RETURN_STEPS: usize = 100;

/// Top-level simulation state.
///
/// The numerical experiments grow their step budget tenfold per batch; each
/// batch is one blocking call, sized so an external tick loop stays
/// responsive by running one batch per tick.
#[derive(Debug, Clone)]
pub struct Simulation {
    walk: WalkEngine,
    mc: MonteCarloConfig,

    /// Auto-play stops once the walk reaches this many steps.
    max_step: usize,
    autoplay: bool,

    rows: Vec<SimulationRow>,
    return_rows: Vec<ReturnRow>,
    next_distance_steps: usize,
    next_return_steps: usize,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(WalkConfig::default(), MonteCarloConfig::default())
    }
}

impl Simulation {
    /// Create an orchestrator around a fresh walk.
    pub fn new(config: WalkConfig, mc: MonteCarloConfig) -> Self {
        Self {
            walk: WalkEngine::new(config),
            mc,
            max_step: 1000,
            autoplay: false,
            rows: Vec::new(),
            return_rows: Vec::new(),
            next_distance_steps: FIRST_DISTANCE_STEPS,
            next_return_steps: FIRST_RETURN_STEPS,
        }
    }

    /// The live walk, for display snapshots.
    pub fn walk(&self) -> &WalkEngine {
        &self.walk
    }

    /// The Monte Carlo parameters used by both experiments.
    pub fn monte_carlo(&self) -> &MonteCarloConfig {
        &self.mc
    }

    /// Replace the Monte Carlo parameters. Validation happens per batch, so
    /// an in-progress table keeps its already-computed rows.
    pub fn set_monte_carlo(&mut self, mc: MonteCarloConfig) {
        self.mc = mc;
    }

    /// Switch between ordinary and loop-erased mode, resetting the walk when
    /// the mode actually changes.
    pub fn set_mode(&mut self, loop_erased: bool) {
        if self.walk.config().loop_erased != loop_erased {
            self.walk.reset();
            self.walk.set_loop_erased(loop_erased);
        }
    }

    /// Replace the bounding box of the live walk.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.walk.set_bounds(bounds);
    }

    /// Toggle the bounding box constraint of the live walk.
    pub fn set_bounds_enabled(&mut self, enabled: bool) {
        self.walk.set_bounds_enabled(enabled);
    }

    /// Set the auto-play step ceiling.
    pub fn set_max_step(&mut self, max_step: usize) -> Result<()> {
        if max_step == 0 {
            return Err(WalkError::invalid_config("max step must be nonzero"));
        }
        self.max_step = max_step;
        Ok(())
    }

    /// The auto-play step ceiling.
    pub fn max_step(&self) -> usize {
        self.max_step
    }

    /// Toggle auto-play.
    pub fn set_autoplay(&mut self, autoplay: bool) {
        self.autoplay = autoplay;
    }

    /// Whether auto-play is on.
    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// Advance the visual walk by one tick.
    ///
    /// In loop-erased mode a pending loop is consumed instead of stepping, so
    /// a detected loop occupies exactly one tick on screen; otherwise the
    /// walk steps, and in loop-erased mode the new position is checked for a
    /// fresh loop.
    pub fn advance<S: DirectionSource + ?Sized>(&mut self, src: &mut S) -> Result<()> {
        if self.walk.config().loop_erased {
            if self.walk.loop_exists() {
                self.walk.consume_loop();
            } else {
                self.walk.step(src)?;
                self.walk.check_loop();
            }
        } else {
            self.walk.step(src)?;
        }
        Ok(())
    }

    /// One auto-play tick: advances only while auto-play is on and the walk
    /// is below the step ceiling.
    pub fn tick<S: DirectionSource + ?Sized>(&mut self, src: &mut S) -> Result<()> {
        if self.autoplay && self.walk.steps() < self.max_step {
            self.advance(src)?;
        }
        Ok(())
    }

    /// Undo the last visual step. Ignored in loop-erased mode, where the two
    /// operations are mutually exclusive.
    pub fn undo(&mut self) {
        if !self.walk.config().loop_erased {
            self.walk.undo_step();
        }
    }

    /// Reset the visual walk to its seed.
    pub fn restart_walk(&mut self) {
        self.walk.reset();
    }

    /// Run one batch of the distance/loop experiment at the current step
    /// budget, then grow the budget tenfold.
    ///
    /// Returns `true` while further batches remain before the ceiling. The
    /// batch runs the mode-appropriate estimator on a private clone of the
    /// walk configuration; the live walk is untouched.
    pub fn run_distance_batch(&mut self) -> Result<bool> {
        if self.next_distance_steps >= STEP_CEILING {
            return Ok(false);
        }
        let config = *self.walk.config();
        let steps = self.next_distance_steps;

        let row = if config.loop_erased {
            let stats = estimate_loop_statistics(steps, &config, &self.mc)?;
            SimulationRow {
                steps,
                mean_distance: stats.mean_distance,
                mean_largest_loop: Some(stats.mean_largest_loop),
                mean_erased_loops: Some(stats.mean_erased_loops),
            }
        } else {
            SimulationRow {
                steps,
                mean_distance: estimate_mean_distance(steps, &config, &self.mc)?,
                mean_largest_loop: None,
                mean_erased_loops: None,
            }
        };

        self.rows.push(row);
        self.next_distance_steps *= 10;
        Ok(self.next_distance_steps < STEP_CEILING)
    }

    /// Run one batch of the return-probability experiment at the current step
    /// budget, then grow the budget tenfold. Returns `true` while further
    /// batches remain before the ceiling.
    pub fn run_return_batch(&mut self) -> Result<bool> {
        if self.next_return_steps >= STEP_CEILING {
            return Ok(false);
        }
        let config = *self.walk.config();
        let steps = self.next_return_steps;
        let probability = estimate_return_probability(steps, &config, &self.mc)?;

        self.return_rows.push(ReturnRow { steps, probability });
        self.next_return_steps *= 10;
        Ok(self.next_return_steps < STEP_CEILING)
    }

    /// Clear both result tables and rewind both schedules.
    pub fn restart_experiments(&mut self) {
        self.rows.clear();
        self.return_rows.clear();
        self.next_distance_steps = FIRST_DISTANCE_STEPS;
        self.next_return_steps = FIRST_RETURN_STEPS;
    }

    /// Accumulated distance/loop experiment rows.
    pub fn rows(&self) -> &[SimulationRow] {
        &self.rows
    }

    /// Accumulated return-probability rows.
    pub fn return_rows(&self) -> &[ReturnRow] {
        &self.return_rows
    }
}
