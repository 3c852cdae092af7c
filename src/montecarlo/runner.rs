//! Monte Carlo batch estimators.
//!
//! Three independent batch procedures over a prototype walk configuration:
//! mean final displacement, loop-erased walk statistics, and return
//! probability. Each estimator runs its trials on a private engine built from
//! the configuration, never a caller's live walk, and is stateless and
//! reentrant per call. Execution is synchronous and single-threaded; callers
//! needing responsiveness chunk calls one step budget at a time.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, WalkError};
use crate::core::types::WalkConfig;
use crate::metrics::streaming::StreamingMean;
use crate::walk::direction::RngDirections;
use crate::walk::engine::WalkEngine;

/// Configuration for Monte Carlo estimation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    /// Trials per estimate. Must be nonzero.
    pub trials: usize,
    /// Seed for the per-call generator; equal seeds give equal estimates.
    pub seed: u64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            seed: 42,
        }
    }
}

/// Result of a loop-erased batch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoopStatistics {
    /// Mean final distance from the origin.
    pub mean_distance: f64,
    /// Mean largest erased loop size (edges).
    pub mean_largest_loop: f64,
    /// Mean number of erased loops.
    pub mean_erased_loops: f64,
}

fn validate(mc: &MonteCarloConfig) -> Result<()> {
    if mc.trials == 0 {
        return Err(WalkError::invalid_config("trial count must be nonzero"));
    }
    Ok(())
}

/// Estimate mean final distance after `steps` steps of an ordinary walk.
pub fn estimate_mean_distance(
    steps: usize,
    config: &WalkConfig,
    mc: &MonteCarloConfig,
) -> Result<f64> {
    validate(mc)?;

    let mut src = RngDirections::new(StdRng::seed_from_u64(mc.seed));
    let mut walk = WalkEngine::new(*config);
    let mut distance = StreamingMean::new();

    for _ in 0..mc.trials {
        walk.reset();
        for _ in 0..steps {
            walk.step(&mut src)?;
        }
        distance.push(walk.distance());
    }

    Ok(distance.mean())
}

/// Estimate loop-erased walk statistics after `steps` steps.
///
/// Every accepted step is followed by a loop check, and each detected loop is
/// consumed immediately: the erased-loop counter advances once per detection
/// event regardless of the loop's size.
pub fn estimate_loop_statistics(
    steps: usize,
    config: &WalkConfig,
    mc: &MonteCarloConfig,
) -> Result<LoopStatistics> {
    validate(mc)?;

    let mut src = RngDirections::new(StdRng::seed_from_u64(mc.seed));
    let mut walk = WalkEngine::new(*config);
    let mut distance = StreamingMean::new();
    let mut largest_loop = StreamingMean::new();
    let mut erased_loops = StreamingMean::new();

    for _ in 0..mc.trials {
        walk.reset();
        for _ in 0..steps {
            walk.step(&mut src)?;
            walk.check_loop();
            walk.consume_loop();
        }
        distance.push(walk.distance());
        largest_loop.push(walk.largest_loop_size() as f64);
        erased_loops.push(walk.erased_loop_count() as f64);
    }

    Ok(LoopStatistics {
        mean_distance: distance.mean(),
        mean_largest_loop: largest_loop.mean(),
        mean_erased_loops: erased_loops.mean(),
    })
}

/// Estimate the probability of returning to the origin within `steps` steps.
///
/// A trial stops the instant the walk revisits the origin and counts as one
/// return; trials that exhaust the budget without returning count as zero.
pub fn estimate_return_probability(
    steps: usize,
    config: &WalkConfig,
    mc: &MonteCarloConfig,
) -> Result<f64> {
    validate(mc)?;

    let mut src = RngDirections::new(StdRng::seed_from_u64(mc.seed));
    let mut walk = WalkEngine::new(*config);
    let mut returns = 0usize;

    for _ in 0..mc.trials {
        walk.reset();
        for _ in 0..steps {
            walk.step(&mut src)?;
            if walk.current_position().is_origin() {
                returns += 1;
                break;
            }
        }
    }

    Ok(returns as f64 / mc.trials as f64)
}
