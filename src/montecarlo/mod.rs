//! Monte Carlo estimation for WalkSim.

pub mod runner;

pub use runner::{
    estimate_loop_statistics, estimate_mean_distance, estimate_return_probability, LoopStatistics,
    MonteCarloConfig,
};
