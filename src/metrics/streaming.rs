//! Streaming statistics using Welford's algorithm.
//!
//! Single-pass mean and variance without storing per-trial values; the Monte
//! Carlo runner pushes one observation per trial.

/// Streaming mean/variance accumulator.
#[derive(Debug, Clone, Default)]
pub struct StreamingMean {
    /// Number of observations.
    count: usize,
    /// Running mean.
    mean: f64,
    /// Running M2 for variance calculation.
    m2: f64,
}

impl StreamingMean {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one observation.
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    /// Arithmetic mean of the observations, 0.0 when empty.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance of the observations, 0.0 when empty.
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Population standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Number of observations.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Check if no observations have been pushed.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let acc = StreamingMean::new();
        assert!(acc.is_empty());
        assert_eq!(acc.mean(), 0.0);
        assert_eq!(acc.variance(), 0.0);
    }

    #[test]
    fn test_mean_matches_direct_sum() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut acc = StreamingMean::new();
        for v in values {
            acc.push(v);
        }
        assert_eq!(acc.count(), 5);
        assert!((acc.mean() - 3.0).abs() < 1e-12);
        // Population variance of 1..=5 is 2.
        assert!((acc.variance() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_series_has_zero_variance() {
        let mut acc = StreamingMean::new();
        for _ in 0..100 {
            acc.push(7.5);
        }
        assert!((acc.mean() - 7.5).abs() < 1e-12);
        assert!(acc.variance().abs() < 1e-12);
    }
}
