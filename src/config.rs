//! Configuration for detection and interval estimation.
//!
//! Everything the algorithms depend on is an explicit field here — no
//! environment variables, no globals. Builders validate lazily: values are
//! checked by `validate()` at the start of `detect`/`estimate`, so a
//! half-built configuration never panics.

use crate::error::{Error, Result};

/// Configuration for [`crate::DivergenceDetector`].
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    /// Number of consecutive bins that must all exceed the threshold for a
    /// divergence to count as sustained. Must be a positive odd integer.
    ///
    /// Default: 5.
    pub window_width: usize,

    /// Divergence threshold. A bin supports divergence only when its
    /// difference value is strictly greater than this. The comparison is
    /// strict so a signal sitting exactly at threshold never flaps in and
    /// out of candidacy.
    ///
    /// Default: 0.0 ("condition A exceeds condition B").
    pub threshold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            window_width: 5,
            threshold: 0.0,
        }
    }
}

impl DetectorConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sustained-run window width.
    pub fn window_width(mut self, width: usize) -> Self {
        self.window_width = width;
        self
    }

    /// Set the divergence threshold.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Check the configuration, failing fast before any computation.
    pub fn validate(&self) -> Result<()> {
        if self.window_width == 0 || self.window_width % 2 == 0 {
            return Err(Error::InvalidConfiguration(format!(
                "window_width must be a positive odd integer, got {}",
                self.window_width
            )));
        }
        if !self.threshold.is_finite() {
            return Err(Error::InvalidConfiguration(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Policy for subjects that never diverge, applied by
/// [`crate::BootstrapIntervalEstimator`].
///
/// Whether such subjects are dropped from the population interval or
/// assigned the end of the analysis window is a substantive analysis
/// choice with no neutral answer, so it is an explicit setting rather than
/// a hidden default. Either way the estimate reports how many subjects the
/// policy touched (`n_excluded` / `n_imputed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeverDivergedPolicy {
    /// Drop never-diverged subjects from the estimate.
    Exclude,
    /// Treat never-diverged subjects as diverging at this fixed time bin,
    /// commonly the last bin of the analysis window.
    ImputeAt(i64),
}

/// Configuration for [`crate::BootstrapIntervalEstimator`].
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapConfig {
    /// Number of resample trials. Must be positive.
    ///
    /// Default: 1,000.
    pub resamples: usize,

    /// Quantile level of the lower interval bound, in (0, 1).
    ///
    /// Default: 0.025.
    pub lower_quantile: f64,

    /// Quantile level of the upper interval bound, in (0, 1) and greater
    /// than `lower_quantile`.
    ///
    /// Default: 0.975.
    pub upper_quantile: f64,

    /// Base seed for the resampling RNG. Each trial derives its own seed
    /// from this value and the trial index, so results are reproducible
    /// and independent of execution order.
    ///
    /// Default: 0.
    pub seed: u64,

    /// What to do with never-diverged subjects.
    ///
    /// Default: [`NeverDivergedPolicy::Exclude`].
    pub never_diverged: NeverDivergedPolicy,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            resamples: 1_000,
            lower_quantile: 0.025,
            upper_quantile: 0.975,
            seed: 0,
            never_diverged: NeverDivergedPolicy::Exclude,
        }
    }
}

impl BootstrapConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a quick configuration for development: 200 resamples.
    pub fn quick() -> Self {
        Self {
            resamples: 200,
            ..Default::default()
        }
    }

    /// Create a thorough configuration for final analyses: 5,000 resamples.
    pub fn thorough() -> Self {
        Self {
            resamples: 5_000,
            ..Default::default()
        }
    }

    /// Set the number of resample trials.
    pub fn resamples(mut self, resamples: usize) -> Self {
        self.resamples = resamples;
        self
    }

    /// Set both quantile levels.
    pub fn quantiles(mut self, lower: f64, upper: f64) -> Self {
        self.lower_quantile = lower;
        self.upper_quantile = upper;
        self
    }

    /// Set the base RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the never-diverged policy.
    pub fn never_diverged(mut self, policy: NeverDivergedPolicy) -> Self {
        self.never_diverged = policy;
        self
    }

    /// Check the configuration, failing fast before any computation.
    pub fn validate(&self) -> Result<()> {
        if self.resamples == 0 {
            return Err(Error::InvalidConfiguration(
                "resamples must be positive".to_string(),
            ));
        }
        // The negated comparisons also reject NaN.
        if !(self.lower_quantile > 0.0 && self.lower_quantile < 1.0) {
            return Err(Error::InvalidConfiguration(format!(
                "lower_quantile must be in (0, 1), got {}",
                self.lower_quantile
            )));
        }
        if !(self.upper_quantile > 0.0 && self.upper_quantile < 1.0) {
            return Err(Error::InvalidConfiguration(format!(
                "upper_quantile must be in (0, 1), got {}",
                self.upper_quantile
            )));
        }
        if self.lower_quantile >= self.upper_quantile {
            return Err(Error::InvalidConfiguration(format!(
                "lower_quantile ({}) must be < upper_quantile ({})",
                self.lower_quantile, self.upper_quantile
            )));
        }
        Ok(())
    }
}
