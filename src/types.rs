//! Core data types shared by the detector and the estimator.

use serde::{Deserialize, Serialize};

/// Identifier for one subject (participant).
pub type SubjectId = String;

/// One observation of the condition-difference signal.
///
/// `time_bin` is a discrete ordered coordinate — typically milliseconds
/// rounded to the bin width used upstream. `difference` is a signed scalar
/// (condition A minus condition B), and is `None` when the bin has no
/// usable data for this subject. Missing values are data, not errors.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesPoint {
    /// Subject the observation belongs to.
    pub subject: SubjectId,
    /// Discrete time coordinate of the bin.
    pub time_bin: i64,
    /// Condition-difference value at this bin, if defined.
    pub difference: Option<f64>,
}

impl TimeSeriesPoint {
    /// Construct a point. `difference` accepts `f64`, `Option<f64>`, or `None`.
    pub fn new(
        subject: impl Into<SubjectId>,
        time_bin: i64,
        difference: impl Into<Option<f64>>,
    ) -> Self {
        Self {
            subject: subject.into(),
            time_bin,
            difference: difference.into(),
        }
    }
}

/// Per-subject detection outcome.
///
/// Deliberately an enum rather than a numeric sentinel: consumers must
/// handle the never-diverged case explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DivergencePoint {
    /// Sustained divergence begins at this time bin.
    At(i64),
    /// No window satisfied the sustained-divergence predicate.
    NeverDiverged,
}

impl DivergencePoint {
    /// The divergence time bin, or `None` for never-diverged.
    pub fn time_bin(&self) -> Option<i64> {
        match self {
            Self::At(t) => Some(*t),
            Self::NeverDiverged => None,
        }
    }

    /// Whether this subject diverged at all.
    pub fn is_diverged(&self) -> bool {
        matches!(self, Self::At(_))
    }
}

/// Population-level interval estimate for the mean divergence time.
///
/// Bounds and point estimate live on the same time axis as the input bins.
/// Divergence-time samples are typically right-skewed — early onsets are
/// bounded by the start of the analysis window, late onsets are not — which
/// is why the interval comes from resampling rather than normal theory, and
/// why `upper_bound - point_estimate` often exceeds
/// `point_estimate - lower_bound`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivergenceEstimate {
    /// Lower interval bound (empirical quantile of resampled means).
    pub lower_bound: f64,
    /// Mean of the resampled-mean distribution.
    pub point_estimate: f64,
    /// Upper interval bound (empirical quantile of resampled means).
    pub upper_bound: f64,
    /// Subjects contributing a time value (detected, plus imputed if the
    /// never-diverged policy imputes).
    pub n_subjects: usize,
    /// Subjects excluded as never-diverged.
    pub n_excluded: usize,
    /// Never-diverged subjects imputed to a fixed bin (zero under the
    /// exclusion policy).
    pub n_imputed: usize,
    /// Number of bootstrap resample trials.
    pub resamples: usize,
    /// Quantile level of `lower_bound`.
    pub lower_quantile: f64,
    /// Quantile level of `upper_bound`.
    pub upper_quantile: f64,
}

impl DivergenceEstimate {
    /// Width of the interval on the time axis.
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divergence_point_accessors() {
        assert_eq!(DivergencePoint::At(150).time_bin(), Some(150));
        assert_eq!(DivergencePoint::NeverDiverged.time_bin(), None);
        assert!(DivergencePoint::At(0).is_diverged());
        assert!(!DivergencePoint::NeverDiverged.is_diverged());
    }

    #[test]
    fn point_constructor_accepts_missing() {
        let defined = TimeSeriesPoint::new("s01", 100, 0.25);
        assert_eq!(defined.difference, Some(0.25));

        let missing = TimeSeriesPoint::new("s01", 150, None);
        assert_eq!(missing.difference, None);
    }
}
