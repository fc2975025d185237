//! Per-subject sustained-divergence detection.
//!
//! A subject's divergence point is the first time bin whose forward window
//! of `window_width` consecutive bins is fully defined and fully above the
//! threshold. The window is left-aligned, not centered: a divergence is
//! only flagged once it is confirmed by the data that comes after it, so
//! the detector never justifies a present divergence with past evidence
//! alone.

use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::DetectorConfig;
use crate::error::{Error, Result};
use crate::types::{DivergencePoint, SubjectId, TimeSeriesPoint};

/// Detects the first sustained divergence per subject.
///
/// Subjects are processed independently; the `parallel` feature maps over
/// them with rayon, with identical results.
///
/// # Example
///
/// ```
/// use divergence_point::{DivergenceDetector, DivergencePoint, TimeSeriesPoint};
///
/// let points = vec![
///     TimeSeriesPoint::new("s01", 0, 0.6),
///     TimeSeriesPoint::new("s01", 1, 0.7),
///     TimeSeriesPoint::new("s01", 2, -0.1),
///     TimeSeriesPoint::new("s01", 3, 0.55),
///     TimeSeriesPoint::new("s01", 4, 0.6),
///     TimeSeriesPoint::new("s01", 5, 0.65),
/// ];
///
/// let onsets = DivergenceDetector::new().window_width(3).detect(&points)?;
/// assert_eq!(onsets["s01"], DivergencePoint::At(3));
/// # Ok::<(), divergence_point::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DivergenceDetector {
    config: DetectorConfig,
}

impl DivergenceDetector {
    /// Create a detector with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector from an explicit configuration.
    pub fn with_config(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Set the sustained-run window width (positive odd integer).
    pub fn window_width(mut self, width: usize) -> Self {
        self.config = self.config.window_width(width);
        self
    }

    /// Set the divergence threshold (strict lower bound on supporting bins).
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config = self.config.threshold(threshold);
        self
    }

    /// The current configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Detect the divergence point of every subject in `points`.
    ///
    /// Points may arrive in any order; each subject's series is sorted by
    /// time bin before scanning. A duplicate time bin within any subject
    /// fails the whole batch with [`Error::MalformedSeries`] — a corrupt
    /// subject must not silently drop out of the population.
    ///
    /// Subjects with no candidate window (including subjects whose series
    /// is shorter than the window) map to
    /// [`DivergencePoint::NeverDiverged`].
    pub fn detect(&self, points: &[TimeSeriesPoint]) -> Result<BTreeMap<SubjectId, DivergencePoint>> {
        self.config.validate()?;

        let mut by_subject: BTreeMap<SubjectId, Vec<(i64, Option<f64>)>> = BTreeMap::new();
        for point in points {
            by_subject
                .entry(point.subject.clone())
                .or_default()
                .push((point.time_bin, point.difference));
        }

        let width = self.config.window_width;
        let threshold = self.config.threshold;

        #[cfg(feature = "parallel")]
        let results: Result<BTreeMap<SubjectId, DivergencePoint>> = by_subject
            .into_par_iter()
            .map(|(subject, series)| detect_one(subject, series, width, threshold))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let results: Result<BTreeMap<SubjectId, DivergencePoint>> = by_subject
            .into_iter()
            .map(|(subject, series)| detect_one(subject, series, width, threshold))
            .collect();

        let results = results?;
        let diverged = results.values().filter(|d| d.is_diverged()).count();
        tracing::debug!(
            subjects = results.len(),
            diverged,
            window_width = width,
            "divergence detection complete"
        );
        Ok(results)
    }

    /// Detect the divergence point of a single subject's series.
    ///
    /// `subject` is only used to label a [`Error::MalformedSeries`] error.
    /// An empty series yields [`DivergencePoint::NeverDiverged`].
    pub fn detect_series(
        &self,
        subject: impl Into<SubjectId>,
        series: &[(i64, Option<f64>)],
    ) -> Result<DivergencePoint> {
        self.config.validate()?;
        let (_, point) = detect_one(
            subject.into(),
            series.to_vec(),
            self.config.window_width,
            self.config.threshold,
        )?;
        Ok(point)
    }
}

/// Sort, validate, and scan one subject's series.
fn detect_one(
    subject: SubjectId,
    mut series: Vec<(i64, Option<f64>)>,
    width: usize,
    threshold: f64,
) -> Result<(SubjectId, DivergencePoint)> {
    series.sort_unstable_by_key(|&(time_bin, _)| time_bin);

    for pair in series.windows(2) {
        if pair[0].0 == pair[1].0 {
            return Err(Error::MalformedSeries {
                subject,
                time_bin: pair[0].0,
            });
        }
    }

    let point = first_divergence(&series, width, threshold);
    Ok((subject, point))
}

/// Scan a sorted series for the first bin whose forward window of `width`
/// values is fully defined and strictly above `threshold`.
///
/// Windows that would run past the end of the series are not candidates:
/// a truncated window is insufficient evidence, not a free pass. The same
/// holds for windows containing a missing value.
fn first_divergence(series: &[(i64, Option<f64>)], width: usize, threshold: f64) -> DivergencePoint {
    if series.len() < width {
        return DivergencePoint::NeverDiverged;
    }

    for start in 0..=series.len() - width {
        let sustained = series[start..start + width]
            .iter()
            .all(|&(_, value)| matches!(value, Some(v) if v > threshold));
        if sustained {
            return DivergencePoint::At(series[start].0);
        }
    }

    DivergencePoint::NeverDiverged
}
