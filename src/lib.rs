//! # divergence-point
//!
//! Divergence point analysis (DPA) for looking-time data.
//!
//! Given a per-subject, per-time-bin condition-difference signal (e.g.
//! proportion of looks to target minus proportion of looks to competitor),
//! this crate answers two questions:
//!
//! - **Per subject**: at which time bin does looking behavior first diverge
//!   *and stay* diverged for a minimum run of consecutive bins?
//!   ([`DivergenceDetector`])
//! - **Per population**: what is the mean divergence time across subjects,
//!   with a bootstrap confidence interval?
//!   ([`BootstrapIntervalEstimator`])
//!
//! The crate deliberately does not load gaze samples, window trials, bin
//! time, filter trackloss, fit smoothing models, or plot anything. It
//! consumes one scalar per subject/time-bin — empirical or model-predicted,
//! it does not care — and produces onsets and an interval.
//!
//! ## Quick start
//!
//! ```
//! use divergence_point::{BootstrapIntervalEstimator, DivergenceDetector, TimeSeriesPoint};
//!
//! // Difference signal for one subject, 50 ms bins.
//! let points = vec![
//!     TimeSeriesPoint::new("s01", 0, -0.02),
//!     TimeSeriesPoint::new("s01", 50, 0.11),
//!     TimeSeriesPoint::new("s01", 100, 0.19),
//!     TimeSeriesPoint::new("s01", 150, 0.23),
//!     TimeSeriesPoint::new("s01", 200, 0.25),
//! ];
//!
//! let onsets = DivergenceDetector::new().window_width(3).detect(&points)?;
//!
//! let estimate = BootstrapIntervalEstimator::new()
//!     .resamples(2_000)
//!     .seed(42)
//!     .estimate(&onsets.into_values().collect::<Vec<_>>())?;
//!
//! println!(
//!     "mean divergence at {:.0} ms [{:.0}, {:.0}]",
//!     estimate.point_estimate, estimate.lower_bound, estimate.upper_bound,
//! );
//! # Ok::<(), divergence_point::Error>(())
//! ```
//!
//! ## Reproducibility
//!
//! The estimator threads a single explicit seed through a counter-based
//! seeding scheme, so results are identical across runs and identical with
//! or without the `parallel` feature.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod detector;
mod error;
mod estimator;
pub mod statistics;
mod types;

pub use config::{BootstrapConfig, DetectorConfig, NeverDivergedPolicy};
pub use detector::DivergenceDetector;
pub use error::{Error, Result};
pub use estimator::{defined_mean, defined_median, BootstrapIntervalEstimator};
pub use types::{DivergenceEstimate, DivergencePoint, SubjectId, TimeSeriesPoint};
