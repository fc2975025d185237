//! Error types for detection and estimation.

use thiserror::Error;

use crate::types::SubjectId;

/// Errors returned by [`crate::DivergenceDetector`] and
/// [`crate::BootstrapIntervalEstimator`].
///
/// All variants are input-validation failures: the computation itself is
/// deterministic and pure, so retrying with unchanged input is meaningless.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A subject's series contains a duplicate time bin.
    ///
    /// The whole batch fails: a subject with a corrupt series must not
    /// silently drop out of (or wrongly contribute to) the population
    /// estimate.
    #[error("malformed series for subject {subject:?}: duplicate time bin {time_bin}")]
    MalformedSeries {
        /// Subject whose series is malformed.
        subject: SubjectId,
        /// The duplicated time bin.
        time_bin: i64,
    },

    /// A configuration value is out of range. Raised before any computation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No subject reached the bootstrap stage with a defined divergence
    /// point, so neither a point estimate nor an interval is computable.
    #[error("insufficient data: no defined divergence points ({excluded} subject(s) never diverged)")]
    InsufficientData {
        /// Number of subjects excluded as never-diverged.
        excluded: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;
