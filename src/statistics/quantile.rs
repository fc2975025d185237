//! Quantile computation using Type 2 quantiles (inverse empirical CDF with
//! averaging).
//!
//! **Type 2 formula** (for sorted sample x of size n at probability p,
//! 1-based indices):
//! ```text
//! h = n * p + 0.5
//! q = (x[floor(h)] + x[ceil(h)]) / 2
//! ```
//!
//! Averaging at discontinuities makes this estimator better behaved for
//! bootstrap distributions than interpolating estimators like R-7.
//!
//! # Reference
//!
//! Hyndman, R. J. & Fan, Y. (1996). "Sample quantiles in statistical
//! packages." The American Statistician 50(4):361–365.

/// Compute a single quantile from a mutable slice using Type 2 quantiles.
///
/// Uses `select_nth_unstable_by()` for O(n) expected time; the slice is
/// partially reordered as a side effect.
///
/// # Panics
///
/// Panics if `data` is empty or `p` is outside [0, 1].
pub fn compute_quantile(data: &mut [f64], p: f64) -> f64 {
    assert!(!data.is_empty(), "Cannot compute quantile of empty slice");
    assert!(
        (0.0..=1.0).contains(&p),
        "Quantile probability must be in [0, 1]"
    );

    let n = data.len();
    if n == 1 {
        return data[0];
    }

    let (floor_idx, ceil_idx) = type2_indices(n, p);

    if floor_idx == ceil_idx {
        let (_, &mut val, _) = data.select_nth_unstable_by(floor_idx, |a, b| a.total_cmp(b));
        return val;
    }

    // Select the larger index first; everything before the nth element is
    // <= it, so the smaller selection stays correct.
    let (_, &mut ceil_val, _) = data.select_nth_unstable_by(ceil_idx, |a, b| a.total_cmp(b));
    let (_, &mut floor_val, _) = data.select_nth_unstable_by(floor_idx, |a, b| a.total_cmp(b));

    (floor_val + ceil_val) / 2.0
}

/// Compute a single quantile from pre-sorted data using Type 2 quantiles.
///
/// The caller must ensure `sorted` is in ascending order; no verification
/// is performed.
///
/// # Panics
///
/// Panics if `sorted` is empty or `p` is outside [0, 1].
pub fn compute_quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    assert!(!sorted.is_empty(), "Cannot compute quantile of empty slice");
    assert!(
        (0.0..=1.0).contains(&p),
        "Quantile probability must be in [0, 1]"
    );

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let (floor_idx, ceil_idx) = type2_indices(n, p);
    (sorted[floor_idx] + sorted[ceil_idx]) / 2.0
}

/// Map (n, p) to the pair of 0-based order-statistic indices to average.
fn type2_indices(n: usize, p: f64) -> (usize, usize) {
    let h = n as f64 * p + 0.5;

    // 1-based in the formula; saturate/clamp at the sample edges.
    let floor_idx = (h.floor() as usize).saturating_sub(1).min(n - 1);
    let ceil_idx = (h.ceil() as usize).saturating_sub(1).min(n - 1);

    (floor_idx, ceil_idx)
}
