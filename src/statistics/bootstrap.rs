//! Resampling-with-replacement primitives.

use rand::Rng;

/// Derive an independent RNG seed for one resample trial.
///
/// SplitMix64 finalizer over `seed + trial * golden_gamma`. Consecutive
/// trial counters map to well-separated seeds, so per-trial streams are
/// statistically independent and the overall result is identical whether
/// trials run sequentially or in parallel.
pub fn counter_rng_seed(seed: u64, trial: u64) -> u64 {
    let mut z = seed.wrapping_add(trial.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Draw `data.len()` values from `data` with replacement and return their
/// arithmetic mean.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn resample_mean<R: Rng>(data: &[f64], rng: &mut R) -> f64 {
    assert!(!data.is_empty(), "Cannot resample an empty slice");

    let n = data.len();
    let mut sum = 0.0;
    for _ in 0..n {
        sum += data[rng.random_range(0..n)];
    }
    sum / n as f64
}
