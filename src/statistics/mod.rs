//! Statistical primitives used by the estimator.
//!
//! - Type 2 quantiles (inverse empirical CDF with averaging, Hyndman &
//!   Fan 1996) — the single quantile rule used everywhere in this crate,
//!   so finite-resample results are reproducible.
//! - Resampling with replacement, with counter-based per-trial seeding so
//!   sequential and parallel runs produce identical output.

mod bootstrap;
mod quantile;

pub use bootstrap::{counter_rng_seed, resample_mean};
pub use quantile::{compute_quantile, compute_quantile_sorted};
