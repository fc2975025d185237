//! Configuration validation through the public builder surface.
//!
//! Invalid values are accepted by the builders but rejected with
//! `Error::InvalidConfiguration` before any computation runs.

use divergence_point::{
    BootstrapConfig, BootstrapIntervalEstimator, DetectorConfig, DivergenceDetector, Error,
};

fn invalid_message(err: Error) -> String {
    match err {
        Error::InvalidConfiguration(msg) => msg,
        other => panic!("expected InvalidConfiguration, got {:?}", other),
    }
}

// =============================================================================
// WINDOW WIDTH
// =============================================================================

#[test]
fn window_width_zero_rejected() {
    let msg = invalid_message(DetectorConfig::new().window_width(0).validate().unwrap_err());
    assert!(msg.contains("window_width"), "message was: {}", msg);
}

#[test]
fn window_width_even_rejected() {
    for width in [2, 4, 6, 100] {
        assert!(DetectorConfig::new().window_width(width).validate().is_err());
    }
}

#[test]
fn window_width_odd_accepted() {
    for width in [1, 3, 5, 99] {
        assert!(DetectorConfig::new().window_width(width).validate().is_ok());
    }
}

// =============================================================================
// THRESHOLD
// =============================================================================

#[test]
fn threshold_must_be_finite() {
    assert!(DetectorConfig::new().threshold(f64::NAN).validate().is_err());
    assert!(DetectorConfig::new().threshold(f64::NEG_INFINITY).validate().is_err());
    assert!(DetectorConfig::new().threshold(-0.25).validate().is_ok());
}

// =============================================================================
// RESAMPLES
// =============================================================================

#[test]
fn resamples_zero_rejected() {
    let msg = invalid_message(BootstrapConfig::new().resamples(0).validate().unwrap_err());
    assert!(msg.contains("resamples"), "message was: {}", msg);
}

#[test]
fn resamples_one_accepted() {
    assert!(BootstrapConfig::new().resamples(1).validate().is_ok());
}

// =============================================================================
// QUANTILE PAIR
// =============================================================================

#[test]
fn quantiles_on_open_interval_boundary_rejected() {
    assert!(BootstrapConfig::new().quantiles(0.0, 0.975).validate().is_err());
    assert!(BootstrapConfig::new().quantiles(0.025, 1.0).validate().is_err());
    assert!(BootstrapConfig::new().quantiles(-0.1, 0.975).validate().is_err());
    assert!(BootstrapConfig::new().quantiles(0.025, 1.5).validate().is_err());
}

#[test]
fn quantile_order_enforced() {
    assert!(BootstrapConfig::new().quantiles(0.5, 0.5).validate().is_err());
    assert!(BootstrapConfig::new().quantiles(0.975, 0.025).validate().is_err());
    assert!(BootstrapConfig::new().quantiles(0.025, 0.975).validate().is_ok());
    assert!(BootstrapConfig::new().quantiles(0.1, 0.9).validate().is_ok());
}

#[test]
fn nan_quantiles_rejected() {
    assert!(BootstrapConfig::new().quantiles(f64::NAN, 0.975).validate().is_err());
    assert!(BootstrapConfig::new().quantiles(0.025, f64::NAN).validate().is_err());
}

// =============================================================================
// BUILDER PASSTHROUGH
// =============================================================================

#[test]
fn detector_builder_round_trips_config() {
    let detector = DivergenceDetector::new().window_width(7).threshold(0.1);
    assert_eq!(detector.config().window_width, 7);
    assert_eq!(detector.config().threshold, 0.1);
}

#[test]
fn estimator_builder_round_trips_config() {
    let estimator = BootstrapIntervalEstimator::new()
        .resamples(3_000)
        .quantiles(0.05, 0.95)
        .seed(123);
    assert_eq!(estimator.config().resamples, 3_000);
    assert_eq!(estimator.config().lower_quantile, 0.05);
    assert_eq!(estimator.config().upper_quantile, 0.95);
    assert_eq!(estimator.config().seed, 123);
}

#[test]
fn with_config_uses_given_config() {
    let config = BootstrapConfig::thorough().seed(99);
    let estimator = BootstrapIntervalEstimator::with_config(config.clone());
    assert_eq!(estimator.config(), &config);
}
