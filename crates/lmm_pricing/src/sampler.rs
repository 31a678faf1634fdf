//! Monte Carlo expectation sampling over curve advances.
//!
//! This module provides the orchestration layer for estimating
//! expectations of advanced curves:
//! 1. Random number generation (via [`SimRng`](crate::rng::SimRng))
//! 2. Per-path curve advance (via [`advance`](crate::advance))
//! 3. Streaming aggregation into means and standard errors
//!
//! Each path clones the input curve, advances the clone once, and feeds
//! the result into running sums, so memory stays proportional to the
//! curve size rather than the path count.

use lmm_core::Curve;
use lmm_models::TwoFactorLmm;

use crate::advance::{advance, advance_futures};
use crate::config::SimulationConfig;
use crate::error::{ConfigError, SimulationError};
use crate::par::par_coupon;
use crate::rng::SimRng;

/// A Monte Carlo estimate with its standard error.
///
/// # Examples
///
/// ```rust
/// use lmm_pricing::sampler::Estimate;
///
/// let estimate = Estimate {
///     value: 0.0512,
///     std_error: 0.0004,
/// };
///
/// println!("par: {} +/- {}", estimate.value, estimate.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Estimate {
    /// Estimated expectation.
    pub value: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
}

impl Estimate {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Monte Carlo sampler over curve advances.
///
/// Owns the generator so that consecutive estimates continue one random
/// stream, and holds the configuration fixed across calls. Reset the
/// sampler to replay the stream from its seed.
///
/// # Examples
///
/// ```rust
/// use lmm_core::Curve;
/// use lmm_models::{LmmParams, TwoFactorLmm};
/// use lmm_pricing::config::SimulationConfig;
/// use lmm_pricing::sampler::CurveSampler;
///
/// let config = SimulationConfig::builder()
///     .n_paths(10_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let mut sampler = CurveSampler::new(config).unwrap();
///
/// let model = TwoFactorLmm::new(LmmParams::new(0.1).unwrap());
/// let curve = Curve::flat(0.05, 0.2, vec![1.0, 2.0, 3.0]).unwrap();
///
/// let estimate = sampler.expected_par_coupon(&curve, &model, 0.5).unwrap();
/// println!("par: {} +/- {}", estimate.value, estimate.std_error);
/// ```
pub struct CurveSampler {
    config: SimulationConfig,
    rng: SimRng,
}

impl CurveSampler {
    /// Creates a new sampler with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Sampling configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = SimRng::from_seed(config.seed().unwrap_or(0));
        Ok(Self { config, rng })
    }

    /// Creates a new sampler with a specific seed.
    ///
    /// Convenience constructor that overrides the config seed.
    ///
    /// # Arguments
    ///
    /// * `config` - Sampling configuration
    /// * `seed` - Seed for reproducibility
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = SimRng::from_seed(seed);
        Ok(Self { config, rng })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Resets the sampler's random stream to the original seed.
    pub fn reset(&mut self) {
        self.rng = SimRng::from_seed(self.config.seed().unwrap_or(0));
    }

    /// Resets the sampler's random stream with a new seed.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.rng = SimRng::from_seed(seed);
    }

    /// Estimates the expected futures quotes after advancing to `u`.
    ///
    /// Runs one advance per path on a clone of `curve` and aggregates
    /// the surviving quotes knot by knot. Under the model the futures
    /// dynamics are a martingale, so each estimate should bracket the
    /// corresponding input quote within sampling error.
    ///
    /// # Arguments
    ///
    /// * `curve` - Futures curve to advance (not modified)
    /// * `model` - Two-factor LMM supplying the dynamics
    /// * `u` - Horizon in years
    ///
    /// # Returns
    ///
    /// * `Ok(estimates)` - One [`Estimate`] per surviving knot, in grid
    ///   order; empty when every knot expires by `u`
    /// * `Err(SimulationError::InvalidHorizon)` - `u` is NaN or negative
    pub fn expected_futures(
        &mut self,
        curve: &Curve<f64>,
        model: &TwoFactorLmm<f64>,
        u: f64,
    ) -> Result<Vec<Estimate>, SimulationError> {
        if u.is_nan() || u < 0.0 {
            return Err(SimulationError::InvalidHorizon(u));
        }

        let n_paths = self.config.n_paths();
        // The window is deterministic in u, so every path survives to
        // the same knot count
        let n_live = curve.knots().iter().filter(|&&t| t > u).count();

        let mut sums = vec![0.0; n_live];
        let mut sum_sqs = vec![0.0; n_live];

        for _ in 0..n_paths {
            let mut path_curve = curve.clone();
            advance_futures(&mut path_curve, model, u, &mut self.rng)?;

            for (i, &rate) in path_curve.rates().iter().enumerate() {
                sums[i] += rate;
                sum_sqs[i] += rate * rate;
            }
        }

        Ok(sums
            .iter()
            .zip(sum_sqs.iter())
            .map(|(&sum, &sum_sq)| {
                let mean = sum / n_paths as f64;
                let variance = (sum_sq / n_paths as f64) - mean * mean;
                let std_dev = variance.max(0.0).sqrt();
                Estimate {
                    value: mean,
                    std_error: std_dev / (n_paths as f64).sqrt(),
                }
            })
            .collect())
    }

    /// Estimates the expected par coupon after advancing to `u`.
    ///
    /// Runs one forward-curve advance per path on a clone of `curve`,
    /// prices the surviving grid's par coupon, and aggregates.
    ///
    /// # Arguments
    ///
    /// * `curve` - Forward curve to advance (not modified)
    /// * `model` - Two-factor LMM supplying the dynamics
    /// * `u` - Horizon in years
    ///
    /// # Returns
    ///
    /// * `Ok(estimate)` - Mean par coupon and its standard error
    /// * `Err(SimulationError::InvalidHorizon)` - `u` is NaN or negative
    /// * `Err(SimulationError::DegenerateCurve)` - Every knot expires by
    ///   `u`, leaving nothing to price
    pub fn expected_par_coupon(
        &mut self,
        curve: &Curve<f64>,
        model: &TwoFactorLmm<f64>,
        u: f64,
    ) -> Result<Estimate, SimulationError> {
        if u.is_nan() || u < 0.0 {
            return Err(SimulationError::InvalidHorizon(u));
        }

        let n_paths = self.config.n_paths();
        let mut sum = 0.0;
        let mut sum_sq = 0.0;

        for _ in 0..n_paths {
            let mut path_curve = curve.clone();
            advance(&mut path_curve, model, u, &mut self.rng)?;

            let par = par_coupon(&path_curve)?;
            sum += par;
            sum_sq += par * par;
        }

        let mean = sum / n_paths as f64;
        let variance = (sum_sq / n_paths as f64) - mean * mean;
        let std_dev = variance.max(0.0).sqrt();

        Ok(Estimate {
            value: mean,
            std_error: std_dev / (n_paths as f64).sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lmm_models::LmmParams;

    fn model(alpha: f64) -> TwoFactorLmm<f64> {
        TwoFactorLmm::new(LmmParams::new(alpha).unwrap())
    }

    fn config(n_paths: usize, seed: u64) -> SimulationConfig {
        SimulationConfig::builder()
            .n_paths(n_paths)
            .seed(seed)
            .build()
            .unwrap()
    }

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_accepts_valid_config() {
        let sampler = CurveSampler::new(config(100, 1));
        assert!(sampler.is_ok());
    }

    #[test]
    fn test_config_accessor() {
        let sampler = CurveSampler::new(config(100, 1)).unwrap();
        assert_eq!(sampler.config().n_paths(), 100);
    }

    #[test]
    fn test_estimate_confidence_half_widths() {
        let estimate = Estimate {
            value: 1.0,
            std_error: 0.1,
        };
        assert_relative_eq!(estimate.confidence_95(), 0.196, epsilon = 1e-12);
        assert_relative_eq!(estimate.confidence_99(), 0.2576, epsilon = 1e-12);
    }

    // ========================================
    // Expected Futures Tests
    // ========================================

    #[test]
    fn test_expected_futures_zero_vol_is_deterministic() {
        let curve = Curve::flat(0.05, 0.0, vec![1.0, 2.0]).unwrap();
        let mut sampler = CurveSampler::new(config(500, 42)).unwrap();

        let estimates = sampler.expected_futures(&curve, &model(0.2), 0.5).unwrap();

        // Every path returns exactly 0.05; the running sums still round,
        // so the mean and standard error carry accumulation noise
        assert_eq!(estimates.len(), 2);
        for estimate in estimates {
            assert_relative_eq!(estimate.value, 0.05, epsilon = 1e-12);
            assert!(estimate.std_error < 1e-8);
        }
    }

    #[test]
    fn test_expected_futures_window_shrinks() {
        let curve = Curve::flat(0.05, 0.2, vec![0.5, 1.0, 2.0]).unwrap();
        let mut sampler = CurveSampler::new(config(200, 42)).unwrap();

        let estimates = sampler.expected_futures(&curve, &model(0.2), 1.0).unwrap();

        assert_eq!(estimates.len(), 1);
    }

    #[test]
    fn test_expected_futures_empty_window() {
        let curve = Curve::flat(0.05, 0.2, vec![0.5, 1.0]).unwrap();
        let mut sampler = CurveSampler::new(config(200, 42)).unwrap();

        let estimates = sampler.expected_futures(&curve, &model(0.2), 5.0).unwrap();

        assert!(estimates.is_empty());
    }

    #[test]
    fn test_expected_futures_rejects_bad_horizon() {
        let curve = Curve::flat(0.05, 0.2, vec![1.0]).unwrap();
        let mut sampler = CurveSampler::new(config(200, 42)).unwrap();

        let result = sampler.expected_futures(&curve, &model(0.2), -1.0);
        assert!(matches!(result, Err(SimulationError::InvalidHorizon(_))));
    }

    #[test]
    fn test_expected_futures_does_not_modify_input() {
        let curve = Curve::flat(0.05, 0.2, vec![1.0, 2.0]).unwrap();
        let reference = curve.clone();
        let mut sampler = CurveSampler::new(config(50, 42)).unwrap();

        sampler.expected_futures(&curve, &model(0.2), 0.5).unwrap();

        assert_eq!(curve, reference);
    }

    // ========================================
    // Expected Par Coupon Tests
    // ========================================

    #[test]
    fn test_expected_par_coupon_zero_vol_is_deterministic() {
        let curve = Curve::flat(0.05, 0.0, vec![1.0, 2.0]).unwrap();
        let mut sampler = CurveSampler::new(config(500, 42)).unwrap();

        let estimate = sampler.expected_par_coupon(&curve, &model(0.2), 0.5).unwrap();

        // Zero vol advance is the pure time shift
        let mut shifted = curve.clone();
        shifted.advance_window(0.5);
        shifted.rebase(0.5);
        let expected = par_coupon(&shifted).unwrap();

        assert_relative_eq!(estimate.value, expected, epsilon = 1e-12);
        assert!(estimate.std_error < 1e-8);
    }

    #[test]
    fn test_expected_par_coupon_degenerate_when_all_expire() {
        let curve = Curve::flat(0.05, 0.2, vec![0.5, 1.0]).unwrap();
        let mut sampler = CurveSampler::new(config(200, 42)).unwrap();

        let result = sampler.expected_par_coupon(&curve, &model(0.2), 5.0);
        assert_eq!(result.unwrap_err(), SimulationError::DegenerateCurve);
    }

    #[test]
    fn test_expected_par_coupon_rejects_bad_horizon() {
        let curve = Curve::flat(0.05, 0.2, vec![1.0]).unwrap();
        let mut sampler = CurveSampler::new(config(200, 42)).unwrap();

        let result = sampler.expected_par_coupon(&curve, &model(0.2), f64::NAN);
        assert!(matches!(result, Err(SimulationError::InvalidHorizon(_))));
    }

    // ========================================
    // Reproducibility Tests
    // ========================================

    #[test]
    fn test_reset_replays_the_stream() {
        let curve = Curve::flat(0.05, 0.2, vec![1.0, 2.0]).unwrap();
        let mut sampler = CurveSampler::new(config(200, 42)).unwrap();

        let first = sampler.expected_par_coupon(&curve, &model(0.2), 0.5).unwrap();
        sampler.reset();
        let second = sampler.expected_par_coupon(&curve, &model(0.2), 0.5).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_with_seed_overrides_config_seed() {
        let curve = Curve::flat(0.05, 0.2, vec![1.0, 2.0]).unwrap();

        let mut overridden = CurveSampler::with_seed(config(200, 42), 7).unwrap();
        let mut direct = CurveSampler::new(config(200, 7)).unwrap();

        let a = overridden.expected_par_coupon(&curve, &model(0.2), 0.5).unwrap();
        let b = direct.expected_par_coupon(&curve, &model(0.2), 0.5).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_reset_with_seed_changes_the_stream() {
        let curve = Curve::flat(0.05, 0.2, vec![1.0, 2.0]).unwrap();
        let mut sampler = CurveSampler::new(config(200, 42)).unwrap();

        let first = sampler.expected_par_coupon(&curve, &model(0.2), 0.5).unwrap();
        sampler.reset_with_seed(43);
        let second = sampler.expected_par_coupon(&curve, &model(0.2), 0.5).unwrap();

        assert_ne!(first.value, second.value);
    }
}
