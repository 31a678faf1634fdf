//! Two-factor LIBOR market model for futures dynamics.
//!
//! Each futures quote F with knot time t and lognormal volatility sigma
//! evolves over a horizon u as a stochastic exponential:
//! ```text
//! F(u) = F(0) * exp(sigma * B_u(t) - sigma^2 * u / 2)
//! ```
//! where the driving Brownian value mixes two independent factors through
//! a rotation by the knot time:
//! ```text
//! B_u(t) = B0 * cos(alpha * t) + B1 * sin(alpha * t)
//! ```
//! with B0 and B1 independent Brownian motions evaluated at time u, so
//! each has variance u.
//!
//! ## Key Properties
//!
//! - **Martingale**: since B_u(t) has variance u for every t, the
//!   sigma^2 * u / 2 drift correction makes E[F(u)] = F(0) at every
//!   horizon
//! - **Two-factor decorrelation**: rates at knots s and t load on the
//!   factors with weights (cos(alpha*s), sin(alpha*s)) and
//!   (cos(alpha*t), sin(alpha*t)), giving correlation cos(alpha*(t - s))
//! - **Lognormal rates**: a futures quote keeps its sign through any
//!   number of evolution steps
//!
//! ## Usage
//!
//! ```
//! use lmm_models::lmm::{LmmParams, TwoFactorLmm};
//!
//! let params = LmmParams::new(0.1_f64).unwrap();
//! let model = TwoFactorLmm::new(params);
//!
//! // One knot at t = 1 with 20% volatility, evolved over u = 1 with a
//! // standard-normal pair of zero: the quote only picks up the drift
//! // correction.
//! let knots = [1.0];
//! let vols = [0.2];
//! let mut rates = [0.05];
//! model.evolve_futures(&knots, &mut rates, &vols, 1.0, [0.0, 0.0]);
//! assert!((rates[0] - 0.05 * (-0.02_f64).exp()).abs() < 1e-15);
//! ```

use lmm_core::traits::Float;

/// Two-factor LMM parameters.
///
/// # Type Parameters
///
/// * `T` - Float type (f64 or f32)
///
/// # Fields
///
/// * `alpha` - Rotation frequency mixing the two factors across knot times
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LmmParams<T: Float> {
    /// Rotation frequency (radians per year of knot time)
    pub alpha: T,
}

impl<T: Float> LmmParams<T> {
    /// Create new two-factor LMM parameters with validation.
    ///
    /// Any finite `alpha` is a valid rotation frequency. `alpha = 0`
    /// collapses the model to a single factor (every knot loads fully on
    /// the first factor), which is useful for testing.
    ///
    /// # Arguments
    ///
    /// * `alpha` - Rotation frequency (must be finite)
    ///
    /// # Returns
    ///
    /// `Some(LmmParams)` if `alpha` is finite, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use lmm_models::lmm::LmmParams;
    ///
    /// let params = LmmParams::new(0.25_f64);
    /// assert!(params.is_some());
    ///
    /// // Invalid: non-finite rotation frequency
    /// let invalid = LmmParams::new(f64::NAN);
    /// assert!(invalid.is_none());
    /// ```
    pub fn new(alpha: T) -> Option<Self> {
        if !alpha.is_finite() {
            return None;
        }
        Some(Self { alpha })
    }
}

/// Two-factor lognormal futures model.
///
/// Evolves every live knot of a futures curve over a single horizon in
/// one call. The model is stateless apart from its parameters; the same
/// instance can evolve any number of curves and paths.
///
/// # Discretisation
///
/// The evolution is exact for the model dynamics, not an Euler step: the
/// stochastic exponential is applied in closed form, so a single call
/// over horizon u matches the distribution of the continuous-time model
/// at u.
#[derive(Clone, Copy, Debug)]
pub struct TwoFactorLmm<T: Float> {
    params: LmmParams<T>,
}

impl<T: Float> TwoFactorLmm<T> {
    /// Create a new model instance from validated parameters.
    pub fn new(params: LmmParams<T>) -> Self {
        Self { params }
    }

    /// Return the model parameters.
    #[inline]
    pub fn params(&self) -> &LmmParams<T> {
        &self.params
    }

    /// Evaluate the driving Brownian value at knot time `t`.
    ///
    /// Given realised factor values `b0` and `b1`, returns
    /// `b0 * cos(alpha * t) + b1 * sin(alpha * t)`.
    ///
    /// # Arguments
    ///
    /// * `t` - Knot time in years (rebased to the current valuation date)
    /// * `b0` - Realised value of the first Brownian factor
    /// * `b1` - Realised value of the second Brownian factor
    #[inline]
    pub fn driving_brownian(&self, t: T, b0: T, b1: T) -> T {
        let angle = self.params.alpha * t;
        b0 * angle.cos() + b1 * angle.sin()
    }

    /// Evolve futures quotes in place over horizon `u`.
    ///
    /// `dw` is a pair of independent standard normals; the model scales
    /// them by `sqrt(u)` internally so each factor has the variance of a
    /// Brownian motion at time u. With `u = 0` the quotes are unchanged
    /// exactly, whatever the draw.
    ///
    /// The knot times must already be rebased to the current valuation
    /// date: the rotation angle uses the remaining time to each knot,
    /// while the variance in the drift correction uses the elapsed
    /// horizon `u`.
    ///
    /// # Arguments
    ///
    /// * `knots` - Rebased knot times in years
    /// * `rates` - Futures quotes, updated in place
    /// * `vols` - Lognormal volatility at each knot
    /// * `u` - Horizon in years (must be non-negative)
    /// * `dw` - Pair of independent standard-normal draws
    pub fn evolve_futures(&self, knots: &[T], rates: &mut [T], vols: &[T], u: T, dw: [T; 2]) {
        debug_assert!(knots.len() == rates.len());
        debug_assert!(knots.len() == vols.len());
        debug_assert!(u >= T::zero());

        let sqrt_u = u.sqrt();
        let b0 = sqrt_u * dw[0];
        let b1 = sqrt_u * dw[1];
        let two = T::from(2.0).unwrap_or(T::one());

        for i in 0..rates.len() {
            let sigma = vols[i];
            let exponent =
                sigma * self.driving_brownian(knots[i], b0, b1) - sigma * sigma * u / two;
            rates[i] = rates[i] * exponent.exp();
        }
    }
}
