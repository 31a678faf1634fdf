//! Single-step curve advance under the two-factor LMM.
//!
//! Advancing to horizon `u` is one closed-form step:
//! 1. draw the standard-normal factor pair
//! 2. drop every knot at or before `u` (those rates have fixed)
//! 3. rebase surviving knots to the new valuation date
//! 4. multiply each surviving quote by its stochastic exponential
//!
//! The factor pair is drawn before windowing, so a step consumes exactly
//! two variates even when every knot expires. Seeded simulations stay
//! aligned across curves whose windows empty at different horizons.
//!
//! [`advance_futures`] operates on curves holding futures quotes, where
//! the dynamics are a martingale. [`advance`] wraps it for forward
//! curves by converting to futures, advancing, and converting back.

use lmm_core::Curve;
use lmm_models::convert::{to_forwards, to_futures};
use lmm_models::TwoFactorLmm;

use crate::error::SimulationError;
use crate::rng::SimRng;

/// Advance a futures curve to horizon `u`.
///
/// The curve's rates must hold futures quotes. On success the curve's
/// window has moved past every knot at or before `u`, the surviving
/// knots are rebased by `u`, and each surviving quote has been evolved
/// under the model.
///
/// # Arguments
///
/// * `curve` - Futures curve, updated in place
/// * `model` - Two-factor LMM supplying the dynamics
/// * `u` - Horizon in years
/// * `rng` - Seeded generator for the factor pair
///
/// # Returns
///
/// * `Ok(n)` - The number of live knots after the step
/// * `Err(SimulationError::InvalidHorizon)` - `u` is NaN or negative;
///   the curve is left untouched
///
/// # Example
///
/// ```
/// use lmm_core::Curve;
/// use lmm_models::{LmmParams, TwoFactorLmm};
/// use lmm_pricing::advance::advance_futures;
/// use lmm_pricing::rng::SimRng;
///
/// let model = TwoFactorLmm::new(LmmParams::new(0.1).unwrap());
/// let mut rng = SimRng::from_seed(42);
/// let mut curve = Curve::flat(0.05, 0.2, vec![0.5, 1.0, 1.5]).unwrap();
///
/// let live = advance_futures(&mut curve, &model, 0.5, &mut rng).unwrap();
/// assert_eq!(live, 2);
/// assert_eq!(curve.knots(), &[0.5, 1.0]);
/// ```
pub fn advance_futures(
    curve: &mut Curve<f64>,
    model: &TwoFactorLmm<f64>,
    u: f64,
    rng: &mut SimRng,
) -> Result<usize, SimulationError> {
    if u.is_nan() || u < 0.0 {
        return Err(SimulationError::InvalidHorizon(u));
    }

    // Fixed stream consumption: the pair is drawn whether or not any
    // knot survives the window
    let dw = rng.gen_normal_pair();

    curve.advance_window(u);
    curve.rebase(u);

    let (knots, rates, vols) = curve.parts_mut();
    model.evolve_futures(knots, rates, vols, u, dw);

    Ok(curve.len())
}

/// Advance a forward curve to horizon `u`.
///
/// Forward rates do not follow martingale dynamics directly; the model
/// evolves futures quotes. This entry point converts the curve to
/// futures, advances it with [`advance_futures`], and converts back, so
/// the surviving forwards pick up the convexity drift implied by the
/// shrinking time to each knot.
///
/// # Arguments
///
/// * `curve` - Forward curve, updated in place
/// * `model` - Two-factor LMM supplying the dynamics
/// * `u` - Horizon in years
/// * `rng` - Seeded generator for the factor pair
///
/// # Returns
///
/// * `Ok(n)` - The number of live knots after the step
/// * `Err(SimulationError::InvalidHorizon)` - `u` is NaN or negative;
///   the curve is left untouched
///
/// # Example
///
/// ```
/// use lmm_core::Curve;
/// use lmm_models::{LmmParams, TwoFactorLmm};
/// use lmm_pricing::advance::advance;
/// use lmm_pricing::rng::SimRng;
///
/// let model = TwoFactorLmm::new(LmmParams::new(0.1).unwrap());
/// let mut rng = SimRng::from_seed(42);
/// let mut curve = Curve::flat(0.05, 0.0, vec![1.0, 2.0]).unwrap();
///
/// // Zero volatility: the advance is the deterministic time shift
/// advance(&mut curve, &model, 0.5, &mut rng).unwrap();
/// assert_eq!(curve.knots(), &[0.5, 1.5]);
/// assert_eq!(curve.rates(), &[0.05, 0.05]);
/// ```
pub fn advance(
    curve: &mut Curve<f64>,
    model: &TwoFactorLmm<f64>,
    u: f64,
    rng: &mut SimRng,
) -> Result<usize, SimulationError> {
    // Validate up front so a bad horizon cannot leave the curve stuck
    // in the futures representation
    if u.is_nan() || u < 0.0 {
        return Err(SimulationError::InvalidHorizon(u));
    }

    {
        let (knots, rates, vols) = curve.parts_mut();
        to_futures(knots, rates, vols);
    }

    let live = advance_futures(curve, model, u, rng)?;

    {
        let (knots, rates, vols) = curve.parts_mut();
        to_forwards(knots, rates, vols);
    }

    Ok(live)
}
