//! Par coupon pricing from a forward curve.
//!
//! The par coupon is the fixed rate that gives a swap over the curve's
//! grid zero present value. With piecewise-flat forwards the discount
//! factors compound interval by interval:
//! ```text
//! D_0 = 1
//! D_j = D_{j-1} * exp(-f_j * dt_j)
//! A   = sum_j D_j * dt_j
//! par = (1 - D_n) / A
//! ```
//! where `dt_j` is the accrual from the previous knot (the implicit
//! origin at zero for the first interval) and `A` is the annuity.

use lmm_core::Curve;
use num_traits::Float;

use crate::error::SimulationError;

/// Price the par coupon of the curve's remaining grid.
///
/// The curve's rates must hold forward rates; futures quotes would
/// overstate the discounting. The computation walks the live window
/// once, so a curve that has been advanced prices only its surviving
/// intervals.
///
/// # Arguments
///
/// * `curve` - Forward curve to price
///
/// # Returns
///
/// * `Ok(par)` - The par coupon of the remaining grid
/// * `Err(SimulationError::DegenerateCurve)` - No knots remain
///
/// # Example
///
/// ```
/// use lmm_core::Curve;
/// use lmm_pricing::par::par_coupon;
///
/// // One interval of a year at 5%: par = exp(0.05) - 1
/// let curve = Curve::flat(0.05, 0.2, vec![1.0]).unwrap();
/// let par = par_coupon(&curve).unwrap();
/// assert!((par - (0.05_f64.exp() - 1.0)).abs() < 1e-15);
/// ```
pub fn par_coupon<T: Float>(curve: &Curve<T>) -> Result<T, SimulationError> {
    if curve.is_empty() {
        return Err(SimulationError::DegenerateCurve);
    }

    let knots = curve.knots();
    let rates = curve.rates();

    let mut discount = T::one();
    let mut annuity = T::zero();
    let mut prev_knot = T::zero();

    for i in 0..knots.len() {
        let accrual = knots[i] - prev_knot;
        discount = discount * (-rates[i] * accrual).exp();
        annuity = annuity + discount * accrual;
        prev_knot = knots[i];
    }

    Ok((T::one() - discount) / annuity)
}
