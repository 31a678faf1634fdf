//! Futures/forward convexity conversion.
//!
//! Under lognormal futures dynamics the futures quote for the interval
//! ending at knot time t exceeds the corresponding forward rate by a
//! deterministic convexity adjustment:
//! ```text
//! futures = forward + sigma^2 * t^2 / 2
//! ```
//! where sigma is the lognormal volatility of the rate. Because the
//! adjustment depends only on the knot time and volatility, the two
//! representations convert back and forth without loss beyond
//! floating-point rounding.
//!
//! Curves do not record which representation they hold; callers track it
//! and apply the matching conversion. The simulation layer converts to
//! futures before evolving and back to forwards afterwards.

use num_traits::Float;

/// Convexity adjustment for a single knot.
///
/// # Arguments
///
/// * `t` - Knot time in years
/// * `vol` - Lognormal volatility of the rate at that knot
///
/// # Returns
///
/// The adjustment `vol^2 * t^2 / 2` to add to a forward rate to obtain
/// the futures quote.
///
/// # Example
///
/// ```
/// use lmm_models::convert::convexity_adjustment;
///
/// // vol = 0.2, t = 2: 0.04 * 4 / 2 = 0.08
/// let adj = convexity_adjustment(2.0_f64, 0.2);
/// assert!((adj - 0.08).abs() < 1e-15);
/// ```
#[inline]
pub fn convexity_adjustment<T: Float>(t: T, vol: T) -> T {
    let two = T::from(2.0).unwrap_or(T::one());
    vol * vol * t * t / two
}

/// Convert forward rates to futures quotes in place.
///
/// Adds the convexity adjustment at each knot. The three slices must have
/// equal length; the simulation layer obtains them from
/// [`lmm_core::Curve::parts_mut`].
///
/// # Arguments
///
/// * `knots` - Knot times in years
/// * `rates` - Forward rates, overwritten with futures quotes
/// * `vols` - Lognormal volatility at each knot
pub fn to_futures<T: Float>(knots: &[T], rates: &mut [T], vols: &[T]) {
    debug_assert!(knots.len() == rates.len());
    debug_assert!(knots.len() == vols.len());

    for i in 0..rates.len() {
        rates[i] = rates[i] + convexity_adjustment(knots[i], vols[i]);
    }
}

/// Convert futures quotes to forward rates in place.
///
/// Subtracts the convexity adjustment at each knot, inverting
/// [`to_futures`].
///
/// # Arguments
///
/// * `knots` - Knot times in years
/// * `rates` - Futures quotes, overwritten with forward rates
/// * `vols` - Lognormal volatility at each knot
pub fn to_forwards<T: Float>(knots: &[T], rates: &mut [T], vols: &[T]) {
    debug_assert!(knots.len() == rates.len());
    debug_assert!(knots.len() == vols.len());

    for i in 0..rates.len() {
        rates[i] = rates[i] - convexity_adjustment(knots[i], vols[i]);
    }
}
