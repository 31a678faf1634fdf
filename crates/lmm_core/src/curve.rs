//! Piecewise-flat forward/futures curve with a movable start window.

use crate::error::CurveError;
use crate::traits::Float;

/// A piecewise-flat rate curve over a strictly increasing time grid.
///
/// Stores three parallel sequences: knot times (year fractions from the
/// valuation date), the rate that applies on the interval ending at each
/// knot, and the lognormal volatility of that rate. An implicit origin at
/// time zero precedes the first knot, so `rates[0]` applies on
/// `(0, knots[0]]`.
///
/// The curve carries a window start so that knots which have already
/// expired can be dropped in O(1) per knot without reallocating: accessors
/// only ever expose the live window. Advancing the window never shifts the
/// underlying storage.
///
/// Whether the stored rates are forwards or futures is a property of how
/// the curve is used, not of the type. Conversion between the two
/// representations lives in the model layer.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use lmm_core::Curve;
///
/// let mut curve = Curve::new(
///     vec![0.25, 0.5, 1.0],
///     vec![0.04, 0.045, 0.05],
///     vec![0.2, 0.2, 0.2],
/// )
/// .unwrap();
///
/// // Advance past the first knot and rebase the grid.
/// let dropped = curve.advance_window(0.25);
/// curve.rebase(0.25);
/// assert_eq!(dropped, 1);
/// assert_eq!(curve.knots(), &[0.25, 0.75]);
/// assert_eq!(curve.rates(), &[0.045, 0.05]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve<T: Float> {
    /// Knot times in years, strictly increasing and positive
    knots: Vec<T>,
    /// Rate applying on the interval ending at each knot
    rates: Vec<T>,
    /// Lognormal volatility of each rate
    vols: Vec<T>,
    /// Index of the first live knot
    start: usize,
}

impl<T: Float> Curve<T> {
    /// Construct a curve from parallel knot, rate and volatility sequences.
    ///
    /// Takes ownership of the three vectors. An empty curve (all three
    /// vectors empty) is valid and represents a fully expired grid.
    ///
    /// # Arguments
    ///
    /// * `knots` - Knot times in years (must be positive and strictly increasing)
    /// * `rates` - Rate for the interval ending at each knot
    /// * `vols` - Lognormal volatility of each rate (must be non-negative)
    ///
    /// # Returns
    ///
    /// * `Ok(Curve)` - Successfully constructed curve
    /// * `Err(CurveError::LengthMismatch)` - Sequences differ in length
    /// * `Err(CurveError::NonMonotonicKnots)` - Knots not positive and strictly increasing
    /// * `Err(CurveError::NegativeVolatility)` - A volatility is negative
    ///
    /// # Example
    ///
    /// ```
    /// use lmm_core::Curve;
    ///
    /// let curve = Curve::new(
    ///     vec![0.5, 1.0, 2.0],
    ///     vec![0.02, 0.025, 0.03],
    ///     vec![0.15, 0.18, 0.2],
    /// )
    /// .unwrap();
    /// assert_eq!(curve.len(), 3);
    /// ```
    pub fn new(knots: Vec<T>, rates: Vec<T>, vols: Vec<T>) -> Result<Self, CurveError> {
        if knots.len() != rates.len() || knots.len() != vols.len() {
            return Err(CurveError::LengthMismatch {
                knots: knots.len(),
                rates: rates.len(),
                vols: vols.len(),
            });
        }

        // Validate knots are positive and strictly increasing
        for i in 0..knots.len() {
            if i == 0 {
                if knots[0] <= T::zero() {
                    return Err(CurveError::NonMonotonicKnots { index: 0 });
                }
            } else if knots[i] <= knots[i - 1] {
                return Err(CurveError::NonMonotonicKnots { index: i });
            }
        }

        for (i, vol) in vols.iter().enumerate() {
            if *vol < T::zero() {
                return Err(CurveError::NegativeVolatility { index: i });
            }
        }

        Ok(Self {
            knots,
            rates,
            vols,
            start: 0,
        })
    }

    /// Construct a curve with a constant rate and volatility on every interval.
    ///
    /// Useful in tests and for flat term-structure scenarios.
    ///
    /// # Arguments
    ///
    /// * `rate` - The constant rate applied on every interval
    /// * `vol` - The constant lognormal volatility
    /// * `knots` - Knot times in years (must be positive and strictly increasing)
    ///
    /// # Example
    ///
    /// ```
    /// use lmm_core::Curve;
    ///
    /// let curve = Curve::flat(0.05, 0.2, vec![0.25, 0.5, 0.75, 1.0]).unwrap();
    /// assert_eq!(curve.rates(), &[0.05, 0.05, 0.05, 0.05]);
    /// ```
    pub fn flat(rate: T, vol: T, knots: Vec<T>) -> Result<Self, CurveError> {
        let n = knots.len();
        Self::new(knots, vec![rate; n], vec![vol; n])
    }

    /// Return the number of live knots in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.knots.len() - self.start
    }

    /// Return `true` if every knot has been dropped from the window.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.knots.len()
    }

    /// Return the live knot times.
    #[inline]
    pub fn knots(&self) -> &[T] {
        &self.knots[self.start..]
    }

    /// Return the live rates.
    #[inline]
    pub fn rates(&self) -> &[T] {
        &self.rates[self.start..]
    }

    /// Return the live volatilities.
    #[inline]
    pub fn vols(&self) -> &[T] {
        &self.vols[self.start..]
    }

    /// Return the live rates mutably.
    #[inline]
    pub fn rates_mut(&mut self) -> &mut [T] {
        &mut self.rates[self.start..]
    }

    /// Return the live knots, mutable rates and volatilities in one call.
    ///
    /// The three slices borrow disjoint fields, so rates can be updated
    /// in place while knots and volatilities are read. Model kernels that
    /// walk all three sequences per knot use this to avoid cloning.
    ///
    /// # Returns
    ///
    /// A tuple `(knots, rates, vols)` over the live window.
    #[inline]
    pub fn parts_mut(&mut self) -> (&[T], &mut [T], &[T]) {
        (
            &self.knots[self.start..],
            &mut self.rates[self.start..],
            &self.vols[self.start..],
        )
    }

    /// Drop every leading knot with time at or before `u`.
    ///
    /// A knot exactly at `u` expires (its rate fixes at `u`), so the
    /// comparison is inclusive. The underlying storage is untouched; only
    /// the window start moves forward.
    ///
    /// # Arguments
    ///
    /// * `u` - Horizon in years
    ///
    /// # Returns
    ///
    /// The number of knots dropped from the window.
    ///
    /// # Example
    ///
    /// ```
    /// use lmm_core::Curve;
    ///
    /// let mut curve = Curve::flat(0.05, 0.2, vec![0.25, 0.5, 0.75]).unwrap();
    /// assert_eq!(curve.advance_window(0.5), 2);
    /// assert_eq!(curve.knots(), &[0.75]);
    /// ```
    pub fn advance_window(&mut self, u: T) -> usize {
        let before = self.start;
        while self.start < self.knots.len() && self.knots[self.start] <= u {
            self.start += 1;
        }
        self.start - before
    }

    /// Shift every live knot time back by `u`.
    ///
    /// After advancing the window to horizon `u`, rebasing re-expresses
    /// the surviving knots relative to the new valuation date. Callers
    /// advance the window first so that every rebased knot stays positive.
    ///
    /// # Arguments
    ///
    /// * `u` - Horizon in years to subtract from each live knot
    pub fn rebase(&mut self, u: T) {
        for knot in &mut self.knots[self.start..] {
            *knot = *knot - u;
        }
    }
}
