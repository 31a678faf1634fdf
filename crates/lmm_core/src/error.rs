//! Error types for curve validation.
//!
//! This module provides:
//! - `CurveError`: Errors from curve construction

use thiserror::Error;

/// Curve construction errors.
///
/// Provides structured error handling for curve validation with
/// descriptive context for each failure mode. Validation happens once,
/// in [`Curve::new`](crate::curve::Curve::new); code operating on an
/// already-constructed curve does not re-check these conditions.
///
/// # Variants
/// - `LengthMismatch`: Knot, rate and volatility sequences differ in length
/// - `NonMonotonicKnots`: Knot times are not positive and strictly increasing
/// - `NegativeVolatility`: A volatility entry is negative
///
/// # Examples
/// ```
/// use lmm_core::error::CurveError;
///
/// let err = CurveError::LengthMismatch { knots: 3, rates: 2, vols: 3 };
/// assert_eq!(
///     format!("{}", err),
///     "Length mismatch: 3 knots, 2 rates, 3 volatilities"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveError {
    /// Knot, rate and volatility sequences have different lengths.
    #[error("Length mismatch: {knots} knots, {rates} rates, {vols} volatilities")]
    LengthMismatch {
        /// Number of knot times provided
        knots: usize,
        /// Number of rates provided
        rates: usize,
        /// Number of volatilities provided
        vols: usize,
    },

    /// Knot times are not positive and strictly increasing.
    ///
    /// Index 0 is reported when the first knot is not strictly greater
    /// than zero; index `i > 0` when `knots[i] <= knots[i - 1]`.
    #[error("Knot times must be positive and strictly increasing: violation at index {index}")]
    NonMonotonicKnots {
        /// Index of the first offending knot
        index: usize,
    },

    /// A volatility entry is negative.
    #[error("Volatility at index {index} is negative")]
    NegativeVolatility {
        /// Index of the offending volatility
        index: usize,
    },
}
