//! Numeric trait abstractions for generic curve and model code.
//!
//! This module re-exports the `Float` trait so the rest of the workspace
//! names a single numeric bound. Curve construction, convexity conversion
//! and par-coupon pricing are all generic over `T: Float`, which keeps the
//! core algorithms usable with `f64`, `f32`, or any other type satisfying
//! the trait.
//!
//! ## Important
//! Keep model kernels monomorphic at the call site (no `Box<dyn Trait>`
//! indirection) so the optimiser can inline the per-knot arithmetic.

/// Generic floating-point trait for numeric computations.
///
/// This trait provides a unified interface for standard floating-point
/// types (f64, f32) across curve construction, conversion and pricing.
///
/// # Type Safety
/// All implementing types must support:
/// - Arithmetic operations (+, -, *, /)
/// - Comparisons (PartialOrd)
/// - Mathematical functions (exp, ln, sqrt, etc.)
/// - Copy and Clone semantics
///
/// # Examples
/// ```
/// use lmm_core::traits::Float;
///
/// fn compute_discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let discount_f64: f64 = compute_discount(0.05, 1.0);
/// assert!((discount_f64 - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;
