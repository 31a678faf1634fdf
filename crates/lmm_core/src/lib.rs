//! # lmm_core: Curve Foundation for the LMM Library
//!
//! ## Layer 1 (Foundation) Role
//!
//! lmm_core serves as the bottom layer of the 3-layer architecture, providing:
//! - The piecewise-flat forward/futures curve (`curve`)
//! - Numeric trait re-exports for generic pricing code (`traits`)
//! - Curve validation errors (`error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other lmm_* crates, with minimal external
//! dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error type derivation
//! - serde: Serialisation support (optional)
//!
//! ## Validate at the Boundary
//!
//! [`Curve::new`] checks its inputs once (matching lengths, strictly
//! increasing positive knots, non-negative volatilities). Downstream model
//! and pricing code assumes a well-formed curve and stays branch-free.
//!
//! ## Usage Examples
//!
//! ```rust
//! use lmm_core::Curve;
//!
//! // A three-knot forward curve with 20% lognormal volatility throughout.
//! let curve = Curve::new(
//!     vec![0.25, 0.5, 0.75],
//!     vec![0.04, 0.045, 0.05],
//!     vec![0.2, 0.2, 0.2],
//! )
//! .unwrap();
//!
//! assert_eq!(curve.len(), 3);
//! assert_eq!(curve.rates()[1], 0.045);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`Curve`] and [`CurveError`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod curve;
pub mod error;
pub mod traits;

pub use curve::Curve;
pub use error::CurveError;
pub use traits::Float;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
