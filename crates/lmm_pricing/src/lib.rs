//! # LMM Pricing (L3: Simulation Engine)
//!
//! Stochastic curve advance and pricing on top of the two-factor LMM.
//!
//! This crate provides:
//! - Seeded random number generation (`rng`)
//! - Single-step curve advance under the model (`advance`)
//! - Par coupon pricing from a forward curve (`par`)
//! - Monte Carlo expectation sampling with standard errors (`sampler`)
//! - Simulation configuration with validation (`config`)
//!
//! ## Overview
//!
//! Advancing a curve to horizon `u` is one closed-form step, not a
//! discretised path: expired knots are dropped, the grid is rebased, and
//! every surviving quote is multiplied by its stochastic exponential in a
//! single pass. [`advance`](advance::advance) composes this with the
//! futures/forward conversion so forward curves can be advanced directly.
//!
//! ## Usage Example
//!
//! ```rust
//! use lmm_core::Curve;
//! use lmm_models::{LmmParams, TwoFactorLmm};
//! use lmm_pricing::advance::advance;
//! use lmm_pricing::par::par_coupon;
//! use lmm_pricing::rng::SimRng;
//!
//! let model = TwoFactorLmm::new(LmmParams::new(0.1).unwrap());
//! let mut rng = SimRng::from_seed(42);
//! let mut curve = Curve::flat(0.05, 0.2, vec![0.5, 1.0, 1.5, 2.0]).unwrap();
//!
//! // Advance the forward curve half a year and price the par coupon of
//! // what remains.
//! advance(&mut curve, &model, 0.5, &mut rng).unwrap();
//! let par = par_coupon(&curve).unwrap();
//! assert!(par > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod advance;
pub mod config;
pub mod error;
pub mod par;
pub mod rng;
pub mod sampler;

pub use config::{MAX_PATHS, SimulationConfig};
pub use error::{ConfigError, SimulationError};
pub use sampler::{CurveSampler, Estimate};
