//! # LMM Models (L2: Model Dynamics)
//!
//! Two-factor LIBOR market model dynamics and representation conversions.
//!
//! This crate provides:
//! - The two-factor lognormal futures model (`lmm`)
//! - Futures/forward convexity conversion (`convert`)
//!
//! ## Design Principles
//!
//! - **In-place kernels**: model code mutates rate slices obtained from
//!   [`lmm_core::Curve::parts_mut`] instead of allocating per step
//! - **Branch-free interiors**: inputs are validated when a curve or
//!   parameter set is constructed, so the per-knot loops carry only
//!   `debug_assert!` length checks
//! - **Generic numerics**: every kernel is generic over a [`Float`] type
//!   parameter
//!
//! [`Float`]: lmm_core::Float

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod convert;
pub mod lmm;

pub use lmm::{LmmParams, TwoFactorLmm};
