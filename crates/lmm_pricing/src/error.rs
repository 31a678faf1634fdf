//! Error types for the simulation and pricing layer.
//!
//! This module defines structured error types for configuration validation
//! and runtime errors in the curve advance engine.

use std::fmt;

/// Runtime error from curve advance or pricing.
///
/// These errors are raised at the public entry points; once an advance or
/// pricing call is under way, the inner kernels cannot fail.
#[derive(Clone, Debug, PartialEq)]
pub enum SimulationError {
    /// Horizon is NaN or negative.
    ///
    /// An infinite horizon is accepted and simply expires every knot.
    InvalidHorizon(f64),
    /// No knots remain on the curve, so there is no coupon to price.
    DegenerateCurve,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHorizon(u) => {
                write!(f, "Invalid horizon {}: must be non-negative", u)
            }
            Self::DegenerateCurve => {
                write!(f, "Degenerate curve: no knots remain to price")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// Configuration error for the curve sampler.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    InvalidPathCount(usize),
    /// Invalid parameter value with name and description.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPathCount(count) => {
                write!(
                    f,
                    "Invalid path count {}: must be in range [1, 10_000_000]",
                    count
                )
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
