//! Numerical integration for lazyx expressions.
//!
//! This crate provides:
//! - [`integrate`]: the raw midpoint sum over `n` subdivisions
//! - [`integrate_with_options`]: the same walk, configurable through
//!   [`MidpointOptions`] and reporting a [`MidpointResult`]
//!
//! # Example
//!
//! ```
//! use lazyx_core::X;
//! use lazyx_integrate::{integrate_with_options, MidpointOptions};
//!
//! // ∫₀¹ x dx with the step applied
//! let options = MidpointOptions::default().with_subdivisions(4).with_scale_by_step(true);
//! let result = integrate_with_options(X, 0.0, 1.0, &options).unwrap();
//! assert_eq!(result.samples, 4);
//! assert!((result.value - 0.5).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod midpoint;

#[cfg(test)]
mod proptests;

pub use midpoint::{integrate, integrate_with_options, MidpointOptions, MidpointResult};
