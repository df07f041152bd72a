//! # lazyx-core
//!
//! Scalar expression nodes for the lazyx expression engine.
//!
//! This crate provides:
//! - The [`Expression`] capability trait and the four node shapes
//!   ([`Literal`], [`Identity`], [`Unary`], [`Binary`])
//! - Literal normalization through [`IntoExpression`], so raw numbers and
//!   nodes mix freely in one expression
//! - Composition builders ([`add`], [`sub`], [`mul`], [`div`], [`neg`]) and
//!   the matching `std::ops` operators
//!
//! ## Design Principles
//!
//! - **Value-typed trees**: every composition is a new concrete type; nothing
//!   is boxed and nothing is evaluated until [`Expression::evaluate`]
//! - **Static dispatch**: each tree monomorphizes to straight-line code
//! - **Normalization at compile time**: `x + 1.0` resolves the `1.0` to a
//!   [`Literal`] through a trait impl, never through a runtime check
//!
//! ```
//! use lazyx_core::{Expression, X};
//!
//! let f = X / (1.0 + X);
//! assert_eq!(f.evaluate(1.0), 0.5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compose;
pub mod error;
pub mod expr;
pub mod normalize;
pub mod ops;

#[cfg(test)]
mod proptests;

pub use compose::{add, div, mul, neg, sub, ExpressionExt};
pub use error::{DomainError, Result};
pub use expr::{Binary, Expression, Identity, Literal, Unary, X};
pub use normalize::IntoExpression;
pub use ops::{
    Abs, BinaryOp, Cos, Divides, Exp, Ln, Minus, Multiplies, Negate, Plus, Sin, Sqrt, UnaryOp,
};
