//! Lazy three-component vector expressions.
//!
//! This crate provides:
//! - [`VectorExpression`]: the capability of being indexed component-wise
//! - [`VectorValue`]: an owned vector, the only node holding storage
//! - [`VectorSum`] and [`VectorSubtract`]: compositions computed per index
//!   on demand
//!
//! Composing `v1 + v2 + v2 + v1` builds a tree without allocating. Each
//! call to [`VectorExpression::at`] walks the whole tree again; nothing is
//! cached between indices. [`VectorExpression::materialize`] is where the
//! result is copied into a [`VectorValue`].
//!
//! ```
//! use lazyx_vector::{VectorExpression, VectorValue};
//!
//! let v1 = VectorValue::new(0.0f32, 1.0, 2.0);
//! let v2 = VectorValue::new(2.0f32, 1.0, 0.0);
//! let result: VectorValue = (v1 + v2 + v2 + v1).into();
//! assert_eq!(result.to_string(), "(4, 4, 4)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod expr;
pub mod ops;
pub mod value;

#[cfg(test)]
mod proptests;

pub use expr::VectorExpression;
pub use ops::{VectorSubtract, VectorSum};
pub use value::{VectorValue, DIM};
