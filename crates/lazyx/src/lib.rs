//! # lazyx
//!
//! Lazy expression composition and evaluation.
//!
//! Composing `a + b * c` produces no intermediate storage: the expression
//! is a value-typed tree, evaluated only when asked, against one free input.
//!
//! ## Features
//!
//! - **Scalar trees**: literals, the free variable, unary and binary nodes
//!   over `f64`, with raw numbers normalized at compile time
//! - **Integration**: midpoint sampling of any scalar tree
//! - **Vector trees**: lazy component-wise sums and differences of
//!   three-component vectors
//! - **Reduction**: multiply-add over arrays whose length is part of the type
//!
//! ## Quick Start
//!
//! ```
//! use lazyx::prelude::*;
//!
//! let f = X / (1.0 + X);
//! assert_eq!(f.evaluate(1.0), 0.5);
//!
//! let sum = integrate(f, 1.0, 5.0, 10).unwrap();
//! assert!(sum > 0.0);
//!
//! let v = (VectorValue::new(0.0f32, 1.0, 2.0) + VectorValue::new(2.0, 1.0, 0.0)).materialize();
//! assert_eq!(v.to_string(), "(2, 2, 2)");
//!
//! assert_eq!(reduce_multiply_add(&[1.0f32, 1.0, 1.0], &[1.5, 1.0, 1.0]), 3.5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use lazyx_core as core;
pub use lazyx_integrate as integrate;
pub use lazyx_reduce as reduce;
pub use lazyx_vector as vector;

use lazyx_vector::{VectorExpression, DIM};

/// Dot product of two vector expressions.
///
/// Both operands are evaluated component by component and the products
/// are reduced with [`reduce_multiply_add`](lazyx_reduce::reduce_multiply_add).
///
/// # Panics
///
/// Panics if either operand does not have three components.
pub fn dot_vectors<A, B>(a: &A, b: &B) -> A::Scalar
where
    A: VectorExpression,
    B: VectorExpression<Scalar = A::Scalar>,
    A::Scalar: std::fmt::Debug,
{
    let a: [A::Scalar; DIM] = a.materialize().to_array();
    let b: [A::Scalar; DIM] = b.materialize().to_array();
    let result = lazyx_reduce::reduce_multiply_add(&a, &b);
    tracing::trace!(dim = DIM, result = ?result, "vector dot product");
    result
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use lazyx_core::{
        add, div, mul, neg, sub, Binary, DomainError, Expression, ExpressionExt, Identity,
        IntoExpression, Literal, Unary, X,
    };
    pub use lazyx_integrate::{integrate, integrate_with_options, MidpointOptions, MidpointResult};
    pub use lazyx_reduce::{dot, reduce_multiply_add};
    pub use lazyx_vector::{VectorExpression, VectorSubtract, VectorSum, VectorValue};

    pub use crate::dot_vectors;
}
