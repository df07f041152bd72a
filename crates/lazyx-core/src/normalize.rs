//! Literal normalization.
//!
//! [`IntoExpression`] maps an operand's type to the node stored for it:
//! raw numbers become [`Literal`], nodes map to themselves. Composition
//! builders accept any `IntoExpression`, so mixing nodes and plain numbers
//! type-checks without per-type overloads, and the choice is made by trait
//! resolution rather than at runtime.

use crate::expr::{Binary, Expression, Identity, Literal, Unary};
use crate::ops::{BinaryOp, UnaryOp};

/// Conversion of a composable operand into an expression node.
pub trait IntoExpression {
    /// The node stored for this operand.
    type Expr: Expression;

    /// Performs the conversion.
    fn into_expression(self) -> Self::Expr;
}

macro_rules! impl_literal {
    ($($t:ty),*) => {
        $(
            impl IntoExpression for $t {
                type Expr = Literal;

                #[inline]
                fn into_expression(self) -> Literal {
                    Literal::new(f64::from(self))
                }
            }
        )*
    };
}

// One impl per literal kind keeps `x + 1.0` and `x + 1` unambiguous.
impl_literal!(f64, i32);

impl IntoExpression for Literal {
    type Expr = Self;

    #[inline]
    fn into_expression(self) -> Self {
        self
    }
}

impl IntoExpression for Identity {
    type Expr = Self;

    #[inline]
    fn into_expression(self) -> Self {
        self
    }
}

impl<E, Op> IntoExpression for Unary<E, Op>
where
    E: Expression,
    Op: UnaryOp,
{
    type Expr = Self;

    #[inline]
    fn into_expression(self) -> Self {
        self
    }
}

impl<L, R, Op> IntoExpression for Binary<L, R, Op>
where
    L: Expression,
    R: Expression,
    Op: BinaryOp,
{
    type Expr = Self;

    #[inline]
    fn into_expression(self) -> Self {
        self
    }
}

impl<'a, E> IntoExpression for &'a E
where
    E: Expression,
{
    type Expr = &'a E;

    #[inline]
    fn into_expression(self) -> &'a E {
        self
    }
}
