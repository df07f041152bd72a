//! Composition builders and operator overloading.
//!
//! Builders never evaluate or mutate their operands; they only wrap them in
//! a new node. Raw numbers on either side are normalized through
//! [`IntoExpression`].

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::expr::{Binary, Identity, Literal, Unary};
use crate::normalize::IntoExpression;
use crate::ops::{Abs, Cos, Divides, Exp, Ln, Minus, Multiplies, Negate, Plus, Sin, Sqrt};

/// Builds `e1 + e2`.
#[inline]
pub fn add<A, B>(e1: A, e2: B) -> Binary<A::Expr, B::Expr, Plus>
where
    A: IntoExpression,
    B: IntoExpression,
{
    Binary::new(e1, e2, Plus)
}

/// Builds `e1 - e2`.
#[inline]
pub fn sub<A, B>(e1: A, e2: B) -> Binary<A::Expr, B::Expr, Minus>
where
    A: IntoExpression,
    B: IntoExpression,
{
    Binary::new(e1, e2, Minus)
}

/// Builds `e1 * e2`.
#[inline]
pub fn mul<A, B>(e1: A, e2: B) -> Binary<A::Expr, B::Expr, Multiplies>
where
    A: IntoExpression,
    B: IntoExpression,
{
    Binary::new(e1, e2, Multiplies)
}

/// Builds `e1 / e2`.
///
/// A divisor that evaluates to zero is not intercepted; the result is
/// whatever IEEE division gives.
#[inline]
pub fn div<A, B>(e1: A, e2: B) -> Binary<A::Expr, B::Expr, Divides>
where
    A: IntoExpression,
    B: IntoExpression,
{
    Binary::new(e1, e2, Divides)
}

/// Builds `-e`.
#[inline]
pub fn neg<A>(e: A) -> Unary<A::Expr, Negate>
where
    A: IntoExpression,
{
    Unary::new(e, Negate)
}

/// Adapters wrapping a node in a [`Unary`].
pub trait ExpressionExt: IntoExpression<Expr = Self> + Sized {
    /// Applies an arbitrary function to the value of `self`.
    fn map<F>(self, f: F) -> Unary<Self, F>
    where
        F: Fn(f64) -> f64,
    {
        Unary::new(self, f)
    }

    /// Square root.
    fn sqrt(self) -> Unary<Self, Sqrt> {
        Unary::new(self, Sqrt)
    }

    /// Sine.
    fn sin(self) -> Unary<Self, Sin> {
        Unary::new(self, Sin)
    }

    /// Cosine.
    fn cos(self) -> Unary<Self, Cos> {
        Unary::new(self, Cos)
    }

    /// Natural exponential.
    fn exp(self) -> Unary<Self, Exp> {
        Unary::new(self, Exp)
    }

    /// Natural logarithm.
    fn ln(self) -> Unary<Self, Ln> {
        Unary::new(self, Ln)
    }

    /// Absolute value.
    fn abs(self) -> Unary<Self, Abs> {
        Unary::new(self, Abs)
    }
}

impl<E> ExpressionExt for E where E: IntoExpression<Expr = E> {}

// Operators with a node on the left accept any composable right operand.
// Operators with a raw scalar on the left are spelled out per scalar type,
// since a blanket impl over foreign `f64` would break the orphan rule.
macro_rules! impl_operators {
    (@scalar $s:ty; [$($g:ident),*] $node:ty) => {
        impl<$($g),*> Add<$node> for $s
        where
            $node: IntoExpression<Expr = $node>,
        {
            type Output = Binary<Literal, $node, Plus>;

            #[inline]
            fn add(self, rhs: $node) -> Self::Output {
                add(self, rhs)
            }
        }

        impl<$($g),*> Sub<$node> for $s
        where
            $node: IntoExpression<Expr = $node>,
        {
            type Output = Binary<Literal, $node, Minus>;

            #[inline]
            fn sub(self, rhs: $node) -> Self::Output {
                sub(self, rhs)
            }
        }

        impl<$($g),*> Mul<$node> for $s
        where
            $node: IntoExpression<Expr = $node>,
        {
            type Output = Binary<Literal, $node, Multiplies>;

            #[inline]
            fn mul(self, rhs: $node) -> Self::Output {
                mul(self, rhs)
            }
        }

        impl<$($g),*> Div<$node> for $s
        where
            $node: IntoExpression<Expr = $node>,
        {
            type Output = Binary<Literal, $node, Divides>;

            #[inline]
            fn div(self, rhs: $node) -> Self::Output {
                div(self, rhs)
            }
        }
    };

    ([$($g:ident),*] $node:ty) => {
        impl<$($g,)* Rhs> Add<Rhs> for $node
        where
            $node: IntoExpression<Expr = $node>,
            Rhs: IntoExpression,
        {
            type Output = Binary<$node, Rhs::Expr, Plus>;

            #[inline]
            fn add(self, rhs: Rhs) -> Self::Output {
                add(self, rhs)
            }
        }

        impl<$($g,)* Rhs> Sub<Rhs> for $node
        where
            $node: IntoExpression<Expr = $node>,
            Rhs: IntoExpression,
        {
            type Output = Binary<$node, Rhs::Expr, Minus>;

            #[inline]
            fn sub(self, rhs: Rhs) -> Self::Output {
                sub(self, rhs)
            }
        }

        impl<$($g,)* Rhs> Mul<Rhs> for $node
        where
            $node: IntoExpression<Expr = $node>,
            Rhs: IntoExpression,
        {
            type Output = Binary<$node, Rhs::Expr, Multiplies>;

            #[inline]
            fn mul(self, rhs: Rhs) -> Self::Output {
                mul(self, rhs)
            }
        }

        impl<$($g,)* Rhs> Div<Rhs> for $node
        where
            $node: IntoExpression<Expr = $node>,
            Rhs: IntoExpression,
        {
            type Output = Binary<$node, Rhs::Expr, Divides>;

            #[inline]
            fn div(self, rhs: Rhs) -> Self::Output {
                div(self, rhs)
            }
        }

        impl<$($g),*> Neg for $node
        where
            $node: IntoExpression<Expr = $node>,
        {
            type Output = Unary<$node, Negate>;

            #[inline]
            fn neg(self) -> Self::Output {
                neg(self)
            }
        }

        impl_operators!(@scalar f64; [$($g),*] $node);
        impl_operators!(@scalar i32; [$($g),*] $node);
    };
}

impl_operators!([] Literal);
impl_operators!([] Identity);
impl_operators!([E, Op] Unary<E, Op>);
impl_operators!([L, R, Op] Binary<L, R, Op>);
