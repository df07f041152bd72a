//! Expression node types.
//!
//! Every node is an immutable value describing a computation over one free
//! scalar input. Composite nodes own their operands, so a tree is complete
//! once built and may be evaluated any number of times.

use crate::normalize::IntoExpression;
use crate::ops::{BinaryOp, UnaryOp};

/// The capability shared by every scalar node.
///
/// Evaluation is pure: the same input always yields the same output and
/// nothing observable happens besides the returned value.
pub trait Expression {
    /// Evaluates the expression with the free variable bound to `x`.
    fn evaluate(&self, x: f64) -> f64;
}

impl<E: Expression + ?Sized> Expression for &E {
    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        (**self).evaluate(x)
    }
}

/// A constant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Literal(f64);

impl Literal {
    /// Creates a constant node.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the constant.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Expression for Literal {
    #[inline]
    fn evaluate(&self, _x: f64) -> f64 {
        self.0
    }
}

/// The free variable itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Identity;

/// The free variable, ready to compose: `X * X + 1.0`.
pub const X: Identity = Identity;

impl Expression for Identity {
    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        x
    }
}

/// An operation applied to one sub-expression.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Unary<E, Op> {
    inner: E,
    op: Op,
}

impl<E, Op> Unary<E, Op> {
    /// Wraps `inner` with `op`, normalizing a raw number into a [`Literal`].
    #[inline]
    pub fn new<A>(inner: A, op: Op) -> Self
    where
        A: IntoExpression<Expr = E>,
    {
        Self {
            inner: inner.into_expression(),
            op,
        }
    }

    /// The wrapped sub-expression.
    #[must_use]
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E, Op> Expression for Unary<E, Op>
where
    E: Expression,
    Op: UnaryOp,
{
    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        self.op.apply(self.inner.evaluate(x))
    }
}

/// An operation combining two sub-expressions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Binary<L, R, Op> {
    left: L,
    right: R,
    op: Op,
}

impl<L, R, Op> Binary<L, R, Op> {
    /// Combines two operands with `op`.
    ///
    /// Raw numbers are stored as [`Literal`] nodes, existing nodes as-is.
    /// Neither operand is evaluated here.
    #[inline]
    pub fn new<A, B>(left: A, right: B, op: Op) -> Self
    where
        A: IntoExpression<Expr = L>,
        B: IntoExpression<Expr = R>,
    {
        Self {
            left: left.into_expression(),
            right: right.into_expression(),
            op,
        }
    }

    /// The left operand.
    #[must_use]
    pub fn left(&self) -> &L {
        &self.left
    }

    /// The right operand.
    #[must_use]
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R, Op> Expression for Binary<L, R, Op>
where
    L: Expression,
    R: Expression,
    Op: BinaryOp,
{
    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        self.op.apply(self.left.evaluate(x), self.right.evaluate(x))
    }
}
