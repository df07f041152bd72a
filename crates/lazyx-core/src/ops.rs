//! Operations carried by [`Unary`](crate::Unary) and [`Binary`](crate::Binary) nodes.
//!
//! The named operations are zero-sized, so a node that carries one costs
//! nothing beyond its operands. Any closure of the right shape is an
//! operation too.

/// An operation on one evaluated operand.
pub trait UnaryOp {
    /// Applies the operation.
    fn apply(&self, value: f64) -> f64;
}

/// An operation combining two evaluated operands.
pub trait BinaryOp {
    /// Applies the operation.
    fn apply(&self, left: f64, right: f64) -> f64;
}

impl<F> UnaryOp for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn apply(&self, value: f64) -> f64 {
        self(value)
    }
}

impl<F> BinaryOp for F
where
    F: Fn(f64, f64) -> f64,
{
    #[inline]
    fn apply(&self, left: f64, right: f64) -> f64 {
        self(left, right)
    }
}

/// Addition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Plus;

/// Subtraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Minus;

/// Multiplication.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Multiplies;

/// Division. A zero divisor yields infinity or NaN, never an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Divides;

/// Arithmetic negation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Negate;

impl BinaryOp for Plus {
    #[inline]
    fn apply(&self, left: f64, right: f64) -> f64 {
        left + right
    }
}

impl BinaryOp for Minus {
    #[inline]
    fn apply(&self, left: f64, right: f64) -> f64 {
        left - right
    }
}

impl BinaryOp for Multiplies {
    #[inline]
    fn apply(&self, left: f64, right: f64) -> f64 {
        left * right
    }
}

impl BinaryOp for Divides {
    #[inline]
    fn apply(&self, left: f64, right: f64) -> f64 {
        left / right
    }
}

impl UnaryOp for Negate {
    #[inline]
    fn apply(&self, value: f64) -> f64 {
        -value
    }
}

macro_rules! float_fn_op {
    ($($(#[$doc:meta])* $name:ident => $method:ident;)*) => {
        $(
            $(#[$doc])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl UnaryOp for $name {
                #[inline]
                fn apply(&self, value: f64) -> f64 {
                    value.$method()
                }
            }
        )*
    };
}

float_fn_op! {
    /// Square root. Negative inputs yield NaN.
    Sqrt => sqrt;
    /// Sine, in radians.
    Sin => sin;
    /// Cosine, in radians.
    Cos => cos;
    /// Natural exponential.
    Exp => exp;
    /// Natural logarithm. Non-positive inputs yield NaN or negative infinity.
    Ln => ln;
    /// Absolute value.
    Abs => abs;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_ops() {
        assert_eq!(Plus.apply(2.0, 3.0), 5.0);
        assert_eq!(Minus.apply(2.0, 3.0), -1.0);
        assert_eq!(Multiplies.apply(2.0, 3.0), 6.0);
        assert_eq!(Divides.apply(3.0, 2.0), 1.5);
        assert_eq!(Negate.apply(2.0), -2.0);
    }

    #[test]
    fn test_float_fn_ops() {
        assert_eq!(Sqrt.apply(9.0), 3.0);
        assert_eq!(Abs.apply(-2.0), 2.0);
        assert_eq!(Exp.apply(0.0), 1.0);
        assert_eq!(Ln.apply(1.0), 0.0);
        assert_eq!(Sin.apply(0.0), 0.0);
        assert_eq!(Cos.apply(0.0), 1.0);
        assert!(Sqrt.apply(-1.0).is_nan());
    }

    #[test]
    fn test_division_by_zero_propagates() {
        assert_eq!(Divides.apply(1.0, 0.0), f64::INFINITY);
        assert!(Divides.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_closures_are_ops() {
        let square = |v: f64| v * v;
        let hypot = |a: f64, b: f64| a.hypot(b);
        assert_eq!(UnaryOp::apply(&square, 3.0), 9.0);
        assert_eq!(BinaryOp::apply(&hypot, 3.0, 4.0), 5.0);
    }
}
