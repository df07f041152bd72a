//! Lazy component-wise compositions.
//!
//! A composition owns its operands (or borrows them, when built from
//! references, with the borrow checker holding the operands alive). No
//! component is computed until [`VectorExpression::at`] is called.

use std::fmt;
use std::ops::{Add, Sub};

use lazyx_core::{DomainError, Result};
use num_traits::Float;

use crate::expr::{fmt_components, VectorExpression};
use crate::value::VectorValue;

fn check_sizes<A, B>(a: &A, b: &B) -> Result<()>
where
    A: VectorExpression,
    B: VectorExpression,
{
    if a.size() == b.size() {
        Ok(())
    } else {
        Err(DomainError::SizeMismatch {
            left: a.size(),
            right: b.size(),
        })
    }
}

macro_rules! composition {
    ($(#[$doc:meta])* $name:ident, $op:tt) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name<A, B> {
            a: A,
            b: B,
        }

        impl<A, B> $name<A, B>
        where
            A: VectorExpression,
            B: VectorExpression<Scalar = A::Scalar>,
        {
            /// Composes two operands.
            ///
            /// # Panics
            ///
            /// Panics if the operands differ in size.
            #[inline]
            pub fn new(a: A, b: B) -> Self {
                assert_eq!(a.size(), b.size(), "vector operands differ in size");
                Self { a, b }
            }

            /// Composes two operands, reporting a size mismatch as an error.
            ///
            /// # Errors
            ///
            /// Returns [`DomainError::SizeMismatch`] if the operands differ
            /// in size.
            pub fn try_new(a: A, b: B) -> Result<Self> {
                check_sizes(&a, &b)?;
                Ok(Self { a, b })
            }
        }

        impl<A, B> VectorExpression for $name<A, B>
        where
            A: VectorExpression,
            B: VectorExpression<Scalar = A::Scalar>,
        {
            type Scalar = A::Scalar;

            #[inline]
            fn size(&self) -> usize {
                self.a.size()
            }

            #[inline]
            fn at(&self, i: usize) -> Self::Scalar {
                self.a.at(i) $op self.b.at(i)
            }
        }

        impl<A, B> fmt::Display for $name<A, B>
        where
            A: VectorExpression,
            B: VectorExpression<Scalar = A::Scalar>,
            A::Scalar: fmt::Display,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_components(self, f)
            }
        }

        impl<T, A, B> From<$name<A, B>> for VectorValue<T>
        where
            T: Float,
            A: VectorExpression<Scalar = T>,
            B: VectorExpression<Scalar = T>,
        {
            fn from(expr: $name<A, B>) -> Self {
                expr.materialize()
            }
        }
    };
}

composition! {
    /// `a + b`, computed per component.
    VectorSum, +
}

composition! {
    /// `a - b`, computed per component.
    VectorSubtract, -
}

macro_rules! impl_operators {
    ([$($g:tt)*] $node:ty) => {
        impl<$($g)* Rhs> Add<Rhs> for $node
        where
            $node: VectorExpression,
            Rhs: VectorExpression<Scalar = <$node as VectorExpression>::Scalar>,
        {
            type Output = VectorSum<$node, Rhs>;

            #[inline]
            fn add(self, rhs: Rhs) -> Self::Output {
                VectorSum::new(self, rhs)
            }
        }

        impl<$($g)* Rhs> Sub<Rhs> for $node
        where
            $node: VectorExpression,
            Rhs: VectorExpression<Scalar = <$node as VectorExpression>::Scalar>,
        {
            type Output = VectorSubtract<$node, Rhs>;

            #[inline]
            fn sub(self, rhs: Rhs) -> Self::Output {
                VectorSubtract::new(self, rhs)
            }
        }
    };
}

impl_operators!([T,] VectorValue<T>);
impl_operators!(['a, T,] &'a VectorValue<T>);
impl_operators!([A, B,] VectorSum<A, B>);
impl_operators!([A, B,] VectorSubtract<A, B>);
