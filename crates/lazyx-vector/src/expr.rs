//! The vector expression capability.

use std::fmt;

use num_traits::Float;

use crate::value::{VectorValue, DIM};

/// A vector that can be read one component at a time.
pub trait VectorExpression {
    /// Component type.
    type Scalar: Float;

    /// Number of components.
    fn size(&self) -> usize;

    /// Computes component `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.size()`.
    fn at(&self, i: usize) -> Self::Scalar;

    /// Evaluates every component into an owned [`VectorValue`].
    ///
    /// # Panics
    ///
    /// Panics if the expression does not have [`DIM`] components.
    fn materialize(&self) -> VectorValue<Self::Scalar> {
        assert_eq!(self.size(), DIM, "only {DIM}-component expressions materialize");
        VectorValue::new(self.at(0), self.at(1), self.at(2))
    }
}

impl<E> VectorExpression for &E
where
    E: VectorExpression + ?Sized,
{
    type Scalar = E::Scalar;

    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }

    #[inline]
    fn at(&self, i: usize) -> Self::Scalar {
        (**self).at(i)
    }
}

/// Writes `(c0, c1, ...)`, evaluating each component on the way.
pub(crate) fn fmt_components<E>(expr: &E, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    E: VectorExpression + ?Sized,
    E::Scalar: fmt::Display,
{
    f.write_str("(")?;
    for i in 0..expr.size() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", expr.at(i))?;
    }
    f.write_str(")")
}
