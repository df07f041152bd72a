//! Owned vectors.

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::Float;

use crate::expr::{fmt_components, VectorExpression};

/// Number of components in every vector of this crate.
pub const DIM: usize = 3;

/// A concrete three-component vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VectorValue<T = f32> {
    values: [T; DIM],
}

impl<T: Float> VectorValue<T> {
    /// Creates a vector from its components.
    #[inline]
    #[must_use]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { values: [x, y, z] }
    }

    /// Mutable access to component `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= DIM`.
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> &mut T {
        &mut self.values[i]
    }

    /// Returns the components as an array.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [T; DIM] {
        self.values
    }
}

impl<T: Float> Default for VectorValue<T> {
    fn default() -> Self {
        Self {
            values: [T::zero(); DIM],
        }
    }
}

impl<T: Float> From<[T; DIM]> for VectorValue<T> {
    fn from(values: [T; DIM]) -> Self {
        Self { values }
    }
}

impl<T: Float> VectorExpression for VectorValue<T> {
    type Scalar = T;

    #[inline]
    fn size(&self) -> usize {
        DIM
    }

    #[inline]
    fn at(&self, i: usize) -> T {
        self.values[i]
    }

    fn materialize(&self) -> VectorValue<T> {
        *self
    }
}

impl<T> Index<usize> for VectorValue<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.values[i]
    }
}

impl<T> IndexMut<usize> for VectorValue<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.values[i]
    }
}

impl<T: Float + fmt::Display> fmt::Display for VectorValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_components(self, f)
    }
}
