//! Fixed-length multiply-add reduction.
//!
//! The length is a const generic parameter, so two arrays of different
//! lengths are a type error and the empty case is rejected when the call
//! is compiled. With the length known, the loop below is fully unrolled
//! and every index check is eliminated.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::ops::{Add, Mul};

struct NonEmpty<const C: usize>;

impl<const C: usize> NonEmpty<C> {
    const CHECK: () = assert!(C > 0, "reduction requires at least one element");
}

/// Reduces two arrays to the sum of their element-wise products.
///
/// The association order is `a[0]*b[0] + (a[1]*b[1] + (... + a[C-1]*b[C-1]))`:
/// the first product is added to the reduction of the remaining `C - 1`
/// elements. Floating-point results depend on this order.
///
/// ```
/// use lazyx_reduce::reduce_multiply_add;
///
/// assert_eq!(reduce_multiply_add(&[1.0f32, 1.0, 1.0], &[1.5, 1.0, 1.0]), 3.5);
/// ```
///
/// Lengths must agree:
///
/// ```compile_fail
/// use lazyx_reduce::reduce_multiply_add;
///
/// reduce_multiply_add(&[1.0f32, 1.0, 1.0], &[1.0, 1.0]);
/// ```
///
/// and must be positive:
///
/// ```compile_fail
/// use lazyx_reduce::reduce_multiply_add;
///
/// let empty: [f32; 0] = [];
/// reduce_multiply_add(&empty, &empty);
/// ```
#[inline]
#[must_use]
pub fn reduce_multiply_add<T, const C: usize>(a: &[T; C], b: &[T; C]) -> T
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    let () = NonEmpty::<C>::CHECK;

    let mut acc = a[C - 1] * b[C - 1];
    let mut i = C - 1;
    while i > 0 {
        i -= 1;
        acc = a[i] * b[i] + acc;
    }
    acc
}

/// Alias for [`reduce_multiply_add`].
#[inline]
#[must_use]
pub fn dot<T, const C: usize>(a: &[T; C], b: &[T; C]) -> T
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    reduce_multiply_add(a, b)
}

#[cfg(test)]
mod proptests;
