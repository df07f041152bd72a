//! Property-based tests for the reduction.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::reduce_multiply_add;

    proptest! {
        #[test]
        fn matches_recursive_definition(
            a in prop::array::uniform4(-1.0e3f64..1.0e3),
            b in prop::array::uniform4(-1.0e3f64..1.0e3),
        ) {
            let tail = a[3] * b[3];
            let tail = a[2] * b[2] + tail;
            let tail = a[1] * b[1] + tail;
            let expected = a[0] * b[0] + tail;
            prop_assert_eq!(reduce_multiply_add(&a, &b), expected);
        }

        #[test]
        fn integer_dot_matches_iterator(
            a in prop::array::uniform8(-1000i64..1000),
            b in prop::array::uniform8(-1000i64..1000),
        ) {
            let expected: i64 = a.iter().zip(&b).map(|(x, y)| x * y).sum();
            prop_assert_eq!(reduce_multiply_add(&a, &b), expected);
        }
    }
}
