//! Property-based tests for vector compositions.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{VectorExpression, VectorValue};

    fn vector() -> impl Strategy<Value = VectorValue<f64>> {
        prop::array::uniform3(-1.0e6f64..1.0e6).prop_map(VectorValue::from)
    }

    proptest! {
        #[test]
        fn sum_is_componentwise(a in vector(), b in vector()) {
            let sum = a + b;
            for i in 0..3 {
                prop_assert_eq!(sum.at(i), a.at(i) + b.at(i));
            }
        }

        #[test]
        fn subtract_is_componentwise(a in vector(), b in vector()) {
            let diff = a - b;
            for i in 0..3 {
                prop_assert_eq!(diff.at(i), a.at(i) - b.at(i));
            }
        }

        #[test]
        fn chain_matches_left_fold(a in vector(), b in vector(), c in vector()) {
            let lazy = (a + b - c).materialize();
            let expected = VectorValue::new(
                a[0] + b[0] - c[0],
                a[1] + b[1] - c[1],
                a[2] + b[2] - c[2],
            );
            prop_assert_eq!(lazy, expected);
        }

        #[test]
        fn display_lists_components(a in vector(), b in vector()) {
            let expected = format!("({}, {}, {})", a[0], a[1], a[2]);
            prop_assert_eq!(a.to_string(), expected);

            let sum = a + b;
            prop_assert_eq!(sum.to_string(), sum.materialize().to_string());
        }
    }
}
