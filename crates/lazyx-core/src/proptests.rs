//! Property-based tests for the scalar node grammar.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{add, div, mul, sub, Expression, Identity, Literal, X};

    fn finite() -> impl Strategy<Value = f64> {
        -1.0e6f64..1.0e6f64
    }

    fn non_zero() -> impl Strategy<Value = f64> {
        prop_oneof![(-1.0e6f64..-1.0e-3), (1.0e-3f64..1.0e6)]
    }

    proptest! {
        #[test]
        fn literal_is_constant(c in finite(), x in finite()) {
            prop_assert_eq!(Literal::new(c).evaluate(x), c);
        }

        #[test]
        fn identity_is_input(x in finite()) {
            prop_assert_eq!(Identity.evaluate(x), x);
        }

        #[test]
        fn add_is_pointwise(a in finite(), b in finite(), x in finite()) {
            let e1 = X * a;
            let e2 = X + b;
            let sum = add(e1, e2);
            prop_assert_eq!(sum.evaluate(x), e1.evaluate(x) + e2.evaluate(x));
        }

        #[test]
        fn sub_is_pointwise(a in finite(), x in finite()) {
            let e = sub(X, a);
            prop_assert_eq!(e.evaluate(x), x - a);
        }

        #[test]
        fn mul_is_pointwise(a in finite(), x in finite()) {
            let e1 = X - a;
            let e2 = Literal::new(a);
            prop_assert_eq!(mul(e1, e2).evaluate(x), e1.evaluate(x) * e2.evaluate(x));
        }

        #[test]
        fn div_is_pointwise(a in finite(), x in non_zero()) {
            let e = div(a, X);
            prop_assert_eq!(e.evaluate(x), a / x);
        }

        #[test]
        fn raw_and_literal_operands_agree(c in finite(), x in finite()) {
            let raw = X + c;
            let node = X + Literal::new(c);
            let flipped = c + X;
            prop_assert_eq!(raw.evaluate(x), node.evaluate(x));
            prop_assert_eq!(raw.evaluate(x), flipped.evaluate(x));
        }
    }
}
