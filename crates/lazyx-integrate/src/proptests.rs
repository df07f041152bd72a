//! Property-based tests for the midpoint walk.

#[cfg(test)]
mod tests {
    use lazyx_core::{Literal, X};
    use proptest::prelude::*;

    use crate::{integrate_with_options, MidpointOptions};

    proptest! {
        #[test]
        fn constant_contributes_once_per_sample(
            k in -100i32..100,
            from in -1000i32..1000,
            width in 1i32..1000,
            n in 1usize..500,
        ) {
            let from = f64::from(from);
            let to = from + f64::from(width);
            let options = MidpointOptions::default().with_subdivisions(n);
            let result = integrate_with_options(Literal::new(f64::from(k)), from, to, &options).unwrap();

            // rounding in the step may shift the count by one at most
            prop_assert!(result.samples.abs_diff(n) <= 1);
            #[allow(clippy::cast_precision_loss)]
            let expected = f64::from(k) * result.samples as f64;
            prop_assert_eq!(result.value, expected);
        }

        #[test]
        fn scaling_multiplies_by_step(
            from in -100.0f64..100.0,
            width in 0.5f64..100.0,
            n in 1usize..200,
        ) {
            let to = from + width;
            let raw = MidpointOptions::default().with_subdivisions(n);
            let scaled = raw.clone().with_scale_by_step(true);

            let a = integrate_with_options(X, from, to, &raw).unwrap();
            let b = integrate_with_options(X, from, to, &scaled).unwrap();
            prop_assert_eq!(a.samples, b.samples);
            prop_assert_eq!(b.value, a.value * a.step);
        }
    }
}
