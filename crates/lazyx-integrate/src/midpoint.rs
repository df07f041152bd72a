//! Midpoint-rule sampling.
//!
//! The walk starts half a step into the interval and advances by `step`
//! while the sample point stays below `to`. The stop condition compares
//! against `to` rather than counting samples, so rounding in `step` can
//! add or drop one sample; [`MidpointResult::samples`] reports what
//! actually happened.
//!
//! By default the samples are summed without multiplying by `step`. Set
//! [`MidpointOptions::scale_by_step`] to get a Riemann estimate of the
//! integral instead.

use lazyx_core::{DomainError, Expression, IntoExpression, Result};

/// Configuration for [`integrate_with_options`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MidpointOptions {
    /// Number of subdivisions of the interval. Must be positive.
    pub subdivisions: usize,
    /// Multiply the accumulated sum by the step width.
    pub scale_by_step: bool,
}

impl Default for MidpointOptions {
    fn default() -> Self {
        Self {
            subdivisions: 100,
            scale_by_step: false,
        }
    }
}

impl MidpointOptions {
    /// Sets the subdivision count.
    #[must_use]
    pub fn with_subdivisions(mut self, subdivisions: usize) -> Self {
        self.subdivisions = subdivisions;
        self
    }

    /// Enables or disables scaling the sum by the step width.
    #[must_use]
    pub fn with_scale_by_step(mut self, scale_by_step: bool) -> Self {
        self.scale_by_step = scale_by_step;
        self
    }
}

/// Outcome of a midpoint walk.
#[derive(Clone, Debug, PartialEq)]
pub struct MidpointResult {
    /// The accumulated sum, scaled by `step` if requested.
    pub value: f64,
    /// Number of points actually sampled.
    pub samples: usize,
    /// Distance between consecutive sample points.
    pub step: f64,
}

/// Sums `expr` at the midpoints of `n` subdivisions of `[from, to]`.
///
/// The sum is not multiplied by the step width. A constant `k` therefore
/// integrates to `k * n` whenever the walk takes exactly `n` samples.
///
/// # Errors
///
/// Returns a [`DomainError`] if `n == 0`, if `from == to`, if a bound is
/// not finite, or if the step is too small to advance the sample point.
///
/// # Example
///
/// ```
/// use lazyx_core::X;
/// use lazyx_integrate::integrate;
///
/// let sum = integrate(X / (1.0 + X), 1.0, 5.0, 10).unwrap();
/// assert!(sum > 0.0);
/// ```
pub fn integrate<E>(expr: E, from: f64, to: f64, n: usize) -> Result<f64>
where
    E: IntoExpression,
{
    let options = MidpointOptions::default().with_subdivisions(n);
    integrate_with_options(expr, from, to, &options).map(|result| result.value)
}

/// Walks `[from, to]` at subdivision midpoints as configured by `options`.
///
/// An interval with `from > to` is accepted and yields no samples.
///
/// # Errors
///
/// See [`integrate`].
pub fn integrate_with_options<E>(
    expr: E,
    from: f64,
    to: f64,
    options: &MidpointOptions,
) -> Result<MidpointResult>
where
    E: IntoExpression,
{
    let expr = expr.into_expression();
    let n = options.subdivisions;
    let _span = tracing::debug_span!("midpoint", from, to, n).entered();

    if n == 0 {
        tracing::warn!("rejecting empty subdivision");
        return Err(DomainError::EmptySubdivision);
    }
    if !from.is_finite() || !to.is_finite() {
        tracing::warn!(from, to, "rejecting non-finite bound");
        return Err(DomainError::NonFiniteBound { from, to });
    }
    #[allow(clippy::float_cmp)]
    let degenerate = from == to;
    if degenerate {
        tracing::warn!(from, "rejecting degenerate interval");
        return Err(DomainError::DegenerateInterval { from, to });
    }

    #[allow(clippy::cast_precision_loss)]
    let step = (to - from) / n as f64;

    let mut sum = 0.0;
    let mut samples = 0;
    let mut x = from + step * 0.5;
    while x < to {
        sum += expr.evaluate(x);
        samples += 1;

        let next = x + step;
        #[allow(clippy::float_cmp)]
        let stalled = next == x;
        if stalled {
            tracing::warn!(x, step, "step underflow");
            return Err(DomainError::StepUnderflow { at: x, step });
        }
        x = next;
    }

    if samples != n {
        tracing::debug!(samples, n, "sample count differs from subdivisions");
    }

    let value = if options.scale_by_step { sum * step } else { sum };
    tracing::debug!(value, samples, step, "midpoint walk finished");

    Ok(MidpointResult {
        value,
        samples,
        step,
    })
}
