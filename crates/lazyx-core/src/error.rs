//! Domain errors shared by every lazyx crate.

use thiserror::Error;

/// A precondition the engine refuses to evaluate past.
///
/// Numeric degeneracy (infinity, NaN from a division) is never reported
/// here; it propagates as an ordinary floating-point value.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DomainError {
    /// A subdivision count of zero was requested.
    #[error("subdivision count must be positive")]
    EmptySubdivision,

    /// The integration interval has zero width.
    #[error("degenerate interval: from == to == {from}")]
    DegenerateInterval {
        /// Lower bound.
        from: f64,
        /// Upper bound.
        to: f64,
    },

    /// An interval bound is NaN or infinite.
    #[error("interval bounds must be finite, got [{from}, {to}]")]
    NonFiniteBound {
        /// Lower bound.
        from: f64,
        /// Upper bound.
        to: f64,
    },

    /// The step is too small to move the sample point forward.
    #[error("step {step} does not advance the sample point at {at}")]
    StepUnderflow {
        /// Sample point that failed to advance.
        at: f64,
        /// The step size.
        step: f64,
    },

    /// Two vector operands report different sizes.
    #[error("vector size mismatch: {left} vs {right}")]
    SizeMismatch {
        /// Size of the left operand.
        left: usize,
        /// Size of the right operand.
        right: usize,
    },
}

/// Result alias for fallible lazyx operations.
pub type Result<T> = std::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            DomainError::EmptySubdivision.to_string(),
            "subdivision count must be positive"
        );
        assert_eq!(
            DomainError::SizeMismatch { left: 3, right: 4 }.to_string(),
            "vector size mismatch: 3 vs 4"
        );
        assert_eq!(
            DomainError::DegenerateInterval { from: 1.0, to: 1.0 }.to_string(),
            "degenerate interval: from == to == 1"
        );
    }
}
