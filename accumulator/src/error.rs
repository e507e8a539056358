use core::fmt;
use ecpair_core::AlgebraError;

/// Errors raised by accumulator updates.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum AccumulatorError {
    /// An inclusion proof did not open the current state.
    InvalidProof,
    /// Two elements to aggregate share a common factor.
    NotCoprime,
    /// The underlying modular arithmetic failed.
    Algebra(AlgebraError),
}

impl ark_std::error::Error for AccumulatorError {}

impl From<AlgebraError> for AccumulatorError {
    fn from(e: AlgebraError) -> Self {
        AccumulatorError::Algebra(e)
    }
}

impl fmt::Display for AccumulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccumulatorError::InvalidProof => write!(f, "invalid inclusion proof"),
            AccumulatorError::NotCoprime => write!(f, "aggregated elements are not coprime"),
            AccumulatorError::Algebra(e) => write!(f, "{}", e),
        }
    }
}

/// A result type specialized to `AccumulatorError`.
pub type Result<T> = core::result::Result<T, AccumulatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(AccumulatorError::InvalidProof.to_string(), "invalid inclusion proof");
        assert_eq!(
            AccumulatorError::from(AlgebraError::DivisionByZero).to_string(),
            "division by zero"
        );
    }
}
