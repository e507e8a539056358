use core::fmt;
use ecpair_core::AlgebraError;

/// Errors raised while verifying a proof.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum VerifierError {
    /// The verification key expects a different number of public inputs.
    InputLengthMismatch {
        /// `gamma_abc_g1.len() - 1`.
        expected: usize,
        /// The number of inputs supplied.
        found: usize,
    },
    /// A point of the key or proof was rejected by the pairing engine.
    Algebra(AlgebraError),
}

impl ark_std::error::Error for VerifierError {}

impl From<AlgebraError> for VerifierError {
    fn from(e: AlgebraError) -> Self {
        VerifierError::Algebra(e)
    }
}

impl fmt::Display for VerifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifierError::InputLengthMismatch { expected, found } => write!(
                f,
                "verifying key expects {} public inputs, found {}",
                expected, found
            ),
            VerifierError::Algebra(e) => write!(f, "{}", e),
        }
    }
}

/// A result type specialized to `VerifierError`.
pub type Result<T> = core::result::Result<T, VerifierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = VerifierError::InputLengthMismatch {
            expected: 2,
            found: 1,
        };
        assert_eq!(e.to_string(), "verifying key expects 2 public inputs, found 1");
        assert_eq!(
            VerifierError::from(AlgebraError::NotOnCurve).to_string(),
            "point is not on the curve"
        );
    }
}
