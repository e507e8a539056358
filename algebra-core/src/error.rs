use core::fmt;

/// Errors raised by field, curve and pairing arithmetic.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum AlgebraError {
    /// Inverted or divided by an element with no multiplicative inverse.
    DivisionByZero,
    /// A point does not satisfy its curve equation.
    NotOnCurve,
    /// The line function was evaluated at the group identity.
    IdentityInput,
    /// Doubled a point of order two, where the tangent is vertical.
    DegenerateDoubling,
    /// An extension element was built from the wrong number of coefficients.
    CoefficientCount {
        /// The degree of the extension.
        expected: usize,
        /// The number of coefficients supplied.
        found: usize,
    },
    /// A decimal or hexadecimal literal could not be parsed.
    MalformedLiteral,
    /// A parameter set failed its construction-time self-check.
    InvalidParameters(&'static str),
}

impl ark_std::error::Error for AlgebraError {}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgebraError::DivisionByZero => write!(f, "division by zero"),
            AlgebraError::NotOnCurve => write!(f, "point is not on the curve"),
            AlgebraError::IdentityInput => {
                write!(f, "line function evaluated at the point at infinity")
            }
            AlgebraError::DegenerateDoubling => write!(f, "doubled a point with y = 0"),
            AlgebraError::CoefficientCount { expected, found } => write!(
                f,
                "expected {} extension coefficients, found {}",
                expected, found
            ),
            AlgebraError::MalformedLiteral => write!(f, "malformed integer literal"),
            AlgebraError::InvalidParameters(reason) => {
                write!(f, "invalid parameter set: {}", reason)
            }
        }
    }
}

/// A result type specialized to `AlgebraError`.
pub type Result<T> = core::result::Result<T, AlgebraError>;
