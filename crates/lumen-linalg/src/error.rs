use std::fmt;

/// Errors returned by fallible vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MathError {
    /// An operation had to divide by a length of zero, eg. when normalizing a zero vector.
    DivisionByZero,
    /// An operand was infinite or `NaN`, so the result would not be finite either.
    NonFinite,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DivisionByZero => f.write_str("division by zero (vector has zero length)"),
            MathError::NonFinite => f.write_str("operand is infinite or NaN"),
        }
    }
}

impl std::error::Error for MathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            MathError::DivisionByZero.to_string(),
            "division by zero (vector has zero length)"
        );
        assert_eq!(MathError::NonFinite.to_string(), "operand is infinite or NaN");
    }
}
