//! Error types for AST values

use std::fmt;

/// Errors that can occur while shaping an array value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Arrays need at least one dimension
    ZeroRank,
    /// The element count does not match the product of the dimension lengths
    ElementCount { expected: usize, actual: usize },
    /// One lower bound is needed per dimension
    BoundsRank { rank: usize, bounds: usize },
    /// A dimension's lower bound plus its length does not fit in an `i64`
    BoundsOverflow { dimension: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::ZeroRank => write!(f, "Array value must have at least one dimension"),
            ShapeError::ElementCount { expected, actual } => write!(
                f,
                "Array shape holds {} element(s) but {} were supplied",
                expected, actual
            ),
            ShapeError::BoundsRank { rank, bounds } => write!(
                f,
                "Array of rank {} needs {} lower bound(s), got {}",
                rank, rank, bounds
            ),
            ShapeError::BoundsOverflow { dimension } => write!(
                f,
                "Lower bound of dimension {} overflows with the dimension's length",
                dimension
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ShapeError::ElementCount {
                expected: 6,
                actual: 5
            }
            .to_string(),
            "Array shape holds 6 element(s) but 5 were supplied"
        );
        assert_eq!(
            ShapeError::BoundsRank { rank: 2, bounds: 1 }.to_string(),
            "Array of rank 2 needs 2 lower bound(s), got 1"
        );
        assert_eq!(
            ShapeError::BoundsOverflow { dimension: 1 }.to_string(),
            "Lower bound of dimension 1 overflows with the dimension's length"
        );
    }
}
