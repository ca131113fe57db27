use crate::Dimension;

/// A precondition on matrix shapes was violated.
///
/// These are programming errors rather than numerical conditions; singular or
/// near-singular input never produces one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("cannot {op} matrices of dimensions {lhs} and {rhs}")]
    DimensionMismatch {
        op: &'static str,
        lhs: Dimension,
        rhs: Dimension,
    },

    #[error("expected a square matrix, got dimensions {dim}")]
    NotSquare { dim: Dimension },

    #[error("row {row} has {found} elements, but row 0 has {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl ShapeError {
    pub(crate) fn check_same(op: &'static str, lhs: Dimension, rhs: Dimension) -> Result<(), ShapeError> {
        match lhs == rhs {
            true => Ok(()),
            false => Err(ShapeError::DimensionMismatch { op, lhs, rhs }),
        }
    }

    pub(crate) fn check_matmul(lhs: Dimension, rhs: Dimension) -> Result<(), ShapeError> {
        match lhs.n == rhs.m {
            true => Ok(()),
            false => Err(ShapeError::DimensionMismatch { op: "multiply", lhs, rhs }),
        }
    }
}

// Operator overloads treat shape mismatches as fatal.
pub(crate) fn fatal<T>(result: Result<T, ShapeError>) -> T {
    result.unwrap_or_else(|e| panic!("{}", e))
}
