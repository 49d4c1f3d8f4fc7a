use std::error::Error;
use std::fmt;

/// Errors raised by matrix construction, access and arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// The shape cannot back a buffer (overflowing size, or strides that
    /// address past the end of the buffer).
    InvalidShape { rows: usize, columns: usize },
    /// Operand shapes or value counts do not line up.
    ShapeMismatch {
        operation: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    /// Checked access outside `[0, rows) x [0, columns)`.
    IndexOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
    /// Distribution parameters rejected by the sampler.
    InvalidDistribution(String),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::InvalidShape { rows, columns } => {
                write!(f, "invalid shape ({}, {})", rows, columns)
            }
            MatrixError::ShapeMismatch {
                operation,
                expected,
                actual,
            } => write!(f, "{}: expected {:?}, got {:?}", operation, expected, actual),
            MatrixError::IndexOutOfRange {
                row,
                column,
                rows,
                columns,
            } => write!(
                f,
                "row:{}, column:{} out of range for {} x {} matrix",
                row, column, rows, columns
            ),
            MatrixError::InvalidDistribution(msg) => {
                write!(f, "invalid distribution parameters: {}", msg)
            }
        }
    }
}

impl Error for MatrixError {}

pub type Result<T> = std::result::Result<T, MatrixError>;
