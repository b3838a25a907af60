use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    #[error("expected {expected} elements, got {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("row {row} or column {col} out of range for dimension {dim}")]
    IndexOutOfRange { row: usize, col: usize, dim: usize },
    #[error("matrix is not invertible, determinant is {determinant}")]
    SingularMatrix { determinant: f64 },
    #[error("division by zero or near-zero scalar")]
    DivisionByZero,
}

pub type MathResult<T> = Result<T, MathError>;
