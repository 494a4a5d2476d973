//! Error types reported by fallible matrix operations.

use thiserror::Error;

/// Errors that can occur when constructing or operating on a
/// [`SquareMatrix`][crate::SquareMatrix].
///
/// Every fallible operation reports its failure synchronously through this
/// type and allocates no result; both operands are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A matrix with zero rows and columns was requested.
    ///
    /// Sizes are [`usize`], so a negative size cannot be expressed; zero is
    /// the only rejected value.
    #[error("matrix size must be at least 1")]
    InvalidSize,

    /// A cell access lay outside of the matrix.
    #[error("index ({row}, {col}) out of range for size {size} matrix")]
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Size of the accessed matrix.
        size: usize,
    },

    /// The two operands of an operation requiring equal sizes differ in size.
    #[error("operand size mismatch ({lhs} vs. {rhs})")]
    SizeMismatch {
        /// Size of the left-hand operand.
        lhs: usize,
        /// Size of the right-hand operand.
        rhs: usize,
    },

    /// A matrix was divided by a scalar equal to zero.
    #[error("attempt to divide matrix by zero")]
    DivisionByZero,

    /// A matrix was raised to a negative power.
    #[error("negative power {0} is not supported")]
    NegativePower(i32),
}

/// Result type for matrix operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
