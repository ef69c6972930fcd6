//! Errors returned by the kernels.
//!
//! Kernels check buffer lengths once on entry and fail fast instead of
//! reading past the end or silently computing garbage. The checks are O(1)
//! and never run inside the inner loops.

use thiserror::Error;

/// Everything a kernel call can reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KernelError {
    /// A buffer's length doesn't match the dimensions it was declared with.
    #[error("{operand}: expected {expected} elements, got {actual}")]
    DimensionMismatch {
        /// Which argument was wrong (`"dst"`, `"src1"`, ...)
        operand: &'static str,
        /// Length implied by the declared dimensions
        expected: usize,
        /// Length of the slice actually passed
        actual: usize,
    },

    /// `n * m` doesn't fit in a `usize`.
    #[error("shape {n}x{m} overflows usize")]
    ShapeOverflow { n: usize, m: usize },

    /// Normalizing a vector whose length is zero.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,
}

pub type Result<T> = std::result::Result<T, KernelError>;

/// Fails with `DimensionMismatch` unless `actual == expected`.
#[inline]
pub(crate) fn check_len(operand: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        return Ok(());
    }
    tracing::debug!(operand, expected, actual, "buffer length mismatch");
    Err(KernelError::DimensionMismatch {
        operand,
        expected,
        actual,
    })
}

/// Number of elements in an n×m buffer.
#[inline]
pub(crate) fn area(n: usize, m: usize) -> Result<usize> {
    n.checked_mul(m).ok_or_else(|| {
        tracing::debug!(n, m, "matrix shape overflows usize");
        KernelError::ShapeOverflow { n, m }
    })
}
