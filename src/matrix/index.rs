//! Element addressing for row-major and transposed reads.
//!
//! `n` is always the width of the buffer as stored. The `t` variants take
//! `m`, the stored height, and read the buffer as if it were its own
//! transpose: logical (col, row) of the transpose is stored (row, col).
//!
//! Accessors index the slice directly, so an out-of-range position panics
//! the same way slice indexing does.

/// Offset of (col, row) in a buffer of width `n`.
#[inline(always)]
pub const fn offset(col: usize, row: usize, n: usize) -> usize {
    col + row * n
}

/// Offset of (col, row) of the transpose of a buffer of height `m`.
#[inline(always)]
pub const fn offset_t(col: usize, row: usize, m: usize) -> usize {
    row + col * m
}

/// Reference to (col, row) in a buffer of width `n`.
#[inline]
pub fn at<T>(buf: &[T], col: usize, row: usize, n: usize) -> &T {
    &buf[offset(col, row, n)]
}

/// Mutable reference to (col, row) in a buffer of width `n`.
#[inline]
pub fn at_mut<T>(buf: &mut [T], col: usize, row: usize, n: usize) -> &mut T {
    &mut buf[offset(col, row, n)]
}

/// Reference to (col, row) of the transpose of a buffer of height `m`.
#[inline]
pub fn att<T>(buf: &[T], col: usize, row: usize, m: usize) -> &T {
    &buf[offset_t(col, row, m)]
}

/// Mutable reference to (col, row) of the transpose of a buffer of height `m`.
#[inline]
pub fn att_mut<T>(buf: &mut [T], col: usize, row: usize, m: usize) -> &mut T {
    &mut buf[offset_t(col, row, m)]
}

/// Value at (col, row) in a buffer of width `n`.
#[inline]
pub fn get<T: Copy>(buf: &[T], col: usize, row: usize, n: usize) -> T {
    buf[offset(col, row, n)]
}

/// Value at (col, row) of the transpose of a buffer of height `m`.
#[inline]
pub fn gett<T: Copy>(buf: &[T], col: usize, row: usize, m: usize) -> T {
    buf[offset_t(col, row, m)]
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3 wide, 2 tall:
    // | 1 2 3 |
    // | 4 5 6 |
    const M: [f32; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

    #[test]
    fn row_major() {
        assert_eq!(get(&M, 0, 0, 3), 1.0);
        assert_eq!(get(&M, 2, 0, 3), 3.0);
        assert_eq!(get(&M, 0, 1, 3), 4.0);
        assert_eq!(*at(&M, 1, 1, 3), 5.0);
    }

    #[test]
    fn transposed_read() {
        // Transpose is 2 wide, 3 tall:
        // | 1 4 |
        // | 2 5 |
        // | 3 6 |
        assert_eq!(gett(&M, 1, 0, 3), 4.0);
        assert_eq!(gett(&M, 0, 2, 3), 3.0);
        assert_eq!(*att(&M, 1, 2, 3), 6.0);
    }

    #[test]
    fn writes() {
        let mut m = M;
        *at_mut(&mut m, 2, 1, 3) = 60.0;
        *att_mut(&mut m, 1, 0, 3) = 40.0;
        assert_eq!(m, [1.0, 2.0, 3.0, 40.0, 5.0, 60.0]);
    }

    #[test]
    #[should_panic]
    fn out_of_range_panics() {
        get(&M, 0, 2, 3);
    }
}
