//! n×n matrices.
//!
//! Thin wrappers over the n×m kernels with `m == n`, plus the two things
//! only square matrices can do: multiply a vector of the same length, and
//! transpose inside their own buffer.
//!
//! ```
//! use nmath::matrix::square;
//!
//! let m = [1.0, 2.0, 3.0,
//!          4.0, 5.0, 6.0,
//!          7.0, 8.0, 9.0];
//! let v = [1.0; 3];
//! let mut out = [0.0; 3];
//!
//! square::mult_vector(&mut out, &m, &v, 3).unwrap();
//! assert_eq!(out, [6.0, 15.0, 24.0]);
//! ```

use super::check_shape;
use super::index::offset;
use crate::error::{Result, check_len};
use crate::scalar::Scalar;
use crate::vector::dot_unchecked;

pub use super::index::{at, at_mut, att, att_mut, get, gett};

/// Fills an n×n matrix with zeros.
pub fn zero<T: Scalar>(dst: &mut [T], n: usize) -> Result<&mut [T]> {
    super::zero(dst, n, n)
}

/// Identity matrix.
pub fn one<T: Scalar>(dst: &mut [T], n: usize) -> Result<&mut [T]> {
    super::one(dst, n, n)
}

/// dst = src^T
pub fn transpose<'a, T: Scalar>(dst: &'a mut [T], src: &[T], n: usize) -> Result<&'a mut [T]> {
    super::transpose(dst, src, n, n)
}

/// Transposes `buf` by swapping across the diagonal.
pub fn transpose_in_place<T: Scalar>(buf: &mut [T], n: usize) -> Result<&mut [T]> {
    check_shape("buf", buf, n, n)?;
    for row in 0..n {
        for col in row + 1..n {
            buf.swap(offset(col, row, n), offset(row, col, n));
        }
    }
    Ok(buf)
}

/// dst = src1 + src2
pub fn add<'a, T: Scalar>(
    dst: &'a mut [T],
    src1: &[T],
    src2: &[T],
    n: usize,
) -> Result<&'a mut [T]> {
    super::add(dst, src1, src2, n, n)
}

/// dst = src1 - src2
pub fn sub<'a, T: Scalar>(
    dst: &'a mut [T],
    src1: &[T],
    src2: &[T],
    n: usize,
) -> Result<&'a mut [T]> {
    super::sub(dst, src1, src2, n, n)
}

/// dst = src1 + src2^T
pub fn addt<'a, T: Scalar>(
    dst: &'a mut [T],
    src1: &[T],
    src2: &[T],
    n: usize,
) -> Result<&'a mut [T]> {
    super::addt(dst, src1, src2, n, n)
}

/// dst = src1 - src2^T
pub fn subt<'a, T: Scalar>(
    dst: &'a mut [T],
    src1: &[T],
    src2: &[T],
    n: usize,
) -> Result<&'a mut [T]> {
    super::subt(dst, src1, src2, n, n)
}

/// dst = src * s
pub fn scale<'a, T: Scalar>(dst: &'a mut [T], src: &[T], s: T, n: usize) -> Result<&'a mut [T]> {
    super::scale(dst, src, s, n, n)
}

/// dst = src1 * src2
pub fn mult<'a, T: Scalar>(
    dst: &'a mut [T],
    src1: &[T],
    src2: &[T],
    n: usize,
) -> Result<&'a mut [T]> {
    super::mult(dst, src1, src2, n, n, n)
}

/// dst = src1 * src2_t^T, with `src2_t` already stored transposed.
pub fn multt<'a, T: Scalar>(
    dst: &'a mut [T],
    src1: &[T],
    src2_t: &[T],
    n: usize,
) -> Result<&'a mut [T]> {
    super::multt(dst, src1, src2_t, n, n, n)
}

/// Matrix × vector: `dst_v[i]` is row i of `src_m` dotted with `src_v`.
pub fn mult_vector<'a, T: Scalar>(
    dst_v: &'a mut [T],
    src_m: &[T],
    src_v: &[T],
    n: usize,
) -> Result<&'a mut [T]> {
    check_shape("src_m", src_m, n, n)?;
    check_len("src_v", src_v.len(), n)?;
    check_len("dst_v", dst_v.len(), n)?;

    for (i, d) in dst_v.iter_mut().enumerate() {
        *d = dot_unchecked(&src_m[i * n..(i + 1) * n], src_v);
    }
    Ok(dst_v)
}
