//! Matrix products.
//!
//! Both kernels overwrite `dst`; neither accumulates into it. The borrow
//! checker already keeps `dst` from aliasing a source, which matters here
//! because every output cell reads a whole row and column.

use super::check_shape;
use crate::error::Result;
use crate::scalar::Scalar;
use crate::vector::dot_unchecked;

/// Matrix multiplication: dst = src1 * src2
///
/// Uses the i-k-j loop order so the innermost loop walks a row of `src2`
/// and a row of `dst` with stride 1.
///
/// # Arguments
///
/// * `dst` - Result (n2 × m1), row-major, overwritten
/// * `src1` - Left matrix (n1 × m1), row-major
/// * `src2` - Right matrix (n2 × n1), row-major
/// * `n1` - Width of src1, height of src2 (the contracted dimension)
/// * `m1` - Height of src1 and dst
/// * `n2` - Width of src2 and dst
///
/// # Example
///
/// ```
/// use nmath::matrix::mult;
///
/// let a = [1.0, 2.0, 3.0,
///          4.0, 5.0, 6.0];       // 3 wide, 2 tall
/// let b = [7.0, 8.0,
///          9.0, 10.0,
///          11.0, 12.0];          // 2 wide, 3 tall
/// let mut c = [0.0; 4];
///
/// mult(&mut c, &a, &b, 3, 2, 2).unwrap();
/// assert_eq!(c, [58.0, 64.0, 139.0, 154.0]);
/// ```
pub fn mult<'a, T: Scalar>(
    dst: &'a mut [T],
    src1: &[T],
    src2: &[T],
    n1: usize,
    m1: usize,
    n2: usize,
) -> Result<&'a mut [T]> {
    check_shape("src1", src1, n1, m1)?;
    check_shape("src2", src2, n2, n1)?;
    check_shape("dst", dst, n2, m1)?;

    dst.fill(T::zero());
    if dst.is_empty() {
        return Ok(dst);
    }
    for i in 0..m1 {
        for p in 0..n1 {
            let a = src1[i * n1 + p];
            for j in 0..n2 {
                dst[i * n2 + j] = dst[i * n2 + j] + a * src2[p * n2 + j];
            }
        }
    }
    Ok(dst)
}

/// Multiplication with a transposed right operand: dst = src1 * src2^T
///
/// `src2` is stored n1 wide and m2 tall and used as its m2 × n1 transpose,
/// so each output cell is the dot product of a row of `src1` with a row of
/// `src2`. Both reads are sequential, and no transposed copy is made.
///
/// # Arguments
///
/// * `dst` - Result (m2 × m1), row-major, overwritten
/// * `src1` - Left matrix (n1 × m1), row-major
/// * `src2` - Right matrix as stored (n1 × m2), row-major
/// * `n1` - Width of both src1 and src2 (the contracted dimension)
/// * `m1` - Height of src1 and dst
/// * `m2` - Height of src2, width of dst
pub fn multt<'a, T: Scalar>(
    dst: &'a mut [T],
    src1: &[T],
    src2: &[T],
    n1: usize,
    m1: usize,
    m2: usize,
) -> Result<&'a mut [T]> {
    check_shape("src1", src1, n1, m1)?;
    check_shape("src2", src2, n1, m2)?;
    check_shape("dst", dst, m2, m1)?;
    if dst.is_empty() {
        return Ok(dst);
    }

    for i in 0..m1 {
        let a_row = &src1[i * n1..(i + 1) * n1];
        for j in 0..m2 {
            dst[i * m2 + j] = dot_unchecked(a_row, &src2[j * n1..(j + 1) * n1]);
        }
    }
    Ok(dst)
}
