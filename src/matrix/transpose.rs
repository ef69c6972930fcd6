use super::check_shape;
use super::index::{offset, offset_t};
use crate::error::Result;
use crate::scalar::Scalar;

/// Transpose a matrix: dst = src^T
///
/// `src` is n wide and m tall; `dst` comes out m wide and n tall. After the
/// transpose, what was column j of src is row j of dst. This is the only
/// kernel whose destination has a different shape from its source.
///
/// # Arguments
///
/// * `dst` - Destination matrix (m × n), row-major
/// * `src` - Source matrix (n × m), row-major
/// * `n` - Width of src
/// * `m` - Height of src
///
/// # Example
///
/// ```
/// use nmath::matrix::transpose;
///
/// let src = [1.0, 2.0, 3.0,   // 3 wide, 2 tall
///            4.0, 5.0, 6.0];
/// let mut dst = [0.0; 6];     // will be 2 wide, 3 tall
///
/// transpose(&mut dst, &src, 3, 2).unwrap();
///
/// assert_eq!(dst, [1.0, 4.0,
///                  2.0, 5.0,
///                  3.0, 6.0]);
/// ```
pub fn transpose<'a, T: Scalar>(
    dst: &'a mut [T],
    src: &[T],
    n: usize,
    m: usize,
) -> Result<&'a mut [T]> {
    check_shape("src", src, n, m)?;
    check_shape("dst", dst, m, n)?;
    if src.is_empty() {
        return Ok(dst);
    }

    for row in 0..m {
        for col in 0..n {
            dst[offset_t(col, row, m)] = src[offset(col, row, n)];
        }
    }
    Ok(dst)
}
