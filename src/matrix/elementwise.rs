//! Fill and elementwise kernels for n×m matrices.
//!
//! `add`, `sub` and `scale` treat the matrix as one flat vector and defer to
//! [`crate::vector`]. `addt` and `subt` combine with the transpose of the
//! second operand, reading it through [`offset_t`] instead of copying it.

use super::check_shape;
use super::index::{offset, offset_t};
use crate::error::Result;
use crate::scalar::Scalar;
use crate::vector;

/// Fills an n×m matrix with zeros.
pub fn zero<T: Scalar>(dst: &mut [T], n: usize, m: usize) -> Result<&mut [T]> {
    check_shape("dst", dst, n, m)?;
    Ok(vector::zero(dst))
}

/// Identity pattern: 1 where col == row, 0 elsewhere.
///
/// Also defined for non-square shapes, where the diagonal stops at the
/// shorter side.
pub fn one<T: Scalar>(dst: &mut [T], n: usize, m: usize) -> Result<&mut [T]> {
    check_shape("dst", dst, n, m)?;
    vector::zero(dst);
    for i in 0..n.min(m) {
        dst[offset(i, i, n)] = T::one();
    }
    Ok(dst)
}

/// dst = src1 + src2, all n×m.
pub fn add<'a, T: Scalar>(
    dst: &'a mut [T],
    src1: &[T],
    src2: &[T],
    n: usize,
    m: usize,
) -> Result<&'a mut [T]> {
    check_shape("dst", dst, n, m)?;
    vector::add(dst, src1, src2)
}

/// dst += src, both n×m.
pub fn add_in_place<'a, T: Scalar>(
    dst: &'a mut [T],
    src: &[T],
    n: usize,
    m: usize,
) -> Result<&'a mut [T]> {
    check_shape("dst", dst, n, m)?;
    vector::add_in_place(dst, src)
}

/// dst = src1 - src2, all n×m.
pub fn sub<'a, T: Scalar>(
    dst: &'a mut [T],
    src1: &[T],
    src2: &[T],
    n: usize,
    m: usize,
) -> Result<&'a mut [T]> {
    check_shape("dst", dst, n, m)?;
    vector::sub(dst, src1, src2)
}

/// dst -= src, both n×m.
pub fn sub_in_place<'a, T: Scalar>(
    dst: &'a mut [T],
    src: &[T],
    n: usize,
    m: usize,
) -> Result<&'a mut [T]> {
    check_shape("dst", dst, n, m)?;
    vector::sub_in_place(dst, src)
}

/// dst = src * s, both n×m.
pub fn scale<'a, T: Scalar>(
    dst: &'a mut [T],
    src: &[T],
    s: T,
    n: usize,
    m: usize,
) -> Result<&'a mut [T]> {
    check_shape("dst", dst, n, m)?;
    vector::scale(dst, src, s)
}

/// dst *= s
pub fn scale_in_place<T: Scalar>(dst: &mut [T], s: T, n: usize, m: usize) -> Result<&mut [T]> {
    check_shape("dst", dst, n, m)?;
    Ok(vector::scale_in_place(dst, s))
}

/// dst[i] = f(src1[i], src2^T[i]) over an n1×m1 result.
#[inline]
fn zip_transposed<'a, T: Scalar>(
    dst: &'a mut [T],
    src1: &[T],
    src2: &[T],
    n1: usize,
    m1: usize,
    f: impl Fn(T, T) -> T,
) -> Result<&'a mut [T]> {
    check_shape("dst", dst, n1, m1)?;
    check_shape("src1", src1, n1, m1)?;
    check_shape("src2", src2, m1, n1)?;
    if dst.is_empty() {
        return Ok(dst);
    }

    for row in 0..m1 {
        for col in 0..n1 {
            let i = offset(col, row, n1);
            dst[i] = f(src1[i], src2[offset_t(col, row, m1)]);
        }
    }
    Ok(dst)
}

/// dst = src1 + src2^T without materializing the transpose.
///
/// `dst` and `src1` are n1 wide and m1 tall. `src2` is stored m1 wide and n1
/// tall, so its transpose lines up with `src1`.
///
/// ```
/// use nmath::matrix::addt;
///
/// let a = [1.0, 2.0, 3.0,
///          4.0, 5.0, 6.0];   // 3 wide, 2 tall
/// let b = [10.0, 40.0,
///          20.0, 50.0,
///          30.0, 60.0];      // 2 wide, 3 tall
/// let mut dst = [0.0; 6];
///
/// addt(&mut dst, &a, &b, 3, 2).unwrap();
/// assert_eq!(dst, [11.0, 22.0, 33.0, 44.0, 55.0, 66.0]);
/// ```
pub fn addt<'a, T: Scalar>(
    dst: &'a mut [T],
    src1: &[T],
    src2: &[T],
    n1: usize,
    m1: usize,
) -> Result<&'a mut [T]> {
    zip_transposed(dst, src1, src2, n1, m1, |a, b| a + b)
}

/// dst = src1 - src2^T. Shapes as in [`addt`].
pub fn subt<'a, T: Scalar>(
    dst: &'a mut [T],
    src1: &[T],
    src2: &[T],
    n1: usize,
    m1: usize,
) -> Result<&'a mut [T]> {
    zip_transposed(dst, src1, src2, n1, m1, |a, b| a - b)
}

/// dst = f(dst, src^T) over an n1×m1 `dst`.
#[inline]
fn update_transposed<'a, T: Scalar>(
    dst: &'a mut [T],
    src: &[T],
    n1: usize,
    m1: usize,
    f: impl Fn(T, T) -> T,
) -> Result<&'a mut [T]> {
    check_shape("dst", dst, n1, m1)?;
    check_shape("src", src, m1, n1)?;
    if dst.is_empty() {
        return Ok(dst);
    }

    for row in 0..m1 {
        for col in 0..n1 {
            let i = offset(col, row, n1);
            dst[i] = f(dst[i], src[offset_t(col, row, m1)]);
        }
    }
    Ok(dst)
}

/// dst += src^T. `src` is stored m1 wide and n1 tall.
pub fn addt_in_place<'a, T: Scalar>(
    dst: &'a mut [T],
    src: &[T],
    n1: usize,
    m1: usize,
) -> Result<&'a mut [T]> {
    update_transposed(dst, src, n1, m1, |a, b| a + b)
}

/// dst -= src^T. `src` is stored m1 wide and n1 tall.
pub fn subt_in_place<'a, T: Scalar>(
    dst: &'a mut [T],
    src: &[T],
    n1: usize,
    m1: usize,
) -> Result<&'a mut [T]> {
    update_transposed(dst, src, n1, m1, |a, b| a - b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KernelError;
    use crate::matrix::transpose;

    #[test]
    fn identity_pattern_non_square() {
        let mut wide = [9.0f32; 6];
        one(&mut wide, 3, 2).unwrap();
        assert_eq!(wide, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);

        let mut tall = [9.0f32; 6];
        one(&mut tall, 2, 3).unwrap();
        assert_eq!(tall, [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_checks_shape() {
        let mut m = [1.0f64; 6];
        assert_eq!(zero(&mut m, 3, 2).unwrap(), &[0.0; 6]);
        assert!(zero(&mut m, 3, 3).is_err());
    }

    #[test]
    fn add_sub_scale() {
        let a = [1.0f32, 2.0, 3.0, 4.0];
        let b = [4.0f32, 3.0, 2.0, 1.0];
        let mut dst = [0.0; 4];

        add(&mut dst, &a, &b, 2, 2).unwrap();
        assert_eq!(dst, [5.0; 4]);
        sub_in_place(&mut dst, &b, 2, 2).unwrap();
        assert_eq!(dst, a);
        sub(&mut dst, &a, &b, 4, 1).unwrap();
        assert_eq!(dst, [-3.0, -1.0, 1.0, 3.0]);
        add_in_place(&mut dst, &b, 1, 4).unwrap();
        assert_eq!(dst, a);
        scale(&mut dst, &a, 3.0, 2, 2).unwrap();
        assert_eq!(dst, [3.0, 6.0, 9.0, 12.0]);
        scale_in_place(&mut dst, -1.0, 2, 2).unwrap();
        assert_eq!(dst, [-3.0, -6.0, -9.0, -12.0]);
    }

    #[test]
    fn addt_matches_add_of_transpose() {
        // src1: 4 wide, 2 tall. src2: 2 wide, 4 tall.
        let a: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let b: Vec<f64> = (0..8).map(|i| (i * i) as f64).collect();

        let mut bt = vec![0.0; 8];
        transpose(&mut bt, &b, 2, 4).unwrap();

        let mut expected = vec![0.0; 8];
        let mut actual = vec![0.0; 8];

        add(&mut expected, &a, &bt, 4, 2).unwrap();
        addt(&mut actual, &a, &b, 4, 2).unwrap();
        assert_eq!(actual, expected);

        sub(&mut expected, &a, &bt, 4, 2).unwrap();
        subt(&mut actual, &a, &b, 4, 2).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn transposed_in_place() {
        // | 1 2 |      | 1 3 |
        // | 3 4 |  ^T  | 2 4 |
        let mut dst = [1.0f32, 2.0, 3.0, 4.0];
        let src = [1.0f32, 2.0, 3.0, 4.0];
        addt_in_place(&mut dst, &src, 2, 2).unwrap();
        assert_eq!(dst, [2.0, 5.0, 5.0, 8.0]);
        subt_in_place(&mut dst, &src, 2, 2).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn transposed_reads_of_empty_shapes_return_immediately() {
        let mut dst: [f64; 0] = [];
        assert!(addt(&mut dst, &[], &[], 0, usize::MAX).is_ok());
        assert!(subt(&mut dst, &[], &[], usize::MAX, 0).is_ok());
        assert!(addt_in_place(&mut dst, &[], 0, usize::MAX).is_ok());
        assert!(subt_in_place(&mut dst, &[], 0, usize::MAX).is_ok());
    }

    #[test]
    fn addt_rejects_bad_second_operand() {
        let mut dst = [0.0f32; 6];
        let err = addt(&mut dst, &[0.0; 6], &[0.0; 4], 3, 2).unwrap_err();
        assert_eq!(
            err,
            KernelError::DimensionMismatch {
                operand: "src2",
                expected: 6,
                actual: 4
            }
        );
    }
}
