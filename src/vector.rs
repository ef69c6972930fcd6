//! Vector kernels over slices of length n.
//!
//! Every binary operation checks that its slices share one length and
//! then makes a single left-to-right pass. Operations whose destination may
//! also be a source come in an `_in_place` flavour, since a `&mut` and a `&`
//! to the same slice can't coexist.
//!
//! ```
//! use nmath::vector;
//!
//! let a = [3.0f32, 0.0, 4.0];
//! let mut dst = [0.0f32; 3];
//!
//! assert_eq!(vector::length(&a), 5.0);
//! vector::normalize(&mut dst, &a).unwrap();
//! assert_eq!(dst, [0.6, 0.0, 0.8]);
//! ```

use crate::error::{KernelError, Result, check_len};
use crate::scalar::Scalar;

/// dst[i] = f(a[i], b[i])
#[inline]
fn zip_with<'a, T: Scalar>(
    dst: &'a mut [T],
    a: &[T],
    b: &[T],
    f: impl Fn(T, T) -> T,
) -> Result<&'a mut [T]> {
    check_len("src1", a.len(), dst.len())?;
    check_len("src2", b.len(), dst.len())?;
    for ((d, &x), &y) in dst.iter_mut().zip(a).zip(b) {
        *d = f(x, y);
    }
    Ok(dst)
}

/// dst[i] = f(src[i])
#[inline]
fn map<'a, T: Scalar>(dst: &'a mut [T], src: &[T], f: impl Fn(T) -> T) -> Result<&'a mut [T]> {
    check_len("src", src.len(), dst.len())?;
    for (d, &x) in dst.iter_mut().zip(src) {
        *d = f(x);
    }
    Ok(dst)
}

/// dst[i] = f(dst[i], src[i])
#[inline]
fn update<'a, T: Scalar>(
    dst: &'a mut [T],
    src: &[T],
    f: impl Fn(T, T) -> T,
) -> Result<&'a mut [T]> {
    check_len("src", src.len(), dst.len())?;
    for (d, &x) in dst.iter_mut().zip(src) {
        *d = f(*d, x);
    }
    Ok(dst)
}

#[inline]
fn update_each<T: Scalar>(dst: &mut [T], f: impl Fn(T) -> T) -> &mut [T] {
    for d in dst.iter_mut() {
        *d = f(*d);
    }
    dst
}

/// Fills `dst` with zeros.
pub fn zero<T: Scalar>(dst: &mut [T]) -> &mut [T] {
    dst.fill(T::zero());
    dst
}

/// Fills `dst` with ones.
pub fn one<T: Scalar>(dst: &mut [T]) -> &mut [T] {
    dst.fill(T::one());
    dst
}

/// dst = src1 + src2
pub fn add<'a, T: Scalar>(dst: &'a mut [T], src1: &[T], src2: &[T]) -> Result<&'a mut [T]> {
    zip_with(dst, src1, src2, |a, b| a + b)
}

/// dst += src
pub fn add_in_place<'a, T: Scalar>(dst: &'a mut [T], src: &[T]) -> Result<&'a mut [T]> {
    update(dst, src, |a, b| a + b)
}

/// dst = src1 - src2
pub fn sub<'a, T: Scalar>(dst: &'a mut [T], src1: &[T], src2: &[T]) -> Result<&'a mut [T]> {
    zip_with(dst, src1, src2, |a, b| a - b)
}

/// dst -= src
pub fn sub_in_place<'a, T: Scalar>(dst: &'a mut [T], src: &[T]) -> Result<&'a mut [T]> {
    update(dst, src, |a, b| a - b)
}

/// Sum of elementwise products.
pub fn dot<T: Scalar>(src1: &[T], src2: &[T]) -> Result<T> {
    check_len("src2", src2.len(), src1.len())?;
    Ok(dot_unchecked(src1, src2))
}

/// Dot product for slices already known to share a length.
///
/// Used by the matrix kernels, which validate whole buffers up front and then
/// contract row by row.
#[inline]
pub(crate) fn dot_unchecked<T: Scalar>(src1: &[T], src2: &[T]) -> T {
    src1.iter()
        .zip(src2)
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
}

/// dst = src * s
pub fn scale<'a, T: Scalar>(dst: &'a mut [T], src: &[T], s: T) -> Result<&'a mut [T]> {
    map(dst, src, |x| x * s)
}

/// dst *= s
pub fn scale_in_place<T: Scalar>(dst: &mut [T], s: T) -> &mut [T] {
    update_each(dst, |x| x * s)
}

/// dst = -src
pub fn neg<'a, T: Scalar>(dst: &'a mut [T], src: &[T]) -> Result<&'a mut [T]> {
    map(dst, src, |x| -x)
}

/// dst = -dst
pub fn neg_in_place<T: Scalar>(dst: &mut [T]) -> &mut [T] {
    update_each(dst, |x| -x)
}

/// Sum of squares.
pub fn length_squared<T: Scalar>(src: &[T]) -> T {
    src.iter().fold(T::zero(), |acc, &x| acc + x * x)
}

/// Euclidean norm.
///
/// Elements are divided by the largest magnitude before squaring, so the
/// result neither underflows to zero nor overflows to infinity while the
/// norm itself is representable.
pub fn length<T: Scalar>(src: &[T]) -> T {
    let scale = src.iter().fold(T::zero(), |acc, &x| acc.max(x.abs()));
    if scale == T::zero() || scale.is_infinite() {
        return scale;
    }
    let sum = src.iter().fold(T::zero(), |acc, &x| {
        let r = x / scale;
        acc + r * r
    });
    scale * sum.sqrt()
}

/// dst = src / |src|
///
/// # Errors
///
/// [`KernelError::ZeroLength`] if every element of `src` is zero; `dst` is
/// left untouched in that case.
pub fn normalize<'a, T: Scalar>(dst: &'a mut [T], src: &[T]) -> Result<&'a mut [T]> {
    check_len("src", src.len(), dst.len())?;
    let len = nonzero_length(src)?;
    map(dst, src, |x| x / len)
}

/// dst = dst / |dst|
pub fn normalize_in_place<T: Scalar>(dst: &mut [T]) -> Result<&mut [T]> {
    let len = nonzero_length(dst)?;
    Ok(update_each(dst, |x| x / len))
}

fn nonzero_length<T: Scalar>(src: &[T]) -> Result<T> {
    let len = length(src);
    if len == T::zero() {
        tracing::debug!(n = src.len(), "normalize called on zero-length vector");
        return Err(KernelError::ZeroLength);
    }
    Ok(len)
}

/// Elementwise minimum. A NaN loses to a number.
pub fn min<'a, T: Scalar>(dst: &'a mut [T], src1: &[T], src2: &[T]) -> Result<&'a mut [T]> {
    zip_with(dst, src1, src2, T::min)
}

/// dst = min(dst, src)
pub fn min_in_place<'a, T: Scalar>(dst: &'a mut [T], src: &[T]) -> Result<&'a mut [T]> {
    update(dst, src, T::min)
}

/// Elementwise maximum. A NaN loses to a number.
pub fn max<'a, T: Scalar>(dst: &'a mut [T], src1: &[T], src2: &[T]) -> Result<&'a mut [T]> {
    zip_with(dst, src1, src2, T::max)
}

/// dst = max(dst, src)
pub fn max_in_place<'a, T: Scalar>(dst: &'a mut [T], src: &[T]) -> Result<&'a mut [T]> {
    update(dst, src, T::max)
}

/// Rounds every element toward positive infinity.
pub fn ceil<'a, T: Scalar>(dst: &'a mut [T], src: &[T]) -> Result<&'a mut [T]> {
    map(dst, src, T::ceil)
}

/// dst = ceil(dst)
pub fn ceil_in_place<T: Scalar>(dst: &mut [T]) -> &mut [T] {
    update_each(dst, T::ceil)
}

/// Rounds every element toward negative infinity.
pub fn floor<'a, T: Scalar>(dst: &'a mut [T], src: &[T]) -> Result<&'a mut [T]> {
    map(dst, src, T::floor)
}

/// dst = floor(dst)
pub fn floor_in_place<T: Scalar>(dst: &mut [T]) -> &mut [T] {
    update_each(dst, T::floor)
}
