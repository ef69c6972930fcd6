//! Geometric product in the algebra of Euclidean 3-space.
//!
//! A multivector is eight coefficients over the blades
//! `{1, e1, e2, e3, e12, e13, e23, e123}`, in that order. The basis vectors
//! square to +1 and anticommute, which fixes all 64 blade products; the
//! kernel spells those out as one closed-form sum per output blade.
//!
//! Operands are always (left, right): `geometric_product(dst, a, b)` is `a b`.
//!
//! ```
//! use nmath::ga::{self, Blade};
//!
//! let e1 = ga::basis::<f32>(Blade::E1);
//! let e2 = ga::basis::<f32>(Blade::E2);
//! let mut out = [0.0; 8];
//!
//! ga::geometric_product(&mut out, &e1, &e2);
//! assert_eq!(out, ga::basis::<f32>(Blade::E12));
//!
//! ga::geometric_product(&mut out, &e2, &e1);
//! assert_eq!(out[Blade::E12.index()], -1.0);
//! ```

use crate::error::{KernelError, Result, check_len};
use crate::scalar::Scalar;

/// Eight blade coefficients, ordered as [`Blade::ALL`].
pub type Multivector<T> = [T; 8];

/// Basis blades of the 3D algebra, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Blade {
    Scalar,
    E1,
    E2,
    E3,
    E12,
    E13,
    E23,
    E123,
}

impl Blade {
    pub const ALL: [Blade; 8] = [
        Blade::Scalar,
        Blade::E1,
        Blade::E2,
        Blade::E3,
        Blade::E12,
        Blade::E13,
        Blade::E23,
        Blade::E123,
    ];

    /// Position of this blade's coefficient in a [`Multivector`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Number of basis vectors in the blade.
    pub const fn grade(self) -> u32 {
        match self {
            Blade::Scalar => 0,
            Blade::E1 | Blade::E2 | Blade::E3 => 1,
            Blade::E12 | Blade::E13 | Blade::E23 => 2,
            Blade::E123 => 3,
        }
    }
}

/// Multivector with coefficient 1 on `blade` and 0 elsewhere.
pub fn basis<T: Scalar>(blade: Blade) -> Multivector<T> {
    let mut mv = [T::zero(); 8];
    mv[blade.index()] = T::one();
    mv
}

/// dst = lhs rhs
pub fn geometric_product<'a, T: Scalar>(
    dst: &'a mut Multivector<T>,
    lhs: &Multivector<T>,
    rhs: &Multivector<T>,
) -> &'a mut Multivector<T> {
    let [a0, a1, a2, a3, a12, a13, a23, a123] = *lhs;
    let [b0, b1, b2, b3, b12, b13, b23, b123] = *rhs;

    dst[0] = a0 * b0 + a1 * b1 + a2 * b2 + a3 * b3
        - a12 * b12 - a13 * b13 - a23 * b23 - a123 * b123;
    dst[1] = a0 * b1 + a1 * b0 - a2 * b12 - a3 * b13
        + a12 * b2 + a13 * b3 - a23 * b123 - a123 * b23;
    dst[2] = a0 * b2 + a1 * b12 + a2 * b0 - a3 * b23
        - a12 * b1 + a13 * b123 + a23 * b3 + a123 * b13;
    dst[3] = a0 * b3 + a1 * b13 + a2 * b23 + a3 * b0
        - a12 * b123 - a13 * b1 - a23 * b2 - a123 * b12;
    dst[4] = a0 * b12 + a1 * b2 - a2 * b1 + a3 * b123
        + a12 * b0 - a13 * b23 + a23 * b13 + a123 * b3;
    dst[5] = a0 * b13 + a1 * b3 - a2 * b123 - a3 * b1
        + a12 * b23 + a13 * b0 - a23 * b12 - a123 * b2;
    dst[6] = a0 * b23 + a1 * b123 + a2 * b3 - a3 * b2
        - a12 * b13 + a13 * b12 + a23 * b0 + a123 * b1;
    dst[7] = a0 * b123 + a1 * b23 - a2 * b13 + a3 * b12
        + a12 * b3 - a13 * b2 + a23 * b1 + a123 * b0;

    dst
}

/// [`geometric_product`] over flat slices, checking that each holds 8
/// coefficients.
pub fn geometric_product_slice<'a, T: Scalar>(
    dst: &'a mut [T],
    lhs: &[T],
    rhs: &[T],
) -> Result<&'a mut [T]> {
    let lhs: &Multivector<T> = as_multivector("lhs", lhs)?;
    let rhs: &Multivector<T> = as_multivector("rhs", rhs)?;
    check_len("dst", dst.len(), 8)?;

    let mut out = [T::zero(); 8];
    geometric_product(&mut out, lhs, rhs);
    dst.copy_from_slice(&out);
    Ok(dst)
}

fn as_multivector<'a, T>(operand: &'static str, src: &'a [T]) -> Result<&'a Multivector<T>> {
    src.try_into().map_err(|_| {
        tracing::debug!(operand, actual = src.len(), "multivector must have 8 coefficients");
        KernelError::DimensionMismatch {
            operand,
            expected: 8,
            actual: src.len(),
        }
    })
}

/// Grade-0 part of `lhs rhs`, without computing the other seven blades.
pub fn scalar_product<T: Scalar>(lhs: &Multivector<T>, rhs: &Multivector<T>) -> T {
    lhs[0] * rhs[0] + lhs[1] * rhs[1] + lhs[2] * rhs[2] + lhs[3] * rhs[3]
        - lhs[4] * rhs[4]
        - lhs[5] * rhs[5]
        - lhs[6] * rhs[6]
        - lhs[7] * rhs[7]
}

/// Reversion: flips the order of the vectors in every blade, which negates
/// the bivector and pseudoscalar parts.
pub fn reverse<'a, T: Scalar>(
    dst: &'a mut Multivector<T>,
    src: &Multivector<T>,
) -> &'a mut Multivector<T> {
    for blade in Blade::ALL {
        let i = blade.index();
        dst[i] = if blade.grade() >= 2 { -src[i] } else { src[i] };
    }
    dst
}
