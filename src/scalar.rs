//! Element type used by every kernel.
//!
//! The kernels are generic over any [`Scalar`], which is just
//! [`num_traits::Float`]: it brings `sqrt`, `min`, `max`, `ceil` and `floor`,
//! so swapping precision is a matter of picking a different `T`.

use num_traits::Float;

/// Floating-point element a kernel can operate on.
pub trait Scalar: Float {}

impl<T: Float> Scalar for T {}

/// Default element type: `f32`, or `f64` with the `f64` feature.
#[cfg(not(feature = "f64"))]
pub type Real = f32;

/// Default element type: `f32`, or `f64` with the `f64` feature.
#[cfg(feature = "f64")]
pub type Real = f64;
