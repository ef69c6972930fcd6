//! Allocation-free numeric kernels over caller-owned buffers.
//!
//! Vectors, row-major matrices (any n×m, plus the square case) and the
//! 8-blade multivectors of 3D geometric algebra, all as plain slices. The
//! crate never allocates and owns no memory: every kernel writes into a
//! destination you pass in and hands it back, so calls chain.
//!
//! ## Usage
//!
//! ```
//! use nmath::matrix::{self, square};
//!
//! // | 1  2  3  4 |
//! // | 5  6  7  8 |
//! // | 9 10 11 12 |
//! let a: Vec<f32> = (1..=12).map(|i| i as f32).collect();
//!
//! // A * A^T without building A^T
//! let mut aat = [0.0f32; 9];
//! matrix::multt(&mut aat, &a, &a, 4, 3, 3).unwrap();
//! assert_eq!(aat[0], 30.0);
//!
//! let mut v = [0.0f32; 3];
//! square::mult_vector(&mut v, &aat, &[1.0, 0.0, 0.0], 3).unwrap();
//! assert_eq!(v, [30.0, 70.0, 110.0]);
//! ```
//!
//! ## What's inside
//!
//! - [`vector`]: elementwise arithmetic, dot, length, normalize
//! - [`matrix`]: n×m kernels, including `addt`/`subt`/`multt`, which read
//!   their second operand as a transpose without copying it
//! - [`matrix::square`]: n×n wrappers, matrix × vector, in-place transpose
//! - [`ga`]: the geometric product of 3D multivectors
//!
//! Kernels are generic over any [`Scalar`] (any `num_traits::Float`); [`Real`]
//! is the default, `f32` unless the `f64` feature is on. Buffer lengths are
//! checked against the declared dimensions on entry and mismatches come back
//! as [`KernelError`].

pub mod error;
pub mod ga;
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use error::{KernelError, Result};
pub use ga::{Blade, Multivector, geometric_product};
pub use scalar::{Real, Scalar};
