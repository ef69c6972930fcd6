//! Row-major matrix kernels.
//!
//! A matrix is a flat slice plus two dimensions: `n`, the width (row
//! length), and `m`, the height (number of rows). Element (col, row) lives at
//! `col + row * n`. The same slice can be read as its own transpose through
//! `row + col * m`, which is what the `*t` kernels (`addt`, `subt`, `multt`)
//! do instead of allocating a transposed copy.
//!
//! ```text
//! | 0         | 1   | ... | n-1     |
//! | n         | n+1 |     |         |
//! | ...       |     |     |         |
//! | n*(m-1)   | ... |     | n*m - 1 |
//! ```
//!
//! [`square`] wraps everything for the n×n case and adds matrix × vector.

pub mod elementwise;
pub mod index;
pub mod mult;
pub mod square;
pub mod transpose;

pub use elementwise::{
    add, add_in_place, addt, addt_in_place, one, scale, scale_in_place, sub, sub_in_place, subt,
    subt_in_place, zero,
};
pub use index::{at, at_mut, att, att_mut, get, gett, offset, offset_t};
pub use mult::{mult, multt};
pub use transpose::transpose;

use crate::error::{Result, area, check_len};

/// Checks that `buf` holds exactly an n×m matrix.
#[inline]
pub(crate) fn check_shape<T>(operand: &'static str, buf: &[T], n: usize, m: usize) -> Result<()> {
    check_len(operand, buf.len(), area(n, m)?)
}
