/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Dense, owned, row-major matrices of `f64`.

#[macro_use]
extern crate log;
#[cfg_attr(test, macro_use)]
extern crate dmat_assert_close;

pub use self::error::ShapeError;
pub use self::fmt::{MatrixDisplay, DEFAULT_WIDTH};
pub use self::matrix::{Dimension, Matrix};

/// Builds a [`Matrix`] from a literal list of rows.
///
/// Elements are converted with `as f64`, so integer literals are fine.
///
/// ```
/// # #[macro_use] extern crate dmat_matrix;
/// # fn main() {
/// let m = matrix![[2, 1], [1, 1]];
/// assert_eq!(m.dimension(), (2, 2).into());
/// assert_eq!(m[(0, 0)], 2.0);
/// # }
/// ```
#[macro_export]
macro_rules! matrix {
    () => { $crate::Matrix::default() };
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {
        $crate::Matrix::from_rows(&[$(vec![$($x as f64),*]),+])
    };
}

mod error;
mod fmt;
mod matrix;
mod ops;
