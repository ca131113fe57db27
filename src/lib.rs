/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small dense matrices: construction, arithmetic, Gaussian elimination
//! and determinants.
//!
//! ```
//! use dmat::{matrix, determinant, gauss, Tolerances};
//!
//! let tol = Tolerances::default();
//! assert_eq!(determinant(&matrix![[0, 1], [1, 0]], tol).unwrap(), -1.0);
//!
//! let mut m = matrix![[1, 2], [2, 4]];
//! gauss(&mut m, tol);
//! assert_eq!(m.num_rows(), 1);
//! ```

pub use dmat_assert_close::{CheckClose, Tolerances};
pub use dmat_linalg::{determinant, forward_eliminate, gauss, rank, Elimination};
pub use dmat_matrix::{matrix, Dimension, Matrix, MatrixDisplay, ShapeError};

pub mod version {
    pub fn get() -> &'static str { env!("CARGO_PKG_VERSION") }
}
