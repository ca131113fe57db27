/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Row reduction of dense matrices.
//!
//! Everything here takes a [`Tolerances`] which decides when a value is
//! "effectively zero".  That single decision governs both pivot selection and
//! the detection of zero rows.

#[macro_use]
extern crate log;
#[cfg_attr(test, macro_use)]
extern crate dmat_assert_close;
#[cfg_attr(test, macro_use)]
extern crate dmat_matrix;

pub use ::dmat_assert_close::Tolerances;

pub use self::gauss::{forward_eliminate, gauss, rank, Elimination};
mod gauss;

pub use self::det::determinant;
mod det;
