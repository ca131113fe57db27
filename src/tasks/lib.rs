/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Everything the dmat binaries do beyond the linear algebra itself:
//! argument parsing, logging, settings and file input.

#[macro_use] extern crate failure;
#[macro_use] extern crate log;

pub mod entry_points;
pub mod cmd;
mod input;
mod ui;

pub use self::input::read_matrix;
pub use self::ui::logging::GlobalLogger;

pub type FailResult<T> = Result<T, failure::Error>;
