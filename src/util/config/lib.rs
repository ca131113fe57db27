/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Settings for the dmat binaries, read from YAML.

#[macro_use] extern crate failure;
#[macro_use] extern crate log;

pub use self::yaml_read::YamlRead;
mod yaml_read;

pub use self::settings::{DisplaySettings, Settings, ValidatedSettings};
mod settings;
mod validation;

pub type FailResult<T> = Result<T, failure::Error>;
