// NOTE: Read these through the YamlRead trait, so that typos produce warnings.

use crate::{FailResult, YamlRead};
use ::dmat_assert_close::Tolerances;
use ::serde::{Deserialize, Serialize};
use ::std::fs::File;
use ::std::path::Path;

/// Root settings object, as it appears in a config file.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Decides when a value is treated as zero, both when choosing pivots and when
    /// discarding rows after elimination.
    ///
    /// ```yaml
    /// tolerance:
    ///   abs: 1e-12   # default: machine epsilon
    ///   rel: 0.0     # default
    /// ```
    #[serde(default)]
    pub tolerance: Tolerances,

    #[serde(default)]
    pub display: DisplaySettings,
}

/// How matrices are written to standard output.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct DisplaySettings {
    /// Width of the field each value is right-justified in.
    #[serde(default = "default_display_width")]
    pub width: usize,

    /// Digits printed after the decimal point.
    /// By default, the shortest representation that round-trips is used.
    #[serde(default)]
    pub precision: Option<usize>,
}
fn default_display_width() -> usize { ::dmat_matrix::DEFAULT_WIDTH }

impl Default for DisplaySettings {
    fn default() -> Self
    { DisplaySettings { width: default_display_width(), precision: None } }
}

/// Settings that have passed [`Settings::validate`].
#[derive(Serialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSettings(pub Settings);

impl ::std::ops::Deref for ValidatedSettings {
    type Target = Settings;

    fn deref(&self) -> &Settings { &self.0 }
}

impl Default for ValidatedSettings {
    fn default() -> Self { ValidatedSettings(Settings::default()) }
}

impl ValidatedSettings {
    /// Read and validate a config file, or use the defaults when there is none.
    pub fn load(path: Option<&Path>) -> FailResult<ValidatedSettings> {
        match path {
            None => Ok(ValidatedSettings::default()),
            Some(path) => {
                let file = File::open(path)
                    .map_err(|e| format_err!("could not open config {}: {}", path.display(), e))?;
                let settings: Settings = YamlRead::from_reader(file)?;
                settings.validate()
            },
        }
    }
}
