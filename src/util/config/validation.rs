//! Checks that cannot be expressed in the settings types themselves.

use crate::{FailResult, Settings, ValidatedSettings};
use ::dmat_assert_close::Tolerances;

impl Settings {
    pub fn validate(self) -> FailResult<ValidatedSettings> {
        check_tolerance(&self.tolerance)?;
        Ok(ValidatedSettings(self))
    }
}

fn check_tolerance(&Tolerances { abs, rel }: &Tolerances) -> FailResult<()> {
    for &(name, value) in &[("abs", abs), ("rel", rel)] {
        if !(value.is_finite() && value >= 0.0) {
            bail!("tolerance.{} must be a finite non-negative number (got {})", name, value);
        }
    }
    if rel >= 1.0 {
        // every value is within 100% of zero
        bail!("tolerance.rel must be less than 1 (got {})", rel);
    }
    if abs > 1e-3 {
        warn!("tolerance.abs = {} is very large; much of the matrix may be treated as zero", abs);
    }
    Ok(())
}
