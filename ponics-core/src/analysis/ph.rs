//! pH warning wording and the ion concentrations derived from a reading.

use ponics_schemas::tolerance::Classification;

pub const BELOW_ACCEPTABLE: &str = "pH is below the acceptable range for this organism";
pub const BELOW_DESIRED: &str = "pH is acceptable but below the desired range";
pub const ABOVE_DESIRED: &str = "pH is acceptable but above the desired range";
pub const ABOVE_ACCEPTABLE: &str = "pH is above the acceptable range for this organism";
pub const TOLERANCE_NOT_DEFINED: &str = "no pH tolerance is defined for this organism";

pub(crate) fn warning(classification: Classification) -> Option<&'static str> {
    match classification {
        Classification::WithinDesired => None,
        Classification::BelowAcceptable => Some(BELOW_ACCEPTABLE),
        Classification::BelowDesired => Some(BELOW_DESIRED),
        Classification::AboveDesired => Some(ABOVE_DESIRED),
        Classification::AboveAcceptable => Some(ABOVE_ACCEPTABLE),
    }
}

/// Molar concentration of hydrogen ions, `10^-pH`.
pub fn hydrogen_ion_concentration(ph: f64) -> f64 {
    10f64.powf(-ph)
}

/// Molar concentration of hydroxide ions, `10^-(14 - pH)`.
///
/// Uses the ionic product of water at 25 degrees C (pKw = 14).
pub fn hydroxide_ions_concentration(ph: f64) -> f64 {
    10f64.powf(-(14.0 - ph))
}
