//! Iron warning wording.

use ponics_schemas::tolerance::Classification;

pub const BELOW_ACCEPTABLE: &str = "iron is below the acceptable range; leaves may start yellowing";
pub const BELOW_DESIRED: &str = "iron is acceptable but below the desired range";
pub const ABOVE_DESIRED: &str = "iron is acceptable but above the desired range";
pub const ABOVE_ACCEPTABLE: &str = "iron is above the acceptable range for this organism";
pub const TOLERANCE_NOT_DEFINED: &str = "no iron tolerance is defined for this organism";

pub(crate) fn warning(classification: Classification) -> Option<&'static str> {
    match classification {
        Classification::WithinDesired => None,
        Classification::BelowAcceptable => Some(BELOW_ACCEPTABLE),
        Classification::BelowDesired => Some(BELOW_DESIRED),
        Classification::AboveDesired => Some(ABOVE_DESIRED),
        Classification::AboveAcceptable => Some(ABOVE_ACCEPTABLE),
    }
}
