//! Nitrite warning wording. Nitrite is the most dangerous of the measured
//! levels, so even the below-desired message reads as good news.

use ponics_schemas::tolerance::Classification;

pub const BELOW_DESIRED: &str = "nitrite is below the desired range, which is safe";
pub const ABOVE_DESIRED: &str = "nitrite is creeping above the desired range";
pub const ABOVE_ACCEPTABLE: &str =
    "nitrite is above the acceptable range and is toxic to stock at this level";
pub const TOLERANCE_NOT_DEFINED: &str = "no nitrite tolerance is defined for this organism";

pub(crate) fn warning(classification: Classification) -> Option<&'static str> {
    match classification {
        Classification::WithinDesired => None,
        // Tolerances usually pin the lower bounds at zero, but an operator
        // can define a floor; falling under it still reads as safe.
        Classification::BelowAcceptable | Classification::BelowDesired => Some(BELOW_DESIRED),
        Classification::AboveDesired => Some(ABOVE_DESIRED),
        Classification::AboveAcceptable => Some(ABOVE_ACCEPTABLE),
    }
}
