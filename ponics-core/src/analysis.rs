//! Turns one water-quality reading into a classification-driven report.
//!
//! Analysis is pure: it reads the organism's recorded tolerance, never
//! touches storage, and its result is returned to the caller rather than
//! persisted. Each level kind owns its warning wording and any derived
//! quantities in its own submodule.

use crate::error::PonicsError;
use ponics_schemas::levels::LevelKind;
use ponics_schemas::organism::Organism;
use ponics_schemas::tolerance::Classification;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod iron;
pub mod nitrate;
pub mod nitrite;
pub mod ph;
pub mod salinity;

/// Quantities derived from the reading itself, tagged by level kind.
///
/// Only pH carries extra numbers today; the other kinds are plain tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum LevelDerived {
    Ph {
        hydrogen_ion_concentration: f64,
        hydroxide_ions_concentration: f64,
    },
    Nitrite,
    Nitrate,
    Salinity,
    Iron,
}

impl LevelDerived {
    pub fn level(&self) -> LevelKind {
        match self {
            LevelDerived::Ph { .. } => LevelKind::Ph,
            LevelDerived::Nitrite => LevelKind::Nitrite,
            LevelDerived::Nitrate => LevelKind::Nitrate,
            LevelDerived::Salinity => LevelKind::Salinity,
            LevelDerived::Iron => LevelKind::Iron,
        }
    }
}

/// The outcome of analysing one reading against one organism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelAnalysis {
    pub organism_id: Uuid,
    pub value: f64,
    /// Where the reading sits relative to the recorded tolerance; `None`
    /// when the organism has no tolerance for this level.
    pub classification: Option<Classification>,
    pub derived: LevelDerived,
    /// Zero or more operator-facing warnings, in the order raised.
    pub warnings: Vec<String>,
}

impl LevelAnalysis {
    pub fn level(&self) -> LevelKind {
        self.derived.level()
    }

    /// True when the reading raised no warnings at all.
    pub fn is_clear(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Analyses one reading of `level` for `organism`.
///
/// A missing tolerance is not a failure: the analysis succeeds and
/// carries a single warning saying the tolerance is not defined. Derived
/// quantities are computed either way.
///
/// # Errors
///
/// Returns [`PonicsError::NonFiniteMeasurement`] for NaN or infinite
/// readings.
pub fn analyse(
    organism: &Organism,
    level: LevelKind,
    value: f64,
) -> Result<LevelAnalysis, PonicsError> {
    if !value.is_finite() {
        return Err(PonicsError::NonFiniteMeasurement(level, value));
    }

    let mut warnings = Vec::new();
    let classification = match organism.tolerance_for(level) {
        Some(tolerance) => {
            let classification = tolerance.classify(value);
            tracing::debug!(
                organism = %organism.id,
                level = %level,
                value,
                ?classification,
                "classified reading"
            );
            if let Some(warning) = warning_for(level, classification) {
                warnings.push(warning.to_string());
            }
            Some(classification)
        }
        None => {
            warnings.push(missing_tolerance_warning(level).to_string());
            None
        }
    };

    Ok(LevelAnalysis {
        organism_id: organism.id,
        value,
        classification,
        derived: derive(level, value),
        warnings,
    })
}

fn derive(level: LevelKind, value: f64) -> LevelDerived {
    match level {
        LevelKind::Ph => LevelDerived::Ph {
            hydrogen_ion_concentration: ph::hydrogen_ion_concentration(value),
            hydroxide_ions_concentration: ph::hydroxide_ions_concentration(value),
        },
        LevelKind::Nitrite => LevelDerived::Nitrite,
        LevelKind::Nitrate => LevelDerived::Nitrate,
        LevelKind::Salinity => LevelDerived::Salinity,
        LevelKind::Iron => LevelDerived::Iron,
    }
}

fn warning_for(level: LevelKind, classification: Classification) -> Option<&'static str> {
    match level {
        LevelKind::Ph => ph::warning(classification),
        LevelKind::Nitrite => nitrite::warning(classification),
        LevelKind::Nitrate => nitrate::warning(classification),
        LevelKind::Salinity => salinity::warning(classification),
        LevelKind::Iron => iron::warning(classification),
    }
}

fn missing_tolerance_warning(level: LevelKind) -> &'static str {
    match level {
        LevelKind::Ph => ph::TOLERANCE_NOT_DEFINED,
        LevelKind::Nitrite => nitrite::TOLERANCE_NOT_DEFINED,
        LevelKind::Nitrate => nitrate::TOLERANCE_NOT_DEFINED,
        LevelKind::Salinity => salinity::TOLERANCE_NOT_DEFINED,
        LevelKind::Iron => iron::TOLERANCE_NOT_DEFINED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ponics_schemas::tolerance::Tolerance;

    fn perch_with_ph_tolerance() -> Organism {
        let mut organism = Organism::new("Silver Perch");
        organism
            .tolerances
            .push(Tolerance::new(LevelKind::Ph, 6.0, 6.8, 7.2, 8.5).unwrap());
        organism
    }

    #[test]
    fn reading_within_desired_band_is_clear() {
        let organism = perch_with_ph_tolerance();
        let analysis = analyse(&organism, LevelKind::Ph, 7.0).unwrap();

        assert!(analysis.is_clear());
        assert_eq!(analysis.classification, Some(Classification::WithinDesired));
        assert_eq!(analysis.level(), LevelKind::Ph);
        assert_eq!(analysis.organism_id, organism.id);
    }

    #[test]
    fn reading_below_desired_band_warns_once() {
        let organism = perch_with_ph_tolerance();
        let analysis = analyse(&organism, LevelKind::Ph, 6.5).unwrap();

        assert_eq!(analysis.classification, Some(Classification::BelowDesired));
        assert_eq!(analysis.warnings, vec![ph::BELOW_DESIRED.to_string()]);
    }

    #[test]
    fn reading_below_acceptable_range_warns_once() {
        let organism = perch_with_ph_tolerance();
        let analysis = analyse(&organism, LevelKind::Ph, 5.0).unwrap();

        assert_eq!(analysis.warnings, vec![ph::BELOW_ACCEPTABLE.to_string()]);
    }

    #[test]
    fn missing_tolerance_warns_instead_of_failing() {
        let organism = perch_with_ph_tolerance();
        let analysis = analyse(&organism, LevelKind::Nitrite, 0.2).unwrap();

        assert_eq!(analysis.derived, LevelDerived::Nitrite);
        assert!(analysis.classification.is_none());
        assert_eq!(
            analysis.warnings,
            vec![nitrite::TOLERANCE_NOT_DEFINED.to_string()]
        );
    }

    #[test]
    fn ph_derivation_does_not_need_a_tolerance() {
        let organism = Organism::new("Watercress");
        let analysis = analyse(&organism, LevelKind::Ph, 7.0).unwrap();

        match analysis.derived {
            LevelDerived::Ph {
                hydrogen_ion_concentration,
                hydroxide_ions_concentration,
            } => {
                assert!((hydrogen_ion_concentration - 1e-7).abs() < 1e-9);
                assert!((hydroxide_ions_concentration - 1e-7).abs() < 1e-9);
            }
            other => panic!("expected pH derivation, got {other:?}"),
        }
        assert_eq!(analysis.warnings.len(), 1);
    }

    #[test]
    fn non_finite_readings_are_rejected() {
        let organism = perch_with_ph_tolerance();
        assert!(matches!(
            analyse(&organism, LevelKind::Ph, f64::NAN),
            Err(PonicsError::NonFiniteMeasurement(LevelKind::Ph, _))
        ));
        assert!(matches!(
            analyse(&organism, LevelKind::Salinity, f64::INFINITY),
            Err(PonicsError::NonFiniteMeasurement(LevelKind::Salinity, _))
        ));
    }
}
