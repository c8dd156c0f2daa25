//! Acceptable and desired ranges for one measured level of one organism.
//!
//! A [`Tolerance`] is an immutable value object. The four bounds are
//! validated on every construction path, including deserialization, so a
//! value of this type always satisfies
//! `lower <= desired_lower <= desired_upper <= upper`.

use crate::levels::{LevelKind, Scale};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when tolerance bounds are rejected at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidTolerance {
    #[error("{level} tolerance bounds must all be finite numbers")]
    NonFiniteBound { level: LevelKind },

    #[error(
        "{level} tolerance bounds must be ordered \
         lower <= desired_lower <= desired_upper <= upper \
         (got {lower}, {desired_lower}, {desired_upper}, {upper})"
    )]
    UnorderedBounds {
        level: LevelKind,
        lower: f64,
        desired_lower: f64,
        desired_upper: f64,
        upper: f64,
    },
}

/// Where a measurement falls relative to a tolerance.
///
/// The five categories partition the measurable range. Boundary values
/// belong to the inner category: a reading exactly on `lower` is
/// `BelowDesired`, one exactly on `desired_lower` is `WithinDesired`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    BelowAcceptable,
    BelowDesired,
    WithinDesired,
    AboveDesired,
    AboveAcceptable,
}

impl Classification {
    /// Whether the measurement is inside the hard acceptable bounds.
    pub fn is_acceptable(self) -> bool {
        !matches!(
            self,
            Classification::BelowAcceptable | Classification::AboveAcceptable
        )
    }

    /// Whether the measurement is inside the preferred band.
    pub fn is_desired(self) -> bool {
        matches!(self, Classification::WithinDesired)
    }
}

/// The acceptable and desired range of one level for one organism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ToleranceDef", into = "ToleranceDef")]
pub struct Tolerance {
    level: LevelKind,
    lower: f64,
    desired_lower: f64,
    desired_upper: f64,
    upper: f64,
}

impl Tolerance {
    /// Builds a tolerance, rejecting non-finite or unordered bounds.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTolerance`] unless
    /// `lower <= desired_lower <= desired_upper <= upper` and every bound
    /// is finite.
    pub fn new(
        level: LevelKind,
        lower: f64,
        desired_lower: f64,
        desired_upper: f64,
        upper: f64,
    ) -> Result<Self, InvalidTolerance> {
        let bounds = [lower, desired_lower, desired_upper, upper];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(InvalidTolerance::NonFiniteBound { level });
        }
        if !(lower <= desired_lower && desired_lower <= desired_upper && desired_upper <= upper) {
            return Err(InvalidTolerance::UnorderedBounds {
                level,
                lower,
                desired_lower,
                desired_upper,
                upper,
            });
        }
        Ok(Self {
            level,
            lower,
            desired_lower,
            desired_upper,
            upper,
        })
    }

    pub fn level(&self) -> LevelKind {
        self.level
    }

    /// Hard lower bound of the acceptable range.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Lower bound of the preferred band.
    pub fn desired_lower(&self) -> f64 {
        self.desired_lower
    }

    /// Upper bound of the preferred band.
    pub fn desired_upper(&self) -> f64 {
        self.desired_upper
    }

    /// Hard upper bound of the acceptable range.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// The unit this tolerance (and its readings) are expressed in.
    pub fn scale(&self) -> Scale {
        self.level.scale()
    }

    /// Places a finite measurement into one of the five categories.
    pub fn classify(&self, value: f64) -> Classification {
        if value < self.lower {
            Classification::BelowAcceptable
        } else if value > self.upper {
            Classification::AboveAcceptable
        } else if value < self.desired_lower {
            Classification::BelowDesired
        } else if value > self.desired_upper {
            Classification::AboveDesired
        } else {
            Classification::WithinDesired
        }
    }
}

/// Serde mirror of [`Tolerance`] with public fields.
///
/// File and wire input deserializes into this shape first, then converts
/// through [`Tolerance::new`], so stored data is subject to the same
/// bound checks as programmatic construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToleranceDef {
    pub level: LevelKind,
    pub lower: f64,
    pub desired_lower: f64,
    pub desired_upper: f64,
    pub upper: f64,
}

impl TryFrom<ToleranceDef> for Tolerance {
    type Error = InvalidTolerance;

    fn try_from(def: ToleranceDef) -> Result<Self, Self::Error> {
        Tolerance::new(
            def.level,
            def.lower,
            def.desired_lower,
            def.desired_upper,
            def.upper,
        )
    }
}

impl From<Tolerance> for ToleranceDef {
    fn from(tolerance: Tolerance) -> Self {
        ToleranceDef {
            level: tolerance.level,
            lower: tolerance.lower,
            desired_lower: tolerance.desired_lower,
            desired_upper: tolerance.desired_upper,
            upper: tolerance.upper,
        }
    }
}
