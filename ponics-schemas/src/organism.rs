//! An organism kept in an aquaponic system, together with the water-quality
//! tolerances recorded for it.

use crate::levels::LevelKind;
use crate::tolerance::Tolerance;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A species (or strain) raised in a system, such as a fish or a crop plant.
///
/// At most one tolerance per [`LevelKind`] is meaningful; the command layer
/// rejects duplicates before they reach storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organism {
    pub id: Uuid,
    /// Common name, e.g. "Silver Perch".
    pub name: String,
    pub tolerances: Vec<Tolerance>,
}

impl Organism {
    /// Creates an organism with a fresh identifier and no tolerances yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            tolerances: Vec::new(),
        }
    }

    /// Looks up the tolerance recorded for one level, if any.
    pub fn tolerance_for(&self, level: LevelKind) -> Option<&Tolerance> {
        self.tolerances.iter().find(|t| t.level() == level)
    }

    pub fn has_tolerance(&self, level: LevelKind) -> bool {
        self.tolerance_for(level).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_organisms_get_distinct_ids() {
        let a = Organism::new("Silver Perch");
        let b = Organism::new("Silver Perch");
        assert_ne!(a.id, b.id);
        assert!(a.tolerances.is_empty());
    }

    #[test]
    fn tolerance_lookup_is_by_level() {
        let mut organism = Organism::new("Jade Perch");
        organism
            .tolerances
            .push(Tolerance::new(LevelKind::Ph, 6.0, 6.8, 7.2, 8.5).unwrap());

        assert!(organism.has_tolerance(LevelKind::Ph));
        assert!(!organism.has_tolerance(LevelKind::Nitrite));
        assert_eq!(
            organism.tolerance_for(LevelKind::Ph).unwrap().upper(),
            8.5
        );
    }
}
