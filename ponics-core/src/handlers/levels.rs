//! The level analysis entry point.

use crate::analysis::{self, LevelAnalysis};
use crate::data::DataStore;
use crate::dispatch::{Query, QueryHandler};
use crate::error::PonicsError;
use ponics_schemas::organism::Organism;
use ponics_schemas::query::AnalyseLevel;
use std::sync::Arc;

impl Query for AnalyseLevel {
    type Output = LevelAnalysis;
}

/// Looks the organism up through the (possibly seed-decorated) store and
/// hands the reading to [`analysis::analyse`].
pub struct AnalyseLevelHandler {
    organisms: Arc<dyn DataStore<Organism>>,
}

impl AnalyseLevelHandler {
    pub fn new(organisms: Arc<dyn DataStore<Organism>>) -> Self {
        Self { organisms }
    }
}

impl QueryHandler<AnalyseLevel> for AnalyseLevelHandler {
    fn handle(&self, query: AnalyseLevel) -> Result<LevelAnalysis, PonicsError> {
        let organism = self
            .organisms
            .fetch_all()?
            .into_iter()
            .find(|o| o.id == query.organism_id)
            .ok_or(PonicsError::OrganismNotFound(query.organism_id))?;
        analysis::analyse(&organism, query.level, query.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemoryStore;
    use ponics_schemas::levels::LevelKind;
    use ponics_schemas::tolerance::Tolerance;
    use uuid::Uuid;

    #[test]
    fn analyses_a_stored_organism() {
        let mut perch = Organism::new("Silver Perch");
        perch
            .tolerances
            .push(Tolerance::new(LevelKind::Ph, 6.0, 6.8, 7.2, 8.5).unwrap());
        let perch_id = perch.id;
        let handler = AnalyseLevelHandler::new(Arc::new(MemoryStore::with_entities(vec![perch])));

        let analysis = handler
            .handle(AnalyseLevel {
                organism_id: perch_id,
                level: LevelKind::Ph,
                value: 6.5,
            })
            .unwrap();

        assert_eq!(analysis.organism_id, perch_id);
        assert_eq!(analysis.warnings.len(), 1);
    }

    #[test]
    fn unknown_organisms_cannot_be_analysed() {
        let handler = AnalyseLevelHandler::new(Arc::new(MemoryStore::new()));
        assert!(matches!(
            handler.handle(AnalyseLevel {
                organism_id: Uuid::new_v4(),
                level: LevelKind::Ph,
                value: 7.0,
            }),
            Err(PonicsError::OrganismNotFound(_))
        ));
    }
}
