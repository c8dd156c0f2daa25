//! Organism collection operations.

use crate::data::DataStore;
use crate::dispatch::{Command, CommandHandler, Query, QueryHandler};
use crate::error::PonicsError;
use ponics_schemas::command::{AddOrganism, UpdateOrganism};
use ponics_schemas::organism::Organism;
use ponics_schemas::query::{GetAllOrganisms, GetOrganism};
use std::sync::Arc;
use uuid::Uuid;

impl Query for GetAllOrganisms {
    type Output = Vec<Organism>;
}

impl Query for GetOrganism {
    type Output = Organism;
}

impl Command for AddOrganism {}
impl Command for UpdateOrganism {}

pub struct GetAllOrganismsHandler {
    organisms: Arc<dyn DataStore<Organism>>,
}

impl GetAllOrganismsHandler {
    pub fn new(organisms: Arc<dyn DataStore<Organism>>) -> Self {
        Self { organisms }
    }
}

impl QueryHandler<GetAllOrganisms> for GetAllOrganismsHandler {
    fn handle(&self, _query: GetAllOrganisms) -> Result<Vec<Organism>, PonicsError> {
        self.organisms.fetch_all()
    }
}

pub struct GetOrganismHandler {
    organisms: Arc<dyn DataStore<Organism>>,
}

impl GetOrganismHandler {
    pub fn new(organisms: Arc<dyn DataStore<Organism>>) -> Self {
        Self { organisms }
    }
}

impl QueryHandler<GetOrganism> for GetOrganismHandler {
    fn handle(&self, query: GetOrganism) -> Result<Organism, PonicsError> {
        self.organisms
            .fetch_all()?
            .into_iter()
            .find(|o| o.id == query.organism_id)
            .ok_or(PonicsError::OrganismNotFound(query.organism_id))
    }
}

pub struct AddOrganismHandler {
    organisms: Arc<dyn DataStore<Organism>>,
}

impl AddOrganismHandler {
    pub fn new(organisms: Arc<dyn DataStore<Organism>>) -> Self {
        Self { organisms }
    }
}

impl CommandHandler<AddOrganism> for AddOrganismHandler {
    /// Inserts the organism, assigning a fresh id when the caller sent a
    /// nil one.
    fn handle(&self, command: AddOrganism) -> Result<(), PonicsError> {
        let mut organism = command.organism;
        if organism.id.is_nil() {
            organism.id = Uuid::new_v4();
        }
        tracing::info!(organism = %organism.id, name = %organism.name, "adding organism");
        self.organisms.insert(organism)
    }
}

pub struct UpdateOrganismHandler {
    organisms: Arc<dyn DataStore<Organism>>,
}

impl UpdateOrganismHandler {
    pub fn new(organisms: Arc<dyn DataStore<Organism>>) -> Self {
        Self { organisms }
    }
}

impl CommandHandler<UpdateOrganism> for UpdateOrganismHandler {
    fn handle(&self, command: UpdateOrganism) -> Result<(), PonicsError> {
        self.organisms.update(command.organism)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemoryStore;

    fn empty_store() -> Arc<MemoryStore<Organism>> {
        Arc::new(MemoryStore::new())
    }

    #[test]
    fn nil_id_is_replaced_with_a_fresh_one() {
        let store = empty_store();
        let handler = AddOrganismHandler::new(store.clone());

        let mut perch = Organism::new("Silver Perch");
        perch.id = Uuid::nil();
        handler.handle(AddOrganism { organism: perch }).unwrap();

        let all = store.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert!(!all[0].id.is_nil());
    }

    #[test]
    fn caller_supplied_id_is_preserved() {
        let store = empty_store();
        let handler = AddOrganismHandler::new(store.clone());

        let perch = Organism::new("Silver Perch");
        let id = perch.id;
        handler.handle(AddOrganism { organism: perch }).unwrap();

        assert_eq!(store.fetch_all().unwrap()[0].id, id);
    }

    #[test]
    fn fetching_an_unknown_organism_fails() {
        let handler = GetOrganismHandler::new(empty_store());
        assert!(matches!(
            handler.handle(GetOrganism {
                organism_id: Uuid::new_v4()
            }),
            Err(PonicsError::OrganismNotFound(_))
        ));
    }

    #[test]
    fn updates_require_an_existing_record() {
        let store = empty_store();
        let update = UpdateOrganismHandler::new(store.clone());

        let perch = Organism::new("Silver Perch");
        assert!(matches!(
            update.handle(UpdateOrganism {
                organism: perch.clone()
            }),
            Err(PonicsError::EntityNotFound(_))
        ));

        store.insert(perch.clone()).unwrap();
        let mut renamed = perch;
        renamed.name = "Bidyanus bidyanus".to_string();
        update.handle(UpdateOrganism { organism: renamed }).unwrap();
        assert_eq!(store.fetch_all().unwrap()[0].name, "Bidyanus bidyanus");
    }
}
