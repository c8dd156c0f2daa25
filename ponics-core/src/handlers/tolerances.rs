//! Tolerance bookkeeping on organisms.
//!
//! Adding and updating stay distinct operations: `AddTolerance` refuses
//! to shadow an existing tolerance for the same level kind, and
//! `UpdateTolerance` refuses to invent one that was never added.

use crate::data::DataStore;
use crate::dispatch::{Command, CommandHandler};
use crate::error::PonicsError;
use ponics_schemas::command::{AddTolerance, UpdateTolerance};
use ponics_schemas::organism::Organism;
use std::sync::Arc;
use uuid::Uuid;

impl Command for AddTolerance {}
impl Command for UpdateTolerance {}

fn find_organism(
    organisms: &dyn DataStore<Organism>,
    organism_id: Uuid,
) -> Result<Organism, PonicsError> {
    organisms
        .fetch_all()?
        .into_iter()
        .find(|o| o.id == organism_id)
        .ok_or(PonicsError::OrganismNotFound(organism_id))
}

pub struct AddToleranceHandler {
    organisms: Arc<dyn DataStore<Organism>>,
}

impl AddToleranceHandler {
    pub fn new(organisms: Arc<dyn DataStore<Organism>>) -> Self {
        Self { organisms }
    }
}

impl CommandHandler<AddTolerance> for AddToleranceHandler {
    fn handle(&self, command: AddTolerance) -> Result<(), PonicsError> {
        let mut organism = find_organism(self.organisms.as_ref(), command.organism_id)?;
        let level = command.tolerance.level();

        if organism.has_tolerance(level) {
            return Err(PonicsError::ToleranceAlreadyDefined(organism.id, level));
        }
        organism.tolerances.push(command.tolerance);
        self.organisms.update(organism)
    }
}

pub struct UpdateToleranceHandler {
    organisms: Arc<dyn DataStore<Organism>>,
}

impl UpdateToleranceHandler {
    pub fn new(organisms: Arc<dyn DataStore<Organism>>) -> Self {
        Self { organisms }
    }
}

impl CommandHandler<UpdateTolerance> for UpdateToleranceHandler {
    fn handle(&self, command: UpdateTolerance) -> Result<(), PonicsError> {
        let mut organism = find_organism(self.organisms.as_ref(), command.organism_id)?;
        let level = command.tolerance.level();

        match organism.tolerances.iter().position(|t| t.level() == level) {
            Some(index) => organism.tolerances[index] = command.tolerance,
            None => return Err(PonicsError::ToleranceNotDefined(organism.id, level)),
        }
        self.organisms.update(organism)
    }
}
