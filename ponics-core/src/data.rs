//! Storage ports and the seed-on-empty decorator.
//!
//! Handlers talk to collections through [`DataStore`], never to a concrete
//! backend. [`MemoryStore`] is the reference implementation; anything that
//! can list, insert and update entities by id can stand in for it.

use crate::error::PonicsError;
use ponics_schemas::organism::Organism;
use ponics_schemas::system::AquaponicSystem;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// A stored record that knows its own identifier.
pub trait Entity: Clone + Send + Sync {
    fn id(&self) -> Uuid;
}

impl Entity for Organism {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Entity for AquaponicSystem {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Port to one collection of entities.
///
/// `insert` is idempotent per id: inserting an entity whose id is already
/// present replaces the stored record. `update` requires the id to exist
/// and fails with [`PonicsError::EntityNotFound`] otherwise.
pub trait DataStore<T: Entity>: Send + Sync {
    fn fetch_all(&self) -> Result<Vec<T>, PonicsError>;
    fn insert(&self, entity: T) -> Result<(), PonicsError>;
    fn update(&self, entity: T) -> Result<(), PonicsError>;
}

const LOCK_POISONED: &str = "store lock poisoned";

/// In-memory [`DataStore`] with read-your-writes consistency.
pub struct MemoryStore<T> {
    entities: RwLock<Vec<T>>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(Vec::new()),
        }
    }

    pub fn with_entities(entities: Vec<T>) -> Self {
        Self {
            entities: RwLock::new(entities),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> DataStore<T> for MemoryStore<T> {
    fn fetch_all(&self) -> Result<Vec<T>, PonicsError> {
        let entities = self
            .entities
            .read()
            .map_err(|_| PonicsError::StoreError(LOCK_POISONED.into()))?;
        Ok(entities.clone())
    }

    fn insert(&self, entity: T) -> Result<(), PonicsError> {
        let mut entities = self
            .entities
            .write()
            .map_err(|_| PonicsError::StoreError(LOCK_POISONED.into()))?;
        match entities.iter().position(|e| e.id() == entity.id()) {
            Some(index) => entities[index] = entity,
            None => entities.push(entity),
        }
        Ok(())
    }

    fn update(&self, entity: T) -> Result<(), PonicsError> {
        let mut entities = self
            .entities
            .write()
            .map_err(|_| PonicsError::StoreError(LOCK_POISONED.into()))?;
        match entities.iter().position(|e| e.id() == entity.id()) {
            Some(index) => {
                entities[index] = entity;
                Ok(())
            }
            None => Err(PonicsError::EntityNotFound(entity.id())),
        }
    }
}

/// Supplies the records a collection starts with.
pub trait SeedProvider<T>: Send + Sync {
    fn seed(&self) -> Vec<T>;
}

/// Decorator that populates an empty inner store on first read.
///
/// On `fetch_all`, if the inner store comes back empty, every seed record
/// is inserted and the store is fetched exactly once more; the result of
/// that second fetch is returned as-is. A provider with no records
/// therefore yields an empty result, not a loop. Writes pass straight
/// through to the inner store.
pub struct SeedOnEmpty<T: Entity> {
    inner: Arc<dyn DataStore<T>>,
    provider: Arc<dyn SeedProvider<T>>,
}

impl<T: Entity> SeedOnEmpty<T> {
    pub fn new(inner: Arc<dyn DataStore<T>>, provider: Arc<dyn SeedProvider<T>>) -> Self {
        Self { inner, provider }
    }
}

impl<T: Entity> DataStore<T> for SeedOnEmpty<T> {
    fn fetch_all(&self) -> Result<Vec<T>, PonicsError> {
        let existing = self.inner.fetch_all()?;
        if !existing.is_empty() {
            return Ok(existing);
        }
        let seeds = self.provider.seed();
        tracing::info!(records = seeds.len(), "seeding empty store");
        for entity in seeds {
            self.inner.insert(entity)?;
        }
        self.inner.fetch_all()
    }

    fn insert(&self, entity: T) -> Result<(), PonicsError> {
        self.inner.insert(entity)
    }

    fn update(&self, entity: T) -> Result<(), PonicsError> {
        self.inner.update(entity)
    }
}
