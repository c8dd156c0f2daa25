//! Wires stores, seeds and handlers into a ready [`Ponics`] instance.

use crate::data::{DataStore, MemoryStore, SeedOnEmpty, SeedProvider};
use crate::dispatch::{Command, CommandProcessor, Query, QueryProcessor};
use crate::error::PonicsError;
use crate::handlers::levels::AnalyseLevelHandler;
use crate::handlers::organisms::{
    AddOrganismHandler, GetAllOrganismsHandler, GetOrganismHandler, UpdateOrganismHandler,
};
use crate::handlers::systems::{
    AddComponentHandler, AddSystemHandler, ConnectComponentsHandler, GetAllSystemsHandler,
    GetConnectionsHandler, GetSystemHandler, GetSystemOrganismsHandler, UpdateSystemHandler,
};
use crate::handlers::tolerances::{AddToleranceHandler, UpdateToleranceHandler};
use crate::seed::DefaultSeed;
use ponics_schemas::command::{
    AddComponent, AddOrganism, AddSystem, AddTolerance, ConnectComponents, UpdateOrganism,
    UpdateSystem, UpdateTolerance,
};
use ponics_schemas::organism::Organism;
use ponics_schemas::query::{
    AnalyseLevel, GetAllOrganisms, GetAllSystems, GetConnections, GetOrganism, GetSystem,
    GetSystemOrganisms,
};
use ponics_schemas::system::AquaponicSystem;
use std::sync::Arc;

/// A fluent builder for constructing a [`Ponics`] instance.
///
/// Stores default to fresh in-memory ones; seed providers are optional.
/// `with_default_seed` opts into the built-in catalog for whichever
/// collections have no explicit provider.
#[derive(Default)]
pub struct PonicsBuilder {
    organism_store: Option<Arc<dyn DataStore<Organism>>>,
    system_store: Option<Arc<dyn DataStore<AquaponicSystem>>>,
    organism_seed: Option<Arc<dyn SeedProvider<Organism>>>,
    system_seed: Option<Arc<dyn SeedProvider<AquaponicSystem>>>,
    use_default_seed: bool,
}

impl PonicsBuilder {
    /// Creates a new, empty `PonicsBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backing store for the organism collection.
    pub fn with_organism_store(mut self, store: Arc<dyn DataStore<Organism>>) -> Self {
        self.organism_store = Some(store);
        self
    }

    /// Sets the backing store for the system collection.
    pub fn with_system_store(mut self, store: Arc<dyn DataStore<AquaponicSystem>>) -> Self {
        self.system_store = Some(store);
        self
    }

    /// Sets the seed records for an organism store that comes up empty.
    pub fn with_organism_seed(mut self, provider: Arc<dyn SeedProvider<Organism>>) -> Self {
        self.organism_seed = Some(provider);
        self
    }

    /// Sets the seed records for a system store that comes up empty.
    pub fn with_system_seed(mut self, provider: Arc<dyn SeedProvider<AquaponicSystem>>) -> Self {
        self.system_seed = Some(provider);
        self
    }

    /// Uses the built-in catalog wherever no explicit seed was given.
    pub fn with_default_seed(mut self) -> Self {
        self.use_default_seed = true;
        self
    }

    /// Consumes the builder and returns a fully wired [`Ponics`].
    ///
    /// # Errors
    ///
    /// Returns a `PonicsError` if the built-in catalog fails to
    /// construct, or on a handler registration conflict (both are wiring
    /// defects, not runtime conditions).
    pub fn build(self) -> Result<Ponics, PonicsError> {
        let organism_store = self
            .organism_store
            .unwrap_or_else(|| Arc::new(MemoryStore::new()));
        let system_store = self
            .system_store
            .unwrap_or_else(|| Arc::new(MemoryStore::new()));

        let (organism_seed, system_seed) = if self.use_default_seed {
            let catalog = Arc::new(DefaultSeed::new()?);
            (
                self.organism_seed
                    .or_else(|| Some(catalog.clone() as Arc<dyn SeedProvider<Organism>>)),
                self.system_seed
                    .or(Some(catalog as Arc<dyn SeedProvider<AquaponicSystem>>)),
            )
        } else {
            (self.organism_seed, self.system_seed)
        };

        let organisms: Arc<dyn DataStore<Organism>> = match organism_seed {
            Some(provider) => Arc::new(SeedOnEmpty::new(organism_store, provider)),
            None => organism_store,
        };
        let systems: Arc<dyn DataStore<AquaponicSystem>> = match system_seed {
            Some(provider) => Arc::new(SeedOnEmpty::new(system_store, provider)),
            None => system_store,
        };

        let mut queries = QueryProcessor::new();
        queries.register::<GetAllOrganisms, _>(GetAllOrganismsHandler::new(organisms.clone()))?;
        queries.register::<GetOrganism, _>(GetOrganismHandler::new(organisms.clone()))?;
        queries.register::<GetAllSystems, _>(GetAllSystemsHandler::new(systems.clone()))?;
        queries.register::<GetSystem, _>(GetSystemHandler::new(systems.clone()))?;
        queries.register::<GetConnections, _>(GetConnectionsHandler::new(systems.clone()))?;
        queries.register::<GetSystemOrganisms, _>(GetSystemOrganismsHandler::new(
            systems.clone(),
            organisms.clone(),
        ))?;
        queries.register::<AnalyseLevel, _>(AnalyseLevelHandler::new(organisms.clone()))?;

        let mut commands = CommandProcessor::new();
        commands.register::<AddOrganism, _>(AddOrganismHandler::new(organisms.clone()))?;
        commands.register::<UpdateOrganism, _>(UpdateOrganismHandler::new(organisms.clone()))?;
        commands.register::<AddSystem, _>(AddSystemHandler::new(systems.clone()))?;
        commands.register::<UpdateSystem, _>(UpdateSystemHandler::new(systems.clone()))?;
        commands.register::<AddComponent, _>(AddComponentHandler::new(systems.clone()))?;
        commands.register::<ConnectComponents, _>(ConnectComponentsHandler::new(systems))?;
        commands.register::<AddTolerance, _>(AddToleranceHandler::new(organisms.clone()))?;
        commands.register::<UpdateTolerance, _>(UpdateToleranceHandler::new(organisms))?;

        tracing::info!(
            queries = queries.len(),
            commands = commands.len(),
            "operation registry built"
        );

        Ok(Ponics { queries, commands })
    }
}

/// The assembled decision engine. Immutable once built; share it freely
/// across threads.
pub struct Ponics {
    queries: QueryProcessor,
    commands: CommandProcessor,
}

impl Ponics {
    pub fn builder() -> PonicsBuilder {
        PonicsBuilder::new()
    }

    /// In-memory stores seeded with the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns a `PonicsError` if wiring fails; see
    /// [`PonicsBuilder::build`].
    pub fn with_defaults() -> Result<Self, PonicsError> {
        Self::builder().with_default_seed().build()
    }

    /// Routes a query to its handler and returns the declared result.
    ///
    /// # Errors
    ///
    /// Returns [`PonicsError::HandlerNotFound`] for an unregistered
    /// payload type, or whatever the handler raises.
    pub fn process_query<Q: Query>(&self, query: Q) -> Result<Q::Output, PonicsError> {
        self.queries.process(query)
    }

    /// Routes a command to its handler.
    ///
    /// # Errors
    ///
    /// Returns [`PonicsError::HandlerNotFound`] for an unregistered
    /// payload type, or whatever the handler raises.
    pub fn process_command<C: Command>(&self, command: C) -> Result<(), PonicsError> {
        self.commands.process(command)
    }
}
