//! System topology operations.

use crate::data::DataStore;
use crate::dispatch::{Command, CommandHandler, Query, QueryHandler};
use crate::error::PonicsError;
use ponics_schemas::command::{AddComponent, AddSystem, ConnectComponents, UpdateSystem};
use ponics_schemas::organism::Organism;
use ponics_schemas::query::{GetAllSystems, GetConnections, GetSystem, GetSystemOrganisms};
use ponics_schemas::system::{AquaponicSystem, ComponentConnection};
use std::sync::Arc;
use uuid::Uuid;

impl Query for GetAllSystems {
    type Output = Vec<AquaponicSystem>;
}

impl Query for GetSystem {
    type Output = AquaponicSystem;
}

impl Query for GetConnections {
    type Output = Vec<ComponentConnection>;
}

impl Query for GetSystemOrganisms {
    type Output = Vec<Organism>;
}

impl Command for AddSystem {}
impl Command for UpdateSystem {}
impl Command for AddComponent {}
impl Command for ConnectComponents {}

fn find_system(
    systems: &dyn DataStore<AquaponicSystem>,
    system_id: Uuid,
) -> Result<AquaponicSystem, PonicsError> {
    systems
        .fetch_all()?
        .into_iter()
        .find(|s| s.id == system_id)
        .ok_or(PonicsError::SystemNotFound(system_id))
}

pub struct GetAllSystemsHandler {
    systems: Arc<dyn DataStore<AquaponicSystem>>,
}

impl GetAllSystemsHandler {
    pub fn new(systems: Arc<dyn DataStore<AquaponicSystem>>) -> Self {
        Self { systems }
    }
}

impl QueryHandler<GetAllSystems> for GetAllSystemsHandler {
    fn handle(&self, _query: GetAllSystems) -> Result<Vec<AquaponicSystem>, PonicsError> {
        self.systems.fetch_all()
    }
}

pub struct GetSystemHandler {
    systems: Arc<dyn DataStore<AquaponicSystem>>,
}

impl GetSystemHandler {
    pub fn new(systems: Arc<dyn DataStore<AquaponicSystem>>) -> Self {
        Self { systems }
    }
}

impl QueryHandler<GetSystem> for GetSystemHandler {
    fn handle(&self, query: GetSystem) -> Result<AquaponicSystem, PonicsError> {
        find_system(self.systems.as_ref(), query.system_id)
    }
}

pub struct GetConnectionsHandler {
    systems: Arc<dyn DataStore<AquaponicSystem>>,
}

impl GetConnectionsHandler {
    pub fn new(systems: Arc<dyn DataStore<AquaponicSystem>>) -> Self {
        Self { systems }
    }
}

impl QueryHandler<GetConnections> for GetConnectionsHandler {
    fn handle(&self, query: GetConnections) -> Result<Vec<ComponentConnection>, PonicsError> {
        Ok(find_system(self.systems.as_ref(), query.system_id)?.connections)
    }
}

/// Resolves the ids stocked in a system to full organism records, in
/// stocking order.
pub struct GetSystemOrganismsHandler {
    systems: Arc<dyn DataStore<AquaponicSystem>>,
    organisms: Arc<dyn DataStore<Organism>>,
}

impl GetSystemOrganismsHandler {
    pub fn new(
        systems: Arc<dyn DataStore<AquaponicSystem>>,
        organisms: Arc<dyn DataStore<Organism>>,
    ) -> Self {
        Self { systems, organisms }
    }
}

impl QueryHandler<GetSystemOrganisms> for GetSystemOrganismsHandler {
    fn handle(&self, query: GetSystemOrganisms) -> Result<Vec<Organism>, PonicsError> {
        let system = find_system(self.systems.as_ref(), query.system_id)?;
        let all = self.organisms.fetch_all()?;

        let mut stocked = Vec::with_capacity(system.organisms.len());
        for organism_id in &system.organisms {
            match all.iter().find(|o| o.id == *organism_id) {
                Some(organism) => stocked.push(organism.clone()),
                // A dangling id is a data problem, not a reason to fail
                // the whole listing.
                None => tracing::warn!(
                    system = %system.id,
                    organism = %organism_id,
                    "stocked organism has no record"
                ),
            }
        }
        Ok(stocked)
    }
}

pub struct AddSystemHandler {
    systems: Arc<dyn DataStore<AquaponicSystem>>,
}

impl AddSystemHandler {
    pub fn new(systems: Arc<dyn DataStore<AquaponicSystem>>) -> Self {
        Self { systems }
    }
}

impl CommandHandler<AddSystem> for AddSystemHandler {
    /// Inserts the system, assigning a fresh id when the caller sent a
    /// nil one.
    fn handle(&self, command: AddSystem) -> Result<(), PonicsError> {
        let mut system = command.system;
        if system.id.is_nil() {
            system.id = Uuid::new_v4();
        }
        tracing::info!(system = %system.id, name = %system.name, "adding system");
        self.systems.insert(system)
    }
}

pub struct UpdateSystemHandler {
    systems: Arc<dyn DataStore<AquaponicSystem>>,
}

impl UpdateSystemHandler {
    pub fn new(systems: Arc<dyn DataStore<AquaponicSystem>>) -> Self {
        Self { systems }
    }
}

impl CommandHandler<UpdateSystem> for UpdateSystemHandler {
    fn handle(&self, command: UpdateSystem) -> Result<(), PonicsError> {
        self.systems.update(command.system)
    }
}

pub struct AddComponentHandler {
    systems: Arc<dyn DataStore<AquaponicSystem>>,
}

impl AddComponentHandler {
    pub fn new(systems: Arc<dyn DataStore<AquaponicSystem>>) -> Self {
        Self { systems }
    }
}

impl CommandHandler<AddComponent> for AddComponentHandler {
    fn handle(&self, command: AddComponent) -> Result<(), PonicsError> {
        let mut system = find_system(self.systems.as_ref(), command.system_id)?;
        system.components.push(command.component);
        self.systems.update(system)
    }
}

pub struct ConnectComponentsHandler {
    systems: Arc<dyn DataStore<AquaponicSystem>>,
}

impl ConnectComponentsHandler {
    pub fn new(systems: Arc<dyn DataStore<AquaponicSystem>>) -> Self {
        Self { systems }
    }
}

impl CommandHandler<ConnectComponents> for ConnectComponentsHandler {
    /// Records a directed connection. Both endpoints must already be
    /// components of the system.
    fn handle(&self, command: ConnectComponents) -> Result<(), PonicsError> {
        let mut system = find_system(self.systems.as_ref(), command.system_id)?;
        let connection = command.connection;

        if !system.has_component(connection.source) {
            return Err(PonicsError::ComponentNotFound(connection.source));
        }
        if !system.has_component(connection.target) {
            return Err(PonicsError::ComponentNotFound(connection.target));
        }

        system.connections.push(connection);
        self.systems.update(system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemoryStore;
    use ponics_schemas::system::{Component, ComponentKind};

    fn stored_system() -> (Arc<MemoryStore<AquaponicSystem>>, Uuid) {
        let system = AquaponicSystem::new("Backyard Loop");
        let id = system.id;
        let store = Arc::new(MemoryStore::with_entities(vec![system]));
        (store, id)
    }

    #[test]
    fn components_can_be_added_and_connected() {
        let (store, system_id) = stored_system();
        let add = AddComponentHandler::new(store.clone());
        let connect = ConnectComponentsHandler::new(store.clone());

        let tank = Component::new("Main Tank", ComponentKind::FishTank);
        let bed = Component::new("Bed One", ComponentKind::GrowBed);
        let (tank_id, bed_id) = (tank.id, bed.id);
        add.handle(AddComponent {
            system_id,
            component: tank,
        })
        .unwrap();
        add.handle(AddComponent {
            system_id,
            component: bed,
        })
        .unwrap();

        connect
            .handle(ConnectComponents {
                system_id,
                connection: ComponentConnection {
                    source: tank_id,
                    target: bed_id,
                },
            })
            .unwrap();

        let connections = GetConnectionsHandler::new(store)
            .handle(GetConnections { system_id })
            .unwrap();
        assert_eq!(connections.len(), 1);
        assert_eq!(connections[0].source, tank_id);
        assert_eq!(connections[0].target, bed_id);
    }

    #[test]
    fn connections_require_both_endpoints() {
        let (store, system_id) = stored_system();
        let add = AddComponentHandler::new(store.clone());
        let connect = ConnectComponentsHandler::new(store);

        let tank = Component::new("Main Tank", ComponentKind::FishTank);
        let tank_id = tank.id;
        add.handle(AddComponent {
            system_id,
            component: tank,
        })
        .unwrap();

        let result = connect.handle(ConnectComponents {
            system_id,
            connection: ComponentConnection {
                source: tank_id,
                target: Uuid::new_v4(),
            },
        });
        assert!(matches!(result, Err(PonicsError::ComponentNotFound(_))));
    }

    #[test]
    fn unknown_system_ids_fail_lookups() {
        let (store, _) = stored_system();
        let handler = GetSystemHandler::new(store);
        assert!(matches!(
            handler.handle(GetSystem {
                system_id: Uuid::new_v4()
            }),
            Err(PonicsError::SystemNotFound(_))
        ));
    }

    #[test]
    fn stocked_organisms_resolve_to_records_in_stocking_order() {
        let trout = Organism::new("Rainbow Trout");
        let perch = Organism::new("Silver Perch");
        let organisms = Arc::new(MemoryStore::with_entities(vec![
            trout.clone(),
            perch.clone(),
        ]));

        let mut system = AquaponicSystem::new("Backyard Loop");
        let dangling = Uuid::new_v4();
        system.organisms = vec![perch.id, dangling, trout.id];
        let system_id = system.id;
        let systems = Arc::new(MemoryStore::with_entities(vec![system]));

        let stocked = GetSystemOrganismsHandler::new(systems, organisms)
            .handle(GetSystemOrganisms { system_id })
            .unwrap();

        let names: Vec<_> = stocked.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Silver Perch", "Rainbow Trout"]);
    }
}
