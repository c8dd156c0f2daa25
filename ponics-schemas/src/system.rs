//! The physical layout of one aquaponic system: its components, how water
//! flows between them, and which organisms are stocked in it.
//!
//! This is topology only. Connections are stored and retrieved, never
//! simulated; there is no flow computation here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The role a physical component plays in the water loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    FishTank,
    GrowBed,
    Biofilter,
    Sump,
    Pump,
}

/// One physical part of a system, such as a tank or a pump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: Uuid,
    pub name: String,
    pub kind: ComponentKind,
}

impl Component {
    pub fn new(name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
        }
    }
}

/// A directed edge in the plumbing graph: water leaves `source` and
/// enters `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentConnection {
    pub source: Uuid,
    pub target: Uuid,
}

/// A complete aquaponic setup.
///
/// `organisms` holds the ids of stocked [`crate::organism::Organism`]
/// records; the records themselves live in the organism collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AquaponicSystem {
    pub id: Uuid,
    pub name: String,
    pub components: Vec<Component>,
    pub connections: Vec<ComponentConnection>,
    pub organisms: Vec<Uuid>,
}

impl AquaponicSystem {
    /// Creates an empty system with a fresh identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            components: Vec::new(),
            connections: Vec::new(),
            organisms: Vec::new(),
        }
    }

    pub fn component(&self, id: Uuid) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn has_component(&self, id: Uuid) -> bool {
        self.component(id).is_some()
    }
}
