//! State-changing operation payloads, one struct per operation.
//!
//! These are pure data contracts. The capability to execute them lives
//! with the handlers in `ponics-core`.

use crate::organism::Organism;
use crate::system::{AquaponicSystem, Component, ComponentConnection};
use crate::tolerance::Tolerance;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Adds an organism. A nil `organism.id` asks the handler to assign one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOrganism {
    pub organism: Organism,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrganism {
    pub organism: Organism,
}

/// Adds a system. A nil `system.id` asks the handler to assign one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddSystem {
    pub system: AquaponicSystem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSystem {
    pub system: AquaponicSystem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddComponent {
    pub system_id: Uuid,
    pub component: Component,
}

/// Records a directed water connection between two existing components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectComponents {
    pub system_id: Uuid,
    pub connection: ComponentConnection,
}

/// Records a new tolerance for an organism. At most one tolerance per
/// level kind; adding a second for the same kind is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddTolerance {
    pub organism_id: Uuid,
    pub tolerance: Tolerance,
}

/// Replaces the tolerance already recorded for the payload's level kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTolerance {
    pub organism_id: Uuid,
    pub tolerance: Tolerance,
}
