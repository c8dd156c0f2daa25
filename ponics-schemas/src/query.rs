//! Read-only operation payloads, one struct per operation.

use crate::levels::LevelKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAllOrganisms;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetOrganism {
    pub organism_id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAllSystems;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSystem {
    pub system_id: Uuid,
}

/// The plumbing connections recorded for one system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetConnections {
    pub system_id: Uuid,
}

/// The organisms stocked in one system, resolved to full records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSystemOrganisms {
    pub system_id: Uuid,
}

/// Asks for a reading of one level to be analysed against the organism's
/// recorded tolerance for that level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyseLevel {
    pub organism_id: Uuid,
    pub level: LevelKind,
    pub value: f64,
}
