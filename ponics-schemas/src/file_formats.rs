use crate::{organism::Organism, system::AquaponicSystem};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OrganismFile {
    pub schema_version: String,
    pub organisms: Vec<Organism>,
}

#[derive(Debug, Deserialize)]
pub struct SystemFile {
    pub schema_version: String,
    pub systems: Vec<AquaponicSystem>,
}
