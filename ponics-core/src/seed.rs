//! Built-in starter catalog, applied when a store first comes up empty.
//!
//! Three common aquaponics fish and one demo backyard loop. The catalog
//! is built once so the demo system can reference the seed organisms by
//! id.

use crate::data::SeedProvider;
use ponics_schemas::levels::LevelKind;
use ponics_schemas::organism::Organism;
use ponics_schemas::system::{AquaponicSystem, Component, ComponentConnection, ComponentKind};
use ponics_schemas::tolerance::{InvalidTolerance, Tolerance};

pub struct DefaultSeed {
    organisms: Vec<Organism>,
    systems: Vec<AquaponicSystem>,
}

impl DefaultSeed {
    pub fn new() -> Result<Self, InvalidTolerance> {
        let mut silver_perch = Organism::new("Silver Perch");
        silver_perch.tolerances = vec![
            Tolerance::new(LevelKind::Ph, 6.5, 7.0, 8.0, 9.0)?,
            Tolerance::new(LevelKind::Nitrite, 0.0, 0.0, 0.25, 1.0)?,
            Tolerance::new(LevelKind::Nitrate, 0.0, 0.0, 200.0, 400.0)?,
            Tolerance::new(LevelKind::Salinity, 0.0, 0.0, 4.0, 10.0)?,
            Tolerance::new(LevelKind::Iron, 0.0, 0.0, 2.0, 5.0)?,
        ];

        let mut jade_perch = Organism::new("Jade Perch");
        jade_perch.tolerances = vec![
            Tolerance::new(LevelKind::Ph, 6.5, 7.0, 8.0, 8.5)?,
            Tolerance::new(LevelKind::Nitrite, 0.0, 0.0, 0.25, 0.8)?,
            Tolerance::new(LevelKind::Nitrate, 0.0, 0.0, 150.0, 300.0)?,
            Tolerance::new(LevelKind::Salinity, 0.0, 0.0, 3.0, 8.0)?,
        ];

        // Trout are the cold-water option; notably tighter nitrogen bounds.
        let mut rainbow_trout = Organism::new("Rainbow Trout");
        rainbow_trout.tolerances = vec![
            Tolerance::new(LevelKind::Ph, 6.5, 7.0, 7.5, 8.2)?,
            Tolerance::new(LevelKind::Nitrite, 0.0, 0.0, 0.1, 0.25)?,
            Tolerance::new(LevelKind::Nitrate, 0.0, 0.0, 40.0, 100.0)?,
            Tolerance::new(LevelKind::Salinity, 0.0, 0.0, 8.0, 20.0)?,
        ];

        let mut demo = AquaponicSystem::new("Backyard Demo");
        let tank = Component::new("Fish Tank", ComponentKind::FishTank);
        let biofilter = Component::new("Biofilter Barrel", ComponentKind::Biofilter);
        let bed = Component::new("Grow Bed", ComponentKind::GrowBed);
        let sump = Component::new("Sump", ComponentKind::Sump);
        let pump = Component::new("Return Pump", ComponentKind::Pump);
        demo.connections = vec![
            ComponentConnection {
                source: pump.id,
                target: tank.id,
            },
            ComponentConnection {
                source: tank.id,
                target: biofilter.id,
            },
            ComponentConnection {
                source: biofilter.id,
                target: bed.id,
            },
            ComponentConnection {
                source: bed.id,
                target: sump.id,
            },
            ComponentConnection {
                source: sump.id,
                target: pump.id,
            },
        ];
        demo.components = vec![tank, biofilter, bed, sump, pump];
        demo.organisms = vec![silver_perch.id, jade_perch.id];

        Ok(Self {
            organisms: vec![silver_perch, jade_perch, rainbow_trout],
            systems: vec![demo],
        })
    }
}

impl SeedProvider<Organism> for DefaultSeed {
    fn seed(&self) -> Vec<Organism> {
        self.organisms.clone()
    }
}

impl SeedProvider<AquaponicSystem> for DefaultSeed {
    fn seed(&self) -> Vec<AquaponicSystem> {
        self.systems.clone()
    }
}
