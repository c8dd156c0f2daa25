//! End-to-end tests through the public processor API.

use ponics_core::analysis::LevelDerived;
use ponics_core::bootstrap::Ponics;
use ponics_core::error::PonicsError;
use ponics_schemas::command::{
    AddComponent, AddOrganism, AddSystem, AddTolerance, ConnectComponents, UpdateTolerance,
};
use ponics_schemas::levels::LevelKind;
use ponics_schemas::organism::Organism;
use ponics_schemas::query::{
    AnalyseLevel, GetAllOrganisms, GetAllSystems, GetConnections, GetSystemOrganisms,
};
use ponics_schemas::system::{AquaponicSystem, Component, ComponentConnection, ComponentKind};
use ponics_schemas::tolerance::{Classification, Tolerance};
use uuid::Uuid;

fn find_by_name(organisms: &[Organism], name: &str) -> Organism {
    organisms
        .iter()
        .find(|o| o.name == name)
        .unwrap_or_else(|| panic!("seed catalog should contain {name}"))
        .clone()
}

#[test]
fn first_read_seeds_the_catalog_exactly_once() {
    let ponics = Ponics::with_defaults().unwrap();

    let organisms = ponics.process_query(GetAllOrganisms).unwrap();
    assert_eq!(organisms.len(), 3);

    // A second read returns the same records rather than seeding again.
    let again = ponics.process_query(GetAllOrganisms).unwrap();
    assert_eq!(again, organisms);

    let systems = ponics.process_query(GetAllSystems).unwrap();
    assert_eq!(systems.len(), 1);

    let stocked = ponics
        .process_query(GetSystemOrganisms {
            system_id: systems[0].id,
        })
        .unwrap();
    assert_eq!(stocked.len(), 2);
}

#[test]
fn seeded_fish_can_be_analysed_straight_away() {
    let ponics = Ponics::with_defaults().unwrap();
    let organisms = ponics.process_query(GetAllOrganisms).unwrap();
    let perch = find_by_name(&organisms, "Silver Perch");

    let healthy = ponics
        .process_query(AnalyseLevel {
            organism_id: perch.id,
            level: LevelKind::Ph,
            value: 7.5,
        })
        .unwrap();
    assert!(healthy.is_clear());

    let alkaline = ponics
        .process_query(AnalyseLevel {
            organism_id: perch.id,
            level: LevelKind::Ph,
            value: 9.5,
        })
        .unwrap();
    assert_eq!(
        alkaline.classification,
        Some(Classification::AboveAcceptable)
    );
    assert_eq!(alkaline.warnings.len(), 1);

    let nitrite_spike = ponics
        .process_query(AnalyseLevel {
            organism_id: perch.id,
            level: LevelKind::Nitrite,
            value: 0.5,
        })
        .unwrap();
    assert_eq!(nitrite_spike.warnings.len(), 1);
}

#[test]
fn analysing_an_unrecorded_level_warns_but_succeeds() {
    let ponics = Ponics::with_defaults().unwrap();
    let organisms = ponics.process_query(GetAllOrganisms).unwrap();
    // Jade perch carry no iron tolerance in the catalog.
    let jade = find_by_name(&organisms, "Jade Perch");

    let analysis = ponics
        .process_query(AnalyseLevel {
            organism_id: jade.id,
            level: LevelKind::Iron,
            value: 1.0,
        })
        .unwrap();
    assert_eq!(analysis.derived, LevelDerived::Iron);
    assert!(analysis.classification.is_none());
    assert_eq!(analysis.warnings.len(), 1);
    assert!(analysis.warnings[0].contains("iron"));
}

#[test]
fn ph_analysis_reports_ion_concentrations() {
    let ponics = Ponics::with_defaults().unwrap();
    let organisms = ponics.process_query(GetAllOrganisms).unwrap();
    let perch = find_by_name(&organisms, "Silver Perch");

    let analysis = ponics
        .process_query(AnalyseLevel {
            organism_id: perch.id,
            level: LevelKind::Ph,
            value: 7.0,
        })
        .unwrap();

    match analysis.derived {
        LevelDerived::Ph {
            hydrogen_ion_concentration,
            hydroxide_ions_concentration,
        } => {
            assert!((hydrogen_ion_concentration - 1e-7).abs() < 1e-9);
            assert!((hydroxide_ions_concentration - 1e-7).abs() < 1e-9);
        }
        other => panic!("expected pH derivation, got {other:?}"),
    }

    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["classification"], "within_desired");
    assert_eq!(json["derived"]["level"], "ph");
    assert!(json["derived"]["hydrogen_ion_concentration"].is_number());
}

#[test]
fn a_system_can_be_built_up_from_nothing() {
    let ponics = Ponics::builder().build().unwrap();

    let mut perch = Organism::new("Silver Perch");
    perch.id = Uuid::nil();
    ponics
        .process_command(AddOrganism { organism: perch })
        .unwrap();

    let organisms = ponics.process_query(GetAllOrganisms).unwrap();
    assert_eq!(organisms.len(), 1);
    let perch = organisms[0].clone();
    assert!(!perch.id.is_nil());

    ponics
        .process_command(AddTolerance {
            organism_id: perch.id,
            tolerance: Tolerance::new(LevelKind::Ph, 6.0, 6.8, 7.2, 8.5).unwrap(),
        })
        .unwrap();
    ponics
        .process_command(UpdateTolerance {
            organism_id: perch.id,
            tolerance: Tolerance::new(LevelKind::Ph, 6.5, 7.0, 8.0, 9.0).unwrap(),
        })
        .unwrap();

    let analysis = ponics
        .process_query(AnalyseLevel {
            organism_id: perch.id,
            level: LevelKind::Ph,
            value: 7.5,
        })
        .unwrap();
    assert!(analysis.is_clear());

    let system = AquaponicSystem::new("New Loop");
    let system_id = system.id;
    ponics.process_command(AddSystem { system }).unwrap();

    let tank = Component::new("Tank", ComponentKind::FishTank);
    let bed = Component::new("Bed", ComponentKind::GrowBed);
    let (tank_id, bed_id) = (tank.id, bed.id);
    ponics
        .process_command(AddComponent {
            system_id,
            component: tank,
        })
        .unwrap();
    ponics
        .process_command(AddComponent {
            system_id,
            component: bed,
        })
        .unwrap();
    ponics
        .process_command(ConnectComponents {
            system_id,
            connection: ComponentConnection {
                source: tank_id,
                target: bed_id,
            },
        })
        .unwrap();

    let connections = ponics.process_query(GetConnections { system_id }).unwrap();
    assert_eq!(connections.len(), 1);
}

#[test]
fn domain_errors_surface_through_the_processor() {
    let ponics = Ponics::builder().build().unwrap();

    let missing = Uuid::new_v4();
    assert!(matches!(
        ponics.process_query(AnalyseLevel {
            organism_id: missing,
            level: LevelKind::Ph,
            value: 7.0,
        }),
        Err(PonicsError::OrganismNotFound(_))
    ));
    assert!(matches!(
        ponics.process_query(GetConnections { system_id: missing }),
        Err(PonicsError::SystemNotFound(_))
    ));
}
