//! CLI surface: parses arguments into typed operation payloads and feeds
//! them to the engine.

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use ponics_core::analysis::LevelDerived;
use ponics_core::bootstrap::Ponics;
use ponics_schemas::levels::LevelKind;
use ponics_schemas::organism::Organism;
use ponics_schemas::query::{
    AnalyseLevel, GetAllOrganisms, GetAllSystems, GetSystemOrganisms,
};
use ponics_schemas::system::AquaponicSystem;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::Catalog;

#[derive(Parser)]
#[command(name = "ponics", version, about = "Tolerance-driven aquaponics management")]
pub struct Cli {
    /// Directory with a YAML knowledge base (organisms/, systems/).
    /// Without it the built-in starter catalog is used.
    #[arg(long, value_name = "DIR", global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the organism catalog
    Organisms {
        #[command(subcommand)]
        command: OrganismCommands,
    },
    /// Inspect the recorded systems
    Systems {
        #[command(subcommand)]
        command: SystemCommands,
    },
    /// Analyse a water-quality reading for an organism
    Analyse(AnalyseArgs),
}

#[derive(Subcommand)]
pub enum OrganismCommands {
    /// List every organism
    List,
    /// Show one organism with its tolerances
    Show {
        /// Organism name or id
        selector: String,
    },
}

#[derive(Subcommand)]
pub enum SystemCommands {
    /// List every system
    List,
    /// Show one system's components, connections and stock
    Show {
        /// System name or id
        selector: String,
    },
}

#[derive(Args)]
pub struct AnalyseArgs {
    /// Organism name or id
    #[arg(long)]
    pub organism: String,
    /// Level kind: ph, nitrite, nitrate, salinity or iron
    #[arg(long)]
    pub level: String,
    /// The measured value, in the level's own scale
    #[arg(long)]
    pub value: f64,
}

pub fn run(cli: Cli) -> Result<()> {
    let ponics = build_engine(cli.data.as_deref())?;

    match cli.command {
        Commands::Organisms { command } => match command {
            OrganismCommands::List => list_organisms(&ponics),
            OrganismCommands::Show { selector } => show_organism(&ponics, &selector),
        },
        Commands::Systems { command } => match command {
            SystemCommands::List => list_systems(&ponics),
            SystemCommands::Show { selector } => show_system(&ponics, &selector),
        },
        Commands::Analyse(args) => analyse(&ponics, &args),
    }
}

fn build_engine(data: Option<&Path>) -> Result<Ponics> {
    let builder = Ponics::builder();
    let builder = match data {
        Some(dir) => {
            tracing::info!(path = %dir.display(), "loading knowledge base");
            let catalog = Arc::new(Catalog::load(dir)?);
            builder
                .with_organism_seed(catalog.clone())
                .with_system_seed(catalog)
        }
        None => {
            tracing::info!("using the built-in starter catalog");
            builder.with_default_seed()
        }
    };
    builder.build().context("Failed to assemble the engine")
}

fn list_organisms(ponics: &Ponics) -> Result<()> {
    let organisms = ponics.process_query(GetAllOrganisms)?;
    println!("{} organisms:", organisms.len());
    for organism in organisms {
        println!(
            "  {}  {} ({} tolerances)",
            organism.id,
            organism.name,
            organism.tolerances.len()
        );
    }
    Ok(())
}

fn show_organism(ponics: &Ponics, selector: &str) -> Result<()> {
    let organism = resolve_organism(ponics, selector)?;
    println!("{} ({})", organism.name, organism.id);
    if organism.tolerances.is_empty() {
        println!("  no tolerances recorded");
    }
    for tolerance in &organism.tolerances {
        println!(
            "  {}: {}..{} {} (desired {}..{})",
            tolerance.level(),
            tolerance.lower(),
            tolerance.upper(),
            tolerance.scale(),
            tolerance.desired_lower(),
            tolerance.desired_upper()
        );
    }
    Ok(())
}

fn list_systems(ponics: &Ponics) -> Result<()> {
    let systems = ponics.process_query(GetAllSystems)?;
    println!("{} systems:", systems.len());
    for system in systems {
        println!(
            "  {}  {} ({} components, {} stocked organisms)",
            system.id,
            system.name,
            system.components.len(),
            system.organisms.len()
        );
    }
    Ok(())
}

fn show_system(ponics: &Ponics, selector: &str) -> Result<()> {
    let system = resolve_system(ponics, selector)?;
    println!("{} ({})", system.name, system.id);

    println!("Components:");
    for component in &system.components {
        println!("  {}  {} [{:?}]", component.id, component.name, component.kind);
    }

    println!("Connections:");
    for connection in &system.connections {
        println!(
            "  {} -> {}",
            component_name(&system, connection.source),
            component_name(&system, connection.target)
        );
    }

    let stocked = ponics.process_query(GetSystemOrganisms {
        system_id: system.id,
    })?;
    println!("Stocked organisms:");
    for organism in stocked {
        println!("  {}", organism.name);
    }
    Ok(())
}

fn analyse(ponics: &Ponics, args: &AnalyseArgs) -> Result<()> {
    let organism = resolve_organism(ponics, &args.organism)?;
    let level = parse_level(&args.level)?;

    let analysis = ponics.process_query(AnalyseLevel {
        organism_id: organism.id,
        level,
        value: args.value,
    })?;

    println!(
        "{} reading of {} {} for {}:",
        level,
        args.value,
        level.scale(),
        organism.name
    );
    if let LevelDerived::Ph {
        hydrogen_ion_concentration,
        hydroxide_ions_concentration,
    } = analysis.derived
    {
        println!("  [H+]  = {hydrogen_ion_concentration:.3e} mol/L");
        println!("  [OH-] = {hydroxide_ions_concentration:.3e} mol/L");
    }
    if analysis.classification.map_or(false, |c| c.is_desired()) {
        println!("  within the desired range");
    }
    for warning in &analysis.warnings {
        println!("  warning: {warning}");
    }
    Ok(())
}

fn component_name(system: &AquaponicSystem, id: Uuid) -> String {
    system
        .component(id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn parse_level(input: &str) -> Result<LevelKind> {
    LevelKind::ALL
        .into_iter()
        .find(|kind| kind.label().eq_ignore_ascii_case(input))
        .ok_or_else(|| {
            anyhow!("unknown level '{input}', expected ph, nitrite, nitrate, salinity or iron")
        })
}

fn resolve_organism(ponics: &Ponics, selector: &str) -> Result<Organism> {
    let organisms = ponics.process_query(GetAllOrganisms)?;
    if let Ok(id) = Uuid::parse_str(selector) {
        return organisms
            .into_iter()
            .find(|o| o.id == id)
            .ok_or_else(|| anyhow!("no organism with id {id}"));
    }
    organisms
        .into_iter()
        .find(|o| o.name.eq_ignore_ascii_case(selector))
        .ok_or_else(|| anyhow!("no organism named '{selector}'"))
}

fn resolve_system(ponics: &Ponics, selector: &str) -> Result<AquaponicSystem> {
    let systems = ponics.process_query(GetAllSystems)?;
    if let Ok(id) = Uuid::parse_str(selector) {
        return systems
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| anyhow!("no system with id {id}"));
    }
    systems
        .into_iter()
        .find(|s| s.name.eq_ignore_ascii_case(selector))
        .ok_or_else(|| anyhow!("no system named '{selector}'"))
}
