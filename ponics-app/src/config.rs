use anyhow::{Context, Result};
use ponics_core::data::SeedProvider;
use ponics_schemas::file_formats::{OrganismFile, SystemFile};
use ponics_schemas::organism::Organism;
use ponics_schemas::system::AquaponicSystem;
use std::{fs, path::Path};

/// All records loaded from a YAML data directory.
///
/// The directory holds `organisms/*.yaml` and `systems/*.yaml`; a missing
/// subdirectory means no records of that kind. The catalog doubles as the
/// seed source for the engine's stores, so a loaded file behaves exactly
/// like the built-in starter data.
pub struct Catalog {
    pub organisms: Vec<Organism>,
    pub systems: Vec<AquaponicSystem>,
}

impl Catalog {
    /// Loads all data from the specified base directory.
    ///
    /// Tolerance bounds are validated during deserialization, so a file
    /// with unordered bounds fails here rather than surfacing later as a
    /// nonsense analysis.
    pub fn load(base_path: &Path) -> Result<Self> {
        let organisms = load_yaml_files(base_path.join("organisms"), |file: OrganismFile| {
            file.organisms
        })?;
        let systems =
            load_yaml_files(base_path.join("systems"), |file: SystemFile| file.systems)?;
        println!(
            "Loaded {} organisms and {} systems from '{}'",
            organisms.len(),
            systems.len(),
            base_path.display()
        );
        Ok(Self { organisms, systems })
    }
}

impl SeedProvider<Organism> for Catalog {
    fn seed(&self) -> Vec<Organism> {
        self.organisms.clone()
    }
}

impl SeedProvider<AquaponicSystem> for Catalog {
    fn seed(&self) -> Vec<AquaponicSystem> {
        self.systems.clone()
    }
}

/// Generic helper to collect the records of every YAML file in a directory.
fn load_yaml_files<P, F, E, T>(dir_path: P, extract_vec: E) -> Result<Vec<T>>
where
    P: AsRef<Path>,
    F: for<'de> serde::Deserialize<'de>, // The file wrapper struct (e.g., OrganismFile)
    E: Fn(F) -> Vec<T>,                  // A closure to extract the Vec<T> from the wrapper
{
    let dir_path = dir_path.as_ref();
    if !dir_path.is_dir() {
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    for entry in fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory: {:?}", dir_path))?
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().map_or(false, |s| s == "yaml" || s == "yml") {
            let content = fs::read_to_string(&path)?;
            let file_wrapper: F = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML from {:?}", path))?;
            let loaded = extract_vec(file_wrapper);
            tracing::debug!(file = %path.display(), records = loaded.len(), "parsed data file");
            records.extend(loaded);
        }
    }
    Ok(records)
}
