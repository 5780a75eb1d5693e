//! `regiongen markers`: list registries and the markers they own

use anyhow::{Context, Result};
use regiongen_core::SchemaSettings;
use regiongen_shapes::{Project, REGISTRY_NAMES};

pub fn run(registry: Option<&str>) -> Result<()> {
    let project = Project::load(&SchemaSettings::default()).context("Schema validation failed")?;

    let names: Vec<&str> = match registry {
        Some(name) => vec![name],
        None => REGISTRY_NAMES.to_vec(),
    };

    for name in names {
        let registry = project
            .registry(name)
            .with_context(|| format!("Failed to build registry '{name}'"))?;
        println!("{name} ({} markers)", registry.len());
        for marker in registry.markers() {
            println!("  {marker}");
        }
    }
    Ok(())
}
