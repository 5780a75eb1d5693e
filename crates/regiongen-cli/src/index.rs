//! `regiongen index`: export the dispatch index

use anyhow::{Context, Result};
use regiongen_core::{CONFIG_FILENAME, GenConfig, SchemaSettings};
use regiongen_shapes::Project;
use std::fs;
use std::path::Path;

pub fn run(config_path: &Path, output: Option<&Path>) -> Result<()> {
    let settings = schema_settings(config_path)?;
    let project = Project::load(&settings).context("Schema validation failed")?;

    let json = project
        .dispatch_index()
        .to_json()
        .context("Failed to serialize dispatch index")?;

    match output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✓ Wrote dispatch index to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Schema settings from the config file, or defaults when there is none
fn schema_settings(config_path: &Path) -> Result<SchemaSettings> {
    if !config_path.exists() {
        tracing::debug!(
            path = %config_path.display(),
            "no {CONFIG_FILENAME}; using default schema settings"
        );
        return Ok(SchemaSettings::default());
    }
    let config = GenConfig::from_file(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    Ok(config.schema)
}
