//! Configuration, schemas and registries for one invocation

use anyhow::{Context, Result};
use regiongen_core::{GenConfig, MarkerRegistry, TargetFile};
use regiongen_shapes::{Project, REGISTRY_NAMES};
use std::collections::BTreeMap;
use std::path::Path;

/// Validated configuration and the project it applies to
pub struct Session {
    pub config: GenConfig,
    pub project: Project,
}

impl Session {
    /// Load and validate everything a run needs, before any target is opened
    pub fn load(config_path: &Path, strict: bool) -> Result<Self> {
        let mut config = GenConfig::from_file(config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?;
        if strict {
            config.schema.strict_networking = true;
        }
        config
            .validate(&REGISTRY_NAMES)
            .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;

        let project = Project::load(&config.schema).context("Schema validation failed")?;

        Ok(Self { config, project })
    }

    /// One registry per registry name the targets use
    pub fn registries(&self) -> Result<BTreeMap<&str, MarkerRegistry<'_>>> {
        let mut registries = BTreeMap::new();
        for target in &self.config.targets {
            let name = target.registry.as_str();
            if !registries.contains_key(name) {
                let registry = self
                    .project
                    .registry(name)
                    .with_context(|| format!("Failed to build registry '{name}'"))?;
                registries.insert(name, registry);
            }
        }
        Ok(registries)
    }

    /// Pair every configured target with its registry, in configuration order
    pub fn targets<'r, 's>(
        &'r self,
        registries: &'r BTreeMap<&str, MarkerRegistry<'s>>,
    ) -> Result<Vec<TargetFile<'r, 's>>> {
        self.config
            .targets
            .iter()
            .map(|target| {
                let registry = registries
                    .get(target.registry.as_str())
                    .with_context(|| format!("No registry built for '{}'", target.registry))?;
                Ok(TargetFile {
                    path: &target.path,
                    registry,
                })
            })
            .collect()
    }
}
