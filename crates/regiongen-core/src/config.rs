//! `regiongen.toml` configuration

use crate::emit::AnnotationStyle;
use crate::error::{GenError, GenResult};
use crate::patcher::MarkerSyntax;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration filename
pub const CONFIG_FILENAME: &str = "regiongen.toml";

/// Run configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Region delimiter tokens
    pub markers: MarkerSyntax,

    /// Tagging of generated lines
    pub annotation: AnnotationStyle,

    /// Schema validation settings
    pub schema: SchemaSettings,

    /// Files to regenerate, in order
    pub targets: Vec<TargetSpec>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaSettings {
    /// Fail instead of warning when a field has no networking annotation
    pub strict_networking: bool,
}

/// One target file and the registry that owns its regions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    pub path: PathBuf,
    pub registry: String,
}

impl GenConfig {
    /// Load configuration from a file.
    ///
    /// Relative target paths are resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
        let mut config = Self::from_str(&content)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for target in &mut config.targets {
            if target.path.is_relative() {
                target.path = base.join(&target.path);
            }
        }
        Ok(config)
    }

    /// Parse configuration from a string
    pub fn from_str(content: &str) -> GenResult<Self> {
        toml::from_str(content).map_err(|e| GenError::Config(e.to_string()))
    }

    /// Check tokens and targets against the registries the caller can build
    pub fn validate(&self, known_registries: &[&str]) -> GenResult<()> {
        if self.markers.begin.trim().is_empty() || self.markers.end.trim().is_empty() {
            return Err(GenError::Config(
                "marker begin and end tokens cannot be empty".to_string(),
            ));
        }
        if self.markers.begin == self.markers.end {
            return Err(GenError::Config(
                "marker begin and end tokens must differ".to_string(),
            ));
        }
        if self.markers.begin.contains(char::is_whitespace)
            || self.markers.end.contains(char::is_whitespace)
        {
            return Err(GenError::Config(
                "marker tokens cannot contain whitespace".to_string(),
            ));
        }

        for target in &self.targets {
            if target.path.as_os_str().is_empty() {
                return Err(GenError::Config("target path cannot be empty".to_string()));
            }
            if !known_registries.contains(&target.registry.as_str()) {
                return Err(GenError::Config(format!(
                    "unknown registry '{}' for target {} (known: {})",
                    target.registry,
                    target.path.display(),
                    known_registries.join(", ")
                )));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for target in &self.targets {
            if !seen.insert(&target.path) {
                return Err(GenError::Config(format!(
                    "target {} is listed more than once",
                    target.path.display()
                )));
            }
        }

        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> GenResult<String> {
        toml::to_string_pretty(self).map_err(|e| GenError::Config(e.to_string()))
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
