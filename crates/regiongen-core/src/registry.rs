//! Marker name to generator mapping

use crate::emit::Emitter;
use crate::error::{GenError, GenResult};
use std::collections::BTreeMap;

/// Produces the content of one marker region.
///
/// `prefix` is the indentation of the BEGIN line; pass it through to
/// [`Emitter::emit`] so every generated line lines up with the marker.
pub trait Generator {
    fn generate(&self, out: &mut Emitter<'_>, prefix: &str) -> GenResult<()>;
}

impl<F> Generator for F
where
    F: Fn(&mut Emitter<'_>, &str) -> GenResult<()>,
{
    fn generate(&self, out: &mut Emitter<'_>, prefix: &str) -> GenResult<()> {
        self(out, prefix)
    }
}

/// Immutable set of generators applied to one family of target files
pub struct MarkerRegistry<'s> {
    name: String,
    generators: BTreeMap<String, Box<dyn Generator + 's>>,
}

impl<'s> MarkerRegistry<'s> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generators: BTreeMap::new(),
        }
    }

    /// Add a generator under `marker`; a marker may only be registered once.
    ///
    /// Marker names are `[A-Za-z0-9_]+`, the same run the patcher reads after
    /// the BEGIN token.
    pub fn register<F>(mut self, marker: impl Into<String>, generator: F) -> GenResult<Self>
    where
        F: Fn(&mut Emitter<'_>, &str) -> GenResult<()> + 's,
    {
        let marker = marker.into();
        if marker.is_empty() || !marker.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(GenError::Registry(format!(
                "invalid marker name '{marker}' in registry '{}'",
                self.name
            )));
        }
        if self.generators.contains_key(&marker) {
            return Err(GenError::Registry(format!(
                "marker '{marker}' registered twice in registry '{}'",
                self.name
            )));
        }
        self.generators.insert(marker, Box::new(generator));
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, marker: &str) -> Option<&(dyn Generator + 's)> {
        self.generators.get(marker).map(Box::as_ref)
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.generators.contains_key(marker)
    }

    /// Registered marker names, sorted
    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.generators.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl std::fmt::Debug for MarkerRegistry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkerRegistry")
            .field("name", &self.name)
            .field("markers", &self.generators.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
#[path = "registry/registry_tests.rs"]
mod registry_tests;
