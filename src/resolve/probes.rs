//! Module index of version probes.
//!
//! The index is the explicit replacement for loading a module by name and
//! reading its version attribute: embedders register a probe per module they
//! know how to interrogate, and the collector consults the index first when
//! resolving a requested name.

use std::collections::HashMap;

use crate::error::ResolveError;

/// A caller-supplied version-resolution callback.
///
/// A probe either produces the module's version string or reports why it
/// could not.
pub type VersionProbe = Box<dyn Fn() -> Result<String, ResolveError>>;

/// Explicit mapping from module name to version probe.
#[derive(Default)]
pub struct ModuleIndex {
    probes: HashMap<String, VersionProbe>,
}

impl ModuleIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            probes: HashMap::new(),
        }
    }

    /// Register a probe for a module, replacing any existing one.
    pub fn register<F>(&mut self, name: impl Into<String>, probe: F)
    where
        F: Fn() -> Result<String, ResolveError> + 'static,
    {
        self.probes.insert(name.into(), Box::new(probe));
    }

    /// Register a fixed version string for a module.
    pub fn register_version(&mut self, name: impl Into<String>, version: impl Into<String>) {
        let version = version.into();
        self.register(name, move || Ok(version.clone()));
    }

    /// Check whether a probe is registered for a module.
    pub fn contains(&self, module: &str) -> bool {
        self.probes.contains_key(module)
    }

    /// Run the probe registered for a module.
    pub fn probe(&self, module: &str) -> Result<String, ResolveError> {
        match self.probes.get(module) {
            Some(probe) => probe(),
            None => Err(ResolveError::ModuleNotFound {
                module: module.to_string(),
            }),
        }
    }
}
