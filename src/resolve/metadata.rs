//! Package-metadata registry backends.
//!
//! When the module index has no answer for a name, the collector falls back
//! to a metadata registry: a read-only view of installed distributions and
//! their versions. [`StaticMetadata`] is the in-memory implementation used
//! by the CLI (seeded from a `name=version,...` list) and by tests.

use std::collections::HashMap;

use tracing::warn;

use crate::error::ResolveError;

/// Read-only view of an installed-package metadata source.
pub trait MetadataRegistry {
    /// Look up the version of the named distribution.
    fn version_of(&self, module: &str) -> Result<String, ResolveError>;
}

/// In-memory metadata registry.
#[derive(Debug, Clone, Default)]
pub struct StaticMetadata {
    distributions: HashMap<String, String>,
}

impl StaticMetadata {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            distributions: HashMap::new(),
        }
    }

    /// Parse a `name=version,name=version` list into a registry.
    ///
    /// Entries are trimmed; empty entries and entries without `=` are
    /// skipped.
    pub fn from_pairs(pairs: &str) -> Self {
        let mut registry = Self::new();
        for pair in pairs.split(',') {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }
            match pair.split_once('=') {
                Some((name, version)) if !name.trim().is_empty() => {
                    registry.insert(name.trim(), version.trim());
                }
                _ => warn!("Ignoring malformed package pair '{}'", pair),
            }
        }
        registry
    }

    /// Record a distribution version, replacing any existing one.
    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.distributions.insert(name.into(), version.into());
    }

    /// Number of known distributions.
    pub fn len(&self) -> usize {
        self.distributions.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.distributions.is_empty()
    }
}

impl MetadataRegistry for StaticMetadata {
    fn version_of(&self, module: &str) -> Result<String, ResolveError> {
        self.distributions
            .get(module)
            .cloned()
            .ok_or_else(|| ResolveError::DistributionNotFound {
                module: module.to_string(),
            })
    }
}
