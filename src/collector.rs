//! Version collection.
//!
//! [`VersionCollector`] turns a comma-separated list of module names into a
//! [`VersionReport`]. Every report opens with three fixed header entries
//! (Rust toolchain, host shell, operating system); each requested module is
//! then resolved through a best-effort fallback chain that never fails the
//! collection itself.

use chrono::Local;
use tracing::debug;

use crate::report::{VersionEntry, VersionReport};
use crate::resolve::{MetadataRegistry, ModuleIndex};

/// Toolchain identity captured by the build script.
const RUSTC_VERSION: &str = env!("RUSTC_VERSION");

/// Capture-timestamp pattern, e.g. `Wed Dec 09 10:21:40 2023 +00:00`.
const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Y %Z";

/// Identity of the shell or tool hosting the collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    name: String,
    version: String,
}

impl HostInfo {
    /// Create a host identity from a display name and a version string.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// The host's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The host's version string.
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl Default for HostInfo {
    /// Placeholder identity for embedders that supply none.
    fn default() -> Self {
        Self::new("shell", "unknown")
    }
}

/// Collects software versions into immutable reports.
///
/// Resolution order per requested module: the module index, then the
/// package-metadata registry (when one is configured), then the stringified
/// last error. A bad module name degrades into its entry's version text
/// rather than failing the collection.
pub struct VersionCollector {
    interpreter: String,
    host: HostInfo,
    modules: ModuleIndex,
    metadata: Option<Box<dyn MetadataRegistry>>,
}

impl Default for VersionCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionCollector {
    /// Create a collector with the build-time toolchain identity, a
    /// placeholder host, an empty module index, and no metadata registry.
    pub fn new() -> Self {
        Self {
            interpreter: RUSTC_VERSION.to_string(),
            host: HostInfo::default(),
            modules: ModuleIndex::new(),
            metadata: None,
        }
    }

    /// Set the host identity reported in the second header entry.
    pub fn with_host(mut self, host: HostInfo) -> Self {
        self.host = host;
        self
    }

    /// Attach a package-metadata registry as the fallback version source.
    pub fn with_metadata(mut self, registry: Box<dyn MetadataRegistry>) -> Self {
        self.metadata = Some(registry);
        self
    }

    /// Mutable access to the module index, for probe registration.
    pub fn modules_mut(&mut self) -> &mut ModuleIndex {
        &mut self.modules
    }

    #[cfg(test)]
    pub(crate) fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Collect a report for a comma-separated list of module names.
    ///
    /// Whitespace around names is insignificant; empty entries are skipped;
    /// duplicates produce duplicate report entries. The resulting report has
    /// exactly `3 + n` entries for `n` non-empty names.
    pub fn collect(&self, line: &str) -> VersionReport {
        let mut entries = vec![
            VersionEntry::new("Rust", self.interpreter.replace('\n', "")),
            VersionEntry::new(self.host.name(), self.host.version()),
            VersionEntry::new(
                "OS",
                format!("{} [{}]", std::env::consts::FAMILY, std::env::consts::OS),
            ),
        ];

        for module in parse_module_list(line) {
            entries.push(VersionEntry::new(module, self.resolve(module)));
        }

        let generated_at = Local::now().format(TIMESTAMP_FORMAT).to_string();
        VersionReport::new(entries, generated_at)
    }

    /// Resolve one module name to a version string or a diagnostic.
    fn resolve(&self, module: &str) -> String {
        let index_err = match self.modules.probe(module) {
            Ok(version) => return version,
            Err(e) => e,
        };

        match &self.metadata {
            Some(registry) => match registry.version_of(module) {
                Ok(version) => version,
                Err(metadata_err) => {
                    debug!("Could not resolve '{}': {}", module, metadata_err);
                    metadata_err.to_string()
                }
            },
            // No metadata registry to consult: the index error is the
            // final diagnostic.
            None => {
                debug!("Could not resolve '{}': {}", module, index_err);
                index_err.to_string()
            }
        }
    }
}

/// Split a comma-separated module list into trimmed, non-empty names.
fn parse_module_list(line: &str) -> impl Iterator<Item = &str> {
    line.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
