//! Version resolution sources.
//!
//! Two layers back the collector's fallback chain:
//!
//! - **Probes** - Caller-registered version callbacks keyed by module name
//!   ([`ModuleIndex`])
//! - **Metadata** - An installed-package metadata source queried for names
//!   the index cannot resolve ([`MetadataRegistry`])
//!
//! # Example
//!
//! ```
//! use version_report::resolve::{MetadataRegistry, ModuleIndex, StaticMetadata};
//!
//! let mut index = ModuleIndex::new();
//! index.register_version("sphinx", "4.5.0");
//! assert_eq!(index.probe("sphinx").unwrap(), "4.5.0");
//!
//! let metadata = StaticMetadata::from_pairs("jinja2=3.1.2");
//! assert_eq!(metadata.version_of("jinja2").unwrap(), "3.1.2");
//! ```

pub mod metadata;
pub mod probes;

pub use metadata::{MetadataRegistry, StaticMetadata};
pub use probes::{ModuleIndex, VersionProbe};
