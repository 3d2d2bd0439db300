//! version-report - Installed-software version reporting.
//!
//! version-report collects the versions of the running toolchain, its
//! host, the operating system, and any requested modules into a single
//! report, then renders that report as plain text, HTML, JSON, or LaTeX.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`collector`] - Version collection and the resolution chain
//! - [`error`] - Error types and result aliases
//! - [`output`] - The four report renderers
//! - [`report`] - Report and entry types
//! - [`resolve`] - Version probes and package metadata lookup
//! - [`shell`] - Host-shell command registration
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use version_report::collector::VersionCollector;
//!
//! let mut collector = VersionCollector::new();
//! collector.modules_mut().register_version("sphinx", "4.5.0");
//!
//! let report = collector.collect("sphinx");
//! assert!(report.render_plain().contains("sphinx==4.5.0"));
//! ```
//!
//! For the command-line surface, see the integration tests.

pub mod cli;
pub mod collector;
pub mod error;
pub mod output;
pub mod report;
pub mod resolve;
pub mod shell;
pub mod ui;

pub use error::{ReportError, Result};
