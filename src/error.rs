//! Error types for version reporting.
//!
//! This module defines [`ResolveError`], the per-module resolution error that
//! the collector folds into report entries, [`ReportError`], the error type
//! used by the command layer, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `ResolveError` never crosses the collector boundary: a failed resolution
//!   becomes the entry's version value (its `Display` text), and collection
//!   itself always succeeds
//! - Use `ReportError` for fallible plumbing around the collector (CLI
//!   commands, completion generation)
//! - Use `anyhow::Error` (via `ReportError::Other`) for unexpected errors

use thiserror::Error;

/// A module name could not be resolved to a version.
///
/// All variants display a short diagnostic that is safe to embed directly in
/// a rendered report.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No probe is registered for the module in the module index.
    #[error("no version probe registered for module '{module}'")]
    ModuleNotFound { module: String },

    /// A registered probe ran but could not produce a version.
    #[error("version probe for module '{module}' failed: {message}")]
    ProbeFailed { module: String, message: String },

    /// The package-metadata registry has no distribution under this name.
    #[error("distribution '{module}' was not found in the package metadata")]
    DistributionNotFound { module: String },
}

/// Core error type for version-report operations.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for version-report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
