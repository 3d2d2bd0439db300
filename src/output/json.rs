//! JSON report formatter.
//!
//! Formats the report as a machine-readable object with the single key
//! `"Software versions"`. Unlike the other three formats, the JSON form
//! carries no timestamp; consumers of the serialized report never used it,
//! and the omission is kept for compatibility.

use serde_json::json;

use super::ReportFormatter;
use crate::report::VersionReport;

/// Formats a report as JSON.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &VersionReport) -> String {
        let entries: Vec<_> = report
            .entries()
            .iter()
            .map(|entry| {
                json!({
                    "module": entry.name(),
                    "version": entry.version(),
                })
            })
            .collect();

        json!({ "Software versions": entries }).to_string()
    }
}
