//! The collected version report.
//!
//! A [`VersionReport`] is an ordered list of name/version pairs plus the
//! timestamp captured when the collection ran. It is immutable once built by
//! the collector and is consumed read-only by the renderers in
//! [`crate::output`].

use std::fmt;

use crate::output::{HtmlFormatter, JsonFormatter, LatexFormatter, PlainFormatter, ReportFormatter};

/// A single name/version row in a report.
///
/// The version slot holds either a resolved version string or the diagnostic
/// text of the resolution error that stood in for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    name: String,
    version: String,
}

impl VersionEntry {
    pub(crate) fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// The display name of the software.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved version, or the resolution diagnostic on failure.
    pub fn version(&self) -> &str {
        &self.version
    }
}

/// An immutable, ordered version report.
///
/// The first three entries are always the fixed header (toolchain, host
/// shell, operating system); any requested modules follow in the order they
/// were supplied.
#[derive(Debug, Clone)]
pub struct VersionReport {
    entries: Vec<VersionEntry>,
    generated_at: String,
}

impl VersionReport {
    pub(crate) fn new(entries: Vec<VersionEntry>, generated_at: String) -> Self {
        Self {
            entries,
            generated_at,
        }
    }

    /// All entries, header first, in insertion order.
    pub fn entries(&self) -> &[VersionEntry] {
        &self.entries
    }

    /// The capture timestamp, preformatted for display.
    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    /// Render as commented header lines plus `name==version` pin lines.
    pub fn render_plain(&self) -> String {
        PlainFormatter::new().format(self)
    }

    /// Render as an HTML table.
    pub fn render_html(&self) -> String {
        HtmlFormatter::new().format(self)
    }

    /// Render as a JSON object (timestamp intentionally omitted).
    pub fn render_json(&self) -> String {
        JsonFormatter::new().format(self)
    }

    /// Render as a LaTeX `tabular` environment.
    pub fn render_latex(&self) -> String {
        LatexFormatter::new().format(self)
    }
}

impl fmt::Display for VersionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_plain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VersionReport {
        VersionReport::new(
            vec![
                VersionEntry::new("Rust", "rustc 1.80.0"),
                VersionEntry::new("shell", "0.1.0"),
                VersionEntry::new("OS", "unix [linux]"),
                VersionEntry::new("sphinx", "4.5.0"),
            ],
            "Wed Dec 09 10:21:40 2023 +00:00".to_string(),
        )
    }

    #[test]
    fn entries_preserve_insertion_order() {
        let report = sample();
        let names: Vec<&str> = report.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["Rust", "shell", "OS", "sphinx"]);
    }

    #[test]
    fn entry_accessors_return_fields() {
        let entry = VersionEntry::new("sphinx", "4.5.0");
        assert_eq!(entry.name(), "sphinx");
        assert_eq!(entry.version(), "4.5.0");
    }

    #[test]
    fn generated_at_returns_timestamp() {
        let report = sample();
        assert_eq!(report.generated_at(), "Wed Dec 09 10:21:40 2023 +00:00");
    }

    #[test]
    fn display_matches_plain_rendering() {
        let report = sample();
        assert_eq!(report.to_string(), report.render_plain());
    }
}
