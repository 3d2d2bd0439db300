//! HTML report formatter.
//!
//! Produces a single-line `<table>` for notebook-style front ends. Version
//! cells are escaped; name cells are emitted verbatim.

use super::ReportFormatter;
use crate::report::VersionReport;

/// Formats a report as an HTML table.
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Create a new HTML formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, report: &VersionReport) -> String {
        let mut out = String::from("<table>");
        out.push_str("<tr><th>Software</th><th>Version</th></tr>");
        for entry in report.entries() {
            out.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                entry.name(),
                html_escape(entry.version())
            ));
        }
        out.push_str(&format!(
            "<tr><td colspan='2'>{}</td></tr>",
            report.generated_at()
        ));
        out.push_str("</table>");
        out
    }
}

/// Escape `&`, `<`, `>`, and `"` for embedding in a table cell.
fn html_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
