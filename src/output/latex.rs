//! LaTeX report formatter.
//!
//! Produces a two-column `tabular` environment for document export. Row
//! terminators are the literal two-character sequence `\n`, not newlines;
//! the downstream export pipeline expects the table as a single line and
//! performs its own line handling.

use super::ReportFormatter;
use crate::report::VersionReport;

/// Formats a report as a LaTeX table.
pub struct LatexFormatter;

impl LatexFormatter {
    /// Create a new LaTeX formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LatexFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for LatexFormatter {
    fn format(&self, report: &VersionReport) -> String {
        let mut out = String::from(r"\begin{tabular}{|l|l|}\hline\n");
        out.push_str(r"{\bf Software} & {\bf Version} \\ \hline\hline\n");
        for entry in report.entries() {
            out.push_str(&format!(
                r"{} & {} \\ \hline\n",
                entry.name(),
                latex_escape(entry.version())
            ));
        }
        out.push_str(&format!(
            r"\hline \multicolumn{{2}}{{|l|}}{{{}}} \\ \hline\n",
            report.generated_at()
        ));
        out.push_str(r"\end{tabular}\n");
        out
    }
}

/// Escape characters that are special in LaTeX table cells.
///
/// Single pass over the input; each mapped character becomes exactly one
/// output sequence and escape output is never re-escaped. Unmapped
/// characters pass through unchanged.
fn latex_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str(r"\&"),
            '%' => escaped.push_str(r"\%"),
            '$' => escaped.push_str(r"\$"),
            '#' => escaped.push_str(r"\#"),
            '_' => escaped.push_str(r"\letterunderscore{}"),
            '{' => escaped.push_str(r"\letteropenbrace{}"),
            '}' => escaped.push_str(r"\letterclosebrace{}"),
            '~' => escaped.push_str(r"\lettertilde{}"),
            '^' => escaped.push_str(r"\letterhat{}"),
            '\\' => escaped.push_str(r"\letterbackslash{}"),
            '>' => escaped.push_str(r"\textgreater"),
            '<' => escaped.push_str(r"\textless"),
            _ => escaped.push(c),
        }
    }
    escaped
}
