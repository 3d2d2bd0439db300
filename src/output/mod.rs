//! Report renderers.
//!
//! This module provides formatters for rendering a version report
//! in different formats (plain text, HTML, JSON, LaTeX).
//!
//! Each formatter is a pure, single-pass transformation of a
//! [`VersionReport`] into a `String`; rendering cannot fail and has no side
//! effects. The consuming front end (terminal, notebook, document export)
//! picks the format.

pub mod html;
pub mod json;
pub mod latex;
pub mod plain;

use clap::ValueEnum;

use crate::report::VersionReport;

/// Output format for version reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Commented header lines plus `name==version` pin lines.
    #[default]
    Plain,
    /// An HTML table.
    Html,
    /// A single-key JSON object.
    Json,
    /// A LaTeX `tabular` environment.
    Latex,
}

/// Trait for rendering a report in one output format.
pub trait ReportFormatter {
    /// Render the report as a string.
    fn format(&self, report: &VersionReport) -> String;
}

/// Render a report in the requested format.
pub fn render(report: &VersionReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => PlainFormatter::new().format(report),
        OutputFormat::Html => HtmlFormatter::new().format(report),
        OutputFormat::Json => JsonFormatter::new().format(report),
        OutputFormat::Latex => LatexFormatter::new().format(report),
    }
}

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use latex::LatexFormatter;
pub use plain::PlainFormatter;
