//! Plain-text report formatter.
//!
//! The default textual form: a commented banner and header block followed by
//! `name==version` lines in the style of a dependency-pin listing.

use super::ReportFormatter;
use crate::report::VersionReport;

/// Formats a report as plain text.
pub struct PlainFormatter;

impl PlainFormatter {
    /// Create a new plain-text formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for PlainFormatter {
    fn format(&self, report: &VersionReport) -> String {
        let mut out = String::from("# Software versions\n# -----------------\n");
        out.push_str(&format!("# {}\n", report.generated_at()));
        for entry in report.entries().iter().take(3) {
            out.push_str(&format!("# {}: {}\n", entry.name(), entry.version()));
        }
        for entry in report.entries().iter().skip(3) {
            out.push_str(&format!("{}=={}\n", entry.name(), entry.version()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::VersionEntry;

    fn sample() -> VersionReport {
        VersionReport::new(
            vec![
                VersionEntry::new("Rust", "rustc 1.80.0"),
                VersionEntry::new("version-report", "0.1.0"),
                VersionEntry::new("OS", "unix [linux]"),
                VersionEntry::new("sphinx", "4.5.0"),
                VersionEntry::new("jinja2", "3.1.2"),
            ],
            "Wed Dec 09 10:21:40 2023 +00:00".to_string(),
        )
    }

    #[test]
    fn formats_full_report() {
        let output = PlainFormatter::new().format(&sample());

        let expected = concat!(
            "# Software versions\n",
            "# -----------------\n",
            "# Wed Dec 09 10:21:40 2023 +00:00\n",
            "# Rust: rustc 1.80.0\n",
            "# version-report: 0.1.0\n",
            "# OS: unix [linux]\n",
            "sphinx==4.5.0\n",
            "jinja2==3.1.2\n",
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn starts_with_banner() {
        let output = PlainFormatter::new().format(&sample());

        assert!(output.starts_with("# Software versions\n# -----------------\n"));
    }

    #[test]
    fn header_entries_are_commented_modules_are_pins() {
        let output = PlainFormatter::new().format(&sample());

        assert!(output.contains("# OS: unix [linux]\n"));
        assert!(output.contains("sphinx==4.5.0\n"));
        assert!(!output.contains("# sphinx"));
    }

    #[test]
    fn header_only_report_has_no_pin_lines() {
        let report = VersionReport::new(
            vec![
                VersionEntry::new("Rust", "rustc 1.80.0"),
                VersionEntry::new("version-report", "0.1.0"),
                VersionEntry::new("OS", "unix [linux]"),
            ],
            "Wed Dec 09 10:21:40 2023 +00:00".to_string(),
        );

        let output = PlainFormatter::new().format(&report);

        assert!(!output.contains("=="));
        assert!(output.ends_with("# OS: unix [linux]\n"));
    }

    #[test]
    fn version_text_is_not_escaped() {
        let report = VersionReport::new(
            vec![
                VersionEntry::new("Rust", "rustc 1.80.0"),
                VersionEntry::new("version-report", "0.1.0"),
                VersionEntry::new("OS", "unix [linux]"),
                VersionEntry::new("weird", "<1.0 & >0.5"),
            ],
            "Wed Dec 09 10:21:40 2023 +00:00".to_string(),
        );

        let output = PlainFormatter::new().format(&report);

        assert!(output.contains("weird==<1.0 & >0.5\n"));
    }
}
