//! Host shell integration.
//!
//! An interactive shell that wants the report command implements
//! [`ShellCommands`] and passes itself to [`load_extension`], which
//! registers a handler under [`COMMAND_NAME`]. The handler maps an argument
//! line straight to a [`VersionReport`]; how the shell displays the report
//! (and which of the four renderings it picks) stays on the shell's side.
//!
//! # Example
//!
//! ```
//! use version_report::collector::VersionCollector;
//! use version_report::shell::{load_extension, MockShell, COMMAND_NAME};
//!
//! let mut collector = VersionCollector::new();
//! collector.modules_mut().register_version("sphinx", "4.5.0");
//!
//! let mut shell = MockShell::new();
//! load_extension(&mut shell, collector);
//!
//! let report = shell.run(COMMAND_NAME, "sphinx").unwrap();
//! assert_eq!(report.entries().len(), 4);
//! ```

use std::collections::HashMap;

use tracing::debug;

use crate::collector::VersionCollector;
use crate::report::VersionReport;

/// Name under which the report command is registered.
pub const COMMAND_NAME: &str = "version_information";

/// A registered command body: argument line in, report out.
pub type CommandHandler = Box<dyn Fn(&str) -> VersionReport>;

/// Capability surface a host shell offers to extensions.
pub trait ShellCommands {
    /// Make a command available under `name` in the shell's namespace.
    fn register(&mut self, name: &str, handler: CommandHandler);
}

/// Install the version-report command into a host shell.
///
/// The collector is moved into the handler; every invocation collects a
/// fresh report from its argument line.
pub fn load_extension(shell: &mut dyn ShellCommands, collector: VersionCollector) {
    shell.register(COMMAND_NAME, Box::new(move |line| collector.collect(line)));
    debug!("Registered '{}' shell command", COMMAND_NAME);
}

/// In-memory shell for tests and embedding examples.
///
/// Stores registered handlers by name and lets callers invoke them directly.
#[derive(Default)]
pub struct MockShell {
    commands: HashMap<String, CommandHandler>,
}

impl MockShell {
    /// Create an empty shell.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Check whether a command is registered.
    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Invoke a registered command with an argument line.
    pub fn run(&self, name: &str, line: &str) -> Option<VersionReport> {
        self.commands.get(name).map(|handler| handler(line))
    }
}

impl ShellCommands for MockShell {
    fn register(&mut self, name: &str, handler: CommandHandler) {
        self.commands.insert(name.to_string(), handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_extension_registers_command_name() {
        let mut shell = MockShell::new();

        load_extension(&mut shell, VersionCollector::new());

        assert!(shell.has_command(COMMAND_NAME));
        assert!(!shell.has_command("other_command"));
    }

    #[test]
    fn registered_handler_collects_reports() {
        let mut collector = VersionCollector::new();
        collector.modules_mut().register_version("sphinx", "4.5.0");

        let mut shell = MockShell::new();
        load_extension(&mut shell, collector);

        let report = shell.run(COMMAND_NAME, "sphinx").unwrap();

        assert_eq!(report.entries().len(), 4);
        assert_eq!(report.entries()[3].name(), "sphinx");
        assert_eq!(report.entries()[3].version(), "4.5.0");
    }

    #[test]
    fn running_unknown_command_returns_none() {
        let shell = MockShell::new();

        assert!(shell.run("missing", "").is_none());
    }

    #[test]
    fn handler_produces_fresh_reports_per_invocation() {
        let mut shell = MockShell::new();
        load_extension(&mut shell, VersionCollector::new());

        let first = shell.run(COMMAND_NAME, "a, b").unwrap();
        let second = shell.run(COMMAND_NAME, "c").unwrap();

        assert_eq!(first.entries().len(), 5);
        assert_eq!(second.entries().len(), 4);
    }

    #[test]
    fn reregistering_replaces_handler() {
        let mut shell = MockShell::new();
        load_extension(&mut shell, VersionCollector::new());

        let mut collector = VersionCollector::new();
        collector.modules_mut().register_version("sphinx", "5.0.1");
        load_extension(&mut shell, collector);

        let report = shell.run(COMMAND_NAME, "sphinx").unwrap();
        assert_eq!(report.entries()[3].version(), "5.0.1");
    }
}
