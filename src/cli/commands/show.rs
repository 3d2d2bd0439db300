//! Report command implementation (the default action).

use tracing::debug;

use crate::cli::args::ShowArgs;
use crate::collector::{HostInfo, VersionCollector};
use crate::error::Result;
use crate::output::render;
use crate::resolve::StaticMetadata;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Command that collects a version report and prints it.
///
/// Runs when the CLI is invoked without a subcommand. Module versions come
/// from the `--packages` registry; names outside it show their resolution
/// diagnostic in the version column without failing the command.
pub struct ShowCommand {
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(args: ShowArgs) -> Self {
        Self { args }
    }

    fn build_collector(&self, ui: &mut dyn UserInterface) -> VersionCollector {
        let mut collector = VersionCollector::new()
            .with_host(HostInfo::new("version-report", env!("CARGO_PKG_VERSION")));

        if let Some(pairs) = &self.args.packages {
            let registry = StaticMetadata::from_pairs(pairs);
            if registry.is_empty() && !pairs.trim().is_empty() {
                ui.warning("No usable name=version pairs in --packages");
            }
            debug!("Seeded metadata registry with {} packages", registry.len());
            collector = collector.with_metadata(Box::new(registry));
        }

        collector
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let line = self.args.modules.join(" ");
        debug!("Collecting versions for '{}'", line);

        let collector = self.build_collector(ui);
        let report = collector.collect(&line);
        let output = render(&report, self.args.format);

        // message() appends a newline; strip the plain form's own one
        ui.message(output.trim_end_matches('\n'));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use crate::ui::MockUI;

    fn show(args: ShowArgs) -> (MockUI, CommandResult) {
        let mut ui = MockUI::new();
        let result = ShowCommand::new(args).execute(&mut ui).unwrap();
        (ui, result)
    }

    #[test]
    fn default_action_prints_plain_report() {
        let (ui, result) = show(ShowArgs::default());

        assert!(result.success);
        assert!(ui.messages()[0].starts_with("# Software versions\n# -----------------\n"));
    }

    #[test]
    fn host_entry_names_the_binary() {
        let (ui, _) = show(ShowArgs::default());

        assert!(ui.messages()[0].contains("# version-report:"));
    }

    #[test]
    fn packages_seed_the_metadata_registry() {
        let args = ShowArgs {
            modules: vec!["sphinx,".into(), "jinja2".into()],
            packages: Some("sphinx=4.5.0, jinja2=3.1.2".into()),
            ..Default::default()
        };
        let (ui, result) = show(args);

        assert!(result.success);
        let out = &ui.messages()[0];
        assert!(out.contains("sphinx==4.5.0"));
        assert!(out.contains("jinja2==3.1.2"));
    }

    #[test]
    fn unknown_module_still_succeeds() {
        let args = ShowArgs {
            modules: vec!["ghost".into()],
            ..Default::default()
        };
        let (ui, result) = show(args);

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(ui.messages()[0].contains("ghost=="));
    }

    #[test]
    fn json_format_is_parseable() {
        let args = ShowArgs {
            modules: vec!["sphinx".into()],
            format: OutputFormat::Json,
            packages: Some("sphinx=4.5.0".into()),
        };
        let (ui, _) = show(args);

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert!(value.get("Software versions").is_some());
    }

    #[test]
    fn latex_format_keeps_literal_terminators() {
        let args = ShowArgs {
            format: OutputFormat::Latex,
            ..Default::default()
        };
        let (ui, _) = show(args);

        let out = &ui.messages()[0];
        assert!(out.starts_with(r"\begin{tabular}"));
        assert!(out.contains(r"\hline\n"));
    }

    #[test]
    fn malformed_packages_warn() {
        let args = ShowArgs {
            packages: Some("not-a-pair".into()),
            ..Default::default()
        };
        let (ui, result) = show(args);

        assert!(result.success);
        assert_eq!(ui.warnings().len(), 1);
    }

    #[test]
    fn empty_packages_value_does_not_warn() {
        let args = ShowArgs {
            packages: Some(String::new()),
            ..Default::default()
        };
        let (ui, _) = show(args);

        assert!(ui.warnings().is_empty());
    }
}
