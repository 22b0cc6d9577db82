//! `sitenav check` command implementation.

use clap::Args;

use super::{LoadArgs, load_descriptor, report_duplicate_check};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub load: LoadArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the descriptor is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.load.load_config(&self.load.cli_settings())?;
        report_duplicate_check(&config, &output);

        let descriptor = load_descriptor(&config)?;
        let sidebar = &descriptor.theme_config.sidebar;

        output.highlight(&config.site_resolved.descriptor.display().to_string());
        output.field("Title", &descriptor.title);
        output.field("Base", &descriptor.base);
        if let Some(dest) = &descriptor.dest {
            output.field("Dest", dest);
        }
        output.field("Groups", &sidebar.group_count().to_string());
        output.field("Leaves", &sidebar.leaf_count().to_string());
        output.field("Depth", &sidebar.depth().to_string());

        output.success("Site descriptor is valid");
        Ok(())
    }
}
