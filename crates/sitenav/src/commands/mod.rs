//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod render;

use std::path::PathBuf;

use clap::Args;
use sitenav_config::{CliSettings, Config};
use sitenav_site::SiteDescriptor;

use crate::error::CliError;
use crate::output::Output;

pub(crate) use check::CheckArgs;
pub(crate) use render::RenderArgs;

/// Arguments shared by every command that loads a descriptor.
#[derive(Args)]
pub(crate) struct LoadArgs {
    /// Path to configuration file (default: auto-discover sitenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site descriptor file (overrides config).
    #[arg(short, long, env = "SITENAV_DESCRIPTOR")]
    descriptor: Option<PathBuf>,

    /// Maximum sidebar nesting depth (overrides config).
    #[arg(long)]
    max_depth: Option<usize>,

    /// Accept duplicate sidebar paths.
    #[arg(long)]
    allow_duplicates: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl LoadArgs {
    /// Build CLI settings from the shared arguments.
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            descriptor: self.descriptor.clone(),
            max_depth: self.max_depth,
            unique_paths: self.allow_duplicates.then_some(false),
            ..CliSettings::default()
        }
    }

    /// Load configuration with the given settings applied.
    fn load_config(&self, settings: &CliSettings) -> Result<Config, CliError> {
        Config::load(self.config.as_deref(), Some(settings)).map_err(CliError::from)
    }
}

/// Load and validate the descriptor the configuration points at.
///
/// Field checks always run; the duplicate path check follows
/// `sidebar.unique_paths`.
pub(crate) fn load_descriptor(config: &Config) -> Result<SiteDescriptor, CliError> {
    let path = &config.site_resolved.descriptor;

    let descriptor = SiteDescriptor::load(path, config.sidebar.max_depth)?;
    if config.sidebar.unique_paths {
        descriptor.validate()?;
    } else {
        descriptor.validate_fields()?;
        tracing::warn!(path = %path.display(), "Duplicate sidebar path check disabled");
    }

    tracing::info!(
        path = %path.display(),
        nodes = descriptor.theme_config.sidebar.node_count(),
        "Site descriptor validated"
    );
    Ok(descriptor)
}

/// Tell the user when duplicate checking is off.
fn report_duplicate_check(config: &Config, output: &Output) {
    if !config.sidebar.unique_paths {
        output.warning("Duplicate path check: disabled");
    }
}

/// Write a descriptor fixture and a `sitenav.toml` pointing at it.
///
/// Returns the config path.
#[cfg(test)]
pub(crate) fn write_fixture(
    dir: &std::path::Path,
    descriptor: &serde_json::Value,
    extra_config: &str,
) -> PathBuf {
    std::fs::write(dir.join("config.json"), descriptor.to_string()).unwrap();
    let config_path = dir.join("sitenav.toml");
    std::fs::write(
        &config_path,
        format!("[site]\ndescriptor = \"config.json\"\n{extra_config}"),
    )
    .unwrap();
    config_path
}
