//! `sitenav render` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use serde_json::Value;
use sitenav_config::{CliSettings, Config};
use sitenav_site::render;

use super::{LoadArgs, load_descriptor, report_duplicate_check};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Output file (default: stdout, or output.path from config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    /// Render only the sidebar tree.
    #[arg(long)]
    sidebar_only: bool,
}

impl RenderArgs {
    /// Build CLI settings, including the render-only overrides.
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            output_path: self.output.clone(),
            pretty: self.compact.then_some(false),
            ..self.load.cli_settings()
        }
    }

    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor is invalid or the output can't be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.load.load_config(&self.cli_settings())?;
        report_duplicate_check(&config, &output);

        let json = render_json(&config, self.sidebar_only)?;

        match &config.output_resolved.path {
            Some(path) => {
                write_output(path, &json)?;
                output.success(&format!("Rendered to {}", path.display()));
            }
            None => output.data(&json)?,
        }
        Ok(())
    }
}

/// Load, validate and render the configured descriptor as JSON text.
pub(crate) fn render_json(config: &Config, sidebar_only: bool) -> Result<String, CliError> {
    let descriptor = load_descriptor(config)?;
    let rendered = if sidebar_only {
        render(&descriptor.theme_config.sidebar)
    } else {
        descriptor.render()
    };
    to_json(&rendered, config.output_resolved.pretty)
}

/// Serialize the rendered value.
fn to_json(value: &Value, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Write rendered JSON to a file, creating parent directories.
fn write_output(path: &Path, json: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::commands::write_fixture;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: RenderArgs,
    }

    fn render_args(args: &[&str]) -> RenderArgs {
        TestCli::try_parse_from(std::iter::once("sitenav").chain(args.iter().copied()))
            .unwrap()
            .args
    }

    fn blog_descriptor() -> Value {
        json!({
            "base": "/blog/",
            "title": "xu blog",
            "themeConfig": {
                "sidebar": [
                    { "title": "VUE", "collapsable": true, "children": [["vue/", "介绍"]] }
                ]
            }
        })
    }

    const SIDEBAR_JSON: &str =
        r#"[{"title":"VUE","collapsable":true,"children":[["vue/","介绍"]]}]"#;

    #[test]
    fn test_to_json_pretty() {
        let value = json!([["vue/", "介绍"]]);
        let json = to_json(&value, true).unwrap();
        assert_eq!(json, "[\n  [\n    \"vue/\",\n    \"介绍\"\n  ]\n]");
    }

    #[test]
    fn test_write_output_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dist/nested/sidebar.json");

        write_output(&path, "[]").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
    }

    #[test]
    fn test_render_json_full_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_fixture(dir.path(), &blog_descriptor(), "\n[output]\npretty = false\n");
        let config = Config::load(Some(&config_path), None).unwrap();

        let json = render_json(&config, false).unwrap();

        assert_eq!(
            json,
            format!(
                r#"{{"base":"/blog/","title":"xu blog","description":"","themeConfig":{{"sidebar":{SIDEBAR_JSON}}}}}"#
            )
        );
    }

    #[test]
    fn test_render_json_sidebar_only() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_fixture(dir.path(), &blog_descriptor(), "\n[output]\npretty = false\n");
        let config = Config::load(Some(&config_path), None).unwrap();

        assert_eq!(render_json(&config, true).unwrap(), SIDEBAR_JSON);
    }

    #[test]
    fn test_compact_flag_overrides_pretty_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_fixture(dir.path(), &blog_descriptor(), "\n[output]\npretty = true\n");
        let args = render_args(&["--config", config_path.to_str().unwrap(), "--compact"]);

        let config = args.load.load_config(&args.cli_settings()).unwrap();

        assert!(!config.output_resolved.pretty);
        assert_eq!(render_json(&config, true).unwrap(), SIDEBAR_JSON);
    }

    #[test]
    fn test_execute_writes_to_configured_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_fixture(
            dir.path(),
            &blog_descriptor(),
            "\n[output]\npath = \"out/sidebar.json\"\npretty = false\n",
        );
        let args = render_args(&["--config", config_path.to_str().unwrap(), "--sidebar-only"]);

        args.execute().unwrap();

        let written = std::fs::read_to_string(dir.path().join("out/sidebar.json")).unwrap();
        assert_eq!(written, format!("{SIDEBAR_JSON}\n"));
    }

    #[test]
    fn test_output_flag_overrides_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_fixture(
            dir.path(),
            &blog_descriptor(),
            "\n[output]\npath = \"out/sidebar.json\"\n",
        );
        let target = dir.path().join("cli/sidebar.json");
        let args = render_args(&[
            "--config",
            config_path.to_str().unwrap(),
            "--output",
            target.to_str().unwrap(),
            "--sidebar-only",
            "--compact",
        ]);

        args.execute().unwrap();

        assert_eq!(
            std::fs::read_to_string(&target).unwrap(),
            format!("{SIDEBAR_JSON}\n")
        );
        assert!(!dir.path().join("out/sidebar.json").exists());
    }

    #[test]
    fn test_execute_rejects_duplicates_unless_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let descriptor = json!({ "themeConfig": { "sidebar": [["vue/", "a"], ["vue/", "b"]] } });
        let config_path = write_fixture(
            dir.path(),
            &descriptor,
            "\n[output]\npath = \"sidebar.json\"\n",
        );
        let config_arg = config_path.to_str().unwrap();

        assert!(render_args(&["--config", config_arg]).execute().is_err());
        assert!(!dir.path().join("sidebar.json").exists());

        render_args(&["--config", config_arg, "--allow-duplicates", "--sidebar-only", "--compact"])
            .execute()
            .unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("sidebar.json")).unwrap(),
            "[[\"vue/\",\"a\"],[\"vue/\",\"b\"]]\n"
        );
    }
}
