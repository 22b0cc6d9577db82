//! Configuration management for sitenav.
//!
//! Parses `sitenav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Path values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.descriptor`
//! - `output.path`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site descriptor path.
    pub descriptor: Option<PathBuf>,
    /// Override maximum sidebar nesting depth.
    pub max_depth: Option<usize>,
    /// Override the duplicate path check.
    pub unique_paths: Option<bool>,
    /// Override output file path.
    pub output_path: Option<PathBuf>,
    /// Override pretty-printing of rendered JSON.
    pub pretty: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sitenav.toml";

/// Descriptor location used when neither the config nor the CLI names one.
const DEFAULT_DESCRIPTOR: &str = "docs/.vuepress/config.json";

/// Default bound on sidebar group nesting.
///
/// Must match `sitenav_site::DEFAULT_MAX_DEPTH`; the CLI crate asserts this.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Upper limit accepted for `sidebar.max_depth`.
///
/// Deeper sidebars can't be read back from a descriptor file, so this
/// matches `sitenav_site::MAX_SUPPORTED_DEPTH`.
pub const MAX_DEPTH_LIMIT: usize = 60;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site descriptor location (relative string from TOML).
    site: SiteConfigRaw,
    /// Sidebar validation settings.
    pub sidebar: SidebarConfig,
    /// Output settings (path is a relative string from TOML).
    output: OutputConfigRaw,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    descriptor: Option<String>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Site descriptor file (JSON, YAML or TOML).
    pub descriptor: PathBuf,
}

/// Sidebar validation settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Maximum group nesting depth accepted by the parser.
    pub max_depth: usize,
    /// Whether duplicate leaf paths are rejected.
    pub unique_paths: bool,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            unique_paths: true,
        }
    }
}

/// Raw output configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    path: Option<String>,
    pretty: Option<bool>,
}

/// Resolved output configuration.
#[derive(Debug)]
pub struct OutputConfig {
    /// Output file. `None` writes to stdout.
    pub path: Option<PathBuf>,
    /// Pretty-print rendered JSON.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            pretty: true,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.descriptor`").
        field: String,
        /// Error message (e.g., "${`DOCS_ROOT`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sitenav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(descriptor) = &settings.descriptor {
            self.site_resolved.descriptor.clone_from(descriptor);
        }
        if let Some(max_depth) = settings.max_depth {
            self.sidebar.max_depth = max_depth;
        }
        if let Some(unique_paths) = settings.unique_paths {
            self.sidebar.unique_paths = unique_paths;
        }
        if let Some(output_path) = &settings.output_path {
            self.output_resolved.path = Some(output_path.clone());
        }
        if let Some(pretty) = settings.pretty {
            self.output_resolved.pretty = pretty;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfigRaw::default(),
            sidebar: SidebarConfig::default(),
            output: OutputConfigRaw::default(),
            site_resolved: SiteConfig {
                descriptor: base.join(DEFAULT_DESCRIPTOR),
            },
            output_resolved: OutputConfig::default(),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_resolved.descriptor.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "site.descriptor cannot be empty".to_owned(),
            ));
        }

        let max_depth = self.sidebar.max_depth;
        if max_depth == 0 {
            return Err(ConfigError::Validation(
                "sidebar.max_depth must be greater than 0".to_owned(),
            ));
        }
        if max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::Validation(format!(
                "sidebar.max_depth cannot exceed {MAX_DEPTH_LIMIT}"
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in path strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref descriptor) = self.site.descriptor {
            self.site.descriptor = Some(expand::expand_env(descriptor, "site.descriptor")?);
        }
        if let Some(ref path) = self.output.path {
            self.output.path = Some(expand::expand_env(path, "output.path")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.site_resolved = SiteConfig {
            descriptor: config_dir.join(
                self.site
                    .descriptor
                    .as_deref()
                    .unwrap_or(DEFAULT_DESCRIPTOR),
            ),
        };

        self.output_resolved = OutputConfig {
            path: self.output.path.as_deref().map(|p| config_dir.join(p)),
            pretty: self.output.pretty.unwrap_or(true),
        };
    }
}
