//! Site descriptor loading.
//!
//! A descriptor is the top-level metadata object handed to the external site
//! tool: `base`, `dest`, `title`, `description` and a `themeConfig` holding the
//! sidebar. Descriptors are read from JSON, YAML or TOML files into an untyped
//! [`Value`] first, so every format goes through the same schema checks.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::sidebar::{
    self, DuplicatePathError, MAX_SUPPORTED_DEPTH, SchemaError, SchemaErrorKind, SidebarParser,
    SidebarTree, value_kind,
};

/// Top-level keys owned by [`SiteDescriptor`]; everything else is kept in `extra`.
const DESCRIPTOR_KEYS: [&str; 5] = ["base", "dest", "title", "description", "themeConfig"];

/// `themeConfig` keys owned by [`ThemeConfig`].
const THEME_KEYS: [&str; 2] = ["editLinks", "sidebar"];

/// Location label of the sidebar inside a descriptor.
const SIDEBAR_LOCATION: &str = "themeConfig.sidebar";

/// Error type for descriptor operations.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// I/O error while reading the descriptor.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Descriptor path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// JSON parsing error.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error.
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// TOML parsing error.
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    /// File extension is not a supported descriptor format.
    #[error("Unsupported descriptor format: {} (expected .json, .yaml, .yml or .toml)", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Descriptor file has no content.
    #[error("Descriptor is empty: {}", .0.display())]
    Empty(PathBuf),
    /// Malformed descriptor or sidebar node.
    #[error(transparent)]
    Schema(#[from] SchemaError),
    /// Repeated sidebar path.
    #[error(transparent)]
    DuplicatePath(#[from] DuplicatePathError),
    /// Field value rejected by validation.
    #[error("Descriptor error: {0}")]
    Validation(String),
}

/// Serialization format of a descriptor file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
}

impl DescriptorFormat {
    /// Detect the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Parse content in this format into an untyped value.
    ///
    /// # Errors
    ///
    /// Returns the format's parse error, or [`SchemaErrorKind::DepthExceeded`]
    /// when the parser's own recursion limit stops it first.
    pub fn parse(self, content: &str) -> Result<Value, SiteError> {
        let parsed: Result<Value, SiteError> = match self {
            Self::Json => serde_json::from_str(content).map_err(SiteError::from),
            Self::Yaml => serde_yaml::from_str(content).map_err(SiteError::from),
            Self::Toml => toml::from_str(content).map_err(SiteError::from),
        };
        parsed.map_err(|err| {
            if is_recursion_limit(&err) {
                SchemaError::new(
                    "descriptor",
                    SchemaErrorKind::DepthExceeded(MAX_SUPPORTED_DEPTH),
                )
                .into()
            } else {
                err
            }
        })
    }
}

/// Check whether a parse error comes from the parser's nesting guard.
fn is_recursion_limit(err: &SiteError) -> bool {
    matches!(
        err,
        SiteError::Json(_) | SiteError::Yaml(_) | SiteError::Toml(_)
    ) && err.to_string().contains("recursion limit")
}

/// Theme section of a descriptor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeConfig {
    /// `editLinks`, when present.
    pub edit_links: Option<bool>,
    /// Validated sidebar tree.
    pub sidebar: SidebarTree,
    /// Other theme keys, passed through untouched.
    pub extra: Map<String, Value>,
}

/// Top-level site metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteDescriptor {
    /// Root URL path (defaults to `/`).
    pub base: String,
    /// Output directory of the external tool, when set.
    pub dest: Option<String>,
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Theme configuration.
    pub theme_config: ThemeConfig,
    /// Other top-level keys, passed through untouched.
    pub extra: Map<String, Value>,
}

impl Default for SiteDescriptor {
    fn default() -> Self {
        Self {
            base: "/".to_owned(),
            dest: None,
            title: String::new(),
            description: String::new(),
            theme_config: ThemeConfig::default(),
            extra: Map::new(),
        }
    }
}

impl SiteDescriptor {
    /// Load a descriptor file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or parsed, or if the
    /// descriptor doesn't match the schema.
    pub fn load(path: &Path, max_depth: usize) -> Result<Self, SiteError> {
        let format = DescriptorFormat::from_path(path)
            .ok_or_else(|| SiteError::UnsupportedFormat(path.to_path_buf()))?;

        let content = std::fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if content.trim().is_empty() {
            return Err(SiteError::Empty(path.to_path_buf()));
        }

        if max_depth > MAX_SUPPORTED_DEPTH {
            tracing::warn!(
                max_depth,
                supported = MAX_SUPPORTED_DEPTH,
                "Requested sidebar depth is above what descriptor parsers can load"
            );
        }

        tracing::debug!(path = %path.display(), ?format, "Loading site descriptor");
        let value = format.parse(&content)?;
        let descriptor = Self::from_value_with_depth(&value, max_depth)?;

        tracing::debug!(
            groups = descriptor.theme_config.sidebar.group_count(),
            leaves = descriptor.theme_config.sidebar.leaf_count(),
            "Site descriptor parsed"
        );
        Ok(descriptor)
    }

    /// Build a descriptor from an untyped value with the default depth bound.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Schema`] if a field has the wrong type or the
    /// sidebar is malformed.
    pub fn from_value(value: &Value) -> Result<Self, SiteError> {
        Self::from_value_with_depth(value, sidebar::DEFAULT_MAX_DEPTH)
    }

    /// Build a descriptor from an untyped value.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Schema`] if a field has the wrong type or the
    /// sidebar is malformed or nested deeper than `max_depth`.
    pub fn from_value_with_depth(value: &Value, max_depth: usize) -> Result<Self, SiteError> {
        let fields = as_object(value, "descriptor")?;
        let defaults = Self::default();

        let theme_config = match fields.get("themeConfig") {
            Some(theme) => ThemeConfig::from_value(theme, max_depth)?,
            None => ThemeConfig::default(),
        };

        Ok(Self {
            base: optional_string(fields, "base")?.unwrap_or(defaults.base),
            dest: optional_string(fields, "dest")?,
            title: optional_string(fields, "title")?.unwrap_or_default(),
            description: optional_string(fields, "description")?.unwrap_or_default(),
            theme_config,
            extra: extra_fields(fields, &DESCRIPTOR_KEYS),
        })
    }

    /// Validate field values and sidebar path uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] for bad field values or
    /// [`SiteError::DuplicatePath`] for a repeated sidebar path.
    pub fn validate(&self) -> Result<(), SiteError> {
        self.validate_fields()?;
        sidebar::validate_unique_paths_at(&self.theme_config.sidebar, SIDEBAR_LOCATION)?;
        Ok(())
    }

    /// Validate field values only, leaving duplicate sidebar paths unchecked.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] if `base` or `dest` is malformed.
    pub fn validate_fields(&self) -> Result<(), SiteError> {
        if !self.base.starts_with('/') || !self.base.ends_with('/') {
            return Err(SiteError::Validation(format!(
                "base must start and end with '/', got '{}'",
                self.base
            )));
        }
        if self.dest.as_deref().is_some_and(|dest| dest.trim().is_empty()) {
            return Err(SiteError::Validation("dest cannot be empty".to_owned()));
        }
        Ok(())
    }

    /// Render the descriptor in the external tool's format.
    #[must_use]
    pub fn render(&self) -> Value {
        let mut fields = Map::new();
        fields.insert("base".to_owned(), Value::String(self.base.clone()));
        if let Some(dest) = &self.dest {
            fields.insert("dest".to_owned(), Value::String(dest.clone()));
        }
        fields.insert("title".to_owned(), Value::String(self.title.clone()));
        fields.insert(
            "description".to_owned(),
            Value::String(self.description.clone()),
        );
        fields.insert("themeConfig".to_owned(), self.theme_config.render());
        fields.extend(self.extra.clone());
        Value::Object(fields)
    }
}

impl ThemeConfig {
    fn from_value(value: &Value, max_depth: usize) -> Result<Self, SiteError> {
        let fields = as_object(value, "themeConfig")?;

        let edit_links = match fields.get("editLinks") {
            Some(Value::Bool(edit_links)) => Some(*edit_links),
            Some(other) => {
                return Err(SchemaError::new(
                    "themeConfig",
                    SchemaErrorKind::FieldType {
                        field: "editLinks",
                        expected: "a boolean",
                        found: value_kind(other),
                    },
                )
                .into());
            }
            None => None,
        };

        let sidebar = match fields.get("sidebar") {
            Some(raw) => SidebarParser::new()
                .max_depth(max_depth)
                .root(SIDEBAR_LOCATION)
                .parse(raw)?,
            None => SidebarTree::default(),
        };

        Ok(Self {
            edit_links,
            sidebar,
            extra: extra_fields(fields, &THEME_KEYS),
        })
    }

    /// Render the theme section in the external tool's format.
    #[must_use]
    pub fn render(&self) -> Value {
        let mut fields = Map::new();
        if let Some(edit_links) = self.edit_links {
            fields.insert("editLinks".to_owned(), Value::Bool(edit_links));
        }
        fields.insert("sidebar".to_owned(), sidebar::render(&self.sidebar));
        fields.extend(self.extra.clone());
        Value::Object(fields)
    }
}

fn as_object<'a>(value: &'a Value, location: &str) -> Result<&'a Map<String, Value>, SchemaError> {
    value.as_object().ok_or_else(|| {
        SchemaError::new(location, SchemaErrorKind::NotAnObject(value_kind(value)))
    })
}

fn optional_string(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, SchemaError> {
    match fields.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(SchemaError::new(
            "descriptor",
            SchemaErrorKind::FieldType {
                field,
                expected: "a string",
                found: value_kind(other),
            },
        )),
    }
}

fn extra_fields(fields: &Map<String, Value>, known: &[&str]) -> Map<String, Value> {
    fields
        .iter()
        .filter(|(key, _)| !known.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
