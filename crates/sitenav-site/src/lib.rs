//! Site descriptor and sidebar schema for sitenav.
//!
//! This crate provides:
//! - [`SidebarTree`]: typed sidebar navigation with [`parse_sidebar`],
//!   [`validate_unique_paths`] and [`render`]
//! - [`SiteDescriptor`]: site metadata loaded from JSON, YAML or TOML
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use sitenav_site::{DEFAULT_MAX_DEPTH, SiteDescriptor};
//!
//! let descriptor = SiteDescriptor::load(Path::new("docs/.vuepress/config.json"), DEFAULT_MAX_DEPTH)?;
//! descriptor.validate()?;
//!
//! let rendered = descriptor.render();
//! # Ok(())
//! # }
//! ```

mod descriptor;
mod sidebar;

pub use descriptor::{DescriptorFormat, SiteDescriptor, SiteError, ThemeConfig};
pub use sidebar::{
    DEFAULT_MAX_DEPTH, DuplicatePathError, Leaves, MAX_SUPPORTED_DEPTH, SchemaError,
    SchemaErrorKind, SidebarNode, SidebarParser, SidebarTree, parse_sidebar,
    parse_sidebar_with_depth, render, validate_unique_paths,
};
