//! Tool configuration.
//!
//! Configuration is read from an optional `.mstool.toml` file. Every field
//! falls back to the default behaviour of the tools, so an empty file and a
//! missing file are equivalent.
//!
//! # Configuration File Format
//!
//! ```toml
//! [import]
//! renderer_dir = "renderers"
//! pattern = "*.conf"
//! create_dest = true
//!
//! [schema]
//! style = "c"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use schema_embed::ArrayStyle;
use serde::{Deserialize, Serialize};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Renderer import settings.
    pub import: ImportConfig,
    /// Schema embedding settings.
    pub schema: SchemaConfig,
}

/// Settings for the renderer import.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    /// Sub-directory holding renderer files, under both the source and the
    /// resource directory.
    pub renderer_dir: PathBuf,
    /// Glob matched against file names in the source renderer directory.
    pub pattern: String,
    /// Whether to create the destination renderer directory when missing.
    pub create_dest: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            renderer_dir: PathBuf::from("renderers"),
            pattern: "*.conf".to_string(),
            create_dest: true,
        }
    }
}

/// Settings for the schema embedder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaConfig {
    /// Syntax of the generated array.
    pub style: ArrayStyle,
}

impl ToolConfig {
    /// File looked up in the working directory when no path is given.
    pub const FILE_NAME: &'static str = ".mstool.toml";

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid TOML, unknown keys or wrong value types.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("can not open config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }
}
