//! Application context.
//!
//! [`AppContext`] holds the working directory and the resolved
//! [`ToolConfig`] shared by the import and schema commands.

use std::path::{Path, PathBuf};

use crate::config::ToolConfig;

/// The main application context.
#[derive(Debug, Default, Clone)]
pub struct AppContext {
    /// Directory relative paths are resolved against.
    pub workdir: PathBuf,
    /// Effective configuration.
    pub config: ToolConfig,
}

impl AppContext {
    /// Creates a context with default configuration.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            ..Default::default()
        }
    }

    /// Loads the context for the current directory.
    ///
    /// # Errors
    ///
    /// See [`AppContext::load_in`].
    pub fn load(config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        Self::load_in(std::env::current_dir()?, config_path)
    }

    /// Loads the context for `workdir`.
    ///
    /// An explicit `config_path` must exist. Without one,
    /// [`ToolConfig::FILE_NAME`] in `workdir` is used when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed.
    pub fn load_in(workdir: PathBuf, config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config_path = match config_path {
            Some(path) => Some(workdir.join(path)),
            None => {
                let default = workdir.join(ToolConfig::FILE_NAME);
                default.is_file().then_some(default)
            }
        };

        let config = match &config_path {
            Some(path) => {
                debug!("loading config from {}", path.display());
                ToolConfig::load(path)?
            }
            None => ToolConfig::default(),
        };

        Ok(Self { workdir, config })
    }

    /// Resolves `path` against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.workdir.join(path)
    }
}
