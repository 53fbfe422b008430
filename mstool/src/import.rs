//! Renderer profile directory import.
//!
//! Every file in `<PMS_DIR>/renderers` matching the configured pattern is
//! translated into a file of the same name in `<RESOURCES_DIR>/renderers`.
//! Files are processed in sorted order and the run stops at the first
//! error. Files written before the error are left in place.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use glob::{MatchOptions, Pattern};

use crate::ctx::AppContext;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

impl AppContext {
    /// Translates all renderer profiles from `pms_dir` into `resources_dir`.
    ///
    /// The destination path of each file is printed before it is written.
    ///
    /// # Returns
    ///
    /// The paths of the written files.
    ///
    /// # Errors
    ///
    /// Returns an error if the source renderer directory is missing, if a
    /// profile is malformed, or if a file cannot be read or written.
    pub fn import_renderers(
        &self,
        pms_dir: &Path,
        resources_dir: &Path,
    ) -> anyhow::Result<Vec<PathBuf>> {
        let config = &self.config.import;
        let src_dir = self.resolve(pms_dir).join(&config.renderer_dir);
        let dst_dir = self.resolve(resources_dir).join(&config.renderer_dir);

        if !src_dir.is_dir() {
            bail!("renderer directory not found: {}", src_dir.display());
        }

        let sources = renderer_sources(&src_dir, &config.pattern)?;
        debug!(
            "{} renderer profiles in {}",
            sources.len(),
            src_dir.display()
        );

        if config.create_dest {
            fs::create_dir_all(&dst_dir)
                .with_context(|| format!("failed to create {}", dst_dir.display()))?;
        }

        let mut written = Vec::with_capacity(sources.len());
        for src in sources {
            let Some(name) = src.file_name() else {
                continue;
            };
            let dst = dst_dir.join(name);
            println!("{}", dst.display());

            rendconf::translate_file(&src, &dst)
                .with_context(|| format!("failed to translate {}", src.display()))?;
            written.push(dst);
        }

        info!(
            "translated {} renderer profiles into {}",
            written.len(),
            dst_dir.display()
        );
        Ok(written)
    }
}

/// Lists the files in `dir` whose name matches `pattern`, sorted.
///
/// Names starting with `.` only match a pattern that starts with `.`.
///
/// # Errors
///
/// Returns an error on an invalid pattern or an unreadable directory.
pub fn renderer_sources(dir: &Path, pattern: &str) -> anyhow::Result<Vec<PathBuf>> {
    let pattern =
        Pattern::new(pattern).with_context(|| format!("invalid renderer pattern: {pattern}"))?;

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            warn!("skipping non UTF-8 file name in {}", dir.display());
            continue;
        };

        let path = entry.path();
        if pattern.matches_with(name, MATCH_OPTIONS) && path.is_file() {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}
