//! Configuration file discovery and loading

use super::morph_config::MorphConfig;
use crate::error::MorphError;
use crate::result::Result;
use std::path::{Path, PathBuf};

/// File names searched for, in priority order
pub const CONFIG_FILE_NAMES: [&str; 5] = [
    ".morphmaprc.json",
    ".morphmaprc.toml",
    "morphmap.yaml",
    "morphmap.yml",
    "morphmap.json",
];

/// Configuration loader for discovering and loading config files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover a config file by traversing upward from `start_path`
    ///
    /// Each directory is checked for [`CONFIG_FILE_NAMES`] in order before
    /// moving to its parent, until the filesystem root is reached.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| MorphError::config_error(format!("Invalid path: {e}")))?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.is_file() {
                    tracing::debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => break,
            }
        }

        Ok(None)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<MorphConfig> {
        MorphConfig::load(path)
    }

    /// Load config from an explicit path or auto-discover one
    ///
    /// Returns `Ok(None)` when nothing was given and nothing was found;
    /// callers fall back to defaults.
    pub fn load(custom_path: Option<&Path>, start_dir: Option<&Path>) -> Result<Option<MorphConfig>> {
        let config_path = match custom_path {
            Some(path) => {
                if !path.exists() {
                    return Err(MorphError::config_error(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => {
                let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
                match Self::auto_discover(search_dir)? {
                    Some(found) => found,
                    None => {
                        tracing::debug!("No config file found, using defaults");
                        return Ok(None);
                    }
                }
            }
        };

        Self::load_from_file(&config_path).map(Some)
    }
}
