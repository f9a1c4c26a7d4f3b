use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{DocRefError, Result};
use crate::manual::{builtin_table, MANUAL_PREFIX};
use crate::resolution::{MappingTable, ReferenceResolver};
use crate::types::MappingEntry;

/// Default name of the configuration file, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "docref.toml";

/// Configuration for a resolver.
///
/// Extra mappings are evaluated before the built-in table, in file order.
/// Fields missing from the file take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocRefConfig {
    /// Schema version of the configuration.
    pub version: u32,
    /// Base URL that matched targets are appended to.
    pub prefix: String,
    /// Whether the built-in manual table follows the extra mappings.
    pub use_builtin: bool,
    /// Extra mappings, tried first.
    pub mappings: Vec<MappingEntry>,
}

impl Default for DocRefConfig {
    fn default() -> Self {
        Self {
            version: 1,
            prefix: MANUAL_PREFIX.to_string(),
            use_builtin: true,
            mappings: Vec::new(),
        }
    }
}

impl DocRefConfig {
    /// Builds a resolver from this configuration.
    ///
    /// Fails if one of the extra mappings has an invalid pattern.
    pub fn build_resolver(&self) -> Result<ReferenceResolver> {
        let mut table = MappingTable::new(self.mappings.iter().cloned())?;
        if self.use_builtin {
            table.extend(builtin_table()?);
        }
        Ok(ReferenceResolver::new(self.prefix.clone(), table))
    }
}

/// Returns the default configuration path inside `dir`.
pub fn get_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILENAME)
}

/// Loads the configuration from disk.
///
/// If the file does not exist, returns the default configuration.
pub fn load_config(path: &Path) -> Result<DocRefConfig> {
    if !path.exists() {
        return Ok(DocRefConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| DocRefError::Config {
        message: format!("failed to read config file '{}': {}", path.display(), e),
    })?;

    let config: DocRefConfig = toml::from_str(&contents).map_err(|e| DocRefError::Config {
        message: format!("failed to parse config file '{}': {}", path.display(), e),
    })?;

    Ok(config)
}

/// Saves the configuration to disk using an atomic write.
///
/// Writes to a temporary file first and then renames it to the final location,
/// so a partial write never corrupts the configuration.
pub fn save_config(path: &Path, config: &DocRefConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DocRefError::Config {
            message: format!(
                "failed to create config directory '{}': {}",
                parent.display(),
                e
            ),
        })?;
    }

    let tmp_path = path.with_extension("tmp");

    let text = toml::to_string_pretty(config).map_err(|e| DocRefError::Config {
        message: format!("failed to serialize config: {}", e),
    })?;

    fs::write(&tmp_path, &text).map_err(|e| DocRefError::Config {
        message: format!(
            "failed to write temporary config file '{}': {}",
            tmp_path.display(),
            e
        ),
    })?;

    fs::rename(&tmp_path, path).map_err(|e| DocRefError::Config {
        message: format!(
            "failed to rename temporary config file '{}' to '{}': {}",
            tmp_path.display(),
            path.display(),
            e
        ),
    })?;

    Ok(())
}
