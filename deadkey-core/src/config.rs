//! Configuration loading from deadkey.toml.
//!
//! Only the three run parameters are configurable: the scan root, the
//! definitions file and the set of exempt files.

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{DeadkeyError, DeadkeyResult};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "deadkey.toml";

/// Definitions file location relative to the scan root when none is given.
pub const DEFAULT_DEFINITIONS: &str = "utils/dataTypes.js";

/// Main configuration structure for deadkey.toml.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DeadkeyConfig {
    /// Directory to scan.
    pub root: Option<PathBuf>,
    /// File to extract keys from.
    pub definitions: Option<PathBuf>,
    /// Files excluded from scanning.
    pub ignore: Option<Vec<PathBuf>>,
}

impl DeadkeyConfig {
    /// Rebase every relative path onto `base`.
    pub fn resolve_relative_to(mut self, base: &Path) -> Self {
        let rebase = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.root = self.root.map(rebase);
        self.definitions = self.definitions.map(rebase);
        self.ignore = self
            .ignore
            .map(|paths| paths.into_iter().map(rebase).collect());
        self
    }
}

/// Loads configuration from `path` if it exists.
///
/// Relative paths in the file are resolved against the file's directory.
pub fn load_config(path: &Path) -> DeadkeyResult<Option<DeadkeyConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| DeadkeyError::io(path, e))?;
    let cfg: DeadkeyConfig =
        toml::from_str(&content).map_err(|e| DeadkeyError::config(path, e.to_string()))?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(Some(cfg.resolve_relative_to(base)))
}
