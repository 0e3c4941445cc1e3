//! Configuration types for `umbrella-gen.toml`.
//!
//! Every field has a default, and the defaults describe the stock layout:
//! headers under `include/RE`, umbrella written to `include/RE/Skyrim.h`.
//! The file is optional.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::sort::SortPolicy;

/// File name looked up next to the executable.
pub const CONFIG_FILE_NAME: &str = "umbrella-gen.toml";

/// Generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Include root, relative to the executable's directory.
    pub include_dir: PathBuf,
    /// Directory scanned for headers, relative to the include root.
    pub scan_dir: PathBuf,
    /// File name of the generated umbrella header, placed in the scan directory.
    pub output: String,
    /// Extension (without the dot) a file needs to be listed. Case-sensitive.
    pub extension: String,
    /// First line of the generated file.
    pub guard: String,
    pub sort: SortPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_dir: PathBuf::from("include"),
            scan_dir: PathBuf::from("RE"),
            output: String::from("Skyrim.h"),
            extension: String::from("h"),
            guard: String::from("#pragma once"),
            sort: SortPolicy::default(),
        }
    }
}

/// Load and parse a configuration file.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = toml::from_str(&content).map_err(|source| Error::ParseConfig {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(config)
}

/// Load `path` if it exists, otherwise fall back to [`Config::default`].
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.is_file() {
        debug!(path = %path.display(), "loading config");
        load_config(path)
    } else {
        Ok(Config::default())
    }
}
