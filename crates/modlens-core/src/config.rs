use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::DEFAULT_MANIFEST_FILE;

/// Global user configuration loaded from `~/.modlens/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub reveal: RevealConfig,

    #[serde(default)]
    pub listing: ListingConfig,
}

/// Report settings from `[reveal]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    #[serde(default = "default_manifest_file", rename = "manifest-file")]
    pub manifest_file: String,
    /// Offending modules to report on when none are given on the command line.
    #[serde(default)]
    pub offenders: Vec<String>,
    /// Replaced modules to report on when none are given on the command line.
    #[serde(default)]
    pub replaced: Vec<String>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            manifest_file: default_manifest_file(),
            offenders: Vec::new(),
            replaced: Vec::new(),
        }
    }
}

fn default_manifest_file() -> String {
    DEFAULT_MANIFEST_FILE.to_string()
}

/// External command producing a module listing, from `[listing]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
        }
    }
}

fn default_program() -> String {
    "go".to_string()
}

fn default_args() -> Vec<String> {
    ["list", "-m", "-json", "all"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl GlobalConfig {
    /// Load the global configuration from `~/.modlens/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load the configuration from `path`, or return defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            modlens_util::errors::ModlensError::Generic {
                message: format!("Failed to read global config: {e}"),
            }
        })?;
        toml::from_str(&content).map_err(|e| {
            modlens_util::errors::ModlensError::Generic {
                message: format!("Failed to parse global config: {e}"),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the modlens data directory (`~/.modlens/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".modlens")
}
