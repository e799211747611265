//! Optional configuration file.
//!
//! Lives at `$XDG_CONFIG_HOME/wsupdate/config.json` unless `--config` or
//! `WSUPDATE_CONFIG` points elsewhere. Every field is optional:
//!
//! ```json
//! {
//!   "plain": false,
//!   "flatpak": { "system": true, "user": false },
//!   "packagekit": { "offline": true },
//!   "arch": { "update": true, "skip_warning": false, "use_pkcon": false }
//! }
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub plain: bool,
    pub brief: bool,
    pub dryrun: bool,
    pub flatpak: FlatpakConfig,
    pub packagekit: PackageKitConfig,
    pub arch: ArchConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlatpakConfig {
    pub system: bool,
    pub user: bool,
}

impl Default for FlatpakConfig {
    fn default() -> Self {
        Self {
            system: true,
            user: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageKitConfig {
    /// Stage package updates for the next boot.
    pub offline: bool,
}

impl Default for PackageKitConfig {
    fn default() -> Self {
        Self { offline: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArchConfig {
    pub update: bool,
    pub skip_warning: bool,
    pub use_pkcon: bool,
}

/// Default config location, if a home directory can be determined.
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "wsupdate").map(|d| d.config_dir().join("config.json"))
}

impl Config {
    /// Load the file the operator named, or the default one.
    ///
    /// A missing default file yields the defaults; a missing named file is an
    /// error.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("Configuration file {} does not exist", path.display());
                }
                Self::load(path)
            }
            None => match default_path() {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}
