//! Host environment detection.
//!
//! Answers the three questions routing needs: is this Linux, is a tool on
//! `PATH`, and is this an Arch Linux host.

use std::path::{Path, PathBuf};

/// Marker file present on Arch Linux installs.
pub const ARCH_RELEASE: &str = "/etc/arch-release";

/// Environment variable overriding [`ARCH_RELEASE`] (used by tests).
pub const ARCH_RELEASE_ENV: &str = "WSUPDATE_ARCH_RELEASE";

/// Queries about the host the updater runs on.
pub trait HostProbe: Send + Sync {
    fn is_linux(&self) -> bool;

    /// True iff `name` resolves to an executable on `PATH`.
    fn binary_exists(&self, name: &str) -> bool;

    fn is_native_arch_distro(&self) -> bool;
}

/// Probe backed by the real filesystem and `PATH`.
#[derive(Debug, Clone)]
pub struct SystemProbe {
    arch_marker: PathBuf,
}

impl SystemProbe {
    pub fn new(arch_marker: impl Into<PathBuf>) -> Self {
        Self {
            arch_marker: arch_marker.into(),
        }
    }

    /// Probe honoring `WSUPDATE_ARCH_RELEASE`.
    pub fn from_env() -> Self {
        match std::env::var_os(ARCH_RELEASE_ENV) {
            Some(path) => Self::new(path),
            None => Self::default(),
        }
    }

    pub fn arch_marker(&self) -> &Path {
        &self.arch_marker
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new(ARCH_RELEASE)
    }
}

impl HostProbe for SystemProbe {
    fn is_linux(&self) -> bool {
        std::env::consts::OS == "linux"
    }

    fn binary_exists(&self, name: &str) -> bool {
        which::which(name).is_ok()
    }

    fn is_native_arch_distro(&self) -> bool {
        self.arch_marker.exists()
    }
}
