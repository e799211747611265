//! System package updates through PackageKit's `pkcon`.
//!
//! This is the baseline package backend on most distributions, so its
//! absence is logged as an error rather than a warning.

use super::{Backend, Session};
use crate::output::Severity;

pub struct PackageKitBackend {
    /// Download now, install on next boot.
    offline: bool,
}

impl PackageKitBackend {
    pub fn new(offline: bool) -> Self {
        Self { offline }
    }
}

impl Backend for PackageKitBackend {
    fn name(&self) -> &'static str {
        "PackageKit (pkcon)"
    }

    fn binary(&self) -> &'static str {
        "pkcon"
    }

    fn section(&self) -> &'static str {
        "Updating system packages with PackageKit..."
    }

    fn missing_severity(&self) -> Severity {
        Severity::Error
    }

    fn update(&self, session: &Session<'_>) {
        if self.offline {
            session.exec(&["pkcon", "update", "-d", "-y"]);
            if session.exec(&["pkcon", "offline-trigger"]) == 0 {
                session.log("System packages will be updated on next boot.", Severity::Info);
            }
        } else {
            session.exec(&["pkcon", "update", "-y"]);
        }
    }
}
