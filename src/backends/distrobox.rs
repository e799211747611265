//! Distrobox container upgrades.

use super::{Backend, Session};

pub struct DistroboxBackend;

impl Backend for DistroboxBackend {
    fn name(&self) -> &'static str {
        "Distrobox"
    }

    fn binary(&self) -> &'static str {
        "distrobox"
    }

    fn section(&self) -> &'static str {
        "Updating Distrobox containers..."
    }

    fn update(&self, session: &Session<'_>) {
        session.exec(&["distrobox", "upgrade", "--all"]);
    }
}
