//! Flatpak application updates.

use super::{Backend, Session};

pub struct FlatpakBackend {
    system: bool,
    user: bool,
}

impl FlatpakBackend {
    pub fn new(system: bool, user: bool) -> Self {
        Self { system, user }
    }

    fn argv(&self) -> Vec<&'static str> {
        let mut argv = vec!["flatpak", "upgrade", "-y"];
        if self.system {
            argv.push("--system");
        }
        if self.user {
            argv.push("--user");
        }
        argv
    }
}

impl Backend for FlatpakBackend {
    fn name(&self) -> &'static str {
        "Flatpak"
    }

    fn binary(&self) -> &'static str {
        "flatpak"
    }

    fn section(&self) -> &'static str {
        "Updating Flatpak applications..."
    }

    fn update(&self, session: &Session<'_>) {
        session.exec(&self.argv());
    }
}
