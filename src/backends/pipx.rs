//! pipx application upgrades.

use super::{Backend, Session};

pub struct PipxBackend;

impl Backend for PipxBackend {
    fn name(&self) -> &'static str {
        "pipx"
    }

    fn binary(&self) -> &'static str {
        "pipx"
    }

    fn section(&self) -> &'static str {
        "Updating pipx applications..."
    }

    fn update(&self, session: &Session<'_>) {
        session.exec(&["pipx", "upgrade-all"]);
    }
}
