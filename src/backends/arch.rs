//! Arch Linux package updates (experimental).
//!
//! Guarded by the confirmation gate. An installed AUR helper takes over the
//! whole upgrade (it wraps pacman itself); plain `sudo pacman -Syu` is the
//! fallback when none is found.

use tracing::debug;

use super::{Backend, Session};
use crate::confirm::{Confirm, arch_gate};
use crate::error::UpdateError;
use crate::output::Severity;

/// AUR helpers in order of preference. The first one found wins.
pub const AUR_HELPERS: [&str; 2] = ["yay", "paru"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AurOutcome {
    /// The named helper ran the upgrade.
    Handled(&'static str),
    NotHandled,
}

/// Upgrade with the first available AUR helper.
pub fn update_with_aur_helper(session: &Session<'_>) -> AurOutcome {
    for helper in AUR_HELPERS {
        if session.probe.binary_exists(helper) {
            debug!(helper, "Selected AUR helper");
            session.exec(&[helper, "-Syu"]);
            return AurOutcome::Handled(helper);
        }
    }

    session.log(
        "No supported AUR helper found, falling back to pacman...",
        Severity::Warn,
    );
    AurOutcome::NotHandled
}

pub struct ArchBackend<'a> {
    skip_warning: bool,
    confirm: &'a dyn Confirm,
}

impl<'a> ArchBackend<'a> {
    pub fn new(skip_warning: bool, confirm: &'a dyn Confirm) -> Self {
        Self {
            skip_warning,
            confirm,
        }
    }
}

impl Backend for ArchBackend<'_> {
    fn name(&self) -> &'static str {
        "pacman"
    }

    fn binary(&self) -> &'static str {
        "pacman"
    }

    fn section(&self) -> &'static str {
        "Updating Arch Linux packages..."
    }

    fn prepare(&self, session: &Session<'_>) -> Result<(), UpdateError> {
        if arch_gate(session.logger, self.confirm, self.skip_warning) {
            Ok(())
        } else {
            session.log("Skipping Arch Linux package updates.", Severity::Info);
            Err(UpdateError::declined(self.name()))
        }
    }

    fn update(&self, session: &Session<'_>) {
        if update_with_aur_helper(session) == AurOutcome::NotHandled {
            session.exec(&["sudo", "pacman", "-Syu"]);
        }
    }
}
