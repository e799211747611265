//! Update backends, one per external tool.
//!
//! All backends follow the same shape, enforced by [`run`]:
//!
//! 1. If the tool is not on `PATH`, log one line and skip.
//! 2. Otherwise log a section header and issue the tool's update commands.
//!
//! Backends never look at an exit status unless a follow-up command depends
//! on it, and never fail the run.

pub mod arch;
pub mod distrobox;
pub mod flatpak;
pub mod fwupd;
pub mod packagekit;
pub mod pipx;

pub use arch::{AUR_HELPERS, AurOutcome, ArchBackend};
pub use distrobox::DistroboxBackend;
pub use flatpak::FlatpakBackend;
pub use fwupd::FwupdBackend;
pub use packagekit::PackageKitBackend;
pub use pipx::PipxBackend;

use crate::error::UpdateError;
use crate::executor::Executor;
use crate::output::{Logger, Severity};
use crate::probe::HostProbe;

/// The collaborators every backend works through.
///
/// Built once at startup; nothing in it changes during a run.
#[derive(Clone, Copy)]
pub struct Session<'a> {
    pub executor: &'a dyn Executor,
    pub logger: &'a dyn Logger,
    pub probe: &'a dyn HostProbe,
}

impl<'a> Session<'a> {
    pub fn new(executor: &'a dyn Executor, logger: &'a dyn Logger, probe: &'a dyn HostProbe) -> Self {
        Self {
            executor,
            logger,
            probe,
        }
    }

    pub fn exec(&self, argv: &[&str]) -> i32 {
        self.executor.execute(argv)
    }

    pub fn log(&self, message: &str, severity: Severity) {
        self.logger.log(message, severity);
    }
}

pub trait Backend {
    /// Human-readable tool name used in skip messages.
    fn name(&self) -> &'static str;

    /// The executable whose presence makes this backend available.
    fn binary(&self) -> &'static str;

    /// Section header logged before updating.
    fn section(&self) -> &'static str;

    /// Severity of the skip message when the binary is missing.
    fn missing_severity(&self) -> Severity {
        Severity::Warn
    }

    /// Runs after the availability check, before the section header.
    fn prepare(&self, _session: &Session<'_>) -> Result<(), UpdateError> {
        Ok(())
    }

    fn update(&self, session: &Session<'_>);
}

/// Check availability, then update.
pub fn run(backend: &dyn Backend, session: &Session<'_>) -> Result<(), UpdateError> {
    if !session.probe.binary_exists(backend.binary()) {
        session.log(
            &format!("{} not available, skipping...", backend.name()),
            backend.missing_severity(),
        );
        return Err(UpdateError::unavailable(backend.name()));
    }

    backend.prepare(session)?;
    session.log(backend.section(), Severity::Section);
    backend.update(session);
    Ok(())
}
