//! The update pipeline.
//!
//! Backends run in a fixed order:
//!
//! 1. Flatpak, Distrobox, pipx
//! 2. PackageKit and/or Arch Linux packages, depending on [`route`]
//! 3. Firmware, always last
//!
//! No backend's outcome affects whether a later one runs.

use std::cell::OnceCell;

use tracing::debug;

use crate::backends::{
    self, ArchBackend, Backend, DistroboxBackend, FlatpakBackend, FwupdBackend,
    PackageKitBackend, PipxBackend, Session,
};
use crate::cli::Cli;
use crate::config::Config;
use crate::confirm::Confirm;
use crate::error::UpdateError;
use crate::output::Severity;

/// Flags that shape a run. Built once from config and CLI, then read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunContext {
    /// Update system-wide Flatpak installations.
    pub system: bool,
    /// Update per-user Flatpak installations.
    pub user: bool,
    /// Stage PackageKit updates for the next boot.
    pub offline: bool,
    pub update_arch: bool,
    pub skip_arch_warning: bool,
    /// Run PackageKit even on Arch Linux hosts.
    pub use_pkcon_on_arch: bool,
}

impl Default for RunContext {
    fn default() -> Self {
        Self {
            system: true,
            user: true,
            offline: true,
            update_arch: false,
            skip_arch_warning: false,
            use_pkcon_on_arch: false,
        }
    }
}

impl RunContext {
    /// Merge the config file with CLI flags. A flag can only switch
    /// something on.
    pub fn from_sources(cli: &Cli, config: &Config) -> Self {
        Self {
            system: config.flatpak.system,
            user: config.flatpak.user,
            offline: config.packagekit.offline,
            update_arch: cli.update_arch || config.arch.update,
            skip_arch_warning: cli.skip_arch_warning || config.arch.skip_warning,
            use_pkcon_on_arch: cli.use_pkcon_on_arch || config.arch.use_pkcon,
        }
    }
}

/// Which package-manager backends run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routing {
    pub packagekit: bool,
    pub arch: bool,
}

/// Decide the package-manager backends.
///
/// `is_arch` is only called when the answer matters.
pub fn route(ctx: &RunContext, is_arch: impl Fn() -> bool) -> Routing {
    Routing {
        packagekit: ctx.use_pkcon_on_arch || !is_arch(),
        arch: ctx.update_arch && is_arch(),
    }
}

/// Run every backend. Fails only if the host is not Linux.
pub fn run(ctx: &RunContext, session: &Session<'_>, confirm: &dyn Confirm) -> Result<(), UpdateError> {
    run_with_notices(ctx, session, confirm, &[])
}

/// Like [`run`], logging startup `notices` (e.g. config problems) as warnings
/// once the host is known to be supported.
pub fn run_with_notices(
    ctx: &RunContext,
    session: &Session<'_>,
    confirm: &dyn Confirm,
    notices: &[String],
) -> Result<(), UpdateError> {
    if !session.probe.is_linux() {
        session.log(
            "This program is designed to run only on Linux-based systems.",
            Severity::Error,
        );
        return Err(UpdateError::PlatformUnsupported);
    }

    for notice in notices {
        session.log(notice, Severity::Warn);
    }

    attempt(&FlatpakBackend::new(ctx.system, ctx.user), session);
    attempt(&DistroboxBackend, session);
    attempt(&PipxBackend, session);

    let arch = OnceCell::new();
    let routing = route(ctx, || *arch.get_or_init(|| session.probe.is_native_arch_distro()));
    debug!(?routing, arch_host = ?arch.get(), "Package manager routing");

    if routing.packagekit {
        attempt(&PackageKitBackend::new(ctx.offline), session);
    }
    if routing.arch {
        attempt(&ArchBackend::new(ctx.skip_arch_warning, confirm), session);
    }

    attempt(&FwupdBackend, session);

    session.log("Upgrade complete!", Severity::Ok);
    Ok(())
}

fn attempt(backend: &dyn Backend, session: &Session<'_>) {
    if let Err(e) = backends::run(backend, session) {
        debug!(backend = backend.name(), "{e}");
    }
}
