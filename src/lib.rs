//! wsupdate - a comprehensive and extendable Linux system updater.
//!
//! Sequences updates across Flatpak, Distrobox, pipx, PackageKit, Arch Linux
//! packages (pacman or an AUR helper) and firmware (fwupd).
//!
//! # Strategies
//!
//! Two choices are made once at startup and passed down unchanged:
//!
//! - [`executor::RunMode`]: run commands, run them silently, or only print them
//! - [`output::PresentationMode`]: colored or plain log lines
//!
//! Backends see them only through the [`executor::Executor`] and
//! [`output::Logger`] traits, plus [`probe::HostProbe`] for environment
//! checks, so unit tests drive the whole pipeline with in-memory fakes.

pub mod backends;
pub mod cli;
pub mod config;
pub mod confirm;
pub mod error;
pub mod executor;
pub mod output;
pub mod pipeline;
pub mod probe;
#[cfg(test)]
mod testing;

pub use cli::Cli;
pub use error::UpdateError;
pub use pipeline::RunContext;
