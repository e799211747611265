//! CLI argument definitions for wsupdate.
//!
//! Kept out of `main.rs` so `RunContext::from_sources` can take a `Cli`.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(name = "wsupdate")]
#[command(about = "A comprehensive and extendable Linux system updater")]
#[command(version)]
pub struct Cli {
    /// Suppress all command outputs, except highlight messages
    #[arg(short, long)]
    pub brief: bool,

    /// Print out update commands instead of executing them
    #[arg(short, long, visible_alias = "dry-run")]
    pub dryrun: bool,

    /// Use header labels instead of ANSI colours
    #[arg(short, long)]
    pub plain: bool,

    /// Update Arch Linux packages with pacman or an AUR helper (experimental)
    #[arg(long)]
    pub update_arch: bool,

    /// Don't ask for confirmation before updating Arch Linux packages
    #[arg(long)]
    pub skip_arch_warning: bool,

    /// Also run PackageKit on Arch Linux
    #[arg(long)]
    pub use_pkcon_on_arch: bool,

    /// Configuration file [default: $XDG_CONFIG_HOME/wsupdate/config.json]
    #[arg(long, env = "WSUPDATE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}
