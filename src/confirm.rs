//! Interactive confirmation for the experimental Arch Linux backend.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::warn;

use crate::output::{Logger, Severity};

/// Advisory shown before updating with pacman.
pub const ARCH_ADVISORY: &str = "\
Updating Arch Linux packages with wsupdate is EXPERIMENTAL.

wsupdate runs a full system upgrade (pacman -Syu, or your AUR helper) with
no review step. Arch Linux expects you to read the news before upgrading:

    https://archlinux.org/news/

Manual interventions announced there are NOT handled, and an interrupted
upgrade can leave the system partially upgraded and unbootable.

Pass --skip-arch-warning to suppress this prompt.";

/// Asks the operator to accept or decline.
pub trait Confirm {
    /// Show `advisory` and return the operator's raw answer line.
    fn ask(&self, advisory: &str) -> Result<String>;
}

/// Only an exact (trimmed) lowercase `y` accepts.
pub fn accepts(input: &str) -> bool {
    input.trim() == "y"
}

/// Reads the answer from stdin.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn ask(&self, advisory: &str) -> Result<String> {
        println!("\n{advisory}\n");
        print!("Continue? [y/N] ");
        std::io::stdout().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut input)
            .context("Failed to read confirmation from stdin")?;
        Ok(input)
    }
}

/// Run the gate. Returns true if the guarded backend may proceed.
///
/// A failed read (or EOF, which yields an empty line) declines.
pub fn arch_gate(logger: &dyn Logger, confirm: &dyn Confirm, skip_warning: bool) -> bool {
    if skip_warning {
        logger.log("Skipped the Arch Linux warning.", Severity::Warn);
        return true;
    }

    logger.log("Please read the following warning.", Severity::Warn);
    match confirm.ask(ARCH_ADVISORY) {
        Ok(input) => accepts(&input),
        Err(e) => {
            warn!("{e:#}");
            false
        }
    }
}
