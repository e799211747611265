//! Execution strategies for external update commands.
//!
//! Every backend issues its commands through the [`Executor`] trait, so the
//! choice between running, silently running, or merely echoing a command is
//! made exactly once at startup (see [`RunMode`]) and never again.
//!
//! # Exit statuses
//!
//! An executor always answers with a plain integer status. A command that
//! cannot be launched at all is reported as [`LAUNCH_FAILURE`] rather than
//! bubbling an error up, because the pipeline treats every backend failure
//! the same way: the operator sees it, the run continues.

use std::process::{Command, ExitStatus, Stdio};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use crate::backends::AUR_HELPERS;
use crate::error::UpdateError;

/// Status reported when a command could not be started (shell convention).
pub const LAUNCH_FAILURE: i32 = 127;

/// How external commands are carried out for the whole process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Run with inherited stdio so the operator sees live output.
    #[default]
    Direct,
    /// Run with stdout and stderr discarded.
    Suppressed,
    /// Print the command as a shell comment, run nothing.
    EchoOnly,
}

impl RunMode {
    /// Resolve the mode from operator flags. Dry-run wins over brief.
    pub fn from_flags(brief: bool, dryrun: bool) -> Self {
        if dryrun {
            RunMode::EchoOnly
        } else if brief {
            RunMode::Suppressed
        } else {
            RunMode::Direct
        }
    }

    /// Build the executor implementing this mode.
    pub fn executor(self) -> Box<dyn Executor> {
        match self {
            RunMode::Direct => Box::new(DirectExecutor),
            RunMode::Suppressed => Box::new(QuietExecutor),
            RunMode::EchoOnly => Box::new(EchoExecutor),
        }
    }
}

/// Turns an argument vector into an exit status.
///
/// `argv[0]` is the program; it is resolved on `PATH` by the OS, never by a
/// shell, so arguments are passed through literally.
pub trait Executor: Send + Sync {
    fn execute(&self, argv: &[&str]) -> i32;
}

/// Render an argument vector the way [`EchoExecutor`] prints it.
pub fn render_command(argv: &[&str]) -> String {
    let joined = shlex::try_join(argv.iter().copied()).unwrap_or_else(|_| argv.join(" "));
    format!("# {joined}")
}

/// Echo-only strategy used for `--dryrun`.
pub struct EchoExecutor;

impl Executor for EchoExecutor {
    fn execute(&self, argv: &[&str]) -> i32 {
        println!("{}", render_command(argv));
        0
    }
}

/// Runs the command with inherited stdio.
pub struct DirectExecutor;

impl Executor for DirectExecutor {
    fn execute(&self, argv: &[&str]) -> i32 {
        status_code(argv, spawn(argv, false))
    }
}

/// True if the command may read from the terminal (a sudo password, or an
/// AUR helper asking to proceed). A spinner would draw over the prompt.
pub fn may_prompt(argv: &[&str]) -> bool {
    argv.first()
        .is_some_and(|program| *program == "sudo" || AUR_HELPERS.contains(program))
}

/// Runs the command with its output discarded, showing a spinner meanwhile.
///
/// Commands that may prompt run without the spinner.
pub struct QuietExecutor;

impl Executor for QuietExecutor {
    fn execute(&self, argv: &[&str]) -> i32 {
        if may_prompt(argv) {
            return status_code(argv, spawn(argv, true));
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("valid template"),
        );
        spinner.set_message(format!("Running {}", argv.join(" ")));
        spinner.enable_steady_tick(Duration::from_millis(80));

        let result = spawn(argv, true);
        spinner.finish_and_clear();
        status_code(argv, result)
    }
}

fn spawn(argv: &[&str], quiet: bool) -> Result<ExitStatus, UpdateError> {
    let Some((program, args)) = argv.split_first() else {
        return Err(UpdateError::Launch {
            program: String::new(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
        });
    };

    debug!(?argv, quiet, "Spawning command");

    let mut cmd = Command::new(program);
    cmd.args(args);
    if quiet {
        cmd.stdout(Stdio::null()).stderr(Stdio::null());
    }
    cmd.status().map_err(|source| UpdateError::Launch {
        program: program.to_string(),
        source,
    })
}

fn status_code(argv: &[&str], result: Result<ExitStatus, UpdateError>) -> i32 {
    match result {
        // Killed by a signal: no code, still a failure.
        Ok(status) => status.code().unwrap_or(1),
        Err(e) => {
            warn!(?argv, "{e}");
            LAUNCH_FAILURE
        }
    }
}
