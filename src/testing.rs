//! In-memory fakes for unit tests that drive the pipeline without touching
//! the host.
//!
//! [`RecordingExecutor`] records every argument vector and answers with
//! scripted exit statuses, [`RecordingLogger`] keeps log lines,
//! [`FakeProbe`] describes an imaginary host, and [`ScriptedConfirm`] plays
//! the operator at the confirmation prompt.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow};

use crate::confirm::Confirm;
use crate::executor::Executor;
use crate::output::{Logger, Severity};
use crate::probe::HostProbe;

#[derive(Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<Vec<String>>>,
    statuses: HashMap<String, i32>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command` (space-joined argv) exit with `status`. Others exit 0.
    pub fn with_status(mut self, command: &str, status: i32) -> Self {
        self.statuses.insert(command.to_string(), status);
        self
    }

    /// Every recorded command, space-joined.
    pub fn commands(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|argv| argv.join(" "))
            .collect()
    }

    /// Recorded commands whose program is `program`.
    pub fn commands_for(&self, program: &str) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|argv| argv.first().is_some_and(|p| p == program))
            .map(|argv| argv.join(" "))
            .collect()
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl Executor for RecordingExecutor {
    fn execute(&self, argv: &[&str]) -> i32 {
        self.calls
            .lock()
            .unwrap()
            .push(argv.iter().map(|s| s.to_string()).collect());
        self.statuses
            .get(&argv.join(" "))
            .copied()
            .unwrap_or(0)
    }
}

#[derive(Default)]
pub struct RecordingLogger {
    lines: Mutex<Vec<(String, Severity)>>,
}

impl RecordingLogger {
    pub fn lines(&self) -> Vec<(String, Severity)> {
        self.lines.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lines().into_iter().map(|(m, _)| m).collect()
    }

    pub fn severities(&self) -> Vec<Severity> {
        self.lines().into_iter().map(|(_, s)| s).collect()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.lines().iter().filter(|(_, s)| *s == severity).count()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, message: &str, severity: Severity) {
        self.lines
            .lock()
            .unwrap()
            .push((message.to_string(), severity));
    }
}

/// An imaginary Linux host with no binaries until some are added.
pub struct FakeProbe {
    linux: bool,
    arch: bool,
    binaries: HashSet<String>,
    arch_probes: AtomicUsize,
}

impl Default for FakeProbe {
    fn default() -> Self {
        Self {
            linux: true,
            arch: false,
            binaries: HashSet::new(),
            arch_probes: AtomicUsize::new(0),
        }
    }
}

impl FakeProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_binaries<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        self.binaries.extend(names.into_iter().map(str::to_string));
        self
    }

    pub fn arch(mut self) -> Self {
        self.arch = true;
        self
    }

    pub fn not_linux(mut self) -> Self {
        self.linux = false;
        self
    }

    /// How often the Arch marker was consulted.
    pub fn arch_probes(&self) -> usize {
        self.arch_probes.load(Ordering::SeqCst)
    }
}

impl HostProbe for FakeProbe {
    fn is_linux(&self) -> bool {
        self.linux
    }

    fn binary_exists(&self, name: &str) -> bool {
        self.binaries.contains(name)
    }

    fn is_native_arch_distro(&self) -> bool {
        self.arch_probes.fetch_add(1, Ordering::SeqCst);
        self.arch
    }
}

/// Answers the confirmation prompt with a fixed line.
pub struct ScriptedConfirm {
    answer: Option<String>,
    asked: Cell<usize>,
}

impl ScriptedConfirm {
    pub fn answer(line: &str) -> Self {
        Self {
            answer: Some(line.to_string()),
            asked: Cell::new(0),
        }
    }

    /// Simulates a broken stdin.
    pub fn failing() -> Self {
        Self {
            answer: None,
            asked: Cell::new(0),
        }
    }

    pub fn asked(&self) -> usize {
        self.asked.get()
    }
}

impl Confirm for ScriptedConfirm {
    fn ask(&self, _advisory: &str) -> Result<String> {
        self.asked.set(self.asked.get() + 1);
        self.answer
            .clone()
            .ok_or_else(|| anyhow!("stdin closed"))
    }
}
