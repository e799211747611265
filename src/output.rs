//! Operator-facing log lines.
//!
//! Every message the operator is meant to read goes through a [`Logger`],
//! tagged with a [`Severity`]. Two presentations exist:
//!
//! - Plain: `INFO\t:: Updating pipx applications...`
//! - Decorated: the same message, bold and colored by severity
//!
//! Internal diagnostics use `tracing` instead and go to stderr.

use std::fmt;

use owo_colors::{AnsiColors, OwoColorize, Style};

/// Presentation tag of a log line. Carries no control-flow meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Error,
    Ok,
    Warn,
    Info,
    #[default]
    Section,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Ok => "OK",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Section => "SECTION",
        }
    }

    /// Foreground color for decorated output.
    pub fn color(self) -> AnsiColors {
        match self {
            Severity::Error => AnsiColors::Red,
            Severity::Ok => AnsiColors::Green,
            Severity::Warn => AnsiColors::Yellow,
            Severity::Info => AnsiColors::Blue,
            Severity::Section => AnsiColors::White,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How log lines are rendered for the whole process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationMode {
    #[default]
    Decorated,
    Plain,
}

impl PresentationMode {
    pub fn from_flags(plain: bool) -> Self {
        if plain {
            PresentationMode::Plain
        } else {
            PresentationMode::Decorated
        }
    }

    pub fn logger(self) -> Box<dyn Logger> {
        match self {
            PresentationMode::Plain => Box::new(PlainLogger),
            PresentationMode::Decorated => Box::new(DecoratedLogger),
        }
    }
}

/// Writes one operator-facing line per call.
pub trait Logger: Send + Sync {
    fn log(&self, message: &str, severity: Severity);
}

/// Header labels instead of colors, for logs and dumb terminals.
pub struct PlainLogger;

impl PlainLogger {
    pub fn render(message: &str, severity: Severity) -> String {
        format!("{severity}\t:: {message}")
    }
}

impl Logger for PlainLogger {
    fn log(&self, message: &str, severity: Severity) {
        println!("{}", Self::render(message, severity));
    }
}

/// Bold, severity-colored lines.
pub struct DecoratedLogger;

impl DecoratedLogger {
    pub fn render(message: &str, severity: Severity) -> String {
        let style = Style::new().bold().color(severity.color());
        format!(":: {message}").style(style).to_string()
    }
}

impl Logger for DecoratedLogger {
    fn log(&self, message: &str, severity: Severity) {
        println!("{}", Self::render(message, severity));
    }
}
