//! # Invocation Logger
//!
//! Commands log through the narrow [`Logger`] trait: a message plus a
//! structured `serde_json::Value` context. [`LogLogger`] forwards records to
//! the `log` facade so that whatever backend the binary installs (see
//! [`crate::logging`]) receives them.
//!
//! `log` has no critical level. Critical records are emitted at
//! [`log::Level::Error`] on the `<target>::critical` sub-target, which keeps
//! them distinguishable while still matching filters on the parent target.

use serde_json::Value;
use std::fmt;

/// Severity of an invocation log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Error => "error",
            Severity::Critical => "critical",
        };
        f.write_str(label)
    }
}

/// Structured logger consumed by commands.
pub trait Logger {
    fn log(&self, severity: Severity, message: &str, context: &Value);

    fn info(&self, message: &str, context: &Value) {
        self.log(Severity::Info, message, context);
    }

    fn error(&self, message: &str, context: &Value) {
        self.log(Severity::Error, message, context);
    }

    fn critical(&self, message: &str, context: &Value) {
        self.log(Severity::Critical, message, context);
    }
}

/// [`Logger`] backed by the `log` facade.
#[derive(Debug, Clone)]
pub struct LogLogger {
    target: String,
    critical_target: String,
}

impl LogLogger {
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let critical_target = format!("{}::critical", target);
        Self {
            target,
            critical_target,
        }
    }
}

impl Default for LogLogger {
    fn default() -> Self {
        Self::new(env!("CARGO_CRATE_NAME"))
    }
}

impl Logger for LogLogger {
    fn log(&self, severity: Severity, message: &str, context: &Value) {
        let (target, level) = match severity {
            Severity::Info => (self.target.as_str(), log::Level::Info),
            Severity::Error => (self.target.as_str(), log::Level::Error),
            Severity::Critical => (self.critical_target.as_str(), log::Level::Error),
        };
        if context.is_null() {
            log::log!(target: target, level, "{}", message);
        } else {
            log::log!(target: target, level, "{} {}", message, context);
        }
    }
}
