//! # Error Handling
//!
//! This module defines the error types used across the command lifecycle.
//! It uses the `thiserror` library for the library-level [`Error`] enum and
//! models the outcome of a failed command run as a tagged [`Failure`] value.
//!
//! ## Key Components
//!
//! - **`Error`**: Wiring, lookup, validation and configuration errors raised by
//!   the framework itself. A subset of these are *precondition violations*
//!   (see [`Error::is_precondition`]): they indicate a bug in the embedding
//!   application rather than a problem with the user's input.
//!
//! - **`DomainError`**: An expected, recognized failure raised by a command
//!   when a business rule or validation check fails. Domain errors map to
//!   exit code `2`.
//!
//! - **`Failure`**: What a command run yields when it does not complete. The
//!   three variants are matched exhaustively when classifying a failure into
//!   an exit code, so there is no catch-all exception hierarchy to walk.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.

use thiserror::Error;

/// Main error type for command-kit operations
#[derive(Error, Debug)]
pub enum Error {
    /// The command's style was requested before `initialize` bound one.
    #[error("Style of command \"{command}\" requested before the command was initialized")]
    StyleNotBound { command: String },

    /// A meta-command tried to dispatch without a command registry.
    #[error("No command registry is bound to command \"{command}\" (should never happen)")]
    RegistryUnavailable { command: String },

    /// A meta-command tried to dispatch itself.
    #[error("Command \"{command}\" cannot dispatch itself")]
    RecursiveDispatch { command: String },

    /// The requested command is not registered.
    ///
    /// Carries the closest registered name when one is within typo distance.
    #[error("Command \"{name}\" is not defined.{}", suggestion.as_ref().map(|s| format!("\n  hint: Did you mean \"{}\"?", s)).unwrap_or_default())]
    CommandNotFound {
        name: String,
        /// The closest registered command name, if any
        suggestion: Option<String>,
    },

    /// Parameters do not match the declared grammar of the target command.
    #[error("Invalid invocation of \"{command}\": {message}")]
    InvalidInvocation { command: String, message: String },

    /// A configuration parameter was requested but is not defined.
    #[error("Parameter \"{key}\" is not defined")]
    KeyNotFound { key: String },

    /// A parameter file could not be interpreted.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the parameter file
        hint: Option<String>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Returns `true` for lifecycle precondition violations.
    ///
    /// These signal incorrect wiring by the embedding application. They are
    /// never classified as domain or unexpected failures.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::StyleNotBound { .. }
                | Error::RegistryUnavailable { .. }
                | Error::RecursiveDispatch { .. }
        )
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// An expected failure signaling a business-rule or validation problem.
///
/// The `kind` is a short machine-friendly slug (e.g. `invalid-state`) and the
/// message is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DomainError {
    kind: String,
    message: String,
}

impl DomainError {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The tagged failure a command run produces instead of an exit outcome.
#[derive(Error, Debug)]
pub enum Failure {
    /// A recognized domain failure (exit code 2).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Any other failure (exit code 1).
    #[error(transparent)]
    Unexpected(anyhow::Error),

    /// A lifecycle precondition violation; propagated, never classified.
    #[error(transparent)]
    Precondition(Error),
}

impl Failure {
    /// Wrap an arbitrary error as an unexpected failure.
    pub fn unexpected<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Failure::Unexpected(error.into())
    }

    /// Short label of the failure kind, used in structured log context.
    pub fn kind(&self) -> &str {
        match self {
            Failure::Domain(error) => error.kind(),
            Failure::Unexpected(_) => "unexpected",
            Failure::Precondition(_) => "precondition",
        }
    }
}

impl From<Error> for Failure {
    fn from(error: Error) -> Self {
        if error.is_precondition() {
            Failure::Precondition(error)
        } else {
            Failure::Unexpected(error.into())
        }
    }
}

impl From<anyhow::Error> for Failure {
    fn from(error: anyhow::Error) -> Self {
        Failure::Unexpected(error)
    }
}

impl From<std::io::Error> for Failure {
    fn from(error: std::io::Error) -> Self {
        Failure::Unexpected(error.into())
    }
}
