//! # Exit Codes
//!
//! The closed set of process exit codes produced by the command lifecycle.
//!
//! | Code | Meaning                                                  |
//! |------|----------------------------------------------------------|
//! | 0    | Success                                                  |
//! | 1    | Unexpected / unclassified failure, command-line misuse   |
//! | 2    | Classified domain failure                                |
//! | 70   | Precondition violation surfaced by the top-level driver  |
//!
//! Code 70 (`EX_SOFTWARE` in `sysexits.h`) is only produced by
//! [`crate::application::Application`] and never by a meta-command's
//! classification, so wiring bugs cannot be mistaken for 1 or 2.

/// The command completed successfully.
pub const SUCCESS: i32 = 0;

/// The command failed with an unexpected, unclassified failure.
pub const UNEXPECTED_FAILURE: i32 = 1;

/// The command failed with a recognized domain failure.
pub const DOMAIN_FAILURE: i32 = 2;

/// A lifecycle precondition was violated (incorrect wiring).
pub const PRECONDITION_VIOLATION: i32 = 70;

/// Classified outcome of one command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitOutcome {
    Success,
    UnexpectedFailure,
    DomainFailure,
}

impl ExitOutcome {
    /// The process exit code for this outcome.
    pub const fn code(self) -> i32 {
        match self {
            ExitOutcome::Success => SUCCESS,
            ExitOutcome::UnexpectedFailure => UNEXPECTED_FAILURE,
            ExitOutcome::DomainFailure => DOMAIN_FAILURE,
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, ExitOutcome::Success)
    }
}
