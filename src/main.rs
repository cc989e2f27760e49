//! # Command Kit CLI
//!
//! This is the binary entry point for the `command-kit` demo tool.
//!
//! Its primary responsibilities are:
//! - Loading the parameters (defaults, parameter file, environment).
//! - Registering the demo commands.
//! - Handing the process arguments to the library's `Application` and exiting
//!   with the code it returns.
//!
//! The lifecycle itself is defined in the `lib.rs` library crate, ensuring
//! that the binary is a thin wrapper around the reusable library functionality.

mod cli;
mod commands;

use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}
