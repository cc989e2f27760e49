//! # CLI Command Implementations
//!
//! This module contains the commands of the `command-kit` demo tool. Each
//! command is defined in its own file and exercises one of the library's base
//! types.
//!
//! ## Structure
//!
//! Each command module contains:
//! - A command struct embedding a [`CommandBase`](command_kit::command::CommandBase)
//!   or one of its wrappers, with a `new` constructor used as the registry
//!   factory.
//! - A `Command` implementation whose `configure` declares the metadata and
//!   grammar and whose `execute` performs the work.

pub mod about;
pub mod check;
pub mod completions;
pub mod greet;
pub mod pipeline;
