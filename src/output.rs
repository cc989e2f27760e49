//! # Output Targets
//!
//! This module provides the concrete output target of an invocation and the
//! utilities controlling its appearance.
//!
//! ## Respecting User Preferences
//!
//! Decoration (ANSI colors) follows these environment variables:
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Usage
//!
//! ```rust
//! use command_kit::output::{Channel, Output};
//!
//! let output = Output::buffered(false);
//! output.write_line(Channel::Stdout, "hello").unwrap();
//! assert_eq!(output.contents(Channel::Stdout), "hello\n");
//! ```

use std::cell::RefCell;
use std::env;
use std::io;
use std::rc::Rc;

use crate::input::Input;

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and a color mode.
    ///
    /// # Arguments
    /// * `color_flag` - "always", "never", or "auto"
    ///
    /// In auto mode, colors are disabled if:
    /// - `NO_COLOR` environment variable is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - stdout is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Detect whether color output is supported based on environment.
    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// How much human-readable output an invocation asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    /// Read the verbosity from the global `quiet` / `verbose` flags.
    ///
    /// `quiet` wins when both are set.
    pub fn from_input(input: &Input) -> Self {
        if input.flag("quiet") {
            Verbosity::Quiet
        } else if input.flag("verbose") {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// One of the two streams of an [`Output`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Stdout,
    Stderr,
}

#[derive(Clone)]
enum Stream {
    Term(console::Term),
    Buffer(Rc<RefCell<Vec<u8>>>),
}

impl Stream {
    fn write_line(&self, line: &str) -> io::Result<()> {
        match self {
            Stream::Term(term) => term.write_line(line),
            Stream::Buffer(buffer) => {
                let mut buffer = buffer.borrow_mut();
                buffer.extend_from_slice(line.as_bytes());
                buffer.push(b'\n');
                Ok(())
            }
        }
    }
}

/// The concrete stdout/stderr pair one invocation writes to.
///
/// Cloning an `Output` yields a handle to the same streams.
#[derive(Clone)]
pub struct Output {
    stdout: Stream,
    stderr: Stream,
    decorated: bool,
}

impl Output {
    /// Terminal output, decorated according to `config`.
    pub fn stdio(config: &OutputConfig) -> Self {
        Self {
            stdout: Stream::Term(console::Term::stdout()),
            stderr: Stream::Term(console::Term::stderr()),
            decorated: config.use_color,
        }
    }

    /// In-memory output, readable back with [`Output::contents`].
    pub fn buffered(decorated: bool) -> Self {
        Self {
            stdout: Stream::Buffer(Rc::default()),
            stderr: Stream::Buffer(Rc::default()),
            decorated,
        }
    }

    pub fn is_decorated(&self) -> bool {
        self.decorated
    }

    /// Write one line to the given channel.
    pub fn write_line(&self, channel: Channel, line: &str) -> io::Result<()> {
        match channel {
            Channel::Stdout => self.stdout.write_line(line),
            Channel::Stderr => self.stderr.write_line(line),
        }
    }

    /// Everything written so far to a buffered channel.
    ///
    /// Terminal channels are not captured and always return an empty string.
    pub fn contents(&self, channel: Channel) -> String {
        let stream = match channel {
            Channel::Stdout => &self.stdout,
            Channel::Stderr => &self.stderr,
        };
        match stream {
            Stream::Term(_) => String::new(),
            Stream::Buffer(buffer) => String::from_utf8_lossy(&buffer.borrow()).into_owned(),
        }
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output")
            .field("decorated", &self.decorated)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ValueMap;
    use serde_json::json;

    fn input_with_flags(quiet: bool, verbose: bool) -> Input {
        let mut options = ValueMap::new();
        options.insert("quiet".to_string(), json!(quiet));
        options.insert("verbose".to_string(), json!(verbose));
        Input::new(ValueMap::new(), options)
    }

    #[test]
    fn test_color_always() {
        let config = OutputConfig::from_env_and_flag("always");
        assert!(config.use_color);
    }

    #[test]
    fn test_color_never() {
        let config = OutputConfig::from_env_and_flag("never");
        assert!(!config.use_color);
    }

    #[test]
    fn test_verbosity_from_input() {
        assert_eq!(
            Verbosity::from_input(&input_with_flags(false, false)),
            Verbosity::Normal
        );
        assert_eq!(
            Verbosity::from_input(&input_with_flags(true, false)),
            Verbosity::Quiet
        );
        assert_eq!(
            Verbosity::from_input(&input_with_flags(false, true)),
            Verbosity::Verbose
        );
        assert_eq!(
            Verbosity::from_input(&input_with_flags(true, true)),
            Verbosity::Quiet
        );
    }

    #[test]
    fn test_buffered_channels_are_separate() {
        let output = Output::buffered(false);
        output.write_line(Channel::Stdout, "out").unwrap();
        output.write_line(Channel::Stderr, "err").unwrap();
        assert_eq!(output.contents(Channel::Stdout), "out\n");
        assert_eq!(output.contents(Channel::Stderr), "err\n");
    }

    #[test]
    fn test_clones_share_streams() {
        let output = Output::buffered(false);
        let clone = output.clone();
        clone.write_line(Channel::Stdout, "shared").unwrap();
        assert_eq!(output.contents(Channel::Stdout), "shared\n");
    }
}
