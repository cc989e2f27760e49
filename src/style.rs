//! # Console Style
//!
//! A [`Style`] is the render surface of one invocation. Commands create one
//! lazily during `initialize`, keep it for their lifetime and hand out
//! non-owning references to event subscribers.
//!
//! [`ConsoleStyle`] is the stock implementation. It writes to an [`Output`]
//! and exposes an error sub-view, bound to stderr, used for failure
//! rendering. Quiet invocations suppress titles and text but never errors.

use console::{measure_text_width, Style as Paint};
use std::io;

use crate::input::Input;
use crate::output::{Channel, Output, Verbosity};

/// Render surface for human-readable output.
pub trait Style {
    /// Render a section title.
    fn title(&self, message: &str) -> io::Result<()>;

    /// Render regular text, one rendered line per input line.
    fn text(&self, message: &str) -> io::Result<()>;

    /// Render an empty line.
    fn new_line(&self) -> io::Result<()>;

    /// Render an error block.
    fn error(&self, message: &str) -> io::Result<()>;

    /// The view failures are rendered through.
    fn error_style(&self) -> &dyn Style;
}

/// [`Style`] writing to an [`Output`].
#[derive(Debug)]
pub struct ConsoleStyle {
    output: Output,
    channel: Channel,
    verbosity: Verbosity,
    error_view: Option<Box<ConsoleStyle>>,
}

impl ConsoleStyle {
    /// A style bound to one invocation's input and output.
    pub fn new(input: &Input, output: &Output) -> Self {
        let verbosity = Verbosity::from_input(input);
        Self {
            output: output.clone(),
            channel: Channel::Stdout,
            verbosity,
            error_view: Some(Box::new(Self {
                output: output.clone(),
                channel: Channel::Stderr,
                verbosity,
                error_view: None,
            })),
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn paint(&self, paint: Paint, message: &str) -> String {
        if self.output.is_decorated() {
            paint.force_styling(true).apply_to(message).to_string()
        } else {
            message.to_string()
        }
    }

    fn write(&self, line: &str) -> io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }
        self.output.write_line(self.channel, line)
    }
}

impl Style for ConsoleStyle {
    fn title(&self, message: &str) -> io::Result<()> {
        let underline = "=".repeat(measure_text_width(message));
        let paint = Paint::new().green().bold();
        self.write(&self.paint(paint.clone(), message))?;
        self.write(&self.paint(paint, &underline))?;
        self.new_line()
    }

    fn text(&self, message: &str) -> io::Result<()> {
        for line in message.lines() {
            self.write(&format!(" {}", line))?;
        }
        Ok(())
    }

    fn new_line(&self) -> io::Result<()> {
        self.write("")
    }

    fn error(&self, message: &str) -> io::Result<()> {
        let paint = Paint::new().white().on_red();
        let mut lines = message.lines();
        let first = lines.next().unwrap_or_default();

        self.output.write_line(self.channel, "")?;
        self.output
            .write_line(self.channel, &self.paint(paint.clone(), &format!(" [ERROR] {} ", first)))?;
        for line in lines {
            self.output
                .write_line(self.channel, &self.paint(paint.clone(), &format!("         {} ", line)))?;
        }
        self.output.write_line(self.channel, "")
    }

    fn error_style(&self) -> &dyn Style {
        match &self.error_view {
            Some(view) => view.as_ref(),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ValueMap;
    use serde_json::json;

    fn input(quiet: bool) -> Input {
        let mut options = ValueMap::new();
        options.insert("quiet".to_string(), json!(quiet));
        Input::new(ValueMap::new(), options)
    }

    #[test]
    fn test_title_is_underlined() {
        let output = Output::buffered(false);
        let style = ConsoleStyle::new(&input(false), &output);
        style.title("app v1.0 - about").unwrap();

        assert_eq!(
            output.contents(Channel::Stdout),
            "app v1.0 - about\n================\n\n"
        );
    }

    #[test]
    fn test_text_prefixes_each_line() {
        let output = Output::buffered(false);
        let style = ConsoleStyle::new(&input(false), &output);
        style.text("first\nsecond").unwrap();

        assert_eq!(output.contents(Channel::Stdout), " first\n second\n");
    }

    #[test]
    fn test_error_style_writes_to_stderr() {
        let output = Output::buffered(false);
        let style = ConsoleStyle::new(&input(false), &output);
        style.error_style().error("invalid-state").unwrap();

        assert_eq!(output.contents(Channel::Stdout), "");
        assert!(output
            .contents(Channel::Stderr)
            .contains(" [ERROR] invalid-state "));
    }

    #[test]
    fn test_error_view_of_error_view_is_itself() {
        let output = Output::buffered(false);
        let style = ConsoleStyle::new(&input(false), &output);
        let errors = style.error_style();
        errors.error_style().text("still stderr").unwrap();

        assert_eq!(output.contents(Channel::Stderr), " still stderr\n");
    }

    #[test]
    fn test_quiet_suppresses_text_but_not_errors() {
        let output = Output::buffered(false);
        let style = ConsoleStyle::new(&input(true), &output);
        style.title("title").unwrap();
        style.text("text").unwrap();
        style.new_line().unwrap();
        style.error_style().error("boom").unwrap();

        assert_eq!(output.contents(Channel::Stdout), "");
        assert!(output.contents(Channel::Stderr).contains("[ERROR] boom"));
    }

    #[test]
    fn test_multiline_error_is_indented() {
        let output = Output::buffered(false);
        let style = ConsoleStyle::new(&input(false), &output);
        style.error_style().error("first\nsecond").unwrap();

        let stderr = output.contents(Channel::Stderr);
        assert!(stderr.contains(" [ERROR] first "));
        assert!(stderr.contains("         second "));
    }

    #[test]
    fn test_decorated_output_contains_ansi_codes() {
        let output = Output::buffered(true);
        let style = ConsoleStyle::new(&input(false), &output);
        style.title("colored").unwrap();

        assert!(output.contents(Channel::Stdout).contains("\u{1b}["));
    }
}
