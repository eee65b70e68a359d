use std::fmt::{Debug, Display};
use std::io::Write;
use std::time::Duration;

use certify_api::env::get_env_with_default;
use certify_api::output::OutputFormat;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use mode::*;

use crate::util::exitcode;
use crate::{Error, Result};

mod term;

/// A terminal abstraction to handle commands' output and messages styling.
#[derive(Clone)]
pub struct Terminal<T: TerminalWriter, WriteMode = Logging> {
    stdout: T,
    stderr: T,
    quiet: bool,
    no_input: bool,
    output_format: OutputFormat,
    mode: WriteMode,
}

/// A small wrapper around the `Write` trait, enriched with CLI
/// attributes to facilitate output handling.
#[derive(Clone, Debug)]
pub struct TerminalStream<T: Write + Debug + Clone> {
    writer: T,
    no_color: bool,
}

impl<T: Write + Debug + Clone> TerminalStream<T> {
    fn prepare_msg(&self, msg: &str) -> Result<String> {
        let mut buffer = Vec::new();
        write!(buffer, "{}", msg)?;
        if self.no_color {
            buffer = strip_ansi_escapes::strip(&buffer);
        }
        String::from_utf8(buffer)
            .map_err(|e| Error::new(exitcode::SOFTWARE, format!("Invalid UTF-8: {e}")))
    }
}

/// The possible states of Terminal. Each state defines what
/// methods can be used on a given instance.
pub mod mode {
    use super::Output;

    /// Write mode used when writing to the stderr stream.
    #[derive(Clone)]
    pub struct Logging;

    /// Write mode used when writing to the stdout stream.
    #[derive(Clone)]
    pub struct Finished {
        pub output: Output,
    }
}

/// The command's output message to be displayed to the user in various formats
#[derive(Clone, Default)]
pub struct Output {
    plain: Option<String>,
    machine: Option<String>,
    json: Option<String>,
}

/// Trait defining the main methods to write messages to a terminal stream.
pub trait TerminalWriter: Clone {
    fn stdout(no_color: bool) -> Self;
    fn stderr(no_color: bool) -> Self;
    fn is_tty(&self) -> bool;

    fn write_line(&self, s: &str) -> Result<()>;
}

// Core functions
impl<W: TerminalWriter> Terminal<W> {
    pub fn new(quiet: bool, no_color: bool, no_input: bool, output_format: OutputFormat) -> Self {
        let no_color = Self::should_disable_color(no_color);
        let no_input = Self::should_disable_user_input(no_input);
        Self::from_streams(
            W::stdout(no_color),
            W::stderr(no_color),
            quiet,
            no_input,
            output_format,
        )
    }

    pub fn from_streams(
        stdout: W,
        stderr: W,
        quiet: bool,
        no_input: bool,
        output_format: OutputFormat,
    ) -> Self {
        Self {
            stdout,
            stderr,
            quiet,
            no_input,
            output_format,
            mode: Logging,
        }
    }

    pub fn can_ask_for_user_input(&self) -> bool {
        !self.no_input && !self.quiet && self.stderr.is_tty()
    }

    pub fn output_format(&self) -> &OutputFormat {
        &self.output_format
    }

    fn should_disable_color(no_color: bool) -> bool {
        // If global argument `--no-color` is passed or the `NO_COLOR` env var is set, colors
        // will be stripped out from output messages. Otherwise, let the terminal decide.
        no_color || get_env_with_default("NO_COLOR", false).unwrap_or(false)
    }

    fn should_disable_user_input(no_input: bool) -> bool {
        // If global argument `--no-input` is passed or the `NO_INPUT` env var is set we won't be able
        // to ask the user for input.  Otherwise, let the terminal decide based on the `is_tty` value
        no_input || get_env_with_default("NO_INPUT", false).unwrap_or(false)
    }
}

// Logging mode
impl<W: TerminalWriter> Terminal<W, Logging> {
    pub fn write_line(&self, msg: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stderr.write_line(msg)
    }

    /// Errors are reported even in quiet mode
    pub fn write_error(&self, msg: &str) -> Result<()> {
        self.stderr.write_line(msg)
    }

    pub fn stdout(self) -> Terminal<W, Finished> {
        Terminal {
            stdout: self.stdout,
            stderr: self.stderr,
            quiet: self.quiet,
            no_input: self.no_input,
            output_format: self.output_format,
            mode: Finished {
                output: Output::default(),
            },
        }
    }
}

// Finished mode
impl<W: TerminalWriter> Terminal<W, Finished> {
    pub fn plain<T: Display>(mut self, msg: T) -> Self {
        self.mode.output.plain = Some(msg.to_string());
        self
    }

    pub fn machine<T: Display>(mut self, msg: T) -> Self {
        self.mode.output.machine = Some(msg.to_string());
        self
    }

    pub fn json<T: Display>(mut self, msg: T) -> Self {
        self.mode.output.json = Some(msg.to_string());
        self
    }

    /// Write the command output to stdout. The quiet flag only silences stderr.
    pub fn write_line(self) -> Result<()> {
        let plain = self.mode.output.plain.as_ref();
        let machine = self.mode.output.machine.as_ref();
        let json = self.mode.output.json.as_ref();

        let msg = match self.output_format {
            OutputFormat::Plain => {
                if self.stdout.is_tty() {
                    // If not set, fallback with the following priority: Machine -> JSON
                    plain.or(machine).or(json)
                } else {
                    // If not set, fallback with the following priority: JSON -> Plain
                    machine.or(json).or(plain)
                }
            }
            // If not set, no fallback is provided and returns an error
            OutputFormat::Json { .. } => json,
        };
        match msg {
            Some(msg) => self.stdout.write_line(msg),
            None => Err(Error::new(
                exitcode::SOFTWARE,
                format!(
                    "the {} output is not defined for this command",
                    match self.output_format {
                        OutputFormat::Plain => "plain",
                        OutputFormat::Json { .. } => "JSON",
                    }
                ),
            )),
        }
    }
}

// Extensions
impl<W: TerminalWriter> Terminal<W> {
    pub fn progress_spinner(&self) -> Option<ProgressBar> {
        if self.quiet || !self.stderr.is_tty() {
            return None;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.enable_steady_tick(Duration::from_millis(80));
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
        }
        Some(pb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records the lines written to it
    #[derive(Clone, Default)]
    struct Recorder {
        lines: Arc<Mutex<Vec<String>>>,
        tty: bool,
    }

    impl Recorder {
        fn tty() -> Self {
            Self {
                tty: true,
                ..Default::default()
            }
        }

        fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl TerminalWriter for Recorder {
        fn stdout(_no_color: bool) -> Self {
            Self::default()
        }

        fn stderr(_no_color: bool) -> Self {
            Self::default()
        }

        fn is_tty(&self) -> bool {
            self.tty
        }

        fn write_line(&self, s: &str) -> Result<()> {
            self.lines.lock().unwrap().push(s.to_string());
            Ok(())
        }
    }

    fn terminal(
        stdout: &Recorder,
        stderr: &Recorder,
        quiet: bool,
        output_format: OutputFormat,
    ) -> Terminal<Recorder> {
        Terminal::from_streams(stdout.clone(), stderr.clone(), quiet, false, output_format)
    }

    #[test]
    fn plain_output_on_a_tty() {
        let (stdout, stderr) = (Recorder::tty(), Recorder::default());
        terminal(&stdout, &stderr, false, OutputFormat::Plain)
            .stdout()
            .plain("details")
            .machine("id")
            .json("{}")
            .write_line()
            .unwrap();
        assert_eq!(stdout.lines(), vec!["details"]);
    }

    #[test]
    fn machine_output_when_piped() {
        let (stdout, stderr) = (Recorder::default(), Recorder::default());
        terminal(&stdout, &stderr, false, OutputFormat::Plain)
            .stdout()
            .plain("details")
            .machine("id")
            .write_line()
            .unwrap();
        assert_eq!(stdout.lines(), vec!["id"]);

        let stdout = Recorder::default();
        terminal(&stdout, &stderr, false, OutputFormat::Plain)
            .stdout()
            .plain("details")
            .write_line()
            .unwrap();
        assert_eq!(stdout.lines(), vec!["details"]);
    }

    #[test]
    fn json_output_has_no_fallback() {
        let (stdout, stderr) = (Recorder::tty(), Recorder::default());
        let result = terminal(&stdout, &stderr, false, OutputFormat::Json { compact: false })
            .stdout()
            .plain("details")
            .write_line();
        assert!(result.is_err());
        assert!(stdout.lines().is_empty());
    }

    #[test]
    fn quiet_silences_stderr_but_not_the_result() {
        let (stdout, stderr) = (Recorder::default(), Recorder::tty());
        let terminal = terminal(&stdout, &stderr, true, OutputFormat::Plain);
        terminal.write_line("Loading...").unwrap();
        terminal.write_error("Certificate not found").unwrap();
        assert!(terminal.progress_spinner().is_none());
        assert!(!terminal.can_ask_for_user_input());
        terminal.stdout().plain("details").write_line().unwrap();

        assert_eq!(stderr.lines(), vec!["Certificate not found"]);
        assert_eq!(stdout.lines(), vec!["details"]);
    }

    #[test]
    fn colors_are_stripped_on_request() {
        let stream = TerminalStream {
            writer: Vec::new(),
            no_color: true,
        };
        assert_eq!(
            stream.prepare_msg("\u{1b}[31mred\u{1b}[0m").unwrap(),
            "red"
        );
    }
}
