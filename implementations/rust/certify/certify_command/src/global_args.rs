use std::fmt::Display;

use certify_api::config::ApiBaseUrl;
use certify_api::output::OutputFormat;
use clap::Args;
use clap::{ArgAction, ValueEnum};

/// Those arguments are common to all commands
#[derive(Debug, Clone, Args, Default)]
pub struct GlobalArgs {
    #[arg(
    global = true,
    long,
    short,
    help("Print help information (-h compact, --help extensive)"),
    long_help("Print help information (-h displays compact help summary, --help displays extensive help summary)"),
    help_heading("Global Options"),
    action = ArgAction::Help
    )]
    help: Option<bool>,

    /// Do not print any log messages to stderr and disable the credential ID prompt.
    /// This is useful for scripting and automation, where you don't want the process to block on stdin.
    #[arg(global = true, long, short, env = "QUIET")]
    pub quiet: bool,

    /// Increase verbosity of trace messages
    #[arg(
    global = true,
    long,
    short,
    long_help("Increase verbosity of trace messages by repeating the flag. Use `-v` to show \
    info messages, `-vv` to show debug messages, and `-vvv` to show trace messages"),
    action = ArgAction::Count
    )]
    pub verbose: u8,

    /// Disable colors in output
    #[arg(global = true, long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Disable tty functionality, like interactive prompts.
    #[arg(global = true, long, env = "NO_INPUT")]
    pub no_input: bool,

    /// Specifies the output format of the command. Defaults to 'plain' if not explicitly set.
    /// The 'plain' format is a piece of plain text, the content of which may change based on whether
    /// the stdout is a tty or not. The 'json' format prints the certificate record as returned by the API.
    #[arg(global = true, long = "output", value_enum)]
    pub(crate) output_format: Option<OutputFormatArg>,

    /// Compact the JSON output of the command
    #[arg(global = true, long)]
    compact_output: bool,

    /// Address of the certificate API. Overrides the CERTIFY_API_BASE_URL environment variable
    #[arg(global = true, long, value_name = "URL")]
    pub api_url: Option<ApiBaseUrl>,

    // if test_argument_parser is true, command arguments are checked
    // but the command is not executed.
    #[arg(global = true, long, hide = true)]
    pub test_argument_parser: bool,
}

impl GlobalArgs {
    pub fn output_format(&self) -> OutputFormat {
        match &self.output_format {
            // If a json related argument is set, assume the output format is json
            None if self.compact_output => OutputFormat::Json {
                compact: self.compact_output,
            },
            Some(OutputFormatArg::Json) => OutputFormat::Json {
                compact: self.compact_output,
            },
            _ => OutputFormat::Plain,
        }
    }
}

#[derive(Debug, Clone, ValueEnum, PartialEq, Eq)]
pub enum OutputFormatArg {
    Plain,
    Json,
}

impl Display for OutputFormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormatArg::Plain => write!(f, "plain"),
            OutputFormatArg::Json => write!(f, "json"),
        }
    }
}
