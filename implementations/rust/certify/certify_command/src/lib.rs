//! Look up certificates by their credential ID, check them and render them.

mod check;
mod error;
mod global_args;
mod lookup;
mod render;
mod show;
mod templates;
mod terminal;
mod util;

pub use error::{Error, Result};

use certify_api::config::CertifyConfig;
use certify_api::fmt_err;
use certify_api::logs::{Logging, LoggingConfiguration, LoggingGuard};
use clap::{Parser, Subcommand};
use colorful::Colorful;
use console::Term;

use check::CheckCommand;
use global_args::GlobalArgs;
use render::RenderCommand;
use show::ShowCommand;
use templates::TemplatesCommand;
use terminal::{Terminal, TerminalStream};
use util::exitcode::{self, ExitCode};

#[macro_use]
extern crate tracing;

const ABOUT: &str = include_str!("constants/about.txt");
const HELP_DETAIL: &str = include_str!("constants/help_detail.txt");

#[derive(Debug, Parser)]
#[command(
    name = "certify",
    term_width = 100,
    about = ABOUT,
    long_about = ABOUT,
    after_long_help = HELP_DETAIL,
    version,
    next_help_heading = "Global Options",
    disable_help_flag = true
)]
pub struct CertifyCommand {
    #[command(subcommand)]
    subcommand: CertifySubcommand,

    #[command(flatten)]
    global_args: GlobalArgs,
}

#[derive(Debug, Subcommand)]
pub enum CertifySubcommand {
    #[command(display_order = 800)]
    Show(ShowCommand),
    #[command(display_order = 801)]
    Check(CheckCommand),
    #[command(display_order = 802)]
    Render(RenderCommand),
    #[command(display_order = 803)]
    Templates(TemplatesCommand),
}

#[derive(Clone)]
pub struct CommandGlobalOpts {
    pub global_args: GlobalArgs,
    pub terminal: Terminal<TerminalStream<Term>>,
}

impl CommandGlobalOpts {
    fn new(global_args: GlobalArgs, terminal: Terminal<TerminalStream<Term>>) -> Self {
        Self {
            global_args,
            terminal,
        }
    }

    /// The API configuration. Only the commands reaching the API load it, so
    /// an invalid address doesn't fail the offline ones.
    pub fn config(&self) -> Result<CertifyConfig> {
        // an explicit address takes precedence over the environment
        let config = match self.global_args.api_url.clone() {
            Some(api_url) => CertifyConfig::from_base_url(Some(api_url))?,
            None => CertifyConfig::load()?,
        };
        Ok(config)
    }
}

pub fn run() {
    let command = CertifyCommand::parse();
    let exit_code = command.run();
    std::process::exit(exit_code);
}

impl CertifyCommand {
    pub fn run(self) -> ExitCode {
        // If test_argument_parser is true, command arguments are checked
        // but the command is not executed. This is useful to test arguments
        // without having to execute their logic.
        if self.global_args.test_argument_parser {
            return exitcode::OK;
        }

        let terminal = Terminal::new(
            self.global_args.quiet,
            self.global_args.no_color,
            self.global_args.no_input,
            self.global_args.output_format(),
        );

        // the guard flushes the pending log lines when dropped, before the process exits
        let _guard = match self.setup_logging() {
            Ok(guard) => guard,
            Err(e) => return report(&terminal, e),
        };
        debug!("Parsed {:?}", &self);

        match self.execute(terminal.clone()) {
            Ok(()) => exitcode::OK,
            Err(e) => report(&terminal, e),
        }
    }

    fn setup_logging(&self) -> Result<Option<LoggingGuard>> {
        let configuration = LoggingConfiguration::from_env(
            self.global_args.verbose,
            self.global_args.quiet,
            !self.global_args.no_color,
        )?;
        Ok(Logging::setup(&configuration)?)
    }

    fn execute(self, terminal: Terminal<TerminalStream<Term>>) -> Result<()> {
        let options = CommandGlobalOpts::new(self.global_args, terminal);
        match self.subcommand {
            CertifySubcommand::Show(c) => c.run(options),
            CertifySubcommand::Check(c) => c.run(options),
            CertifySubcommand::Render(c) => c.run(options),
            CertifySubcommand::Templates(c) => c.run(options),
        }
    }
}

fn report(terminal: &Terminal<TerminalStream<Term>>, error: Error) -> ExitCode {
    error!(code = error.code(), "{}", error.description());
    if let Err(e) = terminal.write_error(&fmt_err!("{}", error)) {
        eprintln!("{error} ({e})");
    }
    error.code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn the_command_line_is_well_formed() {
        CertifyCommand::command().debug_assert();
    }

    #[test]
    fn global_options_are_accepted_after_the_subcommand() {
        let command = CertifyCommand::try_parse_from([
            "certify",
            "render",
            "SLIIT-001",
            "--format",
            "html",
            "--api-url",
            "http://localhost:5000",
            "-vv",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(command.global_args.verbose, 2);
        assert!(command.global_args.no_color);
        assert_eq!(
            command.global_args.api_url.unwrap().to_string(),
            "http://localhost:5000/"
        );
        assert!(matches!(command.subcommand, CertifySubcommand::Render(_)));
    }

    #[test]
    fn invalid_api_urls_are_rejected_by_the_parser() {
        let result =
            CertifyCommand::try_parse_from(["certify", "show", "abc", "--api-url", "localhost"]);
        assert!(result.is_err());
    }
}
