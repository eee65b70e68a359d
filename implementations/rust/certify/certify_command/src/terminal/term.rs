//! Implementation of the `TerminalWriter` trait for the `Term` struct.

use console::Term;

use crate::terminal::{TerminalStream, TerminalWriter};
use crate::Result;

impl TerminalWriter for TerminalStream<Term> {
    fn stdout(no_color: bool) -> Self {
        let writer = Term::stdout();
        let no_color = no_color || !writer.features().colors_supported();
        Self { writer, no_color }
    }

    fn stderr(no_color: bool) -> Self {
        let writer = Term::stderr();
        let no_color = no_color || !writer.features().colors_supported();
        Self { writer, no_color }
    }

    fn is_tty(&self) -> bool {
        self.writer.is_term()
    }

    fn write_line(&self, s: &str) -> Result<()> {
        let s = self.prepare_msg(s)?;
        self.writer.write_line(&s)?;
        Ok(())
    }
}
