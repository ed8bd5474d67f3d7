//! CLI result presenter.

use std::io::{self, Write};

use crate::output::{format_sequence, nth_line, sequence_header, OutputFormat, SequenceReport};
use crate::ui;

/// Message shown when N is missing, non-numeric, or not positive.
pub const INVALID_INPUT_MESSAGE: &str = "Enter a positive number";

/// CLI result presenter.
pub struct CLIResultPresenter {
    quiet: bool,
    format: OutputFormat,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(quiet: bool, format: OutputFormat) -> Self {
        Self { quiet, format }
    }

    /// Write a report to `out`.
    ///
    /// Text mode prints the sequence line, then the nth-term line, then the
    /// sum line, each only when present. Quiet mode drops the labels.
    pub fn present<W: Write>(&self, out: &mut W, report: &SequenceReport) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            let json = report.to_json().map_err(io::Error::other)?;
            return writeln!(out, "{json}");
        }

        if let Some(terms) = &report.terms {
            if !self.quiet {
                writeln!(out, "{}", sequence_header(report.n))?;
            }
            writeln!(out, "{}", format_sequence(terms))?;
        }

        if let Some(value) = report.nth {
            if self.quiet {
                writeln!(out, "{value}")?;
            } else {
                writeln!(out, "{}", nth_line(report.n, value))?;
            }
        }

        if let Some(sum) = report.sum {
            if self.quiet {
                writeln!(out, "{sum}")?;
            } else {
                writeln!(out, "Sum: {sum}")?;
            }
        }

        Ok(())
    }

    /// Report an invalid-input condition on the output stream, after the
    /// prompt.
    pub fn present_invalid_input<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{INVALID_INPUT_MESSAGE}")
    }

    /// Report any other failure to stderr.
    pub fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
